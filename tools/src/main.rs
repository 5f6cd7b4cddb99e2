//! roster-runner: headless staff roster and payroll runner.
//!
//! Usage:
//!   roster-runner --db roster.db --as-of 2025-06-15
//!   roster-runner --demo-size 40 --seed 12345
//!   roster-runner --db roster.db --ipc-mode

use anyhow::{Context, Result};
use chrono::NaiveDate;
use roster_core::{
    config::PayRules,
    directory::StaffDirectory,
    population::generate_roster,
    salary::SalaryEngine,
    staff::{NewStaff, StaffUpdate},
    store::RosterStore,
    types::StaffId,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    List,
    Get { id: StaffId },
    Hire { staff: NewStaff },
    Update { id: StaffId, update: StaffUpdate },
    Remove { id: StaffId },
    Salary { id: StaffId },
    SalarySum,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let demo_size = parse_arg(&args, "--demo-size", 0usize);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let db = string_arg(&args, "--db").unwrap_or(":memory:");
    let data_dir = string_arg(&args, "--data-dir").unwrap_or("./data");
    let as_of = match string_arg(&args, "--as-of") {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("--as-of must be YYYY-MM-DD, got {raw}"))?,
        None => chrono::Local::now().date_naive(),
    };

    let rules = load_rules(data_dir)?;

    if !ipc_mode {
        println!("Staff roster: roster-runner");
        println!("  db:        {db}");
        println!("  data_dir:  {data_dir}");
        println!("  as_of:     {as_of}");
        if demo_size > 0 {
            println!("  demo:      {demo_size} members (seed {seed})");
        }
        println!();
    }

    let store = RosterStore::open(db)?;
    store.migrate()?;
    let directory = StaffDirectory::new(&store, &rules);

    if demo_size > 0 {
        generate_roster(&directory, seed, demo_size, as_of)?;
    }

    if ipc_mode {
        run_ipc_loop(&store, &directory, &rules, as_of)?;
    } else {
        print_summary(&store, &rules, as_of)?;
    }

    Ok(())
}

/// Role tables from `{data_dir}/roles.json` if present, built-in otherwise.
fn load_rules(data_dir: &str) -> Result<PayRules> {
    if Path::new(data_dir).join("roles.json").exists() {
        let rules = PayRules::load(data_dir)?;
        log::info!("loaded role rules from {data_dir}/roles.json");
        Ok(rules)
    } else {
        log::info!("no roles.json under {data_dir}, using built-in role rules");
        Ok(PayRules::default())
    }
}

fn run_ipc_loop(
    store: &RosterStore,
    directory: &StaffDirectory<'_>,
    rules: &PayRules,
    as_of: NaiveDate,
) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        if matches!(cmd, IpcCommand::Quit) {
            break;
        }

        let response = match handle_command(store, directory, rules, as_of, cmd) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("command failed: {e}");
                serde_json::json!({ "error": e.to_string() })
            }
        };
        writeln!(stdout, "{}", response)?;
        stdout.flush()?;
    }
    Ok(())
}

fn handle_command(
    store: &RosterStore,
    directory: &StaffDirectory<'_>,
    rules: &PayRules,
    as_of: NaiveDate,
    cmd: IpcCommand,
) -> Result<serde_json::Value> {
    let engine = SalaryEngine::new(store, rules, as_of);

    let value = match cmd {
        IpcCommand::List => serde_json::to_value(directory.list()?)?,
        IpcCommand::Get { id } => serde_json::to_value(directory.member_with_subordinates(id)?)?,
        IpcCommand::Hire { staff } => serde_json::to_value(directory.hire(staff)?)?,
        IpcCommand::Update { id, update } => serde_json::to_value(directory.update(id, update)?)?,
        IpcCommand::Remove { id } => serde_json::to_value(directory.remove(id)?)?,
        IpcCommand::Salary { id } => serde_json::to_value(engine.member_salary(id)?)?,
        IpcCommand::SalarySum => serde_json::to_value(engine.sum_of_all_salaries()?)?,
        IpcCommand::Quit => serde_json::Value::Null,
    };
    Ok(value)
}

fn print_summary(store: &RosterStore, rules: &PayRules, as_of: NaiveDate) -> Result<()> {
    let engine = SalaryEngine::new(store, rules, as_of);
    let members = store.all_staff()?;

    println!("=== ROSTER ===");
    if members.is_empty() {
        println!("  (No staff on the roster)");
    }
    for member in &members {
        let salary = engine.member_salary(member.id)?.salary;
        let supervisor = member
            .supervisor_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  #{:<4} {:<9} {:<22} sup {:<5} joined {} | base ${:>10.2} | salary ${:>10.2}",
            member.id,
            member.role,
            format!("{} {}", member.name, member.last_name),
            supervisor,
            member.joined_date,
            member.base_salary,
            salary
        );
    }

    let sum = engine.sum_of_all_salaries()?;
    println!();
    println!("=== PAYROLL SUMMARY ===");
    println!("  members:        {}", members.len());
    println!("  sum salaries:   ${:.2}", sum.sum_salaries);
    Ok(())
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
