//! Demo roster generation tests.

use chrono::NaiveDate;
use roster_core::{
    config::PayRules,
    directory::StaffDirectory,
    population::{generate_roster, MAX_TENURE_DAYS},
    role::Role,
    salary::SalaryEngine,
    staff::StaffMember,
    store::RosterStore,
};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn generate(seed: u64, size: usize) -> (RosterStore, Vec<StaffMember>) {
    let store = RosterStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    let rules = PayRules::default();
    let members = {
        let directory = StaffDirectory::new(&store, &rules);
        generate_roster(&directory, seed, size, as_of()).expect("generate roster")
    };
    (store, members)
}

#[test]
fn generates_requested_count() {
    let (store, members) = generate(42, 50);
    assert_eq!(members.len(), 50);
    assert_eq!(store.staff_count().unwrap(), 50);
    assert_eq!(members[0].role, Role::Manager);
    assert_eq!(members[0].supervisor_id, None);
}

#[test]
fn same_seed_same_roster() {
    let (_, a) = generate(0xDEAD_BEEF, 40);
    let (_, b) = generate(0xDEAD_BEEF, 40);
    assert_eq!(a, b);

    let (_, c) = generate(7, 40);
    assert_ne!(a, c, "different seeds should produce different rosters");
}

#[test]
fn supervisors_are_earlier_non_employees() {
    let (_, members) = generate(123, 80);

    for member in &members {
        if let Some(sup) = member.supervisor_id {
            let supervisor = members
                .iter()
                .find(|m| m.id == sup)
                .expect("supervisor exists");
            assert!(sup < member.id, "supervisor {sup} hired after {}", member.id);
            assert_ne!(supervisor.role, Role::Employee);
        }
    }
}

#[test]
fn join_dates_stay_within_tenure_window() {
    let (_, members) = generate(99, 60);
    let earliest = as_of() - chrono::Duration::days(MAX_TENURE_DAYS as i64);

    for member in &members {
        assert!(member.joined_date <= as_of());
        assert!(member.joined_date > earliest);
    }
}

#[test]
fn generated_roster_salaries_are_consistent() {
    let (store, members) = generate(2024, 60);
    let rules = PayRules::default();
    let engine = SalaryEngine::new(&store, &rules, as_of());

    let mut individual = 0.0;
    for member in &members {
        let salary = engine.member_salary(member.id).unwrap().salary;
        assert!(salary >= member.base_salary, "salary below base for {}", member.id);
        assert_eq!((salary * 100.0).round() / 100.0, salary);
        individual += salary;
    }

    let sum = engine.sum_of_all_salaries().unwrap().sum_salaries;
    assert!((sum - individual).abs() < 1e-4, "sum {sum} vs {individual}");
}
