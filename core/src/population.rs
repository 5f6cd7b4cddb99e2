//! Demo roster generation.
//!
//! Builds a seeded, reproducible forest of staff. Supervisors are always
//! picked among MANAGER or SALES members hired earlier, so the result
//! never contains a supervisor cycle.

use crate::{
    directory::StaffDirectory,
    error::RosterResult,
    rng::RosterRng,
    role::Role,
    staff::{NewStaff, StaffMember},
    types::StaffId,
};
use chrono::{Duration, NaiveDate};

/// Longest tenure handed out, in days (about 15 years).
pub const MAX_TENURE_DAYS: u64 = 15 * 365;

/// Share of members (after the first) hired without a supervisor.
pub const ROOT_PROBABILITY: f64 = 0.1;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
    "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Carlos", "Karen", "Wei", "Aisha", "Mateo", "Priya",
    "Olena", "Kenji", "Fatima", "Lucas", "Ingrid", "Tariq",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Chen", "Nguyen", "Patel",
    "Kowalski", "Tanaka", "Okafor", "Silva", "Novak", "Larsen", "Haddad",
];

/// Hire `size` generated members through `directory`.
/// The first member is always a root MANAGER.
pub fn generate_roster(
    directory: &StaffDirectory<'_>,
    seed: u64,
    size: usize,
    as_of: NaiveDate,
) -> RosterResult<Vec<StaffMember>> {
    let mut rng = RosterRng::new(seed);
    let mut hired: Vec<StaffMember> = Vec::with_capacity(size);
    let mut supervisors: Vec<StaffId> = Vec::new();

    for i in 0..size {
        let role = if i == 0 { Role::Manager } else { pick_role(&mut rng) };

        let supervisor_id = if supervisors.is_empty() || rng.chance(ROOT_PROBABILITY) {
            None
        } else {
            Some(*rng.pick(&supervisors))
        };

        let first = *rng.pick(FIRST_NAMES);
        let last = *rng.pick(LAST_NAMES);
        let tenure_days = rng.next_u64_below(MAX_TENURE_DAYS) as i64;

        let member = directory.hire(NewStaff {
            name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}.{i}@example.com", first, last).to_lowercase(),
            role,
            joined_date: as_of - Duration::days(tenure_days),
            supervisor_id,
        })?;

        if member.role != Role::Employee {
            supervisors.push(member.id);
        }
        hired.push(member);
    }

    log::info!(
        "generated demo roster: {} members, {} can supervise (seed {seed})",
        hired.len(),
        supervisors.len()
    );
    Ok(hired)
}

fn pick_role(rng: &mut RosterRng) -> Role {
    let roll = rng.next_f64();
    if roll < 0.6 {
        Role::Employee
    } else if roll < 0.85 {
        Role::Manager
    } else {
        Role::Sales
    }
}
