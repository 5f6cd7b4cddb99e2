//! SQLite persistence layer.
//!
//! RULE: Only the store talks to the database.
//! The directory and the salary engine call store methods (or the
//! StaffRepository trait). They never execute SQL directly.

use crate::{
    error::{RosterError, RosterResult},
    role::Role,
    staff::StaffMember,
    types::StaffId,
};
use chrono::NaiveDate;
use rusqlite::Connection;

mod event_log;
mod staff;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct RosterStore {
    conn: Connection,
}

impl RosterStore {
    pub fn open(path: &str) -> RosterResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (shared-memory and :memory: ignore it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> RosterResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply the schema. Idempotent.
    pub fn migrate(&self) -> RosterResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_roster.sql"))?;
        Ok(())
    }

    /// Run `f` inside a single transaction. Any error rolls everything back.
    pub fn with_transaction<T>(
        &self,
        f: impl FnOnce(&Self) -> RosterResult<T>,
    ) -> RosterResult<T> {
        let tx = self.conn.unchecked_transaction()?;
        let out = f(self)?;
        tx.commit()?;
        Ok(out)
    }
}

/// A staff row as SQLite hands it back, before date and role parsing.
pub(crate) struct StaffRow {
    pub id:            StaffId,
    pub name:          String,
    pub last_name:     String,
    pub email:         String,
    pub role:          String,
    pub base_salary:   f64,
    pub joined_date:   String,
    pub supervisor_id: Option<StaffId>,
}

impl StaffRow {
    pub(crate) const COLUMNS: &'static str =
        "id, name, last_name, email, role, base_salary, joined_date, supervisor_id";

    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id:            row.get(0)?,
            name:          row.get(1)?,
            last_name:     row.get(2)?,
            email:         row.get(3)?,
            role:          row.get(4)?,
            base_salary:   row.get(5)?,
            joined_date:   row.get(6)?,
            supervisor_id: row.get(7)?,
        })
    }

    pub(crate) fn into_member(self) -> RosterResult<StaffMember> {
        let role: Role = self.role.parse()?;
        let joined_date = NaiveDate::parse_from_str(&self.joined_date, DATE_FORMAT)
            .map_err(|_| RosterError::InvalidDate {
                id: self.id,
                value: self.joined_date.clone(),
            })?;
        Ok(StaffMember {
            id: self.id,
            name: self.name,
            last_name: self.last_name,
            email: self.email,
            role,
            base_salary: self.base_salary,
            joined_date,
            supervisor_id: self.supervisor_id,
        })
    }
}
