use super::{RosterStore, StaffRow, DATE_FORMAT};
use crate::{
    error::RosterResult,
    repository::StaffRepository,
    staff::{NewStaff, StaffMember},
    types::{Amount, StaffId},
};
use rusqlite::{params, OptionalExtension};

impl RosterStore {
    // ── Staff ─────────────────────────────────────────────────────

    pub fn insert_staff(&self, staff: &NewStaff, base_salary: Amount) -> RosterResult<StaffId> {
        self.conn.execute(
            "INSERT INTO staff_member (name, last_name, email, role, base_salary, joined_date, supervisor_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                staff.name,
                staff.last_name,
                staff.email,
                staff.role.as_str(),
                base_salary,
                staff.joined_date.format(DATE_FORMAT).to_string(),
                staff.supervisor_id,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn staff_by_id(&self, id: StaffId) -> RosterResult<Option<StaffMember>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {} FROM staff_member WHERE id = ?1", StaffRow::COLUMNS),
                params![id],
                StaffRow::from_row,
            )
            .optional()?;
        row.map(StaffRow::into_member).transpose()
    }

    pub fn all_staff(&self) -> RosterResult<Vec<StaffMember>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM staff_member ORDER BY id ASC",
            StaffRow::COLUMNS
        ))?;
        let rows = stmt
            .query_map([], StaffRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(StaffRow::into_member).collect()
    }

    pub fn staff_by_supervisor(&self, supervisor_id: StaffId) -> RosterResult<Vec<StaffMember>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM staff_member WHERE supervisor_id = ?1 ORDER BY id ASC",
            StaffRow::COLUMNS
        ))?;
        let rows = stmt
            .query_map(params![supervisor_id], StaffRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(StaffRow::into_member).collect()
    }

    /// Overwrite every mutable column of an existing row.
    /// Returns the number of rows changed (0 if the id is unknown).
    pub fn update_staff(&self, member: &StaffMember) -> RosterResult<usize> {
        let changed = self.conn.execute(
            "UPDATE staff_member
             SET name = ?1, last_name = ?2, email = ?3, role = ?4,
                 base_salary = ?5, joined_date = ?6, supervisor_id = ?7
             WHERE id = ?8",
            params![
                member.name,
                member.last_name,
                member.email,
                member.role.as_str(),
                member.base_salary,
                member.joined_date.format(DATE_FORMAT).to_string(),
                member.supervisor_id,
                member.id,
            ],
        )?;
        Ok(changed)
    }

    /// Delete a row. Direct reports get `supervisor_id = NULL` via the schema.
    pub fn delete_staff(&self, id: StaffId) -> RosterResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM staff_member WHERE id = ?1", params![id])?;
        Ok(changed)
    }

    pub fn staff_count(&self) -> RosterResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM staff_member", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl StaffRepository for RosterStore {
    fn find_by_id(&self, id: StaffId) -> RosterResult<Option<StaffMember>> {
        self.staff_by_id(id)
    }

    fn find_all(&self) -> RosterResult<Vec<StaffMember>> {
        self.all_staff()
    }

    fn find_by_supervisor(&self, supervisor_id: StaffId) -> RosterResult<Vec<StaffMember>> {
        self.staff_by_supervisor(supervisor_id)
    }
}
