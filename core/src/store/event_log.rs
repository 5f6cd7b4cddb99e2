use super::RosterStore;
use crate::{error::RosterResult, event::EventLogEntry, types::StaffId};
use rusqlite::params;

impl RosterStore {
    // ── Event log ──────────────────────────────────────────────

    pub fn append_event(&self, entry: &EventLogEntry) -> RosterResult<i64> {
        self.conn.execute(
            "INSERT INTO event_log (staff_id, event_type, payload) VALUES (?1, ?2, ?3)",
            params![entry.staff_id, entry.event_type, entry.payload],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn events_for_staff(&self, staff_id: StaffId) -> RosterResult<Vec<EventLogEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, staff_id, event_type, payload
             FROM event_log WHERE staff_id = ?1
             ORDER BY id ASC",
        )?;
        let entries = stmt
            .query_map(params![staff_id], entry_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    pub fn all_events(&self) -> RosterResult<Vec<EventLogEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, staff_id, event_type, payload FROM event_log ORDER BY id ASC",
        )?;
        let entries = stmt
            .query_map([], entry_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }
}

fn entry_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<EventLogEntry> {
    Ok(EventLogEntry {
        id:         Some(row.get(0)?),
        staff_id:   row.get(1)?,
        event_type: row.get(2)?,
        payload:    row.get(3)?,
    })
}
