//! Roster events. Every mutation of the roster is recorded here.
//!
//! Variants are only ever appended, never removed or reordered.

use crate::{staff::StaffMember, types::StaffId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RosterEvent {
    StaffHired {
        member: StaffMember,
    },
    StaffUpdated {
        before: StaffMember,
        after:  StaffMember,
    },
    StaffRemoved {
        member: StaffMember,
        /// Direct reports left without a supervisor by the removal.
        orphaned: Vec<StaffId>,
    },
}

impl RosterEvent {
    /// The staff member this event is about.
    pub fn staff_id(&self) -> StaffId {
        match self {
            Self::StaffHired { member }      => member.id,
            Self::StaffUpdated { after, .. } => after.id,
            Self::StaffRemoved { member, .. } => member.id,
        }
    }

    /// Stable name for the event_type column.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::StaffHired { .. }   => "staff_hired",
            Self::StaffUpdated { .. } => "staff_updated",
            Self::StaffRemoved { .. } => "staff_removed",
        }
    }
}

/// One persisted row of the event log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub id:         Option<i64>,
    pub staff_id:   StaffId,
    pub event_type: String,
    pub payload:    String,
}

impl EventLogEntry {
    pub fn from_event(event: &RosterEvent) -> serde_json::Result<Self> {
        Ok(Self {
            id:         None,
            staff_id:   event.staff_id(),
            event_type: event.type_name().to_string(),
            payload:    serde_json::to_string(event)?,
        })
    }

    pub fn decode(&self) -> serde_json::Result<RosterEvent> {
        serde_json::from_str(&self.payload)
    }
}
