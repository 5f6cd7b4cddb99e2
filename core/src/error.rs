use crate::types::StaffId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Staff member {id} does not work in the company")]
    NotFound { id: StaffId },

    #[error("Supervisor cycle detected at staff member {id}")]
    SupervisorCycle { id: StaffId },

    #[error("Unknown role '{name}'")]
    UnknownRole { name: String },

    #[error("Invalid date '{value}' stored for staff member {id}")]
    InvalidDate { id: StaffId, value: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;
