//! Staff roles and how far each role's subordinate bonus reaches.

use crate::error::{RosterError, RosterResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of staff roles. Fixed at hire time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Employee,
    Manager,
    Sales,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Employee, Role::Manager, Role::Sales];

    /// Stable name, as stored in the database and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "EMPLOYEE",
            Self::Manager  => "MANAGER",
            Self::Sales    => "SALES",
        }
    }

    /// Which part of the reporting chain feeds this role's subordinate bonus.
    pub fn subordinate_scope(&self) -> SubordinateScope {
        match self {
            Self::Employee => SubordinateScope::None,
            Self::Manager  => SubordinateScope::Direct,
            Self::Sales    => SubordinateScope::Transitive,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RosterError;

    fn from_str(s: &str) -> RosterResult<Self> {
        match s {
            "EMPLOYEE" => Ok(Self::Employee),
            "MANAGER"  => Ok(Self::Manager),
            "SALES"    => Ok(Self::Sales),
            other      => Err(RosterError::UnknownRole { name: other.to_string() }),
        }
    }
}

/// Reach of a subordinate bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubordinateScope {
    /// No bonus, the reporting chain is never read.
    None,
    /// Direct reports only (one level).
    Direct,
    /// Every transitive descendant, unbounded depth.
    Transitive,
}
