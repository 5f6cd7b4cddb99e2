//! Staff roster with role-based, hierarchy-aware salary computation.
//!
//! The salary engine reads the roster through `StaffRepository`;
//! the directory owns every write and records it in the event log.

pub mod config;
pub mod directory;
pub mod error;
pub mod event;
pub mod population;
pub mod repository;
pub mod rng;
pub mod role;
pub mod salary;
pub mod staff;
pub mod store;
pub mod tenure;
pub mod types;
