//! Read access to the roster, as the salary engine sees it.
//!
//! RULE: The salary engine reads staff ONLY through this trait.
//! It never writes, and it never talks to the database directly.

use crate::{error::RosterResult, staff::StaffMember, types::StaffId};

pub trait StaffRepository {
    fn find_by_id(&self, id: StaffId) -> RosterResult<Option<StaffMember>>;

    fn find_all(&self) -> RosterResult<Vec<StaffMember>>;

    /// Direct reports of `supervisor_id` only. Order is stable per call.
    fn find_by_supervisor(&self, supervisor_id: StaffId) -> RosterResult<Vec<StaffMember>>;
}

impl<R: StaffRepository + ?Sized> StaffRepository for &R {
    fn find_by_id(&self, id: StaffId) -> RosterResult<Option<StaffMember>> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RosterResult<Vec<StaffMember>> {
        (**self).find_all()
    }

    fn find_by_supervisor(&self, supervisor_id: StaffId) -> RosterResult<Vec<StaffMember>> {
        (**self).find_by_supervisor(supervisor_id)
    }
}
