//! Staff directory: hiring, updating and removing roster members.
//!
//! Every mutation runs in one transaction together with its event log
//! entry, so the log never records a change that did not happen.

use crate::{
    config::PayRules,
    error::{RosterError, RosterResult},
    event::{EventLogEntry, RosterEvent},
    staff::{MemberWithSubordinates, NewStaff, StaffMember, StaffUpdate},
    store::RosterStore,
    types::StaffId,
};

pub struct StaffDirectory<'a> {
    store: &'a RosterStore,
    rules: &'a PayRules,
}

impl<'a> StaffDirectory<'a> {
    pub fn new(store: &'a RosterStore, rules: &'a PayRules) -> Self {
        Self { store, rules }
    }

    /// Add a member. Base salary comes from the role table.
    pub fn hire(&self, staff: NewStaff) -> RosterResult<StaffMember> {
        let base_salary = self.rules.base_salary(staff.role);

        let member = self.store.with_transaction(|store| {
            let id = store.insert_staff(&staff, base_salary)?;
            let member = store
                .staff_by_id(id)?
                .ok_or(RosterError::NotFound { id })?;
            record(store, &RosterEvent::StaffHired { member: member.clone() })?;
            Ok(member)
        })?;

        log::info!(
            "hired staff {} ({}) base={:.2} supervisor={:?}",
            member.id,
            member.role,
            member.base_salary,
            member.supervisor_id
        );
        Ok(member)
    }

    /// Apply a partial update. Base salary is kept even if the role changes.
    pub fn update(&self, id: StaffId, update: StaffUpdate) -> RosterResult<StaffMember> {
        let after = self.store.with_transaction(|store| {
            let before = store.staff_by_id(id)?.ok_or(RosterError::NotFound { id })?;
            let after = update.apply_to(&before);
            store.update_staff(&after)?;
            record(store, &RosterEvent::StaffUpdated { before, after: after.clone() })?;
            Ok(after)
        })?;

        log::info!("updated staff {id}");
        Ok(after)
    }

    /// Remove a member and return its last state.
    /// Its direct reports are left without a supervisor.
    pub fn remove(&self, id: StaffId) -> RosterResult<StaffMember> {
        let (member, orphaned) = self.store.with_transaction(|store| {
            let member = store.staff_by_id(id)?.ok_or(RosterError::NotFound { id })?;
            let orphaned: Vec<StaffId> = store
                .staff_by_supervisor(id)?
                .into_iter()
                .map(|m| m.id)
                .collect();
            store.delete_staff(id)?;
            record(
                store,
                &RosterEvent::StaffRemoved {
                    member: member.clone(),
                    orphaned: orphaned.clone(),
                },
            )?;
            Ok((member, orphaned))
        })?;

        if orphaned.is_empty() {
            log::info!("removed staff {id}");
        } else {
            log::info!("removed staff {id}, {} reports now unsupervised", orphaned.len());
        }
        Ok(member)
    }

    pub fn member_with_subordinates(&self, id: StaffId) -> RosterResult<MemberWithSubordinates> {
        let member = self
            .store
            .staff_by_id(id)?
            .ok_or(RosterError::NotFound { id })?;
        let subordinates = self.store.staff_by_supervisor(id)?;
        Ok(MemberWithSubordinates { member, subordinates })
    }

    pub fn list(&self) -> RosterResult<Vec<StaffMember>> {
        self.store.all_staff()
    }
}

fn record(store: &RosterStore, event: &RosterEvent) -> RosterResult<()> {
    let entry = EventLogEntry::from_event(event)?;
    store.append_event(&entry)?;
    Ok(())
}
