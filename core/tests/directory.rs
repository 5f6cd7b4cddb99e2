//! Staff directory tests: hiring, updates, removal and the event log.

use chrono::NaiveDate;
use roster_core::{
    config::PayRules,
    directory::StaffDirectory,
    error::RosterError,
    event::RosterEvent,
    role::Role,
    staff::{NewStaff, StaffUpdate},
    store::RosterStore,
};

fn store() -> RosterStore {
    let store = RosterStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    store
}

fn new_staff(email: &str, role: Role, supervisor_id: Option<i64>) -> NewStaff {
    NewStaff {
        name: "John".into(),
        last_name: "Smith".into(),
        email: email.into(),
        role,
        joined_date: NaiveDate::from_ymd_opt(2024, 6, 19).unwrap(),
        supervisor_id,
    }
}

#[test]
fn hire_assigns_base_salary_from_role_table() {
    let store = store();
    let rules = PayRules::default();
    let directory = StaffDirectory::new(&store, &rules);

    let employee = directory.hire(new_staff("e@example.com", Role::Employee, None)).unwrap();
    let manager = directory.hire(new_staff("m@example.com", Role::Manager, None)).unwrap();
    let sales = directory.hire(new_staff("s@example.com", Role::Sales, None)).unwrap();

    assert_eq!(employee.base_salary, 40_000.0);
    assert_eq!(manager.base_salary, 60_000.0);
    assert_eq!(sales.base_salary, 50_000.0);
    assert_eq!(store.staff_count().unwrap(), 3);
}

#[test]
fn hire_round_trips_through_the_store() {
    let store = store();
    let rules = PayRules::default();
    let directory = StaffDirectory::new(&store, &rules);

    let boss = directory.hire(new_staff("boss@example.com", Role::Manager, None)).unwrap();
    let hired = directory
        .hire(new_staff("john.smith@example.com", Role::Employee, Some(boss.id)))
        .unwrap();

    let stored = store.staff_by_id(hired.id).unwrap().expect("stored member");
    assert_eq!(stored, hired);
    assert_eq!(stored.supervisor_id, Some(boss.id));
    assert_eq!(stored.joined_date, NaiveDate::from_ymd_opt(2024, 6, 19).unwrap());
}

#[test]
fn update_changes_fields_but_keeps_base_salary() {
    let store = store();
    let rules = PayRules::default();
    let directory = StaffDirectory::new(&store, &rules);
    let boss = directory.hire(new_staff("boss@example.com", Role::Manager, None)).unwrap();
    let member = directory
        .hire(new_staff("e@example.com", Role::Employee, Some(boss.id)))
        .unwrap();

    let updated = directory
        .update(
            member.id,
            StaffUpdate {
                role: Some(Role::Sales),
                name: Some("Jane".into()),
                supervisor_id: Some(None),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.role, Role::Sales);
    assert_eq!(updated.name, "Jane");
    assert_eq!(updated.supervisor_id, None);
    assert_eq!(updated.base_salary, 40_000.0);
    assert_eq!(store.staff_by_id(member.id).unwrap().unwrap(), updated);
}

#[test]
fn missing_member_is_not_found_everywhere() {
    let store = store();
    let rules = PayRules::default();
    let directory = StaffDirectory::new(&store, &rules);

    assert!(matches!(
        directory.update(42, StaffUpdate::default()),
        Err(RosterError::NotFound { id: 42 })
    ));
    assert!(matches!(directory.remove(42), Err(RosterError::NotFound { id: 42 })));
    assert!(matches!(
        directory.member_with_subordinates(42),
        Err(RosterError::NotFound { id: 42 })
    ));
    assert!(store.all_events().unwrap().is_empty());
}

#[test]
fn remove_orphans_direct_reports() {
    let store = store();
    let rules = PayRules::default();
    let directory = StaffDirectory::new(&store, &rules);
    let boss = directory.hire(new_staff("boss@example.com", Role::Manager, None)).unwrap();
    let a = directory.hire(new_staff("a@example.com", Role::Employee, Some(boss.id))).unwrap();
    let b = directory.hire(new_staff("b@example.com", Role::Employee, Some(boss.id))).unwrap();

    let removed = directory.remove(boss.id).unwrap();
    assert_eq!(removed, boss);
    assert!(store.staff_by_id(boss.id).unwrap().is_none());

    for id in [a.id, b.id] {
        let report = store.staff_by_id(id).unwrap().unwrap();
        assert_eq!(report.supervisor_id, None, "report {id} should be unsupervised");
    }

    let events = store.events_for_staff(boss.id).unwrap();
    let last = events.last().expect("removal event").decode().unwrap();
    assert_eq!(
        last,
        RosterEvent::StaffRemoved { member: boss, orphaned: vec![a.id, b.id] }
    );
}

#[test]
fn member_with_subordinates_lists_direct_reports_only() {
    let store = store();
    let rules = PayRules::default();
    let directory = StaffDirectory::new(&store, &rules);
    let top = directory.hire(new_staff("top@example.com", Role::Manager, None)).unwrap();
    let mid = directory.hire(new_staff("mid@example.com", Role::Sales, Some(top.id))).unwrap();
    directory.hire(new_staff("low@example.com", Role::Employee, Some(mid.id))).unwrap();

    let view = directory.member_with_subordinates(top.id).unwrap();
    assert_eq!(view.member, top);
    assert_eq!(view.subordinates, vec![mid]);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["email"], "top@example.com");
    assert_eq!(json["subordinates"][0]["role"], "SALES");
}

#[test]
fn every_mutation_is_logged_in_order() {
    let store = store();
    let rules = PayRules::default();
    let directory = StaffDirectory::new(&store, &rules);

    let member = directory.hire(new_staff("e@example.com", Role::Employee, None)).unwrap();
    directory
        .update(member.id, StaffUpdate { email: Some("new@example.com".into()), ..Default::default() })
        .unwrap();
    directory.remove(member.id).unwrap();

    let types: Vec<String> = store
        .events_for_staff(member.id)
        .unwrap()
        .into_iter()
        .map(|e| e.event_type)
        .collect();
    assert_eq!(types, ["staff_hired", "staff_updated", "staff_removed"]);

    let updated = store.events_for_staff(member.id).unwrap()[1].decode().unwrap();
    match updated {
        RosterEvent::StaffUpdated { before, after } => {
            assert_eq!(before.email, "e@example.com");
            assert_eq!(after.email, "new@example.com");
        }
        other => panic!("expected StaffUpdated, got {other:?}"),
    }
}

#[test]
fn list_is_ordered_by_id() {
    let store = store();
    let rules = PayRules::default();
    let directory = StaffDirectory::new(&store, &rules);

    let ids: Vec<i64> = (0..4)
        .map(|i| {
            directory
                .hire(new_staff(&format!("{i}@example.com"), Role::Employee, None))
                .unwrap()
                .id
        })
        .collect();

    let listed: Vec<i64> = directory.list().unwrap().into_iter().map(|m| m.id).collect();
    assert_eq!(listed, ids);
}

#[test]
fn migrate_is_idempotent() {
    let store = store();
    store.migrate().expect("second migration");
    assert_eq!(store.staff_count().unwrap(), 0);
}
