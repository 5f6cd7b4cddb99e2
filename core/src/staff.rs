//! Staff records as the roster stores them.

use crate::{role::Role, types::{Amount, StaffId}};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id:            StaffId,
    pub name:          String,
    pub last_name:     String,
    pub email:         String,
    pub role:          Role,
    pub base_salary:   Amount,
    pub joined_date:   NaiveDate,
    pub supervisor_id: Option<StaffId>,
}

/// Input for hiring. Base salary is not part of it; the directory assigns
/// it from the role table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewStaff {
    pub name:          String,
    pub last_name:     String,
    pub email:         String,
    pub role:          Role,
    pub joined_date:   NaiveDate,
    #[serde(default)]
    pub supervisor_id: Option<StaffId>,
}

/// Partial update. `None` leaves a field untouched.
/// `supervisor_id: Some(None)` clears the supervisor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name:          Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name:     Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email:         Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role:          Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_date:   Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub supervisor_id: Option<Option<StaffId>>,
}

impl StaffUpdate {
    /// Apply this update on top of `member`, returning the merged record.
    pub fn apply_to(&self, member: &StaffMember) -> StaffMember {
        let mut merged = member.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(last_name) = &self.last_name {
            merged.last_name = last_name.clone();
        }
        if let Some(email) = &self.email {
            merged.email = email.clone();
        }
        if let Some(role) = self.role {
            merged.role = role;
        }
        if let Some(joined_date) = self.joined_date {
            merged.joined_date = joined_date;
        }
        if let Some(supervisor_id) = self.supervisor_id {
            merged.supervisor_id = supervisor_id;
        }
        merged
    }
}

/// A member together with its direct reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberWithSubordinates {
    #[serde(flatten)]
    pub member:       StaffMember,
    pub subordinates: Vec<StaffMember>,
}

// Distinguishes an absent `supervisorId` (leave as is) from an explicit
// `null` (clear it).
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_missing_and_null_supervisor() {
        let missing: StaffUpdate = serde_json::from_str(r#"{ "name": "Ann" }"#).unwrap();
        assert_eq!(missing.supervisor_id, None);

        let cleared: StaffUpdate = serde_json::from_str(r#"{ "supervisorId": null }"#).unwrap();
        assert_eq!(cleared.supervisor_id, Some(None));

        let set: StaffUpdate = serde_json::from_str(r#"{ "supervisorId": 7 }"#).unwrap();
        assert_eq!(set.supervisor_id, Some(Some(7)));
    }

    #[test]
    fn serialized_update_replays_unchanged() {
        let untouched = StaffUpdate {
            name: Some("Ann".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&untouched).unwrap();
        assert_eq!(json, r#"{"name":"Ann"}"#);
        let back: StaffUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, untouched, "an absent supervisor must not replay as a clear");

        let cleared = StaffUpdate {
            supervisor_id: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_string(&cleared).unwrap();
        assert_eq!(json, r#"{"supervisorId":null}"#);
        let back: StaffUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cleared);
    }

    #[test]
    fn apply_to_only_touches_given_fields() {
        let member = StaffMember {
            id: 1,
            name: "John".into(),
            last_name: "Smith".into(),
            email: "john.smith@example.com".into(),
            role: Role::Employee,
            base_salary: 40_000.0,
            joined_date: NaiveDate::from_ymd_opt(2024, 6, 19).unwrap(),
            supervisor_id: Some(2),
        };
        let update = StaffUpdate {
            role: Some(Role::Manager),
            supervisor_id: Some(None),
            ..Default::default()
        };

        let merged = update.apply_to(&member);
        assert_eq!(merged.role, Role::Manager);
        assert_eq!(merged.supervisor_id, None);
        assert_eq!(merged.name, "John");
        assert_eq!(merged.base_salary, 40_000.0);
    }
}
