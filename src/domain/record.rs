//! Member record domain model.
//!
//! A [`Record`] is one user entry served by the member source. Records are
//! identified by a [`RecordId`] assigned upstream; the id is never edited.
//! The editable fields are `name`, `email` and `role`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable identifier of a member record.
///
/// The upstream payload uses either JSON strings (`"1"`) or numbers (`1`) for
/// ids. Both are normalised to their string form so that equality and search
/// behave the same regardless of how the source encoded them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// Access level of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }

    /// Returns the other role. The role input only offers these two values.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Admin => Self::Member,
            Self::Member => Self::Admin,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One member entry as served by the member source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Record {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: RecordId::new(id),
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// String form of every field, in column order.
    #[must_use]
    pub fn field_values(&self) -> [&str; 4] {
        [self.id.as_str(), &self.name, &self.email, self.role.as_str()]
    }

    /// Returns `true` if any field contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .field_values()
                .iter()
                .any(|value| value.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_accept_strings_and_numbers() {
        let records: Vec<Record> = serde_json::from_str(
            r#"[
                {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
                {"id": 2, "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "admin"}
            ]"#,
        )
        .unwrap();

        assert_eq!(records[0].id, RecordId::from("1"));
        assert_eq!(records[1].id, RecordId::from("2"));
        assert_eq!(records[1].role, Role::Admin);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let parsed = serde_json::from_str::<Record>(
            r#"{"id": "9", "name": "Eve", "email": "eve@example.com", "role": "owner"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn matching_checks_every_field() {
        let record = Record::new("17", "Bob Stone", "bstone@example.com", Role::Member);

        assert!(record.matches("bob"));
        assert!(record.matches("example.com"));
        assert!(record.matches("17"));
        assert!(record.matches("mem"));
        assert!(record.matches(""));
        assert!(!record.matches("admin"));
    }

    #[test]
    fn matching_ignores_case_of_field_values() {
        let record = Record::new("3", "ALICE", "ALICE@EXAMPLE.COM", Role::Admin);
        assert!(record.matches("alice@"));
    }

    #[test]
    fn role_toggle_flips() {
        assert_eq!(Role::Admin.toggled(), Role::Member);
        assert_eq!(Role::Member.toggled(), Role::Admin);
    }
}
