use serde::{Deserialize, Serialize};

/// Role attached to the logged-in account.
///
/// The backend sends its full role record; older payloads carry just the role
/// name. Both shapes round-trip unchanged through persisted storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Role {
    Name(String),
    Record(RoleRecord),
}

/// Full role record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<rootmanage_core::RoleId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Role::Name(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Role::Name(name) => name,
            Role::Record(record) => &record.name,
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
