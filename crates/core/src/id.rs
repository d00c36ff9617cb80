//! Strongly-typed identifiers used across the client layer.
//!
//! The backend issues UUIDs, but this layer never interprets them; identifiers
//! are carried as opaque text. Numeric JSON identifiers are accepted and kept
//! in their decimal form so older payloads still load.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

/// Identifier of an account (user).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

/// Identifier of a role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoleId(String);

/// Identifier of a module node in the permission tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModuleId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(value: RawId) -> Self {
        match value {
            RawId::Text(s) => s,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

macro_rules! impl_text_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: empty", $name)));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
            }
        }
    };
}

impl_text_newtype!(UserId, "UserId");
impl_text_newtype!(RoleId, "RoleId");
impl_text_newtype!(ModuleId, "ModuleId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_deserialize_as_text() {
        let id: UserId = serde_json::from_value(serde_json::json!(1)).unwrap();
        assert_eq!(id.as_str(), "1");

        let id: UserId =
            serde_json::from_value(serde_json::json!("7c0f6f2e-1a2b-4c3d-8e9f-001122334455"))
                .unwrap();
        assert_eq!(id.as_str(), "7c0f6f2e-1a2b-4c3d-8e9f-001122334455");
    }

    #[test]
    fn empty_id_is_rejected_when_parsing() {
        assert!(matches!(
            "   ".parse::<ModuleId>(),
            Err(DomainError::InvalidId(_))
        ));
        assert_eq!(" m1 ".parse::<ModuleId>().unwrap(), ModuleId::new("m1"));
    }
}
