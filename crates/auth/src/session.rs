//! Session data model.
//!
//! The user profile and module grants are persisted exactly as the backend
//! sent them. Typed accessors read from that JSON; nothing is normalized on
//! the way to storage.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use rootmanage_core::{ModuleId, UserId};

use crate::role::Role;

/// Profile of the logged-in account, as persisted under the `user` key.
///
/// Built from the login response as `{id, username, name, role}`; fields the
/// response lacked are left out, and `null`s are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionUser(Map<String, Value>);

impl SessionUser {
    fn from_login(response: &Map<String, Value>) -> Self {
        let mut user = Map::new();
        for (from, to) in [
            ("userId", "id"),
            ("username", "username"),
            ("name", "name"),
            ("role", "role"),
        ] {
            if let Some(value) = response.get(from) {
                user.insert(to.to_string(), value.clone());
            }
        }
        Self(user)
    }

    pub fn id(&self) -> Option<UserId> {
        self.0
            .get("id")
            .and_then(|v| UserId::deserialize(v).ok())
    }

    pub fn username(&self) -> Option<&str> {
        self.0.get("username").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn role(&self) -> Option<Role> {
        self.0.get("role").and_then(|v| Role::deserialize(v).ok())
    }

    /// Name to show for the account: display name, else username.
    pub fn display_name(&self) -> Option<&str> {
        self.name()
            .filter(|n| !n.is_empty())
            .or_else(|| self.username())
    }

    pub fn as_json(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for SessionUser {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

/// A node of the module permission tree (`{id, zhName, path, permissionKey,
/// children, ...}`), kept as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleNode(Map<String, Value>);

impl ModuleNode {
    pub fn id(&self) -> Option<ModuleId> {
        self.0
            .get("id")
            .and_then(|v| ModuleId::deserialize(v).ok())
    }

    pub fn permission_key(&self) -> Option<&str> {
        text(&self.0, "permissionKey")
    }

    pub fn path(&self) -> Option<&str> {
        text(&self.0, "path")
    }

    /// Identifier used for membership checks: permission key, else path, else id.
    pub fn identifier(&self) -> Option<String> {
        node_identifier(&self.0)
    }

    pub fn as_json(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ModuleNode {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

fn text<'a>(node: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    node.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn node_identifier(node: &Map<String, Value>) -> Option<String> {
    text(node, "permissionKey")
        .or_else(|| text(node, "path"))
        .map(str::to_string)
        .or_else(|| match node.get("id") {
            Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        })
}

fn collect_node_keys(node: &Map<String, Value>, out: &mut Vec<String>) {
    if let Some(key) = node_identifier(node) {
        out.push(key);
    }
    let children = node.get("children").and_then(Value::as_array);
    for child in children.into_iter().flatten().filter_map(Value::as_object) {
        collect_node_keys(child, out);
    }
}

/// A module granted to the account: a bare identifier or a tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleGrant {
    Key(String),
    Number(serde_json::Number),
    Node(ModuleNode),
}

impl ModuleGrant {
    pub fn key(key: impl Into<String>) -> Self {
        ModuleGrant::Key(key.into())
    }

    pub fn identifier(&self) -> Option<String> {
        match self {
            ModuleGrant::Key(key) => Some(key.clone()),
            ModuleGrant::Number(n) => Some(n.to_string()),
            ModuleGrant::Node(node) => node.identifier(),
        }
    }
}

/// Authenticated state of this client.
///
/// `is_authenticated()` is derived from the token and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: Option<SessionUser>,
    pub modules: Vec<ModuleGrant>,
}

impl Session {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// Build the session a successful login establishes from the raw
    /// response body.
    pub fn from_login(raw: &Value) -> Result<Self, serde_json::Error> {
        let response = LoginResponse::deserialize(raw)?;
        let user = raw
            .as_object()
            .map(SessionUser::from_login)
            .unwrap_or_default();

        Ok(Self {
            token: response.token,
            user: Some(user),
            modules: response.modules.unwrap_or_default(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Token and user present but no modules: a partial write, not a valid
    /// "nothing granted" state.
    pub fn is_incomplete(&self) -> bool {
        !self.token.is_empty() && self.user.is_some() && self.modules.is_empty()
    }

    /// Identifiers of every granted module, tree children included.
    pub fn module_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for grant in &self.modules {
            match grant {
                ModuleGrant::Node(node) => collect_node_keys(node.as_json(), &mut keys),
                other => keys.extend(other.identifier()),
            }
        }
        keys
    }

    pub fn has_module(&self, key: &str) -> bool {
        self.module_keys().iter().any(|k| k == key)
    }
}

/// Body of a successful `POST /auth/login`, as far as the session needs to
/// validate it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: UserId,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub modules: Option<Vec<ModuleGrant>>,
}
