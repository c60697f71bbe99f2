//! User-scope and key identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Characters the store treats as path syntax inside a key segment.
const FORBIDDEN_SCOPE_CHARS: &[char] = &['/', '.', '#', '$', '[', ']'];

/// Opaque identifier partitioning every collection by authenticated user.
///
/// Established at session start and passed explicitly into every store call;
/// there is no ambient current-user state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserScope(String);

impl UserScope {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::invalid_scope("user scope must not be empty"));
        }
        if let Some(ch) = id.chars().find(|c| FORBIDDEN_SCOPE_CHARS.contains(c)) {
            return Err(Error::invalid_scope(format!(
                "user scope contains forbidden character '{}'",
                ch
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque key assigned by the store when an entity is first inserted.
///
/// Once assigned, a key is immutable for the entity's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignedKey(String);

impl AssignedKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AssignedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_accepts_opaque_identifiers() {
        let scope = UserScope::new("uid-2f9d81c3").expect("valid scope");
        assert_eq!(scope.as_str(), "uid-2f9d81c3");
    }

    #[test]
    fn scope_rejects_empty_and_path_characters() {
        assert!(UserScope::new("").is_err());
        assert!(UserScope::new("   ").is_err());
        assert!(UserScope::new("a/b").is_err());
        assert!(UserScope::new("user.name").is_err());
        assert!(UserScope::new("user#1").is_err());
    }

    #[test]
    fn assigned_key_round_trips_as_plain_string() {
        let key = AssignedKey::new("-NabcXYZ");
        let json = serde_json::to_string(&key).expect("serialize");
        assert_eq!(json, r#""-NabcXYZ""#);
        let back: AssignedKey = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, key);
    }
}
