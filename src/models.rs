// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Variable Model
//!
//! A [`Var`] is the only payload the store exchanges as JSON:
//!
//! ```json
//! {"name": "DATABASE_URL", "value": "postgres://..."}
//! ```

use serde::{Deserialize, Serialize};

/// A single named variable held by the store.
///
/// Two vars are equal when both name and value match. A field missing from
/// the JSON decodes as an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct Var {
    /// Variable name, also used as the process env key when materialized.
    pub name: String,
    /// Variable value.
    pub value: String,
}

impl Var {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Var {
    fn from((name, value): (N, V)) -> Self {
        Var::new(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_exactly_name_and_value() {
        let json = serde_json::to_string(&Var::new("FOO", "bar")).unwrap();
        assert_eq!(json, r#"{"name":"FOO","value":"bar"}"#);
    }

    #[test]
    fn deserializes_object_from_store() {
        let var: Var = serde_json::from_str(r#"{"value":"1","name":"PORT"}"#).unwrap();
        assert_eq!(var, Var::new("PORT", "1"));
    }

    #[test]
    fn missing_field_decodes_as_empty() {
        let var: Var = serde_json::from_str(r#"{"name":"PORT"}"#).unwrap();
        assert_eq!(var, Var::new("PORT", ""));

        let var: Var = serde_json::from_str("{}").unwrap();
        assert_eq!(var, Var::default());
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<Var>(r#"{"name":"PORT","value":8080}"#);
        assert!(result.is_err());
    }

    #[test]
    fn equality_covers_name_and_value() {
        assert_eq!(Var::from(("A", "1")), Var::new("A", "1"));
        assert_ne!(Var::new("A", "1"), Var::new("A", "2"));
        assert_ne!(Var::new("A", "1"), Var::new("B", "1"));
    }

    #[test]
    fn display_formats_as_assignment() {
        assert_eq!(Var::new("LOG_LEVEL", "debug").to_string(), "LOG_LEVEL=debug");
    }
}
