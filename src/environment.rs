// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Writing fetched variables into the process environment.
//!
//! Writes are best-effort: a variable the platform cannot hold is skipped
//! with a warning and never fails the fetch that produced it.

use tracing::{debug, warn};

use crate::models::Var;

/// Whether a fetch also writes its results into the process environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Materialize {
    /// Set `name=value` in the process environment for every fetched var.
    #[default]
    ProcessEnv,
    /// Return the vars without touching the environment.
    Skip,
}

impl Materialize {
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            Materialize::ProcessEnv
        } else {
            Materialize::Skip
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Materialize::ProcessEnv
    }
}

/// Set every var in the process environment, in order.
///
/// Later vars with the same name overwrite earlier ones. Vars that cannot be
/// represented are skipped. Returns how many were written.
pub fn set_env_vars<'a, I>(vars: I) -> usize
where
    I: IntoIterator<Item = &'a Var>,
{
    let mut written = 0;
    for var in vars {
        if let Some(reason) = unsupported_reason(var) {
            warn!(name = %var.name, reason, "skipping environment variable");
            continue;
        }
        std::env::set_var(&var.name, &var.value);
        written += 1;
    }
    debug!(written, "materialized variables into process environment");
    written
}

/// `std::env::set_var` panics on these inputs.
fn unsupported_reason(var: &Var) -> Option<&'static str> {
    if var.name.is_empty() {
        Some("empty name")
    } else if var.name.contains('=') {
        Some("name contains '='")
    } else if var.name.contains('\0') {
        Some("name contains NUL")
    } else if var.value.contains('\0') {
        Some("value contains NUL")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_materializes() {
        assert_eq!(Materialize::default(), Materialize::ProcessEnv);
        assert!(Materialize::from_flag(true).is_enabled());
        assert!(!Materialize::from_flag(false).is_enabled());
    }

    #[test]
    fn sets_vars_in_order() {
        let vars = vec![
            Var::new("ENVY_ENV_TEST_ORDER", "first"),
            Var::new("ENVY_ENV_TEST_ORDER", "second"),
            Var::new("ENVY_ENV_TEST_OTHER", "x"),
        ];
        assert_eq!(set_env_vars(&vars), 3);
        assert_eq!(std::env::var("ENVY_ENV_TEST_ORDER").unwrap(), "second");
        assert_eq!(std::env::var("ENVY_ENV_TEST_OTHER").unwrap(), "x");
    }

    #[test]
    fn unsupported_names_are_skipped_without_panicking() {
        let vars = vec![
            Var::new("", "empty"),
            Var::new("ENVY_ENV_TEST=BAD", "eq"),
            Var::new("ENVY_ENV_TEST_NUL\0", "nul"),
            Var::new("ENVY_ENV_TEST_NUL_VALUE", "a\0b"),
            Var::new("ENVY_ENV_TEST_VALID", "ok"),
        ];
        assert_eq!(set_env_vars(&vars), 1);
        assert_eq!(std::env::var("ENVY_ENV_TEST_VALID").unwrap(), "ok");
        assert!(std::env::var("ENVY_ENV_TEST_NUL_VALUE").is_err());
    }

    #[test]
    fn empty_input_writes_nothing() {
        assert_eq!(set_env_vars(&Vec::<Var>::new()), 0);
    }
}
