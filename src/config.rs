// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Client Configuration
//!
//! [`ClientConfig`] collects everything an [`EnvyClient`](crate::client::EnvyClient)
//! needs. It is normally built in code; [`ClientConfig::from_env`] is an
//! opt-in shortcut for services that keep the store location in their own
//! environment.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `ENVY_BASE_URL` | Base URL of the variable store | Required |
//! | `ENVY_SCOPE` | Scope whose variables are read and written | Required |
//! | `ENVY_AUTH_KEY` | Bearer token sent with every request | empty |
//! | `ENVY_TIMEOUT_SECS` | Per-request timeout in seconds | `10` |
//! | `ENVY_MATERIALIZE` | Write fetched vars into the process env (`true`/`false`) | `true` |

use std::time::Duration;

use crate::environment::Materialize;
use crate::error::EnvyError;

pub const BASE_URL_ENV: &str = "ENVY_BASE_URL";
pub const SCOPE_ENV: &str = "ENVY_SCOPE";
pub const AUTH_KEY_ENV: &str = "ENVY_AUTH_KEY";
pub const TIMEOUT_SECS_ENV: &str = "ENVY_TIMEOUT_SECS";
pub const MATERIALIZE_ENV: &str = "ENVY_MATERIALIZE";

/// Request timeout applied to the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for building an [`EnvyClient`](crate::client::EnvyClient).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub scope: String,
    /// Empty means requests carry a meaningless `Bearer ` credential.
    pub auth_key: String,
    pub timeout: Duration,
    pub materialize: Materialize,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            scope: scope.into(),
            auth_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
            materialize: Materialize::default(),
        }
    }

    pub fn with_auth_key(mut self, auth_key: impl Into<String>) -> Self {
        self.auth_key = auth_key.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_materialize(mut self, materialize: Materialize) -> Self {
        self.materialize = materialize;
        self
    }

    /// Load settings from the `ENVY_*` variables listed in the module docs.
    ///
    /// Caller convenience only: [`EnvyClient`](crate::client::EnvyClient)
    /// never reads the process environment, it only writes fetched vars.
    pub fn from_env() -> Result<Self, EnvyError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, EnvyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required =
            |name: &str| get(name).ok_or_else(|| EnvyError::MissingConfig(name.to_string()));

        let mut config = Self::new(required(BASE_URL_ENV)?, required(SCOPE_ENV)?);

        if let Some(auth_key) = get(AUTH_KEY_ENV) {
            config.auth_key = auth_key;
        }

        if let Some(raw) = get(TIMEOUT_SECS_ENV) {
            let secs: u64 = raw.parse().map_err(|_| {
                EnvyError::InvalidConfig(format!(
                    "{TIMEOUT_SECS_ENV} must be whole seconds, got {raw:?}"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = get(MATERIALIZE_ENV) {
            config.materialize = Materialize::from_flag(parse_flag(&raw).ok_or_else(|| {
                EnvyError::InvalidConfig(format!(
                    "{MATERIALIZE_ENV} must be true or false, got {raw:?}"
                ))
            })?);
        }

        Ok(config)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("scope", &self.scope)
            .field("auth_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("materialize", &self.materialize)
            .finish()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
