// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Envy Client - Remote Variable Store Client
//!
//! Reads and writes named variables held by an envy store, scoped by a
//! scope identifier and authenticated with a bearer token. Fetched
//! variables are written into the process environment unless the caller
//! opts out with [`Materialize::Skip`].
//!
//! ## Modules
//!
//! - `client` - [`EnvyClient`] and its three operations
//! - `config` - [`ClientConfig`] and `ENVY_*` settings
//! - `environment` - best-effort process environment writes
//! - `error` - [`EnvyError`]
//! - `models` - [`Var`]
//! - `protocol` - header names and endpoint paths
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = EnvyClient::new("https://envy.example.com", "prod", api_key)?;
//! let db = client.get_var("DATABASE_URL").await?;
//! client.set_var("FEATURE_FLAG", "on").await?;
//! ```

pub mod client;
pub mod config;
pub mod environment;
pub mod error;
pub mod models;
pub mod protocol;

pub use client::EnvyClient;
pub use config::ClientConfig;
pub use environment::{set_env_vars, Materialize};
pub use error::EnvyError;
pub use models::Var;
