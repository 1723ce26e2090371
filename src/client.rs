// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Envy variable store client.
//!
//! Each operation is a single HTTP round trip bounded by the transport
//! timeout. Nothing is retried or cached.

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::environment::{set_env_vars, Materialize};
use crate::error::EnvyError;
use crate::models::Var;
use crate::protocol::{
    bearer, endpoint_url, AUTHORIZATION_HEADER, GET_ALL_VARS_PATH, GET_VAR_PATH, SCOPE_HEADER,
    SET_VAR_PATH, VAR_HEADER, VAR_VALUE_HEADER,
};

/// Client for a single scope of the envy store.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct EnvyClient {
    base_url: String,
    scope: String,
    auth_key: String,
    materialize: Materialize,
    http: Client,
}

impl EnvyClient {
    /// Create a client with the default transport (10 second timeout).
    ///
    /// `base_url` is not validated here; a malformed URL is reported by the
    /// first call as [`EnvyError::InvalidUrl`].
    pub fn new(
        base_url: impl Into<String>,
        scope: impl Into<String>,
        auth_key: impl Into<String>,
    ) -> Result<Self, EnvyError> {
        Self::from_config(ClientConfig::new(base_url, scope).with_auth_key(auth_key))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, EnvyError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EnvyError::ClientBuild(e.to_string()))?;

        let mut client =
            Self::with_http_client(config.base_url, config.scope, config.auth_key, http);
        client.materialize = config.materialize;
        Ok(client)
    }

    /// Create a client around a caller-built transport (proxy, TLS, custom
    /// timeout, ...).
    pub fn with_http_client(
        base_url: impl Into<String>,
        scope: impl Into<String>,
        auth_key: impl Into<String>,
        http: Client,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            scope: scope.into(),
            auth_key: auth_key.into(),
            materialize: Materialize::default(),
            http,
        }
    }

    /// Replace the transport. Applies to every call made after this returns.
    pub fn set_http_client(&mut self, http: Client) {
        self.http = http;
    }

    /// Change the default materialization policy of `get_var`/`get_all_vars`.
    pub fn set_materialize(&mut self, materialize: Materialize) {
        self.materialize = materialize;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn materialize(&self) -> Materialize {
        self.materialize
    }

    /// Fetch one variable, applying the client's materialization policy.
    pub async fn get_var(&self, name: &str) -> Result<Var, EnvyError> {
        self.get_var_with(name, self.materialize).await
    }

    /// Fetch one variable with an explicit materialization policy.
    ///
    /// The response status is not checked; whatever body comes back must
    /// decode as a single var. A `null` body yields an empty var.
    pub async fn get_var_with(
        &self,
        name: &str,
        materialize: Materialize,
    ) -> Result<Var, EnvyError> {
        let request = self
            .request(Method::GET, GET_VAR_PATH)?
            .header(VAR_HEADER, name);

        let var = self
            .fetch_json::<Option<Var>>(request)
            .await?
            .unwrap_or_default();

        if materialize.is_enabled() {
            set_env_vars(std::iter::once(&var));
        }
        Ok(var)
    }

    /// Fetch every variable in the scope, applying the client's
    /// materialization policy.
    pub async fn get_all_vars(&self) -> Result<Vec<Var>, EnvyError> {
        self.get_all_vars_with(self.materialize).await
    }

    /// Fetch every variable in the scope with an explicit materialization
    /// policy. Order is whatever the store returned.
    ///
    /// A `null` body is an empty scope. Nothing is written to the environment
    /// unless the whole body decodes.
    pub async fn get_all_vars_with(&self, materialize: Materialize) -> Result<Vec<Var>, EnvyError> {
        let request = self.request(Method::GET, GET_ALL_VARS_PATH)?;

        let vars = self
            .fetch_json::<Option<Vec<Var>>>(request)
            .await?
            .unwrap_or_default();
        debug!(scope = %self.scope, count = vars.len(), "fetched all variables");

        if materialize.is_enabled() {
            set_env_vars(&vars);
        }
        Ok(vars)
    }

    /// Store `value` under `name`. Succeeds only on HTTP 200.
    pub async fn set_var(&self, name: &str, value: &str) -> Result<(), EnvyError> {
        let response = self
            .request(Method::POST, SET_VAR_PATH)?
            .header(VAR_HEADER, name)
            .header(VAR_VALUE_HEADER, value)
            .send()
            .await?;

        // The body carries nothing we use; release the connection now.
        let status = response.status();
        drop(response);

        if status == StatusCode::OK {
            return Ok(());
        }

        warn!(
            scope = %self.scope,
            name,
            status = status.as_u16(),
            "envy setvar returned unexpected status"
        );
        Err(EnvyError::UnexpectedStatus(status.as_u16()))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, EnvyError> {
        let url = endpoint_url(&self.base_url, path)?;
        debug!(%method, path, scope = %self.scope, "sending envy request");

        Ok(self
            .http
            .request(method, url)
            .header(SCOPE_HEADER, &self.scope)
            .header(AUTHORIZATION_HEADER, bearer(&self.auth_key)))
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, EnvyError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "received envy response");

        Ok(serde_json::from_slice(&body)?)
    }
}

impl std::fmt::Debug for EnvyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvyClient")
            .field("base_url", &self.base_url)
            .field("scope", &self.scope)
            .field("auth_key", &"<redacted>")
            .field("materialize", &self.materialize)
            .finish_non_exhaustive()
    }
}
