// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Wire Protocol
//!
//! All identifying information travels in request headers; no call sends a
//! body or query string.
//!
//! | Operation | Method | Path | Headers |
//! |-----------|--------|------|---------|
//! | get one var | `GET` | `/getvar` | `X-Scope`, `X-Var`, `Authorization` |
//! | get all vars | `GET` | `/getallvars` | `X-Scope`, `Authorization` |
//! | set a var | `POST` | `/setvar` | `X-Scope`, `X-Var`, `X-Var-Value`, `Authorization` |

use url::Url;

use crate::error::EnvyError;

/// Scope identifier header.
pub const SCOPE_HEADER: &str = "X-Scope";
/// Variable name header.
pub const VAR_HEADER: &str = "X-Var";
/// Variable value header (`setvar` only).
pub const VAR_VALUE_HEADER: &str = "X-Var-Value";
/// Bearer token header.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

pub const GET_VAR_PATH: &str = "/getvar";
pub const GET_ALL_VARS_PATH: &str = "/getallvars";
pub const SET_VAR_PATH: &str = "/setvar";

/// Build `{base_url}{path}`, parsing the result.
///
/// A trailing `/` on the base URL is dropped so `http://host/` and
/// `http://host` address the same endpoint.
pub fn endpoint_url(base_url: &str, path: &str) -> Result<Url, EnvyError> {
    let raw = format!("{}{}", base_url.trim_end_matches('/'), path);
    Url::parse(&raw).map_err(|e| EnvyError::InvalidUrl(format!("{raw}: {e}")))
}

/// `Authorization` header value. Sent even when the key is empty.
pub fn bearer(auth_key: &str) -> String {
    format!("Bearer {auth_key}")
}
