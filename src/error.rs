// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client errors.
//!
//! Every error is terminal for the call that produced it. Nothing is
//! retried; callers decide whether to try again.

/// Errors returned by [`EnvyClient`](crate::client::EnvyClient) and
/// [`ClientConfig`](crate::config::ClientConfig).
#[derive(Debug, thiserror::Error)]
pub enum EnvyError {
    /// The endpoint URL built from the base URL could not be parsed.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Connection, timeout or other transport failure, as reported by reqwest.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// `setvar` answered with something other than 200.
    #[error("expected status code to be 200, got {0}")]
    UnexpectedStatus(u16),

    /// The HTTP transport could not be built.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("envy configuration missing: {0}")]
    MissingConfig(String),

    #[error("envy configuration invalid: {0}")]
    InvalidConfig(String),
}

impl EnvyError {
    /// Status code carried by [`EnvyError::UnexpectedStatus`], if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            EnvyError::UnexpectedStatus(code) => Some(*code),
            EnvyError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for connection and timeout failures.
    ///
    /// A request reqwest refused to build (e.g. a header value containing a
    /// newline) never reached the network and is not counted.
    pub fn is_transport(&self) -> bool {
        matches!(self, EnvyError::Request(e) if !e.is_builder())
    }

    /// True when the request could not be built from the given inputs.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, EnvyError::Request(e) if e.is_builder())
    }

    /// True when the body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, EnvyError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_message_includes_code() {
        let err = EnvyError::UnexpectedStatus(404);
        assert_eq!(err.to_string(), "expected status code to be 200, got 404");
        assert_eq!(err.status_code(), Some(404));
        assert!(!err.is_transport());
    }

    #[test]
    fn decode_errors_convert_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = EnvyError::from(serde_err);
        assert!(err.is_decode());
        assert!(err.to_string().starts_with("response could not be decoded"));
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn config_errors_name_the_variable() {
        let err = EnvyError::MissingConfig("ENVY_SCOPE".to_string());
        assert!(err.to_string().contains("ENVY_SCOPE"));
    }
}
