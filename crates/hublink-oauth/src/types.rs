//! Wire types for the device authorization endpoints.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// A device authorization grant issued by the device-code endpoint.
///
/// `device_code` is sent on every poll request and never shown to the user;
/// `user_code` is the short code the user enters at `verification_uri`.
/// Both are immutable once issued. The grant's `interval` is only a starting
/// value: the engine keeps its own working copy, which only ever grows.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceCodeGrant {
    /// Opaque identifier tying polls to this authorization attempt.
    pub device_code: String,

    /// Short human-readable code to display once (e.g. `ABCD-1234`).
    pub user_code: String,

    /// URL the user visits to enter the code.
    pub verification_uri: String,

    /// Seconds from issuance until the grant expires.
    pub expires_in: u64,

    /// Minimum seconds to wait between polls.
    pub interval: u64,
}

/// One response from the access-token endpoint.
///
/// Every field is optional: the engine decides what a poll meant from which
/// fields are present. Never persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PollResponse {
    /// The access token, when authorization succeeded.
    pub access_token: Option<String>,

    /// Token type, usually `bearer`.
    pub token_type: Option<String>,

    /// Granted scopes, if any.
    pub scope: Option<String>,

    /// RFC 8628 error code (`authorization_pending`, `slow_down`, ...).
    pub error: Option<String>,

    /// Human-readable error description.
    pub error_description: Option<String>,
}

/// A bearer credential for the `Authorization` header.
///
/// The token is stored as [`SecretString`] so it is zeroized on drop and
/// never leaks through `Debug` output.
#[derive(Clone)]
pub struct Credential {
    token: SecretString,
}

impl Credential {
    /// Wrap an access token as a bearer credential.
    #[must_use]
    pub const fn bearer(token: SecretString) -> Self {
        Self { token }
    }

    /// The wrapped token.
    #[must_use]
    pub const fn token(&self) -> &SecretString {
        &self.token
    }

    /// Render the `Authorization` header value.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.token.expose_secret())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value() {
        let credential = Credential::bearer(SecretString::from("gho_abc123"));
        assert_eq!(credential.header_value(), "Bearer gho_abc123");
    }

    #[test]
    fn test_debug_redacts_token() {
        let credential = Credential::bearer(SecretString::from("gho_abc123"));
        let debug = format!("{credential:?}");
        assert!(debug.contains("[redacted]"));
        assert!(!debug.contains("gho_abc123"));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_grant_deserializes_from_github_response() {
        let grant: DeviceCodeGrant = serde_json::from_value(serde_json::json!({
            "device_code": "3584d83530557fdd1f46af8289938c8ef79f9dc5",
            "user_code": "WDJB-MJHT",
            "verification_uri": "https://github.com/login/device",
            "expires_in": 900,
            "interval": 5
        }))
        .unwrap();

        assert_eq!(grant.user_code, "WDJB-MJHT");
        assert_eq!(grant.expires_in, 900);
        assert_eq!(grant.interval, 5);
    }

    #[test]
    fn test_grant_requires_all_fields() {
        let result: Result<DeviceCodeGrant, _> = serde_json::from_value(serde_json::json!({
            "device_code": "abc",
            "user_code": "WDJB-MJHT"
        }));
        assert!(result.is_err());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_poll_response_all_fields_optional() {
        let poll: PollResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(poll.access_token.is_none());
        assert!(poll.error.is_none());
    }
}
