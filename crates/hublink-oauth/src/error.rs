//! Error type for the device authorization flow.

/// Result type alias using [`DeviceFlowError`].
pub type Result<T> = std::result::Result<T, DeviceFlowError>;

const EXPIRED_DESCRIPTION: &str =
    "The device code has expired. Please restart the authentication flow.";

const NOT_AUTHORIZED_DESCRIPTION: &str = "Device flow not completed. Call authorize() first.";

/// Errors that can terminate the device authorization flow.
///
/// Every variant carries exactly two pieces of information: a short
/// machine-readable code ([`code`](Self::code)) and a human-readable
/// description ([`description`](Self::description)). Codes coming from
/// GitHub are passed through verbatim; the engine's own synthetic codes are
/// `network_error`, `expired_token`, `not_authorized`, and
/// `invalid_response`. Callers can branch on the code without matching
/// description strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceFlowError {
    /// Network-level failure during either HTTP call.
    #[error("{description}")]
    Network {
        /// What failed, including the underlying transport error.
        description: String,
    },

    /// The device code expired before the user authorized it.
    #[error("{}", EXPIRED_DESCRIPTION)]
    Expired,

    /// A credential was requested before the flow completed.
    #[error("{}", NOT_AUTHORIZED_DESCRIPTION)]
    NotAuthorized,

    /// A success response was missing required fields.
    #[error("{description}")]
    InvalidResponse {
        /// What was missing or malformed.
        description: String,
    },

    /// A terminal error reported by GitHub, passed through verbatim.
    #[error("{description}")]
    Provider {
        /// The `error` field of the response.
        code: String,
        /// The `error_description` field, or a fallback message.
        description: String,
    },
}

impl DeviceFlowError {
    pub(crate) fn network(description: impl Into<String>) -> Self {
        Self::Network {
            description: description.into(),
        }
    }

    pub(crate) fn invalid_response(description: impl Into<String>) -> Self {
        Self::InvalidResponse {
            description: description.into(),
        }
    }

    pub(crate) fn provider(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Provider {
            code: code.into(),
            description: description.into(),
        }
    }

    /// The machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Network { .. } => "network_error",
            Self::Expired => "expired_token",
            Self::NotAuthorized => "not_authorized",
            Self::InvalidResponse { .. } => "invalid_response",
            Self::Provider { code, .. } => code,
        }
    }

    /// The human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Network { description }
            | Self::InvalidResponse { description }
            | Self::Provider { description, .. } => description,
            Self::Expired => EXPIRED_DESCRIPTION,
            Self::NotAuthorized => NOT_AUTHORIZED_DESCRIPTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_codes() {
        assert_eq!(DeviceFlowError::network("boom").code(), "network_error");
        assert_eq!(DeviceFlowError::Expired.code(), "expired_token");
        assert_eq!(DeviceFlowError::NotAuthorized.code(), "not_authorized");
        assert_eq!(
            DeviceFlowError::invalid_response("missing field").code(),
            "invalid_response"
        );
    }

    #[test]
    fn test_provider_code_passes_through_verbatim() {
        let err = DeviceFlowError::provider("access_denied", "The user denied the request.");
        assert_eq!(err.code(), "access_denied");
        assert_eq!(err.description(), "The user denied the request.");
    }

    #[test]
    fn test_display_matches_description() {
        let err = DeviceFlowError::Expired;
        assert_eq!(format!("{err}"), err.description());

        let err = DeviceFlowError::provider("slow_down", "Too fast");
        assert_eq!(format!("{err}"), "Too fast");
    }
}
