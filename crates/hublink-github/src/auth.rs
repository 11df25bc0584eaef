//! Authentication strategies for the GitHub API.

use hublink_oauth::Credential;
use secrecy::SecretString;

/// Authentication strategy for the GitHub API.
///
/// Each variant is a thin adapter from a token you already hold to the
/// [`Credential`] applied to requests. For device flow, run
/// [`hublink_oauth::DeviceFlow`] to completion and wrap its credential with
/// [`Auth::from`].
///
/// # Examples
///
/// ```
/// use hublink_github::{Auth, SecretString};
///
/// let auth = Auth::Token(SecretString::from("ghp_xxxxxxxxxxxx"));
/// let header = auth.credential().header_value();
/// assert!(header.starts_with("Bearer "));
/// ```
#[derive(Clone)]
pub enum Auth {
    /// Personal access token (classic or fine-grained).
    Token(SecretString),

    /// OAuth access token from the web or device flow.
    OAuth(SecretString),

    /// Pre-generated GitHub App JWT. Signing the JWT from the App's private
    /// key is left to the caller.
    App(SecretString),
}

impl Auth {
    /// Resolve this strategy to the credential applied to requests.
    #[must_use]
    pub fn credential(&self) -> Credential {
        match self {
            Self::Token(token) | Self::OAuth(token) | Self::App(token) => {
                Credential::bearer(token.clone())
            }
        }
    }
}

/// Adapt a credential minted by a completed device flow.
impl From<Credential> for Auth {
    fn from(credential: Credential) -> Self {
        Self::OAuth(credential.token().clone())
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variant = match self {
            Self::Token(_) => "Token",
            Self::OAuth(_) => "OAuth",
            Self::App(_) => "App",
        };
        write!(f, "Auth::{variant}([redacted])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_variant_yields_bearer_credential() {
        for auth in [
            Auth::Token(SecretString::from("ghp_pat")),
            Auth::OAuth(SecretString::from("gho_oauth")),
            Auth::App(SecretString::from("eyJ.jwt.sig")),
        ] {
            assert!(auth.credential().header_value().starts_with("Bearer "));
        }
    }

    #[test]
    fn test_from_device_flow_credential() {
        let credential = Credential::bearer(SecretString::from("gho_device"));
        let auth = Auth::from(credential);

        assert!(matches!(auth, Auth::OAuth(_)));
        assert_eq!(auth.credential().header_value(), "Bearer gho_device");
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let auth = Auth::Token(SecretString::from("ghp_supersecret"));
        let debug = format!("{auth:?}");

        assert!(debug.contains("[redacted]"));
        assert!(!debug.contains("ghp_supersecret"));
    }
}
