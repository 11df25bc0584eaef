//! Repository identifier validation and newtype.
//!
//! Provides a [`Repository`] value object for the `owner/repo` pair used
//! throughout the GitHub API. Immutable once created.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A validated GitHub repository identifier.
///
/// Both segments follow GitHub's naming rules: ASCII alphanumerics plus
/// `.`, `_`, and `-` in the middle, alphanumeric first and last character.
///
/// # Examples
///
/// ```
/// use hublink_github::Repository;
///
/// let repo: Repository = "rust-lang/rust".parse().unwrap();
/// assert_eq!(repo.owner(), "rust-lang");
/// assert_eq!(repo.name(), "rust");
/// assert_eq!(repo.to_string(), "rust-lang/rust");
///
/// assert!("no-slash".parse::<Repository>().is_err());
/// assert!("-bad/repo".parse::<Repository>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository {
    owner: String,
    name: String,
}

impl Repository {
    /// Create a repository from already-split segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRepository`] if either segment violates
    /// GitHub's naming rules.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let owner = owner.into();
        let name = name.into();

        let input = || format!("{owner}/{name}");
        validate_segment(&owner, "owner").map_err(|reason| Error::InvalidRepository {
            input: input(),
            reason,
        })?;
        validate_segment(&name, "repository name").map_err(|reason| Error::InvalidRepository {
            input: input(),
            reason,
        })?;

        Ok(Self { owner, name })
    }

    /// Parse an `owner/repo` string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRepository`] if the slash is missing, a
    /// second slash is present, or either segment is invalid.
    pub fn parse(input: &str) -> Result<Self> {
        let Some((owner, name)) = input.split_once('/') else {
            return Err(Error::InvalidRepository {
                input: input.to_string(),
                reason: "expected owner/repo format".to_string(),
            });
        };

        if name.contains('/') {
            return Err(Error::InvalidRepository {
                input: input.to_string(),
                reason: "repository name cannot contain '/'".to_string(),
            });
        }

        Self::new(owner, name)
    }

    /// The repository owner (user or organization).
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for Repository {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Repository {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Repository {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Validate one segment (owner or repository name) against GitHub's rules.
/// Returns the violated rule as the error.
fn validate_segment(value: &str, label: &str) -> std::result::Result<(), String> {
    if value.is_empty() {
        return Err(format!("{label} cannot be empty"));
    }

    if value.starts_with('-') || value.ends_with('-') {
        return Err(format!("{label} cannot start or end with a hyphen"));
    }

    if value.starts_with('.') || value.ends_with('.') {
        return Err(format!("{label} cannot start or end with a period"));
    }

    if let Some(c) = value
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '.' | '_' | '-'))
    {
        return Err(format!("{label} contains invalid character '{c}'"));
    }

    // The hyphen and period rules above leave only underscores to reject at
    // the edges.
    if value.starts_with('_') || value.ends_with('_') {
        return Err(format!(
            "{label} must start and end with an alphanumeric character"
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_repositories() {
        assert!(Repository::parse("rust-lang/rust").is_ok());
        assert!(Repository::parse("conduit-ui/hublink").is_ok());
        assert!(Repository::parse("torvalds/linux").is_ok());

        // Dots and underscores in the middle
        assert!(Repository::parse("dot.files/my_repo").is_ok());
        assert!(Repository::parse("user/repo.name-with_all.of-them").is_ok());

        // Single-character segments
        assert!(Repository::parse("a/b").is_ok());
        assert!(Repository::parse("0/1").is_ok());
    }

    #[test]
    fn test_missing_slash() {
        let err = Repository::parse("no-slash").unwrap_err();
        assert!(matches!(err, Error::InvalidRepository { .. }));
    }

    #[test]
    fn test_second_slash_rejected() {
        let err = Repository::parse("owner/name/extra").unwrap_err();
        assert!(matches!(err, Error::InvalidRepository { .. }));
    }

    #[test]
    fn test_empty_segments() {
        assert!(Repository::parse("/repo").is_err());
        assert!(Repository::parse("owner/").is_err());
        assert!(Repository::parse("/").is_err());
    }

    #[test]
    fn test_hyphen_placement() {
        assert!(Repository::parse("-owner/repo").is_err());
        assert!(Repository::parse("owner-/repo").is_err());
        assert!(Repository::parse("owner/-repo").is_err());
        assert!(Repository::parse("owner/repo-").is_err());
    }

    #[test]
    fn test_period_placement() {
        assert!(Repository::parse(".owner/repo").is_err());
        assert!(Repository::parse("owner/repo.").is_err());
    }

    #[test]
    fn test_underscore_placement() {
        assert!(Repository::parse("_owner/repo").is_err());
        assert!(Repository::parse("owner/repo_").is_err());
        assert!(Repository::parse("own_er/re_po").is_ok());
    }

    #[test]
    fn test_invalid_characters() {
        for bad in ["own er/repo", "owner/re~po", "owner/rep*o", "Łódź/repo"] {
            let err = Repository::parse(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidRepository { .. }), "input: {bad}");
        }
    }

    #[test]
    fn test_error_carries_input_and_reason() {
        let err = Repository::parse("-bad/repo").unwrap_err();
        let Error::InvalidRepository { input, reason } = err else {
            panic!("wrong variant");
        };
        assert_eq!(input, "-bad/repo");
        assert!(reason.contains("hyphen"));
    }

    #[test]
    fn test_accessors_and_display() {
        let repo = Repository::new("rust-lang", "cargo").unwrap();
        assert_eq!(repo.owner(), "rust-lang");
        assert_eq!(repo.name(), "cargo");
        assert_eq!(format!("{repo}"), "rust-lang/cargo");
    }

    #[test]
    fn test_equality() {
        let a = Repository::parse("owner/repo").unwrap();
        let b = Repository::new("owner", "repo").unwrap();
        let c = Repository::parse("owner/other").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serialize_deserialize() {
        let repo = Repository::parse("rust-lang/rust").unwrap();

        let json = serde_json::to_string(&repo).unwrap();
        assert_eq!(json, "\"rust-lang/rust\"");

        let parsed: Repository = serde_json::from_str("\"owner/repo\"").unwrap();
        assert_eq!(parsed.owner(), "owner");

        // Deserialization re-validates
        let result: std::result::Result<Repository, _> = serde_json::from_str("\"not-a-repo\"");
        assert!(result.is_err());
    }
}
