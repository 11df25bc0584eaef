//! GitHub API types.

use serde::Deserialize;

/// Repository metadata returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    /// Full `owner/name` identifier.
    pub full_name: String,

    /// Default branch name.
    pub default_branch: String,

    /// Whether the repository is private.
    pub private: bool,

    /// Repository description.
    pub description: Option<String>,
}
