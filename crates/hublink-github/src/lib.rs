//! GitHub API connector built on [`hublink_oauth`].
//!
//! Provides validated repository identifiers, an ambient per-thread
//! repository context, authentication strategies, and a [`GitHubClient`]
//! that maps GitHub's error statuses onto a typed error taxonomy.
//!
//! # Examples
//!
//! ```no_run
//! use hublink_github::{Auth, GitHubClient, Repository, SecretString};
//!
//! # async fn run() -> hublink_github::Result<()> {
//! let auth = Auth::Token(SecretString::from("ghp_xxxxxxxxxxxx"));
//! let client = GitHubClient::new(&auth)?;
//!
//! let repo: Repository = "rust-lang/rust".parse()?;
//! let info = client.get_repo(&repo).await?;
//! println!("default branch: {}", info.default_branch);
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Tokens are held as [`SecretString`] and never appear in `Debug` output.

mod auth;
mod client;
pub mod context;
mod error;
mod repo;
mod types;

pub use auth::Auth;
pub use client::GitHubClient;
pub use error::{Error, Result};
pub use repo::Repository;
pub use types::Repo;

// Re-exported so downstream crates don't need a direct dependency for the
// common path.
pub use hublink_oauth::{Credential, DeviceFlow, DeviceFlowCallback};
pub use secrecy::SecretString;
