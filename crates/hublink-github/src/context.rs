//! Ambient repository context.
//!
//! Holds a per-thread "current repository" so call sites can omit the
//! owner/repo pair once it has been established. The holder is
//! thread-local with explicit set/clear and no cross-thread visibility,
//! rather than a process-wide mutable singleton.
//!
//! # Examples
//!
//! ```
//! use hublink_github::{Repository, context};
//!
//! context::set_current("rust-lang/rust".parse().unwrap());
//! assert_eq!(context::owner().unwrap(), "rust-lang");
//! assert_eq!(context::repo_name().unwrap(), "rust");
//!
//! context::clear_current();
//! assert!(context::current().is_none());
//! ```

use std::cell::RefCell;

use crate::error::{Error, Result};
use crate::repo::Repository;

thread_local! {
    static CURRENT_REPO: RefCell<Option<Repository>> = const { RefCell::new(None) };
}

/// Set the current repository context for this thread.
pub fn set_current(repo: Repository) {
    CURRENT_REPO.with(|current| *current.borrow_mut() = Some(repo));
}

/// The current repository context, or `None` if not set.
///
/// Use this to check whether a context exists without failing.
#[must_use]
pub fn current() -> Option<Repository> {
    CURRENT_REPO.with(|current| current.borrow().clone())
}

/// The current repository context.
///
/// # Errors
///
/// Returns [`Error::NoRepoContext`] if no context is set on this thread.
pub fn require_current() -> Result<Repository> {
    current().ok_or(Error::NoRepoContext)
}

/// The owner segment of the current context.
///
/// # Errors
///
/// Returns [`Error::NoRepoContext`] if no context is set on this thread.
pub fn owner() -> Result<String> {
    Ok(require_current()?.owner().to_string())
}

/// The name segment of the current context.
///
/// # Errors
///
/// Returns [`Error::NoRepoContext`] if no context is set on this thread.
pub fn repo_name() -> Result<String> {
    Ok(require_current()?.name().to_string())
}

/// Clear the current repository context for this thread.
///
/// Afterwards [`current`] returns `None` and [`require_current`] fails.
pub fn clear_current() {
    CURRENT_REPO.with(|current| *current.borrow_mut() = None);
}
