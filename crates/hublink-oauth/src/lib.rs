//! # hublink-oauth
//!
//! OAuth 2.0 Device Authorization Grant (RFC 8628) for GitHub: the flow
//! used by CLIs and other input-constrained environments, where the user
//! authorizes a short code in a browser while the device polls for the
//! access token.
//!
//! The engine is [`DeviceFlow`]. It reports progress through a
//! [`DeviceFlowCallback`] and talks HTTP through a [`DeviceFlowTransport`],
//! so both the UI and the network (including time) can be swapped out in
//! tests.
//!
//! # Security
//!
//! Access tokens are stored as `SecretString`, which zeroizes memory when
//! dropped and is redacted from all `Debug` output.

mod callback;
mod device_flow;
mod error;
mod transport;
mod types;

pub use callback::DeviceFlowCallback;
pub use device_flow::{ACCESS_TOKEN_URL, DEVICE_CODE_URL, DeviceFlow};
pub use error::{DeviceFlowError, Result};
// Re-export SecretString so callers can construct and consume credentials
pub use secrecy::SecretString;
pub use transport::{DeviceFlowTransport, HttpTransport};
pub use types::{Credential, DeviceCodeGrant, PollResponse};
