//! Progress callback seam for the device flow.

/// Observer of device flow milestones.
///
/// The engine reports protocol progress through this trait so a caller
/// (CLI prompt, GUI, anything else) can render it without the flow
/// depending on any UI. Methods take `&self`; implementations that need to
/// record state should use interior mutability.
///
/// The error handler fires before [`authorize`](crate::DeviceFlow::authorize)
/// returns a provider-reported error or an expiration. Transport failures
/// surface only through the returned error.
pub trait DeviceFlowCallback: Send + Sync {
    /// The user code is ready: display `user_code` and `verification_uri`.
    ///
    /// This fires exactly once, before polling begins, and is the only
    /// opportunity to show instructions to the user. `expires_in` is the
    /// number of seconds until the code stops working.
    fn on_code_ready(&self, verification_uri: &str, user_code: &str, expires_in: u64);

    /// A poll attempt is starting. Fires once per attempt, including the
    /// first.
    fn on_polling(&self);

    /// Authorization succeeded. `token_type` defaults to `bearer` when the
    /// server omits it.
    fn on_success(&self, access_token: &str, token_type: &str, scope: Option<&str>);

    /// The flow terminated with an error. `error` is the machine-readable
    /// code, `error_description` the human-readable detail.
    fn on_error(&self, error: &str, error_description: &str);
}
