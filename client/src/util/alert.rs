//! Blocking `window.alert` and console warnings.
//!
//! The planner page reports a failed pre-submit check with a modal alert so
//! the user cannot miss it. Requires a browser environment; on the server
//! both functions do nothing.

/// Show `message` in a blocking browser alert.
pub fn blocking_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::info!("planner: submission blocked: {message}");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Log an input the form model refused.
pub fn warn_rejected(error: &impl std::fmt::Display) {
    #[cfg(feature = "hydrate")]
    {
        log::warn!("planner: input rejected: {error}");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = error;
    }
}
