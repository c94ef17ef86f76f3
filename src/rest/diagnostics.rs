//! Where failure messages from [`CoinGeckoClient::execute`] go.
//!
//! [`CoinGeckoClient::execute`]: crate::rest::CoinGeckoClient::execute

use crate::error::{CoinGeckoError, FailureKind};

/// Receives the user-facing message for every failed request.
///
/// Implement this to route messages somewhere other than `tracing`, for
/// example a UI status line or a test recorder.
pub trait DiagnosticSink: Send + Sync {
    /// Called once per failed execution with the error and its rendered message.
    fn emit(&self, error: &CoinGeckoError, message: &str);
}

/// Default sink, logs through `tracing`.
///
/// HTTP status failures are logged at `warn`, everything else at `error`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, error: &CoinGeckoError, message: &str) {
        match error.kind() {
            FailureKind::HttpStatus(_) => {
                tracing::warn!(status = ?error.status(), "{}", message)
            }
            FailureKind::Precondition | FailureKind::Transport => tracing::error!("{}", message),
        }
    }
}
