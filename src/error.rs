//! Error types for the CoinGecko client library.

use thiserror::Error;

/// The main error type for all CoinGecko client operations.
///
/// Every variant falls into one of three failure classes, see [`FailureKind`].
#[derive(Error, Debug)]
pub enum CoinGeckoError {
    /// No endpoint was selected before executing the request
    #[error("no endpoint selected, pick one from the endpoint catalog before executing")]
    MissingEndpoint,

    /// The API answered with a non-2xx status code
    #[error("{status} status for url: {url}")]
    HttpStatus {
        /// Raw HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// A custom header name or value could not be encoded
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Query parameters could not be encoded
    #[error("Invalid query parameters: {0}")]
    InvalidParams(String),

    /// Wrong number of path arguments for an endpoint template
    #[error("endpoint {template} expects {expected} path argument(s), got {got}")]
    PathArity {
        /// The endpoint template
        template: &'static str,
        /// Number of placeholders in the template
        expected: usize,
        /// Number of arguments supplied
        got: usize,
    },
}

/// Broad classification of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request could not be issued because the builder was incomplete.
    Precondition,
    /// A response arrived with a non-2xx status.
    HttpStatus(StatusClass),
    /// Connection, timeout, encoding or body parsing failure.
    Transport,
}

/// Status codes that get a dedicated user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 429
    RateLimited,
    /// 401
    Unauthorized,
    /// 404
    NotFound,
    /// 403
    Forbidden,
    /// Any other non-2xx status
    Other(u16),
}

impl StatusClass {
    /// Classify a raw status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            429 => Self::RateLimited,
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            403 => Self::Forbidden,
            other => Self::Other(other),
        }
    }
}

impl CoinGeckoError {
    /// Get the failure class of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MissingEndpoint | Self::PathArity { .. } => FailureKind::Precondition,
            Self::HttpStatus { status, .. } => {
                FailureKind::HttpStatus(StatusClass::from_status(*status))
            }
            _ => FailureKind::Transport,
        }
    }

    /// Get the HTTP status code, if the API returned one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a rate limit (429) error.
    pub fn is_rate_limit(&self) -> bool {
        self.kind() == FailureKind::HttpStatus(StatusClass::RateLimited)
    }

    /// Build the user-facing diagnostic message for this error.
    ///
    /// The verbose form carries the status code or the underlying error text,
    /// the terse form is a fixed sentence meant for end users.
    pub fn diagnostic(&self, verbose: bool) -> String {
        match (self.kind(), verbose) {
            (FailureKind::Precondition, true) => format!("An error occurred: {self}"),
            (FailureKind::Precondition, false) => {
                "Please ensure that endpoint, params, and headers are set before making a request."
                    .to_string()
            }
            (FailureKind::HttpStatus(class), true) => match class {
                StatusClass::RateLimited => {
                    "Error 429, Rate limit exceeded. Please try again later.".to_string()
                }
                StatusClass::Unauthorized => {
                    "Error 401, Unauthorized access. Please check your API key.".to_string()
                }
                StatusClass::NotFound => {
                    "Error 404, Endpoint not found. Please check the endpoint URL.".to_string()
                }
                StatusClass::Forbidden => "Error 403, Forbidden access. You do not have permission to access this resource.".to_string(),
                StatusClass::Other(_) => format!("HTTP error occurred: {self}"),
            },
            (FailureKind::HttpStatus(class), false) => {
                let message = match class {
                    StatusClass::RateLimited => "Rate limit exceeded. Please try again later.",
                    StatusClass::Unauthorized => {
                        "Unauthorized access. Please check if you have a valid API key."
                    }
                    StatusClass::NotFound => {
                        "Endpoint not found. Please enter a valid endpoint URL."
                    }
                    StatusClass::Forbidden => {
                        "Forbidden access. You are restricted from accessing this resource."
                    }
                    StatusClass::Other(_) => "An error occurred while processing your request.",
                };
                message.to_string()
            }
            (FailureKind::Transport, true) => {
                format!("An error occurred while making the request: {self}")
            }
            (FailureKind::Transport, false) => "An error occurred while making the request. Please check your network connection and try again.".to_string(),
        }
    }
}

/// Map a middleware send/read failure, pulling timeouts out into their own variant.
pub(crate) fn from_middleware(err: reqwest_middleware::Error) -> CoinGeckoError {
    match err {
        reqwest_middleware::Error::Reqwest(e) => from_reqwest(e),
        other => CoinGeckoError::HttpMiddleware(other),
    }
}

pub(crate) fn from_reqwest(err: reqwest::Error) -> CoinGeckoError {
    if err.is_timeout() {
        CoinGeckoError::Timeout
    } else {
        CoinGeckoError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16) -> CoinGeckoError {
        CoinGeckoError::HttpStatus {
            status,
            url: "https://api.coingecko.com/api/v3/ping".to_string(),
        }
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(StatusClass::from_status(429), StatusClass::RateLimited);
        assert_eq!(StatusClass::from_status(401), StatusClass::Unauthorized);
        assert_eq!(StatusClass::from_status(404), StatusClass::NotFound);
        assert_eq!(StatusClass::from_status(403), StatusClass::Forbidden);
        assert_eq!(StatusClass::from_status(500), StatusClass::Other(500));
    }

    #[test]
    fn test_kind() {
        assert_eq!(CoinGeckoError::MissingEndpoint.kind(), FailureKind::Precondition);
        assert_eq!(CoinGeckoError::Timeout.kind(), FailureKind::Transport);
        assert_eq!(
            status_error(404).kind(),
            FailureKind::HttpStatus(StatusClass::NotFound)
        );
        assert!(status_error(429).is_rate_limit());
        assert_eq!(status_error(503).status(), Some(503));
    }

    #[test]
    fn test_status_diagnostics() {
        assert_eq!(
            status_error(429).diagnostic(true),
            "Error 429, Rate limit exceeded. Please try again later."
        );
        assert_eq!(
            status_error(401).diagnostic(false),
            "Unauthorized access. Please check if you have a valid API key."
        );
        assert_eq!(
            status_error(403).diagnostic(false),
            "Forbidden access. You are restricted from accessing this resource."
        );
        let verbose = status_error(500).diagnostic(true);
        assert!(verbose.starts_with("HTTP error occurred: 500"));
        assert!(verbose.contains("/ping"));
        assert_eq!(
            status_error(500).diagnostic(false),
            "An error occurred while processing your request."
        );
    }

    #[test]
    fn test_precondition_and_transport_diagnostics() {
        let err = CoinGeckoError::MissingEndpoint;
        assert!(err.diagnostic(true).starts_with("An error occurred: no endpoint selected"));
        assert_eq!(
            err.diagnostic(false),
            "Please ensure that endpoint, params, and headers are set before making a request."
        );

        let err = CoinGeckoError::Timeout;
        assert_eq!(
            err.diagnostic(true),
            "An error occurred while making the request: Request timed out"
        );
        assert!(err.diagnostic(false).contains("check your network connection"));
    }
}
