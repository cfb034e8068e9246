use thiserror::Error;

/// Failures from the web API call or its response handling.
///
/// All of these are recovered by the handshake's retry loop; none escape
/// to the caller. The `HTTP error {status}` display form is the message
/// callers key on; a 429 flips the retry loop into rate-limit backoff.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebApiError {
    #[error("HTTP error {0}")]
    Http(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response")]
    MalformedResponse,
}

impl WebApiError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, WebApiError::Http(429))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_detection() {
        assert!(WebApiError::Http(429).is_rate_limited());
        assert_eq!(WebApiError::Http(429).to_string(), "HTTP error 429");
        assert!(!WebApiError::Http(503).is_rate_limited());
        assert!(!WebApiError::MalformedResponse.is_rate_limited());
    }
}
