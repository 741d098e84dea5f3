// src/error.rs
// =============================================================================
// The one error the pipeline reports to the user.
//
// Whatever goes wrong while talking to GitHub (network down, 404 user,
// rate limited, garbage JSON, bad base64) the user sees the same message:
// "node access denied". The real cause is kept as the error source so it
// can still be logged at debug level.
//
// Everything below the pipeline boundary uses anyhow::Result, same as the
// rest of the app. Only fetch_node() converts into AccessDenied.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
#[error("node access denied")]
pub struct AccessDenied {
    #[source]
    cause: anyhow::Error,
}

impl AccessDenied {
    /// The underlying failure, for logs only
    pub fn cause(&self) -> &anyhow::Error {
        &self.cause
    }
}

impl From<anyhow::Error> for AccessDenied {
    fn from(cause: anyhow::Error) -> Self {
        Self { cause }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_message_hides_cause() {
        let err = AccessDenied::from(anyhow!("HTTP 404 for /users/ghost"));
        assert_eq!(err.to_string(), "node access denied");
        assert!(err.cause().to_string().contains("404"));
    }

    #[test]
    fn test_source_is_exposed() {
        use std::error::Error as _;

        let err = AccessDenied::from(anyhow!("connection refused"));
        let source = err.source().expect("source should be set");
        assert_eq!(source.to_string(), "connection refused");
    }
}
