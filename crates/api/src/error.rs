//! Process-level error types.
//!
//! Request handling has no error path of its own; these cover the server
//! lifecycle only.

use thiserror::Error;

/// Errors that stop the server process.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_display() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:80".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to bind 0.0.0.0:80: denied");
    }

    #[test]
    fn test_serve_error_source() {
        let err = ServerError::Serve(std::io::Error::other("boom"));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "server error: boom");
    }
}
