//! Root greeting endpoint.

use axum::Json;
use serde::Serialize;

/// Payload returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

impl Greeting {
    pub const MESSAGE: &'static str = "Hello CI/CD World!";

    pub fn new() -> Self {
        Self {
            message: Self::MESSAGE,
        }
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new()
    }
}

/// GET / — returns the static greeting.
pub async fn get() -> Json<Greeting> {
    tracing::debug!("serving greeting");
    Json(Greeting::new())
}
