//! Confirmation and error message bodies.

use serde::Serialize;

/// Plain `{"message": ...}` body used for mutation confirmations and
/// not-found/server errors.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Message {
            message: message.into(),
        }
    }
}
