//! Order notification transport contract

use std::future::Future;
use thiserror::Error;
use crate::domain::OrderNotification;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Failed to write order notification: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode order notification: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Delivers a submitted order somewhere a person will act on it.
///
/// Dispatch may block on I/O and has no timeout of its own; callers that need
/// one wrap the returned future.
pub trait Notifier: Send + Sync {
    fn dispatch(&self, order: &OrderNotification) -> impl Future<Output = Result<(), NotifyError>> + Send;
}
