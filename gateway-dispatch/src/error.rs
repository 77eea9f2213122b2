pub use gateway_capability::BoxError;

/// Protocol-agnostic status classification for a dispatch failure.
///
/// The enclosing transport maps this to a wire-level code (HTTP status,
/// protocol exception code, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStatus {
    ServiceUnavailable,
    NotFound,
    InternalError,
}

/// Errors produced while dispatching a request through the hook chain.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The resolved service is administratively disabled.
    #[error("Service {name} is disabled")]
    ServiceUnavailable { name: String },

    /// No registered service or operation matched the request.
    #[error("no route for request: {0}")]
    NoRoute(String),

    /// A hook or backend failed in a way that is not a deliberate rejection.
    #[error("dispatch failed")]
    Internal(#[source] BoxError),
}

impl DispatchError {
    pub fn status(&self) -> DispatchStatus {
        match self {
            Self::ServiceUnavailable { .. } => DispatchStatus::ServiceUnavailable,
            Self::NoRoute(_) => DispatchStatus::NotFound,
            Self::Internal(_) => DispatchStatus::InternalError,
        }
    }

    /// Wrap an opaque backend failure, re-raising an inner `DispatchError`
    /// unchanged so a deliberate rejection is never double-wrapped.
    pub fn wrap(err: BoxError) -> Self {
        match err.downcast::<DispatchError>() {
            Ok(own) => *own,
            Err(other) => Self::Internal(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;
