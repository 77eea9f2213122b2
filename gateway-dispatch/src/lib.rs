pub mod enablement;
pub mod error;
pub mod hook;
pub mod pipeline;
pub mod request;
pub mod service;

// Re-export key types for convenience.
pub use enablement::ServiceEnablementHook;
pub use error::{BoxError, DispatchError, DispatchStatus, Result};
pub use hook::{DispatchHook, HookChain};
pub use pipeline::{Pipeline, Router};
pub use request::Request;
pub use service::{ExecutionResult, Operation, Response, Service};
