use std::fmt;
use std::sync::Arc;

use gateway_capability::ServiceBackend;
use serde::{Deserialize, Serialize};

/// A registered service handler resolved for one request.
///
/// The backend is an arbitrary implementation object whose concrete shape
/// is unknown to the pipeline; cloning shares it.
#[derive(Clone)]
pub struct Service {
    id: String,
    backend: Arc<dyn ServiceBackend>,
}

impl Service {
    pub fn new(id: &str, backend: Arc<dyn ServiceBackend>) -> Self {
        Self {
            id: id.into(),
            backend,
        }
    }

    /// Stable identifier of the registered handler.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The opaque underlying implementation object.
    pub fn backend(&self) -> &dyn ServiceBackend {
        self.backend.as_ref()
    }
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service").field("id", &self.id).finish()
    }
}

/// The specific action within a service selected for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    id: String,
    service_id: String,
}

impl Operation {
    pub fn new(id: &str, service_id: &str) -> Self {
        Self {
            id: id.into(),
            service_id: service_id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }
}

/// Opaque payload produced by executing an operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionResult {
    payload: serde_json::Value,
}

impl ExecutionResult {
    pub fn new(payload: serde_json::Value) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}

/// Wire-level result envelope, opaque to this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}
