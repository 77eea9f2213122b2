use gateway_capability::find_descriptor_source;

use crate::error::{DispatchError, Result};
use crate::hook::DispatchHook;
use crate::request::Request;
use crate::service::Service;

/// Rejects requests dispatched to an administratively disabled service.
///
/// At the service stage the hook probes the resolved backend for a
/// capability descriptor. A disabled descriptor fails the request with
/// `ServiceUnavailable`; a missing accessor or missing descriptor is a
/// degrade-safe path that logs a warning and lets the request through,
/// since many backends simply do not expose the capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceEnablementHook;

impl ServiceEnablementHook {
    pub fn new() -> Self {
        Self
    }
}

impl DispatchHook for ServiceEnablementHook {
    fn service_dispatched(&self, _request: &Request, service: Service) -> Result<Service> {
        let Some(source) = find_descriptor_source(service.backend()) else {
            let id = service.id();
            tracing::warn!(
                "capability descriptor unavailable for service {id}; enablement not verified"
            );
            return Ok(service);
        };

        match source.service_descriptor() {
            Ok(Some(descriptor)) => {
                if descriptor.is_enabled() {
                    Ok(service)
                } else {
                    Err(DispatchError::ServiceUnavailable {
                        name: descriptor.name().to_string(),
                    })
                }
            }
            Ok(None) => {
                let id = service.id();
                tracing::warn!("service {id} declares the capability but returned no descriptor");
                Ok(service)
            }
            Err(cause) => Err(DispatchError::wrap(cause)),
        }
    }
}
