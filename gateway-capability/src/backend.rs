use crate::descriptor::ServiceDescriptor;

/// Opaque failure raised by a backend accessor.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The capability contract: a zero-argument accessor returning the current
/// descriptor of a service.
///
/// `Ok(None)` means the backend declares the capability but has no
/// descriptor configured. `Err` means the accessor itself failed.
pub trait DescriptorSource {
    fn service_descriptor(&self) -> Result<Option<ServiceDescriptor>, BoxError>;
}

/// One declared interface facet of a service backend.
///
/// A facet that carries the descriptor capability overrides
/// `descriptor_source`; everything else inherits the default.
pub trait ServiceContract: Send + Sync {
    fn descriptor_source(&self) -> Option<&dyn DescriptorSource> {
        None
    }
}

/// The underlying implementation object a routed `Service` wraps.
///
/// The gateway has no compile-time knowledge of the concrete type; the only
/// obligations are the probe methods, both optional.
pub trait ServiceBackend: ServiceContract {
    /// Present when this backend is a runtime forwarding implementation
    /// exposing only declared contracts.
    fn as_forwarding(&self) -> Option<&dyn ForwardingBackend> {
        None
    }
}

/// A forwarding implementation generated purely to intercept calls and
/// relay them to a real backend (transactional or security wrappers).
///
/// Its apparent type is not the real implementation type, so capability
/// probing must go through the contracts it declares.
pub trait ForwardingBackend: ServiceBackend {
    /// Declared contracts, in declaration order.
    fn declared_contracts(&self) -> Vec<&dyn ServiceContract>;
}
