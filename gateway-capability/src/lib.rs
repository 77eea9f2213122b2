pub mod backend;
pub mod descriptor;
pub mod introspect;

// Re-export key types for convenience.
pub use backend::{BoxError, DescriptorSource, ForwardingBackend, ServiceBackend, ServiceContract};
pub use descriptor::ServiceDescriptor;
pub use introspect::find_descriptor_source;
