use crate::backend::{DescriptorSource, ServiceBackend, ServiceContract};

/// Locate the descriptor accessor on an arbitrary service backend.
///
/// A forwarding backend exposes only its declared contracts, so each one is
/// probed in declaration order and the first accessor wins. A plain backend
/// is probed directly. Absence is `None`, never an error.
pub fn find_descriptor_source(backend: &dyn ServiceBackend) -> Option<&dyn DescriptorSource> {
    if let Some(forwarding) = backend.as_forwarding() {
        forwarding
            .declared_contracts()
            .into_iter()
            .find_map(ServiceContract::descriptor_source)
    } else {
        backend.descriptor_source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BoxError, ForwardingBackend};
    use crate::descriptor::ServiceDescriptor;

    struct Plain {
        descriptor: Option<ServiceDescriptor>,
    }

    impl DescriptorSource for Plain {
        fn service_descriptor(&self) -> Result<Option<ServiceDescriptor>, BoxError> {
            Ok(self.descriptor.clone())
        }
    }

    impl ServiceContract for Plain {
        fn descriptor_source(&self) -> Option<&dyn DescriptorSource> {
            Some(self)
        }
    }

    impl ServiceBackend for Plain {}

    struct Opaque;

    impl ServiceContract for Opaque {}
    impl ServiceBackend for Opaque {}

    /// Contract facet with no descriptor capability.
    struct RoutingContract;

    impl ServiceContract for RoutingContract {}

    /// Contract facet carrying the descriptor capability.
    struct DescribedContract {
        descriptor: ServiceDescriptor,
    }

    impl DescriptorSource for DescribedContract {
        fn service_descriptor(&self) -> Result<Option<ServiceDescriptor>, BoxError> {
            Ok(Some(self.descriptor.clone()))
        }
    }

    impl ServiceContract for DescribedContract {
        fn descriptor_source(&self) -> Option<&dyn DescriptorSource> {
            Some(self)
        }
    }

    struct Forwarder {
        contracts: Vec<Box<dyn ServiceContract>>,
    }

    impl ServiceContract for Forwarder {}

    impl ServiceBackend for Forwarder {
        fn as_forwarding(&self) -> Option<&dyn ForwardingBackend> {
            Some(self)
        }
    }

    impl ForwardingBackend for Forwarder {
        fn declared_contracts(&self) -> Vec<&dyn ServiceContract> {
            self.contracts.iter().map(AsRef::as_ref).collect()
        }
    }

    #[test]
    fn test_plain_backend_found() {
        let backend = Plain {
            descriptor: Some(ServiceDescriptor::new("WMS", true)),
        };
        let source = find_descriptor_source(&backend).unwrap();
        let descriptor = source.service_descriptor().unwrap().unwrap();
        assert_eq!(descriptor.name(), "WMS");
    }

    #[test]
    fn test_plain_backend_without_accessor() {
        let backend = Opaque;
        assert!(find_descriptor_source(&backend).is_none());
    }

    #[test]
    fn test_forwarding_second_contract_declares_accessor() {
        let backend = Forwarder {
            contracts: vec![
                Box::new(RoutingContract),
                Box::new(DescribedContract {
                    descriptor: ServiceDescriptor::new("WFS", true),
                }),
            ],
        };
        let source = find_descriptor_source(&backend).unwrap();
        let descriptor = source.service_descriptor().unwrap().unwrap();
        assert_eq!(descriptor.name(), "WFS");
    }

    #[test]
    fn test_forwarding_first_match_wins() {
        let backend = Forwarder {
            contracts: vec![
                Box::new(DescribedContract {
                    descriptor: ServiceDescriptor::new("first", true),
                }),
                Box::new(DescribedContract {
                    descriptor: ServiceDescriptor::new("second", false),
                }),
            ],
        };
        let source = find_descriptor_source(&backend).unwrap();
        let descriptor = source.service_descriptor().unwrap().unwrap();
        assert_eq!(descriptor.name(), "first");
    }

    #[test]
    fn test_forwarding_without_any_accessor() {
        let backend = Forwarder {
            contracts: vec![Box::new(RoutingContract), Box::new(RoutingContract)],
        };
        assert!(find_descriptor_source(&backend).is_none());
    }

    #[test]
    fn test_forwarding_with_no_contracts() {
        let backend = Forwarder { contracts: vec![] };
        assert!(find_descriptor_source(&backend).is_none());
    }
}
