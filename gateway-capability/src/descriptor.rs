use serde::{Deserialize, Serialize};

/// Operational state a service exposes to the gateway.
///
/// Owned by configuration storage; the gateway only reads it, and only for
/// the duration of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    name: String,
    title: Option<String>,
    enabled: bool,
}

impl ServiceDescriptor {
    pub fn new(name: &str, enabled: bool) -> Self {
        Self {
            name: name.into(),
            title: None,
            enabled,
        }
    }

    /// Shorthand for a descriptor of an administratively disabled service.
    pub fn disabled(name: &str) -> Self {
        Self::new(name, false)
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Display name of the service, used in rejection messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether the service accepts requests.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let d = ServiceDescriptor::new("WMS", true);
        assert_eq!(d.name(), "WMS");
        assert!(d.is_enabled());
        assert!(d.title().is_none());
    }

    #[test]
    fn test_disabled_shorthand() {
        let d = ServiceDescriptor::disabled("WFS");
        assert_eq!(d.name(), "WFS");
        assert!(!d.is_enabled());
    }

    #[test]
    fn test_with_title() {
        let d = ServiceDescriptor::new("WCS", true).with_title("Coverage Service");
        assert_eq!(d.title(), Some("Coverage Service"));
    }

    #[test]
    fn test_serde_round_trip() {
        let d = ServiceDescriptor::new("WMS", false).with_title("Map Service");
        let json = serde_json::to_string(&d).unwrap();
        let parsed: ServiceDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
    }
}
