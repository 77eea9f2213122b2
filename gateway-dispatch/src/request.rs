use std::collections::HashMap;

/// Per-dispatch context threaded through every hook stage.
///
/// Multi-protocol gateways route on query-style parameters, so the context
/// is an id plus a string key/value map. Hooks receive it for the duration
/// of one dispatch and must not retain it.
#[derive(Debug, Clone, Default)]
pub struct Request {
    id: String,
    params: HashMap<String, String>,
}

impl Request {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.into(),
            params: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn set_param(&mut self, key: &str, value: &str) {
        self.params.insert(key.into(), value.into());
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.set_param(key, value);
        self
    }
}
