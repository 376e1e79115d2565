use crate::presenter::PresenterRegistry;
use apiscope_api::Endpoint;
use std::sync::Arc;

/// Immutable snapshot of every discoverable endpoint for one generation run.
#[derive(Debug, Clone)]
pub struct Atlas {
    namespace: String,
    endpoints: Vec<Endpoint>,
    registry: Option<Arc<PresenterRegistry>>,
}

impl Atlas {
    pub fn new(namespace: impl Into<String>, endpoints: Vec<Endpoint>) -> Self {
        Self {
            namespace: namespace.into(),
            endpoints,
            registry: None,
        }
    }

    /// Attach the frozen copy of the registry consulted while building.
    pub fn with_registry(mut self, registry: Arc<PresenterRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn registry(&self) -> Option<&Arc<PresenterRegistry>> {
        self.registry.as_ref()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Endpoint> {
        self.endpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl<'a> IntoIterator for &'a Atlas {
    type Item = &'a Endpoint;
    type IntoIter = std::slice::Iter<'a, Endpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Endpoint> for Atlas {
    fn from_iter<T: IntoIterator<Item = Endpoint>>(iter: T) -> Self {
        Atlas::new(apiscope_api::NONE_NAMESPACE, iter.into_iter().collect())
    }
}
