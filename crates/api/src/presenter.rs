use crate::ApiResult;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Converts one resource instance into a structured field mapping.
///
/// The core never looks inside a presenter beyond this trait; it only stores,
/// resolves and names them.
pub trait Presenter: Send + Sync {
    /// Human-readable name, used when documenting endpoints.
    fn name(&self) -> &str;

    /// Fields this presenter emits, in output order. Empty when unknown.
    fn fields(&self) -> Vec<String> {
        Vec::new()
    }

    fn present(&self, resource: &Value) -> ApiResult<Map<String, Value>>;
}

/// Shared handle to a registered presenter.
#[derive(Clone)]
pub struct PresenterHandle(Arc<dyn Presenter>);

impl PresenterHandle {
    pub fn new(presenter: impl Presenter + 'static) -> Self {
        Self(Arc::new(presenter))
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn fields(&self) -> Vec<String> {
        self.0.fields()
    }

    pub fn present(&self, resource: &Value) -> ApiResult<Map<String, Value>> {
        self.0.present(resource)
    }

    /// Identity comparison: both handles point at the same registered instance.
    pub fn ptr_eq(&self, other: &PresenterHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for PresenterHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PresenterHandle").field(&self.name()).finish()
    }
}

impl Serialize for PresenterHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<P: Presenter + 'static> From<P> for PresenterHandle {
    fn from(presenter: P) -> Self {
        Self::new(presenter)
    }
}
