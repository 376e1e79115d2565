//! Per-namespace presenter table.

use crate::hierarchy::TypeHierarchy;
use apiscope_api::{ApiError, ApiResult, PresenterHandle};
use indexmap::IndexMap;
use std::sync::{PoisonError, RwLock};

/// Ordered `resource type -> presenter` mapping for one namespace.
///
/// At most one presenter per exact type; registering again replaces it.
pub struct PresenterRegistry {
    namespace: String,
    presenters: RwLock<IndexMap<String, PresenterHandle>>,
}

impl PresenterRegistry {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            presenters: RwLock::new(IndexMap::new()),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Insert or replace. Returns the presenter previously bound to `ty`.
    pub fn register(
        &self,
        ty: impl Into<String>,
        presenter: PresenterHandle,
    ) -> Option<PresenterHandle> {
        let ty = ty.into();
        let mut presenters = self.presenters.write().unwrap_or_else(PoisonError::into_inner);
        let previous = presenters.insert(ty.clone(), presenter);
        if previous.is_some() {
            tracing::debug!("Replaced presenter for {} in namespace {}", ty, self.namespace);
        }
        previous
    }

    /// Exact lookup, no ancestry walk.
    pub fn get(&self, ty: &str) -> Option<PresenterHandle> {
        let presenters = self.presenters.read().unwrap_or_else(PoisonError::into_inner);
        presenters.get(ty).cloned()
    }

    /// Resolve `ty` by testing it and then each ancestor in order.
    pub fn resolve(&self, ty: &str, hierarchy: &TypeHierarchy) -> ApiResult<PresenterHandle> {
        let presenters = self.presenters.read().unwrap_or_else(PoisonError::into_inner);
        for candidate in hierarchy.ancestry(ty) {
            if let Some(presenter) = presenters.get(candidate) {
                if candidate != ty {
                    tracing::trace!("Resolved {} via ancestor {}", ty, candidate);
                }
                return Ok(presenter.clone());
            }
        }
        Err(ApiError::not_found(self.namespace.clone(), ty))
    }

    /// Snapshot of the registrations in insertion order.
    pub fn entries(&self) -> Vec<(String, PresenterHandle)> {
        let presenters = self.presenters.read().unwrap_or_else(PoisonError::into_inner);
        presenters
            .iter()
            .map(|(ty, p)| (ty.clone(), p.clone()))
            .collect()
    }

    /// Detached copy holding the current registrations. Later changes to
    /// either registry do not show up in the other.
    pub fn snapshot(&self) -> PresenterRegistry {
        Self {
            namespace: self.namespace.clone(),
            presenters: RwLock::new(self.entries().into_iter().collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.presenters.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut presenters = self.presenters.write().unwrap_or_else(PoisonError::into_inner);
        presenters.clear();
    }
}

impl std::fmt::Debug for PresenterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresenterRegistry")
            .field("namespace", &self.namespace)
            .field("presenters", &self.entries())
            .finish()
    }
}
