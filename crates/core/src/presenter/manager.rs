//! Namespace manager: owns one [`PresenterRegistry`] per namespace plus the
//! default namespace used by unqualified calls.

use super::registry::PresenterRegistry;
use crate::hierarchy::TypeHierarchy;
use apiscope_api::{ApiResult, NONE_NAMESPACE, PresenterHandle};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::sync::{Arc, PoisonError, RwLock};

static GLOBAL: Lazy<Presenters> = Lazy::new(Presenters::new);

pub struct Presenters {
    hierarchy: RwLock<Arc<TypeHierarchy>>,
    default_namespace: RwLock<Option<String>>,
    registries: RwLock<IndexMap<String, Arc<PresenterRegistry>>>,
}

impl Presenters {
    pub fn new() -> Self {
        Self::with_hierarchy(TypeHierarchy::new())
    }

    pub fn with_hierarchy(hierarchy: TypeHierarchy) -> Self {
        Self {
            hierarchy: RwLock::new(Arc::new(hierarchy)),
            default_namespace: RwLock::new(None),
            registries: RwLock::new(IndexMap::new()),
        }
    }

    /// Process-wide instance for hosts that want a single shared table.
    pub fn global() -> &'static Presenters {
        &GLOBAL
    }

    pub fn hierarchy(&self) -> Arc<TypeHierarchy> {
        self.hierarchy
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Add declarations to the current hierarchy.
    pub fn extend_hierarchy(&self, declarations: TypeHierarchy) {
        let mut guard = self.hierarchy.write().unwrap_or_else(PoisonError::into_inner);
        let mut merged = TypeHierarchy::clone(&guard);
        merged.extend(declarations);
        *guard = Arc::new(merged);
    }

    /// Configured default, or `"none"` when never set.
    pub fn default_namespace(&self) -> String {
        self.default_namespace
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_else(|| NONE_NAMESPACE.to_string())
    }

    pub fn set_default_namespace(&self, namespace: impl Into<String>) {
        let namespace = namespace.into();
        tracing::debug!("Default namespace set to {}", namespace);
        *self
            .default_namespace
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(namespace);
    }

    pub fn reset_default_namespace(&self) {
        *self
            .default_namespace
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Explicit namespace, falling back to the default.
    pub fn namespace_or_default(&self, namespace: Option<&str>) -> String {
        match namespace {
            Some(ns) => ns.to_string(),
            None => self.default_namespace(),
        }
    }

    /// Registry for `namespace`, created on first use.
    pub fn registry(&self, namespace: Option<&str>) -> Arc<PresenterRegistry> {
        let namespace = self.namespace_or_default(namespace);
        {
            let registries = self.registries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(registry) = registries.get(&namespace) {
                return registry.clone();
            }
        }

        let mut registries = self.registries.write().unwrap_or_else(PoisonError::into_inner);
        registries
            .entry(namespace.clone())
            .or_insert_with(|| {
                tracing::debug!("Created presenter registry for namespace {}", namespace);
                Arc::new(PresenterRegistry::new(namespace.clone()))
            })
            .clone()
    }

    /// Namespaces that have a registry, in creation order.
    pub fn namespaces(&self) -> Vec<String> {
        self.registries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    pub fn register(
        &self,
        namespace: Option<&str>,
        ty: impl Into<String>,
        presenter: impl Into<PresenterHandle>,
    ) -> Option<PresenterHandle> {
        self.registry(namespace).register(ty, presenter.into())
    }

    pub fn resolve(&self, namespace: Option<&str>, ty: &str) -> ApiResult<PresenterHandle> {
        let hierarchy = self.hierarchy();
        self.registry(namespace).resolve(ty, &hierarchy)
    }

    /// Resolve the presenter for `ty` and apply it to `resource`.
    pub fn present(
        &self,
        namespace: Option<&str>,
        ty: &str,
        resource: &Value,
    ) -> ApiResult<Map<String, Value>> {
        self.resolve(namespace, ty)?.present(resource)
    }

    /// Drop every registry and unset the default namespace.
    ///
    /// Registries handed out earlier are emptied too, so stale handles cannot
    /// resolve presenters registered before the reset.
    pub fn clear_all(&self) {
        let drained: Vec<_> = {
            let mut registries = self.registries.write().unwrap_or_else(PoisonError::into_inner);
            registries.drain(..).map(|(_, registry)| registry).collect()
        };
        for registry in &drained {
            registry.clear();
        }
        self.reset_default_namespace();
        tracing::debug!("Cleared {} presenter registries", drained.len());
    }
}

impl Default for Presenters {
    fn default() -> Self {
        Self::new()
    }
}
