//! JSON description of a host application.
//!
//! A manifest stands in for live framework introspection: it lists the route
//! table, the declared type hierarchy and field-based presenters.

use crate::builder::BuilderOptions;
use crate::error::{ApiscopeError, Result};
use crate::hierarchy::TypeHierarchy;
use crate::presenter::{FieldPresenter, Presenters};
use apiscope_api::{ApiResult, Route, RouteIntrospector};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterSpec {
    /// Target namespace; the default namespace when absent.
    #[serde(default)]
    pub namespace: Option<String>,
    pub resource: String,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteManifest {
    pub routes: Vec<Route>,
    pub types: TypeHierarchy,
    pub presenters: Vec<PresenterSpec>,
    /// Controller type -> resource type overrides.
    pub resources: IndexMap<String, String>,
}

impl RouteManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| ApiscopeError::Manifest {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Register the manifest's hierarchy and presenters. Returns the number
    /// of presenters registered.
    pub fn install(&self, presenters: &Presenters) -> usize {
        presenters.extend_hierarchy(self.types.clone());
        for spec in &self.presenters {
            presenters.register(
                spec.namespace.as_deref(),
                spec.resource.clone(),
                FieldPresenter::new(spec.name.clone(), spec.fields.iter().cloned()),
            );
        }
        tracing::info!(
            "Installed {} types and {} presenters from manifest",
            self.types.len(),
            self.presenters.len()
        );
        self.presenters.len()
    }

    /// Merge the manifest's resource overrides into `options`; options win.
    pub fn apply_overrides(&self, options: &mut BuilderOptions) {
        for (controller, resource) in &self.resources {
            options
                .resources
                .entry(controller.clone())
                .or_insert_with(|| resource.clone());
        }
    }
}

impl RouteIntrospector for RouteManifest {
    fn routes(&self) -> ApiResult<Vec<Route>> {
        Ok(self.routes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "routes": [
            {"name": "posts", "path": "/posts(.:format)",
             "defaults": {"controller": "posts", "action": "index"},
             "constraints": {"request_method": "^GET$"}}
        ],
        "types": {"ApplicationController": null, "PostsController": "ApplicationController"},
        "presenters": [
            {"resource": "Post", "name": "PostPresenter", "fields": ["id", "title"]},
            {"namespace": "v2", "resource": "Post", "name": "V2PostPresenter"}
        ],
        "resources": {"PostsController": "Article"}
    }"#;

    #[test]
    fn test_parse_and_install() {
        let manifest = RouteManifest::parse(MANIFEST).unwrap();
        assert_eq!(manifest.routes().unwrap().len(), 1);

        let presenters = Presenters::new();
        assert_eq!(manifest.install(&presenters), 2);
        assert_eq!(presenters.resolve(None, "Post").unwrap().fields(), vec!["id", "title"]);
        assert_eq!(presenters.resolve(Some("v2"), "Post").unwrap().name(), "V2PostPresenter");
        assert!(presenters.hierarchy().descends_from("PostsController", "ApplicationController"));
    }

    #[test]
    fn test_overrides_do_not_replace_explicit_options() {
        let manifest = RouteManifest::parse(MANIFEST).unwrap();
        let mut options = BuilderOptions::default();
        options
            .resources
            .insert("PostsController".to_string(), "Post".to_string());
        manifest.apply_overrides(&mut options);
        assert_eq!(options.resources["PostsController"], "Post");

        let mut options = BuilderOptions::default();
        manifest.apply_overrides(&mut options);
        assert_eq!(options.resources["PostsController"], "Article");
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = RouteManifest::parse("{}").unwrap();
        assert!(manifest.routes.is_empty());
        assert!(manifest.types.is_empty());
    }
}
