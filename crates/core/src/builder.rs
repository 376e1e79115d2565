//! Endpoint model builder.
//!
//! Turns an introspected route table into an immutable [`Atlas`]. Routes
//! that cannot be tied to an API controller are dropped silently; a missing
//! presenter only leaves the endpoint undecorated.

use crate::hierarchy::TypeHierarchy;
use crate::model::Atlas;
use crate::naming;
use crate::presenter::Presenters;
use apiscope_api::{ApiResult, Endpoint, Route};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_BASE_CONTROLLER: &str = "ApplicationController";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    /// Controllers must descend from this type to be documented.
    pub base_controller: String,
    /// Controller type -> resource type, overriding the naming convention.
    pub resources: IndexMap<String, String>,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            base_controller: DEFAULT_BASE_CONTROLLER.to_string(),
            resources: IndexMap::new(),
        }
    }
}

/// Why a route was or was not turned into an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteStatus {
    Included {
        controller: String,
        resource: String,
    },
    MissingController,
    UnknownController(String),
    ForeignController(String),
}

impl RouteStatus {
    pub fn is_included(&self) -> bool {
        matches!(self, RouteStatus::Included { .. })
    }
}

pub struct EndpointBuilder<'a> {
    presenters: &'a Presenters,
    options: BuilderOptions,
}

impl<'a> EndpointBuilder<'a> {
    pub fn new(presenters: &'a Presenters, options: BuilderOptions) -> Self {
        Self {
            presenters,
            options,
        }
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    /// Decide whether `route` is documentable against `hierarchy`.
    pub fn classify(&self, route: &Route, hierarchy: &TypeHierarchy) -> RouteStatus {
        let Some(path) = route.controller() else {
            return RouteStatus::MissingController;
        };
        let controller = naming::controller_type(path);
        if !hierarchy.contains(&controller) {
            return RouteStatus::UnknownController(controller);
        }
        if !hierarchy.descends_from(&controller, &self.options.base_controller) {
            return RouteStatus::ForeignController(controller);
        }
        let resource = self
            .options
            .resources
            .get(&controller)
            .cloned()
            .unwrap_or_else(|| naming::resource_type(&controller));
        RouteStatus::Included {
            controller,
            resource,
        }
    }

    /// Build the atlas for `namespace` (default namespace when `None`).
    ///
    /// Input order is preserved. Only errors other than "no presenter" abort.
    pub fn build(&self, routes: &[Route], namespace: Option<&str>) -> ApiResult<Atlas> {
        let namespace = self.presenters.namespace_or_default(namespace);
        // The atlas keeps its own copy; clear_all or later registrations
        // leave it untouched.
        let registry = Arc::new(self.presenters.registry(Some(&namespace)).snapshot());
        let hierarchy = self.presenters.hierarchy();

        let mut endpoints = Vec::with_capacity(routes.len());
        for route in routes {
            let (controller, resource) = match self.classify(route, &hierarchy) {
                RouteStatus::Included {
                    controller,
                    resource,
                } => (controller, resource),
                skipped => {
                    tracing::debug!("Skipping route {}: {:?}", route.path, skipped);
                    continue;
                }
            };

            let mut endpoint = Endpoint::new(route.path.render())
                .with_methods(route.request_methods())
                .with_name(route.name.clone())
                .with_target(controller, route.action().map(str::to_string))
                .with_params(route.path.params())
                .with_resource(resource.clone());

            match registry.resolve(&resource, &hierarchy) {
                Ok(presenter) => endpoint = endpoint.with_presenter(presenter),
                Err(err) if err.is_not_found() => {
                    tracing::debug!("No presenter for {} in {}", resource, namespace);
                }
                Err(err) => return Err(err),
            }
            endpoints.push(endpoint);
        }

        tracing::info!(
            "Built atlas for namespace {}: {} of {} routes documented",
            namespace,
            endpoints.len(),
            routes.len()
        );
        Ok(Atlas::new(namespace, endpoints).with_registry(registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::FieldPresenter;
    use apiscope_api::{HttpMethod, RouteIntrospector, StaticRoutes};

    fn presenters() -> Presenters {
        Presenters::with_hierarchy(
            TypeHierarchy::new()
                .with("ApplicationController", None)
                .with("PostsController", Some("ApplicationController"))
                .with("Api::CommentsController", Some("ApplicationController"))
                .with("RailsHealthController", None)
                .with("Record", None)
                .with("Post", Some("Record")),
        )
    }

    #[test]
    fn test_route_exclusion() {
        let p = presenters();
        p.register(None, "Record", FieldPresenter::new("RecordPresenter", ["id"]));
        let routes = vec![
            Route::new("/assets/*path"),
            Route::new("/up").to("rails_health", "show"),
            Route::new("/ghosts").to("ghosts", "index"),
            Route::new("/posts(.:format)").to("posts", "index").via("^GET$"),
        ];

        let atlas = EndpointBuilder::new(&p, BuilderOptions::default())
            .build(&routes, None)
            .unwrap();

        assert_eq!(atlas.len(), 1);
        let endpoint = &atlas.endpoints()[0];
        assert_eq!(endpoint.path(), "/posts");
        assert_eq!(endpoint.methods(), &[HttpMethod::Get]);
        assert_eq!(endpoint.controller(), Some("PostsController"));
        assert_eq!(endpoint.resource(), Some("Post"));
        assert_eq!(endpoint.presenter().unwrap().name(), "RecordPresenter");
    }

    #[test]
    fn test_missing_presenter_keeps_endpoint() {
        let p = presenters();
        let routes = vec![
            Route::new("/api/comments/:id").to("api/comments", "destroy").via("DELETE"),
            Route::new("/posts/:id").to("posts", "show"),
        ];

        let atlas = EndpointBuilder::new(&p, BuilderOptions::default())
            .build(&routes, Some("v1"))
            .unwrap();

        assert_eq!(atlas.namespace(), "v1");
        let paths: Vec<_> = atlas.iter().map(|e| e.path()).collect();
        assert_eq!(paths, vec!["/api/comments/:id", "/posts/:id"]);
        assert!(atlas.iter().all(|e| e.presenter().is_none()));
        assert_eq!(atlas.endpoints()[0].params(), &["id".to_string()]);
    }

    #[test]
    fn test_resource_override() {
        let p = presenters();
        p.register(None, "Article", FieldPresenter::new("ArticlePresenter", ["id"]));
        let mut options = BuilderOptions::default();
        options
            .resources
            .insert("PostsController".to_string(), "Article".to_string());

        let builder = EndpointBuilder::new(&p, options);
        let status = builder.classify(&Route::new("/posts").to("posts", "index"), &p.hierarchy());
        assert_eq!(
            status,
            RouteStatus::Included {
                controller: "PostsController".into(),
                resource: "Article".into()
            }
        );
        let atlas = builder
            .build(&[Route::new("/posts").to("posts", "index")], None)
            .unwrap();
        assert_eq!(atlas.endpoints()[0].presenter().unwrap().name(), "ArticlePresenter");
    }

    #[test]
    fn test_classify_reasons() {
        let p = presenters();
        let builder = EndpointBuilder::new(&p, BuilderOptions::default());
        let h = p.hierarchy();
        assert_eq!(builder.classify(&Route::new("/"), &h), RouteStatus::MissingController);
        assert_eq!(
            builder.classify(&Route::new("/g").to("ghosts", "index"), &h),
            RouteStatus::UnknownController("GhostsController".into())
        );
        assert_eq!(
            builder.classify(&Route::new("/up").to("rails_health", "show"), &h),
            RouteStatus::ForeignController("RailsHealthController".into())
        );
    }

    #[test]
    fn test_atlas_records_registry() {
        let p = presenters();
        p.register(Some("v2"), "Post", FieldPresenter::new("PostPresenter", ["id"]));
        let atlas = EndpointBuilder::new(&p, BuilderOptions::default())
            .build(&[], Some("v2"))
            .unwrap();
        assert!(atlas.is_empty());
        assert_eq!(atlas.registry().unwrap().namespace(), "v2");
        assert_eq!(atlas.registry().unwrap().len(), 1);
    }

    #[test]
    fn test_atlas_registry_survives_clear_all() {
        let p = presenters();
        p.register(None, "Post", FieldPresenter::new("PostPresenter", ["id"]));
        let routes = StaticRoutes::new(vec![Route::new("/posts").to("posts", "index")])
            .routes()
            .unwrap();
        let atlas = EndpointBuilder::new(&p, BuilderOptions::default())
            .build(&routes, None)
            .unwrap();

        p.clear_all();
        p.register(None, "Post", FieldPresenter::new("OtherPresenter", ["id"]));
        p.register(None, "Record", FieldPresenter::new("RecordPresenter", ["id"]));

        let registry = atlas.registry().unwrap();
        let names: Vec<_> = registry
            .entries()
            .into_iter()
            .map(|(ty, presenter)| (ty, presenter.name().to_string()))
            .collect();
        assert_eq!(names, vec![("Post".to_string(), "PostPresenter".to_string())]);
        assert_eq!(atlas.endpoints()[0].presenter().unwrap().name(), "PostPresenter");
    }
}
