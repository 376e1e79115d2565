use super::route::HttpMethod;
use crate::presenter::PresenterHandle;
use serde::Serialize;

/// One documented API endpoint.
///
/// Built once from a route and never mutated afterwards. Serialized field
/// order is the declaration order below; everything but `path` is skipped
/// when empty.
#[derive(Debug, Clone, Serialize)]
pub struct Endpoint {
    path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    methods: Vec<HttpMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    controller: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    params: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presenter: Option<PresenterHandle>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<String>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            methods: Vec::new(),
            name: None,
            controller: None,
            action: None,
            params: Vec::new(),
            resource: None,
            presenter: None,
            fields: Vec::new(),
        }
    }

    pub fn with_methods(mut self, methods: Vec<HttpMethod>) -> Self {
        self.methods = methods;
        self
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_target(mut self, controller: impl Into<String>, action: Option<String>) -> Self {
        self.controller = Some(controller.into());
        self.action = action;
        self
    }

    pub fn with_params(mut self, params: Vec<String>) -> Self {
        self.params = params;
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Attach a presenter; its declared fields become the endpoint's fields.
    pub fn with_presenter(mut self, presenter: PresenterHandle) -> Self {
        self.fields = presenter.fields();
        self.presenter = Some(presenter);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn methods(&self) -> &[HttpMethod] {
        &self.methods
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn controller(&self) -> Option<&str> {
        self.controller.as_deref()
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    pub fn presenter(&self) -> Option<&PresenterHandle> {
        self.presenter.as_ref()
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}
