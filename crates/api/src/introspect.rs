use crate::ApiResult;
use crate::models::Route;

/// Source of the host framework's route table.
///
/// Implementations enumerate whatever the host exposes; filtering of
/// unresolvable routes happens downstream.
pub trait RouteIntrospector: Send + Sync {
    fn routes(&self) -> ApiResult<Vec<Route>>;
}

/// Fixed, in-memory route table.
#[derive(Debug, Clone, Default)]
pub struct StaticRoutes(pub Vec<Route>);

impl StaticRoutes {
    pub fn new(routes: Vec<Route>) -> Self {
        Self(routes)
    }
}

impl RouteIntrospector for StaticRoutes {
    fn routes(&self) -> ApiResult<Vec<Route>> {
        Ok(self.0.clone())
    }
}

impl From<Vec<Route>> for StaticRoutes {
    fn from(routes: Vec<Route>) -> Self {
        Self(routes)
    }
}
