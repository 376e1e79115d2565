pub mod error;
pub mod introspect;
pub mod models;
pub mod presenter;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use introspect::{RouteIntrospector, StaticRoutes};
pub use models::*;
pub use presenter::{Presenter, PresenterHandle};
