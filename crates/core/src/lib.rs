pub mod builder;
pub mod config;
pub mod error;
pub mod format;
pub mod hierarchy;
pub mod logging;
pub mod manifest;
pub mod model;
pub mod naming;
pub mod presenter;

pub use builder::{BuilderOptions, EndpointBuilder, RouteStatus};
pub use config::ApiscopeConfig;
pub use error::{ApiscopeError, Result};
pub use format::{AggregateJson, AggregateTable, EndpointJson, Formatter, FormatterKind};
pub use hierarchy::TypeHierarchy;
pub use manifest::RouteManifest;
pub use model::Atlas;
pub use presenter::{FieldPresenter, PresenterRegistry, Presenters};
