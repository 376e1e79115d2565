pub mod endpoint;
pub mod namespace;
pub mod options;
pub mod route;

pub use endpoint::*;
pub use namespace::*;
pub use options::*;
pub use route::*;
