pub mod atlas;

pub use atlas::Atlas;
