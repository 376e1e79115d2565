mod field;
mod manager;
mod registry;

pub use field::FieldPresenter;
pub use manager::Presenters;
pub use registry::PresenterRegistry;
