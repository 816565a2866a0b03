pub mod assets;
pub mod local_project;

pub use assets::EmbeddedCatalog;
pub use local_project::LocalProjectAdapter;
