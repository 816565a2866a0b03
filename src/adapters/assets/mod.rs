pub mod embedded_catalog;

pub use embedded_catalog::EmbeddedCatalog;
