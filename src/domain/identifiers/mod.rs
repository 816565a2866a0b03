pub mod validation;

pub use validation::validate_catalog_name;
