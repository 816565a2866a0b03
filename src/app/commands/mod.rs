pub mod registry;
pub mod stack;
