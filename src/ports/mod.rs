mod server_registry;
mod stack_state_store;

pub use server_registry::ServerRegistry;
pub use stack_state_store::StackStateStore;
