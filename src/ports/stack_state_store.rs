//! Stack state store port definition.

use crate::domain::{AppError, PersistedStackState};

/// Port for reading and writing the persisted stack state.
pub trait StackStateStore {
    /// Read the current state.
    ///
    /// A missing or undecodable record yields the empty default state.
    fn load(&self) -> Result<PersistedStackState, AppError>;

    /// Replace the stored state.
    fn save(&self, state: &PersistedStackState) -> Result<(), AppError>;
}
