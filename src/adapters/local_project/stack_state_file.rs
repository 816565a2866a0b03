//! `StackStateStore` implementation for `LocalProjectAdapter`.

use tracing::warn;

use crate::domain::{AppError, PersistedStackState, paths};
use crate::ports::StackStateStore;

use super::{LocalProjectAdapter, read_optional, write_replacing};

impl StackStateStore for LocalProjectAdapter {
    fn load(&self) -> Result<PersistedStackState, AppError> {
        let path = paths::stack_state(&self.root);
        let Some(content) = read_optional(&path)? else {
            return Ok(PersistedStackState::default());
        };

        match PersistedStackState::from_slice(&content) {
            Ok(state) => Ok(state),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "discarding undecodable stack state");
                Ok(PersistedStackState::default())
            }
        }
    }

    fn save(&self, state: &PersistedStackState) -> Result<(), AppError> {
        write_replacing(&paths::stack_state(&self.root), &state.to_json()?)
    }
}
