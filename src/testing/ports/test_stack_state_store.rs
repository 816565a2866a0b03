//! Test double for `StackStateStore`.

use std::sync::{Arc, Mutex};

use crate::domain::{AppError, PersistedStackState};
use crate::ports::StackStateStore;

/// In-memory state store keeping the raw serialized text, so tests can seed
/// corrupted content and compare bytes.
#[derive(Clone, Debug, Default)]
#[allow(dead_code)]
pub struct MockStackStateStore {
    pub raw: Arc<Mutex<Option<String>>>,
    pub saves: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockStackStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(self, content: &str) -> Self {
        *self.raw.lock().unwrap() = Some(content.to_string());
        self
    }

    pub fn with_state(self, state: &PersistedStackState) -> Self {
        *self.raw.lock().unwrap() = Some(state.to_json().unwrap());
        self
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.lock().unwrap().clone()
    }

    pub fn state(&self) -> PersistedStackState {
        self.load().unwrap()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl StackStateStore for MockStackStateStore {
    fn load(&self) -> Result<PersistedStackState, AppError> {
        Ok(self
            .raw
            .lock()
            .unwrap()
            .as_deref()
            .and_then(|content| PersistedStackState::from_json(content).ok())
            .unwrap_or_default())
    }

    fn save(&self, state: &PersistedStackState) -> Result<(), AppError> {
        *self.raw.lock().unwrap() = Some(state.to_json()?);
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
