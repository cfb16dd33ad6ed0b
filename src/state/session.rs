use crate::error::{FormError, Result};
use crate::state::completion::CompletionStore;
use crate::state::navigator::StepNavigator;
use serde::Serialize;
use std::num::NonZeroUsize;

/// Runtime state of one mounted multi-step form.
///
/// A session is owned by its host and discarded on close, submit or reset.
/// Nothing is shared between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    navigator: StepNavigator,
    completion: CompletionStore,
}

/// Point-in-time copy of a session, taken after a batch of updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub current_step: usize,
    pub total_steps: usize,
    pub is_first_step: bool,
    pub is_last_step: bool,
    pub completion: Vec<bool>,
}

impl FormSession {
    pub fn new(total_steps: usize) -> Result<Self> {
        Self::with_initial_step(total_steps, 0)
    }

    /// `initial_step` past the end is clamped to the last step.
    pub fn with_initial_step(total_steps: usize, initial_step: usize) -> Result<Self> {
        let total = NonZeroUsize::new(total_steps).ok_or(FormError::EmptyForm)?;
        Ok(Self {
            navigator: StepNavigator::new(total, initial_step),
            completion: CompletionStore::new(total),
        })
    }

    pub fn current_step(&self) -> usize {
        self.navigator.current_index()
    }

    pub fn total_steps(&self) -> usize {
        self.navigator.total_steps()
    }

    pub fn is_first_step(&self) -> bool {
        self.navigator.is_first_step()
    }

    pub fn is_last_step(&self) -> bool {
        self.navigator.is_last_step()
    }

    pub fn advance(&mut self) -> bool {
        self.navigator.advance()
    }

    pub fn retreat(&mut self) -> bool {
        self.navigator.retreat()
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        self.navigator.jump_to(index)
    }

    pub fn set_complete(&mut self, index: usize, complete: bool) -> bool {
        self.completion.set_complete(index, complete)
    }

    pub fn is_complete(&self, index: usize) -> bool {
        self.completion.is_complete(index)
    }

    pub fn completion(&self) -> &[bool] {
        self.completion.flags()
    }

    pub fn navigator(&self) -> &StepNavigator {
        &self.navigator
    }

    pub fn completion_store(&self) -> &CompletionStore {
        &self.completion
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_step: self.current_step(),
            total_steps: self.total_steps(),
            is_first_step: self.is_first_step(),
            is_last_step: self.is_last_step(),
            completion: self.completion().to_vec(),
        }
    }
}
