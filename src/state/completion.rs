use std::num::NonZeroUsize;
use tracing::debug;

/// Per-step completion flags, index-aligned with the form's steps.
///
/// The length is fixed at creation. Flags are written by the validation
/// collaborator only; navigation never touches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionStore {
    flags: Vec<bool>,
}

impl CompletionStore {
    pub fn new(total: NonZeroUsize) -> Self {
        Self {
            flags: vec![false; total.get()],
        }
    }

    /// Last write wins. Returns `true` when the stored flag changed.
    pub fn set_complete(&mut self, index: usize, complete: bool) -> bool {
        let Some(flag) = self.flags.get_mut(index) else {
            debug!(index, len = self.flags.len(), "dropping completion write for unknown step");
            return false;
        };
        let changed = *flag != complete;
        *flag = complete;
        changed
    }

    pub fn is_complete(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn flags(&self) -> &[bool] {
        self.flags.as_slice()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }

    pub fn all_complete(&self) -> bool {
        self.flags.iter().all(|flag| *flag)
    }
}
