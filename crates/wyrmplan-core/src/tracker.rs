//! Change tracking for transient edit forms
//!
//! Edit dialogs work on a live value owned by a store. The tracker captures
//! an independent snapshot at construction so the dialog can ask "has the
//! user changed anything" and either discard edits or commit them as the new
//! baseline. Equality and copying go through `PartialEq`/`Clone`, which
//! recurse through nested maps and sequences, so the dirty check stays
//! correct for deeply nested form values.

/// Snapshot-based dirty tracking for an editable value
#[derive(Debug, Clone)]
pub struct FormTracker<T> {
    snapshot: T,
}

impl<T: Clone + PartialEq> FormTracker<T> {
    /// Capture a snapshot of the value's current state
    pub fn new(value: &T) -> Self {
        Self {
            snapshot: value.clone(),
        }
    }

    /// The captured baseline
    pub fn snapshot(&self) -> &T {
        &self.snapshot
    }

    /// Whether the live value has drifted from the baseline
    pub fn is_changed(&self, current: &T) -> bool {
        *current != self.snapshot
    }

    /// Discard edits: overwrite the live value with a copy of the baseline
    pub fn reset(&self, current: &mut T) {
        *current = self.snapshot.clone();
    }

    /// Commit edits: replace the baseline with a copy of the new value
    pub fn update(&mut self, value: &T) {
        self.snapshot = value.clone();
    }
}
