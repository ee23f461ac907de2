//! Structural checks over the active window.
//!
//! Surfaced through [`CoalescentRelabeler::check_invariants`] so drivers and
//! property tests can assert the window is healthy between steps without
//! reaching into the relabeler's storage.

use std::collections::HashMap;

use thiserror::Error;

use crate::{label::Label, relabeler::CoalescentRelabeler};

/// Reports a corrupted active window.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum InvariantViolation {
    /// Two active slots hold the same label.
    #[error("label {label} occupies slots {first} and {second}")]
    DuplicateLabel {
        /// The repeated label.
        label: Label,
        /// Lower slot holding the label.
        first: usize,
        /// Higher slot holding the label.
        second: usize,
    },
    /// An active slot holds a label that has not been created yet.
    #[error("slot {slot} holds label {label} but only labels below {ceiling} exist")]
    LabelOutOfRange {
        /// Slot holding the label.
        slot: usize,
        /// The fabricated label.
        label: Label,
        /// Exclusive upper bound on labels created so far.
        ceiling: usize,
    },
}

impl CoalescentRelabeler {
    /// Checks that active labels are pairwise distinct and all lie below the
    /// next label to be created.
    ///
    /// # Errors
    /// Returns the first [`InvariantViolation`] found, scanning slots in
    /// ascending order.
    ///
    /// # Examples
    /// ```
    /// use coalescent_core::{CoalescentRelabeler, RngIndexSource};
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let mut relabeler = CoalescentRelabeler::new(6)?;
    /// let mut source = RngIndexSource::new(SmallRng::seed_from_u64(11));
    /// while !relabeler.is_resolved() {
    ///     relabeler.check_invariants()?;
    ///     relabeler.step(&mut source)?;
    /// }
    /// relabeler.check_invariants()?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        check_window(self.active_labels(), self.label_ceiling())
    }
}

fn check_window(window: &[Label], ceiling: usize) -> Result<(), InvariantViolation> {
    let mut seen = HashMap::with_capacity(window.len());
    for (slot, &label) in window.iter().enumerate() {
        if label.get() >= ceiling {
            return Err(InvariantViolation::LabelOutOfRange {
                slot,
                label,
                ceiling,
            });
        }
        if let Some(first) = seen.insert(label, slot) {
            return Err(InvariantViolation::DuplicateLabel {
                label,
                first,
                second: slot,
            });
        }
    }
    Ok(())
}
