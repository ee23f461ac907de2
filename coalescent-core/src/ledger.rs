//! Alive-set bookkeeping for coalescence histories.
//!
//! [`LineageLedger`] replays [`CoalescenceEvent`]s against the set of labels
//! that are still alive. It is independent of slot positions, so it can audit
//! a relabeler step by step or verify a history recorded elsewhere.

use std::collections::BTreeSet;

use crate::{
    Result,
    error::{LedgerViolation, RelabelError},
    event::CoalescenceEvent,
    label::Label,
};

/// Tracks which lineages are alive and which have been consumed.
///
/// Starts with the sampled labels `0..n` alive. Each recorded event must
/// consume two distinct alive labels and create exactly the next ancestral
/// label `n, n + 1, ...`; the ledger is resolved once only the root `2n - 2`
/// remains.
///
/// # Examples
/// ```
/// use coalescent_core::{CoalescentRelabeler, LineageLedger, RngIndexSource};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut relabeler = CoalescentRelabeler::new(8)?;
/// let mut ledger = LineageLedger::new(8)?;
/// let mut source = RngIndexSource::new(SmallRng::seed_from_u64(5));
///
/// let events = relabeler.run_to_root(&mut source)?;
/// ledger.replay(&events)?;
/// assert!(ledger.is_resolved());
/// assert_eq!(ledger.consumed_len(), 14);
/// assert_eq!(ledger.root(), relabeler.root());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageLedger {
    sample_size: usize,
    alive: BTreeSet<Label>,
    consumed: BTreeSet<Label>,
    next_label: usize,
}

impl LineageLedger {
    /// Creates a ledger with the sampled labels `0..sample_size` alive.
    ///
    /// # Errors
    /// Returns [`RelabelError::InvalidSampleSize`] when `sample_size < 2`.
    pub fn new(sample_size: usize) -> Result<Self> {
        if sample_size < 2 {
            return Err(RelabelError::InvalidSampleSize { got: sample_size });
        }
        Ok(Self {
            sample_size,
            alive: (0..sample_size).map(Label::new).collect(),
            consumed: BTreeSet::new(),
            next_label: sample_size,
        })
    }

    /// Number of sampled lineages.
    #[must_use]
    pub const fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Whether `label` is currently alive.
    #[must_use]
    pub fn is_alive(&self, label: Label) -> bool {
        self.alive.contains(&label)
    }

    /// Alive labels in ascending order.
    pub fn alive(&self) -> impl Iterator<Item = Label> + '_ {
        self.alive.iter().copied()
    }

    /// Number of alive labels.
    #[must_use]
    pub fn alive_len(&self) -> usize {
        self.alive.len()
    }

    /// Labels consumed so far, in ascending order.
    pub fn consumed(&self) -> impl Iterator<Item = Label> + '_ {
        self.consumed.iter().copied()
    }

    /// Number of labels consumed so far.
    #[must_use]
    pub fn consumed_len(&self) -> usize {
        self.consumed.len()
    }

    /// Whether only the root remains alive.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.alive.len() == 1
    }

    /// The root label once resolved.
    #[must_use]
    pub fn root(&self) -> Option<Label> {
        if self.is_resolved() {
            self.alive.first().copied()
        } else {
            None
        }
    }

    /// Applies one event: removes both consumed labels, then inserts the
    /// created label.
    ///
    /// The ledger is unchanged when an error is returned.
    ///
    /// # Errors
    /// Returns [`LedgerViolation::AlreadyResolved`] after the root has formed,
    /// [`LedgerViolation::SelfCoalescence`] when both consumed labels match,
    /// [`LedgerViolation::UnexpectedLabel`] when the created label is not the
    /// next in sequence, and [`LedgerViolation::LabelNotAlive`] when either
    /// consumed label is not alive.
    pub fn record(
        &mut self,
        event: &CoalescenceEvent,
    ) -> core::result::Result<(), LedgerViolation> {
        if let Some(root) = self.root() {
            return Err(LedgerViolation::AlreadyResolved { root });
        }
        let [left, right] = event.consumed();
        if left == right {
            return Err(LedgerViolation::SelfCoalescence { label: left });
        }
        let expected = Label::new(self.next_label);
        if event.created() != expected {
            return Err(LedgerViolation::UnexpectedLabel {
                expected,
                found: event.created(),
            });
        }
        for label in [left, right] {
            if !self.alive.contains(&label) {
                return Err(LedgerViolation::LabelNotAlive { label });
            }
        }

        for label in [left, right] {
            self.alive.remove(&label);
            self.consumed.insert(label);
        }
        self.alive.insert(expected);
        self.next_label += 1;
        Ok(())
    }

    /// Records every event in order, stopping at the first violation.
    ///
    /// # Errors
    /// Returns the first [`LedgerViolation`] raised by [`record`](Self::record).
    pub fn replay<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a CoalescenceEvent>,
    ) -> core::result::Result<(), LedgerViolation> {
        events.into_iter().try_for_each(|event| self.record(event))
    }

    /// Checks that `window` holds exactly the alive labels, each once.
    ///
    /// # Errors
    /// Returns [`LedgerViolation::WindowSizeMismatch`] when the lengths differ.
    /// Otherwise scans the window in slot order and returns
    /// [`LedgerViolation::LabelNotAlive`] or
    /// [`LedgerViolation::DuplicateInWindow`] for the first offending label.
    pub fn verify_window(
        &self,
        window: &[Label],
    ) -> core::result::Result<(), LedgerViolation> {
        if window.len() != self.alive.len() {
            return Err(LedgerViolation::WindowSizeMismatch {
                window: window.len(),
                alive: self.alive.len(),
            });
        }
        let mut seen = BTreeSet::new();
        for &label in window {
            if !self.alive.contains(&label) {
                return Err(LedgerViolation::LabelNotAlive { label });
            }
            if !seen.insert(label) {
                return Err(LedgerViolation::DuplicateInWindow { label });
            }
        }
        Ok(())
    }
}
