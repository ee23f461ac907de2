//! The compacting active-lineage array at the heart of Hudson's coalescent.
//!
//! Slots are transient storage positions; labels are permanent lineage
//! identities. Each merge writes the new ancestral label into the lower of the
//! two drawn slots and moves the last active label into the higher one, so
//! the active window stays dense at `0..i` without shifting elements.

use std::num::NonZeroUsize;

use tracing::{debug, info, instrument, trace, warn};

use crate::{
    Result,
    builder::RelabelerBuilder,
    error::{RelabelError, SourceViolation},
    event::CoalescenceEvent,
    label::Label,
    source::IndexSource,
};

/// Owns the active lineage labels and assigns ancestral labels as lineages
/// coalesce.
///
/// For a sample of `n` lineages the relabeler starts with labels `0..n` in
/// slots `0..n`. Every [`step`](Self::step) consumes two active labels and
/// creates `2n - i`, where `i` is the active length before the merge, until
/// only the root `2n - 2` remains.
///
/// # Examples
/// ```
/// use coalescent_core::{CoalescentRelabeler, RngIndexSource};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut relabeler = CoalescentRelabeler::new(4)?;
/// let mut source = RngIndexSource::new(SmallRng::seed_from_u64(1));
/// let events = relabeler.run_to_root(&mut source)?;
/// assert_eq!(events.len(), 3);
/// assert_eq!(relabeler.root().map(|label| label.get()), Some(6));
/// # Ok::<(), coalescent_core::RelabelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoalescentRelabeler {
    active: Vec<Label>,
    active_len: usize,
    label_base: usize,
    max_redraws: NonZeroUsize,
}

impl CoalescentRelabeler {
    /// Creates a relabeler for `sample_size` lineages with default settings.
    ///
    /// # Errors
    /// Returns [`RelabelError::InvalidSampleSize`] when `sample_size < 2`.
    ///
    /// # Examples
    /// ```
    /// use coalescent_core::CoalescentRelabeler;
    ///
    /// let relabeler = CoalescentRelabeler::new(3)?;
    /// assert_eq!(relabeler.active_len(), 3);
    /// assert_eq!(
    ///     relabeler.active_labels().iter().map(|l| l.get()).collect::<Vec<_>>(),
    ///     vec![0, 1, 2],
    /// );
    /// # Ok::<(), coalescent_core::RelabelError>(())
    /// ```
    pub fn new(sample_size: usize) -> Result<Self> {
        RelabelerBuilder::new().with_sample_size(sample_size).build()
    }

    pub(crate) fn from_parts(sample_size: usize, max_redraws: NonZeroUsize) -> Self {
        Self {
            active: (0..sample_size).map(Label::new).collect(),
            active_len: sample_size,
            label_base: sample_size.saturating_mul(2),
            max_redraws,
        }
    }

    /// Number of sampled lineages the relabeler was created with.
    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.active.len()
    }

    /// Redraw budget for the second slot of each step.
    #[must_use]
    pub const fn max_redraws(&self) -> NonZeroUsize {
        self.max_redraws
    }

    /// Number of lineages that are still active.
    #[must_use]
    pub const fn active_len(&self) -> usize {
        self.active_len
    }

    /// Labels occupying the active window, in slot order.
    ///
    /// Slot order carries no meaning beyond the draw positions used by the
    /// next step.
    #[must_use]
    pub fn active_labels(&self) -> &[Label] {
        self.active.get(..self.active_len).unwrap_or_default()
    }

    /// Label the next step will create, or `None` once resolved.
    ///
    /// # Examples
    /// ```
    /// use coalescent_core::CoalescentRelabeler;
    ///
    /// let relabeler = CoalescentRelabeler::new(5)?;
    /// assert_eq!(relabeler.next_label().map(|l| l.get()), Some(5));
    /// # Ok::<(), coalescent_core::RelabelError>(())
    /// ```
    #[must_use]
    pub fn next_label(&self) -> Option<Label> {
        (self.active_len >= 2).then(|| Label::new(self.label_ceiling()))
    }

    /// Whether all lineages have coalesced into a single root.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.active_len == 1
    }

    /// The root label once the run is resolved.
    #[must_use]
    pub fn root(&self) -> Option<Label> {
        if self.is_resolved() {
            self.active.first().copied()
        } else {
            None
        }
    }

    /// Exclusive upper bound on every label created so far.
    pub(crate) const fn label_ceiling(&self) -> usize {
        self.label_base.saturating_sub(self.active_len)
    }

    /// Performs one coalescence event.
    ///
    /// Draws slot `c0` once and slot `c1` until it differs from `c0`, then
    /// merges the labels found there:
    ///
    /// 1. the new label `2n - i` is written into slot `min(c0, c1)`;
    /// 2. the label in the last active slot `i - 1` is written into slot
    ///    `max(c0, c1)`, which is a harmless self-copy when they coincide;
    /// 3. the active length drops to `i - 1`.
    ///
    /// The source is advanced only by those draws. The relabeler is left
    /// untouched when an error is returned.
    ///
    /// # Errors
    /// Returns [`RelabelError::PreconditionViolated`] when fewer than two
    /// lineages are active and [`RelabelError::ContractViolation`] when the
    /// source returns an out-of-range index or repeats `c0` beyond the
    /// configured redraw budget.
    ///
    /// # Examples
    /// ```
    /// use coalescent_core::{CoalescentRelabeler, RelabelError, RngIndexSource};
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let mut relabeler = CoalescentRelabeler::new(2)?;
    /// let mut source = RngIndexSource::new(SmallRng::seed_from_u64(9));
    /// let event = relabeler.step(&mut source)?;
    /// assert_eq!(event.consumed().map(|l| l.get()), [0, 1]);
    /// assert_eq!(event.created().get(), 2);
    /// assert!(relabeler.is_resolved());
    ///
    /// let err = relabeler.step(&mut source).expect_err("root cannot coalesce");
    /// assert_eq!(err, RelabelError::PreconditionViolated { active: 1 });
    /// # Ok::<(), RelabelError>(())
    /// ```
    #[instrument(
        name = "relabeler.step",
        level = "debug",
        err,
        skip(self, source),
        fields(active = self.active_len),
    )]
    pub fn step<S: IndexSource + ?Sized>(&mut self, source: &mut S) -> Result<CoalescenceEvent> {
        let active = self.active_len;
        if active < 2 {
            return Err(RelabelError::PreconditionViolated { active });
        }
        let bound =
            NonZeroUsize::new(active).ok_or(RelabelError::PreconditionViolated { active })?;

        let (first, second) = self.draw_slots(source, bound)?;
        let event = self.merge(first, second)?;
        let [left, right] = event.consumed();
        debug!(
            left = %left,
            right = %right,
            created = %event.created(),
            "lineages coalesced"
        );
        Ok(event)
    }

    /// Steps until a single lineage remains and returns the events in order.
    ///
    /// Returns an empty history when the relabeler is already resolved.
    ///
    /// # Errors
    /// Propagates the first error returned by [`step`](Self::step); events
    /// completed before the failure are discarded along with the run.
    #[instrument(
        name = "relabeler.run",
        err,
        skip(self, source),
        fields(sample_size = self.sample_size(), active = self.active_len),
    )]
    pub fn run_to_root<S: IndexSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<Vec<CoalescenceEvent>> {
        let mut events = Vec::with_capacity(self.active_len.saturating_sub(1));
        while !self.is_resolved() {
            events.push(self.step(source)?);
        }
        if let Some(root) = self.root() {
            info!(root = %root, events = events.len(), "lineages resolved to root");
        }
        Ok(events)
    }

    fn draw_slots<S: IndexSource + ?Sized>(
        &self,
        source: &mut S,
        bound: NonZeroUsize,
    ) -> Result<(usize, usize)> {
        let first = checked_draw(source, bound)?;
        let mut second = checked_draw(source, bound)?;
        let mut redraws = 0_usize;
        while second == first {
            if redraws >= self.max_redraws.get() {
                warn!(
                    slot = first,
                    attempts = redraws,
                    "index source keeps repeating the first slot"
                );
                return Err(SourceViolation::RedrawLimitExceeded {
                    slot: first,
                    attempts: self.max_redraws,
                }
                .into());
            }
            redraws += 1;
            trace!(slot = first, redraws, "second slot matched first; redrawing");
            second = checked_draw(source, bound)?;
        }
        Ok((first, second))
    }

    fn merge(&mut self, first: usize, second: usize) -> Result<CoalescenceEvent> {
        let active = self.active_len;
        let created = Label::new(self.label_ceiling());
        let low = first.min(second);
        let high = first.max(second);

        let consumed = (self.label_at(first)?, self.label_at(second)?);
        // low < high <= active - 1, so the first write never touches the last slot.
        let last = self.label_at(active.saturating_sub(1))?;

        *self.slot_mut(low)? = created;
        *self.slot_mut(high)? = last;
        self.active_len = active - 1;

        Ok(CoalescenceEvent::new(
            consumed,
            created,
            (first, second),
            active,
        ))
    }

    fn label_at(&self, slot: usize) -> Result<Label> {
        self.active
            .get(slot)
            .copied()
            .ok_or(RelabelError::SlotOutOfBounds {
                slot,
                len: self.active.len(),
            })
    }

    fn slot_mut(&mut self, slot: usize) -> Result<&mut Label> {
        let len = self.active.len();
        self.active
            .get_mut(slot)
            .ok_or(RelabelError::SlotOutOfBounds { slot, len })
    }
}

fn checked_draw<S: IndexSource + ?Sized>(
    source: &mut S,
    bound: NonZeroUsize,
) -> core::result::Result<usize, SourceViolation> {
    let index = source.draw_index(bound);
    if index < bound.get() {
        Ok(index)
    } else {
        warn!(
            index,
            bound = bound.get(),
            "index source returned an out-of-range slot"
        );
        Err(SourceViolation::OutOfRange { index, bound })
    }
}
