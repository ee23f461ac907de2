//! Record of a single coalescence.

use crate::label::Label;

/// One merge performed by [`crate::CoalescentRelabeler::step`].
///
/// Carries the two consumed labels in ascending order, the ancestral label
/// created for them, and the slot pair that was drawn to select them.
///
/// # Examples
/// ```
/// use coalescent_core::{CoalescentRelabeler, IndexSource};
/// use std::num::NonZeroUsize;
///
/// /// Replays a fixed list of draws.
/// struct Scripted(Vec<usize>);
///
/// impl IndexSource for Scripted {
///     fn draw_index(&mut self, _bound: NonZeroUsize) -> usize {
///         self.0.remove(0)
///     }
/// }
///
/// let mut relabeler = CoalescentRelabeler::new(2)?;
/// let event = relabeler.step(&mut Scripted(vec![1, 0]))?;
/// assert_eq!(event.consumed().map(|label| label.get()), [0, 1]);
/// assert_eq!(event.created().get(), 2);
/// assert_eq!(event.slots(), (1, 0));
/// assert_eq!(event.active_before(), 2);
/// # Ok::<(), coalescent_core::RelabelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoalescenceEvent {
    consumed: [Label; 2],
    created: Label,
    slots: (usize, usize),
    active_before: usize,
}

impl CoalescenceEvent {
    /// Builds an event, sorting the consumed labels.
    #[must_use]
    pub fn new(
        consumed: (Label, Label),
        created: Label,
        slots: (usize, usize),
        active_before: usize,
    ) -> Self {
        let (first, second) = consumed;
        Self {
            consumed: [first.min(second), first.max(second)],
            created,
            slots,
            active_before,
        }
    }

    /// The two labels merged away by this event, smallest first.
    #[rustfmt::skip]
    #[must_use]
    pub const fn consumed(&self) -> [Label; 2] { self.consumed }

    /// The ancestral label created by this event.
    #[rustfmt::skip]
    #[must_use]
    pub const fn created(&self) -> Label { self.created }

    /// The `(c0, c1)` slot pair in draw order.
    #[rustfmt::skip]
    #[must_use]
    pub const fn slots(&self) -> (usize, usize) { self.slots }

    /// Active length immediately before the merge.
    #[rustfmt::skip]
    #[must_use]
    pub const fn active_before(&self) -> usize { self.active_before }
}
