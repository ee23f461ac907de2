//! Permanent lineage identities.

use std::fmt;

/// Identity of a lineage for the lifetime of a simulation.
///
/// For a sample of `n` lineages, labels `0..n` are the sampled leaves and
/// labels `n..=2n-2` are ancestral lineages in creation order, ending at the
/// root.
///
/// # Examples
/// ```
/// use coalescent_core::Label;
///
/// let label = Label::new(4);
/// assert_eq!(label.get(), 4);
/// assert_eq!(label.to_string(), "4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(usize);

impl Label {
    /// Creates a label from its numeric identity.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: usize) -> Self { Self(id) }

    /// Returns the numeric identity.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
