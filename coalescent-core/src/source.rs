//! Injected randomness for slot selection.

use std::num::NonZeroUsize;

/// Supplies uniformly distributed slot indices to
/// [`crate::CoalescentRelabeler::step`].
///
/// Implementations must return a value in `[0, bound)`. The relabeler
/// validates every draw and reports out-of-range values as
/// [`crate::SourceViolation::OutOfRange`] rather than trusting them.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use coalescent_core::IndexSource;
///
/// /// Always picks the highest slot.
/// struct Last;
///
/// impl IndexSource for Last {
///     fn draw_index(&mut self, bound: NonZeroUsize) -> usize {
///         bound.get() - 1
///     }
/// }
///
/// let mut source = Last;
/// assert_eq!(source.draw_index(NonZeroUsize::new(5).expect("non-zero")), 4);
/// ```
pub trait IndexSource {
    /// Draws an index uniformly from `0..bound`.
    fn draw_index(&mut self, bound: NonZeroUsize) -> usize;
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    fn draw_index(&mut self, bound: NonZeroUsize) -> usize {
        (**self).draw_index(bound)
    }
}

/// Adapts any [`rand::Rng`] into an [`IndexSource`].
///
/// Seeding and generator choice stay with the caller.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use coalescent_core::{IndexSource, RngIndexSource};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut source = RngIndexSource::new(SmallRng::seed_from_u64(7));
/// let bound = NonZeroUsize::new(10).expect("non-zero");
/// assert!(source.draw_index(bound) < 10);
/// ```
#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
#[derive(Debug, Clone)]
pub struct RngIndexSource<R> {
    rng: R,
}

#[cfg(feature = "rand")]
impl<R: rand::Rng> RngIndexSource<R> {
    /// Wraps `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

#[cfg(feature = "rand")]
impl<R: rand::Rng> IndexSource for RngIndexSource<R> {
    fn draw_index(&mut self, bound: NonZeroUsize) -> usize {
        self.rng.gen_range(0..bound.get())
    }
}
