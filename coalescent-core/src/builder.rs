//! Builder utilities for configuring a [`CoalescentRelabeler`].
//!
//! Collects the sample size and the redraw guard, validating both before a
//! relabeler is constructed.

use std::num::NonZeroUsize;

use crate::{Result, error::RelabelError, relabeler::CoalescentRelabeler};

/// Redraw budget used when the caller does not override it.
///
/// A uniform source repeats the first slot with probability at most one half
/// per draw, so exhausting this budget means the source is not uniform.
pub const DEFAULT_MAX_REDRAWS: usize = 1024;

/// Configures and constructs [`CoalescentRelabeler`] instances.
///
/// # Examples
/// ```
/// use coalescent_core::RelabelerBuilder;
///
/// let relabeler = RelabelerBuilder::new()
///     .with_sample_size(10)
///     .with_max_redraws(64)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(relabeler.sample_size(), 10);
/// assert_eq!(relabeler.max_redraws().get(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct RelabelerBuilder {
    sample_size: usize,
    max_redraws: usize,
}

impl Default for RelabelerBuilder {
    fn default() -> Self {
        Self {
            sample_size: 2,
            max_redraws: DEFAULT_MAX_REDRAWS,
        }
    }
}

impl RelabelerBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use coalescent_core::{DEFAULT_MAX_REDRAWS, RelabelerBuilder};
    ///
    /// let builder = RelabelerBuilder::new();
    /// assert_eq!(builder.sample_size(), 2);
    /// assert_eq!(builder.max_redraws(), DEFAULT_MAX_REDRAWS);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of sampled lineages.
    #[must_use]
    pub const fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Returns the configured number of sampled lineages.
    #[must_use]
    pub const fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Overrides how many times the second slot may be redrawn within one
    /// step before the source is declared faulty.
    ///
    /// # Examples
    /// ```
    /// use coalescent_core::RelabelerBuilder;
    ///
    /// let builder = RelabelerBuilder::new().with_max_redraws(8);
    /// assert_eq!(builder.max_redraws(), 8);
    /// ```
    #[must_use]
    pub const fn with_max_redraws(mut self, max_redraws: usize) -> Self {
        self.max_redraws = max_redraws;
        self
    }

    /// Returns the configured redraw budget.
    #[must_use]
    pub const fn max_redraws(&self) -> usize {
        self.max_redraws
    }

    /// Validates the configuration and constructs a [`CoalescentRelabeler`].
    ///
    /// # Errors
    /// Returns [`RelabelError::InvalidSampleSize`] when fewer than two
    /// lineages are requested (or twice the sample size overflows `usize`)
    /// and [`RelabelError::InvalidRedrawLimit`] when
    /// the redraw budget is zero.
    ///
    /// # Examples
    /// ```
    /// use coalescent_core::{RelabelError, RelabelerBuilder};
    ///
    /// let err = RelabelerBuilder::new()
    ///     .with_sample_size(1)
    ///     .build()
    ///     .expect_err("one lineage cannot coalesce");
    /// assert_eq!(err, RelabelError::InvalidSampleSize { got: 1 });
    /// ```
    pub fn build(self) -> Result<CoalescentRelabeler> {
        // Ancestral labels run up to 2n - 2, so 2n must be representable.
        if self.sample_size < 2 || self.sample_size.checked_mul(2).is_none() {
            return Err(RelabelError::InvalidSampleSize {
                got: self.sample_size,
            });
        }
        let max_redraws =
            NonZeroUsize::new(self.max_redraws).ok_or(RelabelError::InvalidRedrawLimit {
                got: self.max_redraws,
            })?;

        Ok(CoalescentRelabeler::from_parts(self.sample_size, max_redraws))
    }
}
