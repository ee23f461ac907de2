//! Strategy builders for relabeler property tests.

use proptest::prelude::*;

use super::types::{DrawStyle, RunFixture};

/// Smallest sample size exercised by the property suites.
pub(super) const MIN_SAMPLE_SIZE: usize = 10;
/// Largest sample size exercised by the property suites.
pub(super) const MAX_SAMPLE_SIZE: usize = 50;

/// Generates run fixtures across the tested sample sizes, seeds, and draw
/// styles.
pub(super) fn run_fixture_strategy() -> impl Strategy<Value = RunFixture> {
    (
        MIN_SAMPLE_SIZE..=MAX_SAMPLE_SIZE,
        any::<u64>(),
        any::<DrawStyle>(),
    )
        .prop_map(|(sample_size, seed, style)| RunFixture {
            sample_size,
            seed,
            style,
        })
}
