//! Label coverage: a full run consumes every non-root label exactly once.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{CoalescentRelabeler, Label};

use super::types::RunFixture;

/// Runs the coverage property for the given fixture.
pub(super) fn run_coverage_property(fixture: &RunFixture) -> TestCaseResult {
    let sample_size = fixture.sample_size;
    let root = 2 * sample_size - 2;
    let mut relabeler = CoalescentRelabeler::new(sample_size)
        .map_err(|err| TestCaseError::fail(format!("construction failed: {err}")))?;
    let events = relabeler
        .run_to_root(&mut fixture.source())
        .map_err(|err| TestCaseError::fail(format!("run failed: {err} ({fixture:?})")))?;

    prop_assert_eq!(events.len(), sample_size - 1);

    let mut counts = vec![0_usize; root + 1];
    for event in &events {
        for label in event.consumed() {
            let Some(count) = counts.get_mut(label.get()) else {
                return Err(TestCaseError::fail(format!(
                    "label {label} lies outside 0..={root}"
                )));
            };
            *count += 1;
        }
    }
    for (label, &count) in counts.iter().enumerate().take(root) {
        prop_assert_eq!(count, 1, "label {} consumed {} times", label, count);
    }
    prop_assert_eq!(counts.get(root).copied(), Some(0), "root was consumed");

    let created: Vec<usize> = events.iter().map(|event| event.created().get()).collect();
    let expected: Vec<usize> = (sample_size..=root).collect();
    prop_assert_eq!(created, expected);
    prop_assert_eq!(relabeler.root(), Some(Label::new(root)));
    Ok(())
}
