//! Reproducibility: a run is fully determined by its slot draws.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{CoalescenceEvent, CoalescentRelabeler, IndexSource, test_utils::ScriptedSource};

use super::types::{Recording, RunFixture};

type Run = (Vec<CoalescenceEvent>, CoalescentRelabeler);

fn run(sample_size: usize, source: &mut impl IndexSource) -> Result<Run, TestCaseError> {
    let mut relabeler = CoalescentRelabeler::new(sample_size)
        .map_err(|err| TestCaseError::fail(format!("construction failed: {err}")))?;
    let events = relabeler
        .run_to_root(source)
        .map_err(|err| TestCaseError::fail(format!("run failed: {err}")))?;
    Ok((events, relabeler))
}

/// Runs the determinism property for the given fixture.
///
/// The same seed must reproduce the same history, and replaying the recorded
/// draws through a scripted source must reproduce it again while consuming
/// exactly those draws.
pub(super) fn run_determinism_property(fixture: &RunFixture) -> TestCaseResult {
    let mut recorded = Recording::new(fixture.source());
    let (events, relabeler) = run(fixture.sample_size, &mut recorded)?;

    let (reseeded_events, reseeded) = run(fixture.sample_size, &mut fixture.source())?;
    prop_assert_eq!(&events, &reseeded_events);
    prop_assert_eq!(relabeler.active_labels(), reseeded.active_labels());

    prop_assert!(recorded.draws.len() >= 2 * (fixture.sample_size - 1));
    let mut scripted = ScriptedSource::new(recorded.draws.iter().copied());
    let (scripted_events, replayed) = run(fixture.sample_size, &mut scripted)?;
    prop_assert_eq!(&events, &scripted_events);
    prop_assert_eq!(relabeler.active_labels(), replayed.active_labels());
    prop_assert!(scripted.is_exhausted());
    prop_assert_eq!(scripted.draws(), recorded.draws.len());
    Ok(())
}
