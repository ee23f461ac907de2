//! Alive-set bookkeeping: each step removes exactly the two consumed labels
//! and inserts exactly the created one, and the active window always holds
//! the alive labels.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{CoalescentRelabeler, Label, LineageLedger};

use super::types::RunFixture;

/// Runs the bookkeeping property for the given fixture.
pub(super) fn run_bookkeeping_property(fixture: &RunFixture) -> TestCaseResult {
    let sample_size = fixture.sample_size;
    let mut relabeler = CoalescentRelabeler::new(sample_size)
        .map_err(|err| TestCaseError::fail(format!("construction failed: {err}")))?;
    let mut ledger = LineageLedger::new(sample_size)
        .map_err(|err| TestCaseError::fail(format!("ledger construction failed: {err}")))?;
    let mut source = fixture.source();

    while !relabeler.is_resolved() {
        ledger
            .verify_window(relabeler.active_labels())
            .map_err(|err| TestCaseError::fail(format!("window drifted: {err}")))?;
        relabeler
            .check_invariants()
            .map_err(|err| TestCaseError::fail(format!("invariant broken: {err}")))?;

        let alive_before = ledger.alive_len();
        let expected_label = relabeler.next_label();
        let event = relabeler
            .step(&mut source)
            .map_err(|err| TestCaseError::fail(format!("step failed: {err} ({fixture:?})")))?;

        let (first, second) = event.slots();
        prop_assert_ne!(first, second);
        prop_assert_eq!(Some(event.created()), expected_label);
        prop_assert_eq!(event.created().get(), 2 * sample_size - event.active_before());
        for label in event.consumed() {
            prop_assert!(ledger.is_alive(label), "label {} was not alive", label);
        }
        ledger
            .record(&event)
            .map_err(|err| TestCaseError::fail(format!("ledger rejected event: {err}")))?;
        prop_assert_eq!(ledger.alive_len(), alive_before - 1);
        prop_assert_eq!(ledger.alive_len(), relabeler.active_len());
    }

    ledger
        .verify_window(relabeler.active_labels())
        .map_err(|err| TestCaseError::fail(format!("final window drifted: {err}")))?;
    prop_assert_eq!(
        ledger.alive().collect::<Vec<_>>(),
        vec![Label::new(2 * sample_size - 2)]
    );
    prop_assert_eq!(ledger.consumed_len(), 2 * sample_size - 2);
    Ok(())
}
