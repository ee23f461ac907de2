//! Shared test utilities for `coalescent-core`.

use std::{collections::VecDeque, num::NonZeroUsize};

use coalescent_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{label::Label, source::IndexSource};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Converts raw identities into labels for slice comparisons.
#[must_use]
pub(crate) fn labels(ids: &[usize]) -> Vec<Label> {
    ids.iter().copied().map(Label::new).collect()
}

/// [`IndexSource`] that replays a fixed script of draws and counts them.
///
/// Panics when asked for more draws than were scripted so that tests notice
/// the relabeler advancing the source unexpectedly.
#[derive(Clone, Debug)]
pub(crate) struct ScriptedSource {
    script: VecDeque<usize>,
    draws: usize,
}

impl ScriptedSource {
    pub(crate) fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            draws: 0,
        }
    }

    /// Number of draws served so far.
    pub(crate) fn draws(&self) -> usize {
        self.draws
    }

    /// Whether every scripted draw has been consumed.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl IndexSource for ScriptedSource {
    fn draw_index(&mut self, _bound: NonZeroUsize) -> usize {
        self.draws += 1;
        self.script
            .pop_front()
            .expect("scripted source ran out of draws")
    }
}
