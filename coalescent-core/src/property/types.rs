//! Fixtures and index sources shared by the relabeler property suites.

use std::num::NonZeroUsize;

use rand::{SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

use crate::{IndexSource, RngIndexSource};

/// How slot draws are produced for a run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum DrawStyle {
    /// Plain uniform draws from a seeded generator.
    #[weight(3)]
    Uniform,
    /// Uniform draws, but every fresh draw is echoed once on the following
    /// call, so the second slot of a step often repeats the first.
    #[weight(1)]
    Echoing,
}

/// One complete coalescence to run.
#[derive(Clone, Copy, Debug)]
pub(super) struct RunFixture {
    pub(super) sample_size: usize,
    pub(super) seed: u64,
    pub(super) style: DrawStyle,
}

impl RunFixture {
    /// Builds the index source described by this fixture.
    pub(super) fn source(&self) -> FixtureSource {
        let inner = RngIndexSource::new(SmallRng::seed_from_u64(self.seed));
        match self.style {
            DrawStyle::Uniform => FixtureSource::Uniform(inner),
            DrawStyle::Echoing => FixtureSource::Echoing { inner, echo: None },
        }
    }
}

/// Index source described by a [`RunFixture`].
pub(super) enum FixtureSource {
    Uniform(RngIndexSource<SmallRng>),
    Echoing {
        inner: RngIndexSource<SmallRng>,
        echo: Option<usize>,
    },
}

impl IndexSource for FixtureSource {
    fn draw_index(&mut self, bound: NonZeroUsize) -> usize {
        match self {
            Self::Uniform(inner) => inner.draw_index(bound),
            Self::Echoing { inner, echo } => match echo.take() {
                Some(previous) if previous < bound.get() => previous,
                _ => {
                    let fresh = inner.draw_index(bound);
                    *echo = Some(fresh);
                    fresh
                }
            },
        }
    }
}

/// Wraps a source and keeps every index it hands out, in order.
pub(super) struct Recording<S> {
    pub(super) inner: S,
    pub(super) draws: Vec<usize>,
}

impl<S: IndexSource> Recording<S> {
    pub(super) const fn new(inner: S) -> Self {
        Self {
            inner,
            draws: Vec::new(),
        }
    }
}

impl<S: IndexSource> IndexSource for Recording<S> {
    fn draw_index(&mut self, bound: NonZeroUsize) -> usize {
        let index = self.inner.draw_index(bound);
        self.draws.push(index);
        index
    }
}
