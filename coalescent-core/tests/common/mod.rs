use std::{collections::VecDeque, num::NonZeroUsize};

use coalescent_core::IndexSource;

/// Replays scripted draws and remembers the bound requested for each.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    script: VecDeque<usize>,
    bounds: Vec<usize>,
}

impl Scripted {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            bounds: Vec::new(),
        }
    }

    /// Bounds passed to each draw, in call order.
    #[must_use]
    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl IndexSource for Scripted {
    fn draw_index(&mut self, bound: NonZeroUsize) -> usize {
        self.bounds.push(bound.get());
        self.script
            .pop_front()
            .expect("scripted source ran out of draws")
    }
}
