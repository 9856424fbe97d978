//! Fibonacci prefix accumulation
//!
//! Uses the convention `F(0) = F(1) = 1`. Values are `u64`, which holds every
//! term up to index 92; input validation caps the index at 19 (`F(19) = 6765`).

use super::{Generator, Step};
use crate::frame::{Element, Frame};
use tracing::{debug, trace};

/// Yields `F(0)..=F(i)` for `i` in `0..=target`, one prefix per step
pub struct FibonacciSequence {
    target: usize,
    index: usize,
    cache: Vec<u64>,
    finished: bool,
}

impl FibonacciSequence {
    pub fn new(target: usize) -> Self {
        Self::with_cache(target, Vec::new())
    }

    /// Start from a cache left behind by an earlier run
    pub fn with_cache(target: usize, mut cache: Vec<u64>) -> Self {
        if cache.len() < 2 {
            cache = vec![1, 1];
        }
        debug!(target, cached = cache.len(), "fibonacci started");
        FibonacciSequence {
            target,
            index: 0,
            cache,
            finished: false,
        }
    }

    /// Hand the memo cache back for reuse
    pub fn into_cache(self) -> Vec<u64> {
        self.cache
    }

    /// Number of terms computed so far, including seeded ones
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    fn term(&mut self, index: usize) -> u64 {
        while self.cache.len() <= index {
            let len = self.cache.len();
            let next = self.cache[len - 1] + self.cache[len - 2];
            trace!(index = len, value = next, "cache extended");
            self.cache.push(next);
        }
        self.cache[index]
    }
}

impl Generator for FibonacciSequence {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn initial_frame(&self) -> Frame {
        Frame::Elements(Vec::new())
    }

    fn advance(&mut self) -> Option<Step> {
        if self.finished {
            return None;
        }
        let index = self.index;
        self.term(index);
        let frame = Frame::Elements(
            self.cache[..=index]
                .iter()
                .map(|&n| Element::number(n))
                .collect(),
        );

        if index >= self.target {
            self.finished = true;
            debug!(index, "fibonacci finished");
            Some(Step::last(frame))
        } else {
            self.index += 1;
            Some(Step::next(frame))
        }
    }

    fn is_done(&self) -> bool {
        self.finished
    }
}
