//! Step generators and the machinery that drives them
//!
//! Each algorithm is an explicit state machine implementing [`Generator`]: the
//! loop counters, pointers and caches of the textbook version become fields, and
//! every call to [`Generator::advance`] runs the algorithm up to its next visible
//! step and returns an owned [`Frame`].
//!
//! - [`sorting`]: bubble and selection sort
//! - [`string`]: in-place string reversal
//! - [`fibonacci`]: memoised Fibonacci prefix accumulation
//! - [`list_ops`]: linked-list insert/remove by head, tail or index
//! - [`registry`]: handle-indexed arena of running generators
//! - [`driver`]: fixed-cadence playback of one generator
//! - [`input`]: validation of raw user input before construction
//! - [`errors`]: [`EngineError`](errors::EngineError)
//!
//! # Execution Model
//!
//! Single-threaded pull model. A generator is owned by one driver; abandoning an
//! animation is dropping its generator.

pub mod constants;
pub mod driver;
pub mod errors;
pub mod fibonacci;
pub mod input;
pub mod list_ops;
pub mod registry;
pub mod sorting;
pub mod string;

use crate::frame::Frame;

/// One advance of a generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub frame: Frame,
    /// Whether this is the terminal frame
    pub done: bool,
}

impl Step {
    pub fn next(frame: Frame) -> Self {
        Step { frame, done: false }
    }

    pub fn last(frame: Frame) -> Self {
        Step { frame, done: true }
    }
}

/// A resumable, finite, non-restartable sequence of frames
pub trait Generator {
    /// Short name shown by the presentation layer
    fn name(&self) -> &'static str;

    /// The state to display before the first advance
    fn initial_frame(&self) -> Frame;

    /// Run to the next visible step.
    ///
    /// Returns `None` once the terminal step has been handed out.
    fn advance(&mut self) -> Option<Step>;

    fn is_done(&self) -> bool;

    /// Advance to completion, collecting every frame including the terminal one
    fn collect_frames(&mut self) -> Vec<Frame> {
        let mut frames = Vec::new();
        while let Some(step) = self.advance() {
            frames.push(step.frame);
            if step.done {
                break;
            }
        }
        frames
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn initial_frame(&self) -> Frame {
        (**self).initial_frame()
    }

    fn advance(&mut self) -> Option<Step> {
        (**self).advance()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }
}
