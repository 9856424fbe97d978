//! In-place string reversal with converging left/right pointers

use super::{Generator, Step};
use crate::frame::{Element, Frame, HighlightState};
use tracing::{debug, trace};

/// Swaps characters pairwise from the outside in, one pair per step
///
/// A string of length `n` takes `ceil(n / 2)` steps; the middle character of an
/// odd-length string is swapped with itself on the last one.
pub struct StringReversal {
    elements: Vec<Element>,
    left: usize,
    right: usize,
    remaining: usize,
    finished: bool,
}

impl StringReversal {
    pub fn new(input: &str) -> Self {
        let mut elements: Vec<Element> = input.chars().map(|c| Element::text(c)).collect();
        let len = elements.len();
        if len > 1 {
            elements[0].state = HighlightState::Changing;
            elements[len - 1].state = HighlightState::Changing;
        }
        debug!(len, "string reversal started");
        StringReversal {
            elements,
            left: 0,
            right: len.saturating_sub(1),
            remaining: len.div_ceil(2),
            finished: false,
        }
    }

    /// Steps still to run
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl Generator for StringReversal {
    fn name(&self) -> &'static str {
        "string reversal"
    }

    fn initial_frame(&self) -> Frame {
        Frame::Elements(self.elements.clone())
    }

    fn advance(&mut self) -> Option<Step> {
        if self.finished {
            return None;
        }
        if self.remaining == 0 {
            // Nothing to swap
            self.finished = true;
            return Some(Step::last(self.initial_frame()));
        }

        let (left, right) = (self.left, self.right);
        self.elements.swap(left, right);
        self.elements[left].state = HighlightState::Modified;
        self.elements[right].state = HighlightState::Modified;
        self.remaining -= 1;
        trace!(left, right, "swapped pair");

        if self.remaining > 0 {
            self.left += 1;
            self.right -= 1;
            self.elements[self.left].state = HighlightState::Changing;
            self.elements[self.right].state = HighlightState::Changing;
        }

        let frame = Frame::Elements(self.elements.clone());
        if self.remaining == 0 {
            self.finished = true;
            debug!("string reversal finished");
            Some(Step::last(frame))
        } else {
            Some(Step::next(frame))
        }
    }

    fn is_done(&self) -> bool {
        self.finished
    }
}
