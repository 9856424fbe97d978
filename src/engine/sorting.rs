//! Bubble sort and selection sort as step generators
//!
//! Both generators yield one frame per comparison and finish with a terminal frame
//! in which every element is `Modified`. Sequences of zero or one element produce
//! only the terminal frame.
//!
//! # Comparator
//!
//! Ascending keeps a pair in order when `a <= b`, descending when `a >= b`, so
//! equal values never swap. Neither algorithm is stable, and ties may still end up
//! reordered by selection sort's long-distance swaps.

use super::{Generator, Step};
use crate::frame::{Element, Frame, HighlightState, Value};
use tracing::{debug, trace};

/// Requested sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Whether `a` may stay in front of `b`
    pub fn keeps_order(self, a: &Value, b: &Value) -> bool {
        match self {
            Direction::Ascending => a <= b,
            Direction::Descending => a >= b,
        }
    }
}

/// Available sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
}

impl SortAlgorithm {
    /// Construct the generator for this algorithm
    pub fn build(self, elements: Vec<Element>, direction: Direction) -> Box<dyn Generator> {
        match self {
            SortAlgorithm::Bubble => Box::new(BubbleSort::new(elements, direction)),
            SortAlgorithm::Selection => Box::new(SelectionSort::new(elements, direction)),
        }
    }
}

/// Wrap raw numbers as `Default` elements
pub fn elements_from_values(values: &[u64]) -> Vec<Element> {
    values.iter().map(|&n| Element::number(n)).collect()
}

fn reset_states(elements: &mut [Element]) {
    for element in elements.iter_mut() {
        element.state = HighlightState::Default;
    }
}

fn swap_values(elements: &mut [Element], a: usize, b: usize) {
    if a != b {
        let (lo, hi) = (a.min(b), a.max(b));
        let (left, right) = elements.split_at_mut(hi);
        std::mem::swap(&mut left[lo].value, &mut right[0].value);
    }
}

fn terminal_step(elements: &mut [Element]) -> Step {
    for element in elements.iter_mut() {
        element.state = HighlightState::Modified;
    }
    Step::last(Frame::Elements(elements.to_vec()))
}

/// Bubble sort: adjacent comparisons, largest-first settling at the back
pub struct BubbleSort {
    elements: Vec<Element>,
    direction: Direction,
    /// Completed passes; the last `pass` elements are settled
    pass: usize,
    /// Left index of the next comparison
    index: usize,
    /// Left index of the comparison shown by the previous frame
    pending: Option<usize>,
    comparisons: usize,
    finished: bool,
}

impl BubbleSort {
    pub fn new(mut elements: Vec<Element>, direction: Direction) -> Self {
        reset_states(&mut elements);
        debug!(algorithm = "bubble", len = elements.len(), ?direction, "sort started");
        BubbleSort {
            elements,
            direction,
            pass: 0,
            index: 0,
            pending: None,
            comparisons: 0,
            finished: false,
        }
    }

    pub fn comparisons(&self) -> usize {
        self.comparisons
    }
}

impl Generator for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble sort"
    }

    fn initial_frame(&self) -> Frame {
        Frame::Elements(self.elements.clone())
    }

    fn advance(&mut self) -> Option<Step> {
        if self.finished {
            return None;
        }
        let len = self.elements.len();

        // Settle the pair shown by the previous frame
        if let Some(j) = self.pending.take() {
            self.elements[j].state = HighlightState::Default;
            if j + 2 == len - self.pass {
                self.elements[j + 1].state = HighlightState::Modified;
                self.pass += 1;
                self.index = 0;
            } else {
                self.index = j + 1;
            }
        }

        if len >= 2 && self.pass < len - 1 {
            let j = self.index;
            self.elements[j].state = HighlightState::Changing;
            self.elements[j + 1].state = HighlightState::Changing;
            if !self
                .direction
                .keeps_order(&self.elements[j].value, &self.elements[j + 1].value)
            {
                swap_values(&mut self.elements, j, j + 1);
            }
            self.pending = Some(j);
            self.comparisons += 1;
            trace!(pass = self.pass, index = j, "bubble comparison");
            return Some(Step::next(Frame::Elements(self.elements.clone())));
        }

        self.finished = true;
        debug!(comparisons = self.comparisons, "bubble sort finished");
        Some(terminal_step(&mut self.elements))
    }

    fn is_done(&self) -> bool {
        self.finished
    }
}

/// Selection sort: scan the unsorted region for its extremum, swap it to the front
pub struct SelectionSort {
    elements: Vec<Element>,
    direction: Direction,
    /// Position being filled; everything before it is settled
    target: usize,
    /// Next candidate to visit
    cursor: usize,
    /// Running extremum of the current scan
    best: Option<usize>,
    /// Candidate shown by the previous frame
    pending: Option<usize>,
    scans: usize,
    finished: bool,
}

impl SelectionSort {
    pub fn new(mut elements: Vec<Element>, direction: Direction) -> Self {
        reset_states(&mut elements);
        debug!(algorithm = "selection", len = elements.len(), ?direction, "sort started");
        SelectionSort {
            elements,
            direction,
            target: 0,
            cursor: 0,
            best: None,
            pending: None,
            scans: 0,
            finished: false,
        }
    }

    pub fn scans(&self) -> usize {
        self.scans
    }
}

impl Generator for SelectionSort {
    fn name(&self) -> &'static str {
        "selection sort"
    }

    fn initial_frame(&self) -> Frame {
        Frame::Elements(self.elements.clone())
    }

    fn advance(&mut self) -> Option<Step> {
        if self.finished {
            return None;
        }
        let len = self.elements.len();

        if let Some(j) = self.pending.take() {
            if j != self.target {
                self.elements[j].state = HighlightState::Default;
            }
            if j + 1 == len {
                // Scan complete: move the extremum into place
                let best = self.best.take().unwrap_or(self.target);
                swap_values(&mut self.elements, best, self.target);
                self.elements[self.target].state = HighlightState::Modified;
                self.target += 1;
                self.cursor = self.target;
            } else {
                self.cursor = j + 1;
            }
        }

        if len >= 2 && self.target < len {
            let j = self.cursor;
            if j == self.target {
                self.elements[self.target].state = HighlightState::Changing;
            }
            self.elements[j].state = HighlightState::Changing;
            self.best = match self.best {
                Some(best)
                    if self
                        .direction
                        .keeps_order(&self.elements[best].value, &self.elements[j].value) =>
                {
                    Some(best)
                }
                _ => Some(j),
            };
            self.pending = Some(j);
            self.scans += 1;
            trace!(target = self.target, candidate = j, "selection scan");
            return Some(Step::next(Frame::Elements(self.elements.clone())));
        }

        self.finished = true;
        debug!(scans = self.scans, "selection sort finished");
        Some(terminal_step(&mut self.elements))
    }

    fn is_done(&self) -> bool {
        self.finished
    }
}
