//! Fixed-cadence playback of a generator
//!
//! The [`Player`] owns one generator, the last frame it produced and the timer
//! state. Callers pass the current [`Instant`] into [`Player::tick`], so the player
//! holds no clock of its own and can be driven deterministically in tests.

use super::{Generator, Step};
use crate::frame::Frame;
use std::time::{Duration, Instant};
use tracing::trace;

/// Outcome of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not due yet, or already finished
    Idle,
    /// A new frame replaced the displayed one
    Advanced,
    /// The terminal frame was applied; stop ticking
    Finished,
}

/// Pulls frames from a generator on a fixed interval
pub struct Player<G: Generator> {
    generator: G,
    frame: Frame,
    interval: Duration,
    last_tick: Instant,
    steps: usize,
    finished: bool,
}

impl<G: Generator> Player<G> {
    /// Start playback; the first frame is due one interval after `now`
    pub fn start(generator: G, interval: Duration, now: Instant) -> Self {
        let frame = generator.initial_frame();
        Player {
            generator,
            frame,
            interval,
            last_tick: now,
            steps: 0,
            finished: false,
        }
    }

    /// Frame currently on display
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Frames applied so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn into_generator(self) -> G {
        self.generator
    }

    /// Advance if an interval has elapsed since the previous frame
    pub fn tick(&mut self, now: Instant) -> Tick {
        if self.finished || now.saturating_duration_since(self.last_tick) < self.interval {
            return Tick::Idle;
        }
        self.last_tick = now;
        self.step()
    }

    /// Advance immediately, ignoring the cadence
    pub fn step(&mut self) -> Tick {
        if self.finished {
            return Tick::Idle;
        }
        match self.generator.advance() {
            Some(Step { frame, done }) => {
                self.frame = frame;
                self.steps += 1;
                trace!(steps = self.steps, done, "frame applied");
                if done {
                    self.finished = true;
                    Tick::Finished
                } else {
                    Tick::Advanced
                }
            }
            None => {
                self.finished = true;
                Tick::Finished
            }
        }
    }
}

/// A position highlighted until a deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash {
    pub index: usize,
    pub until: Instant,
}

impl Flash {
    pub fn new(index: usize, duration: Duration, now: Instant) -> Self {
        Flash {
            index,
            until: now + duration,
        }
    }

    /// The highlighted position, while the flash lasts
    pub fn active(&self, now: Instant) -> Option<usize> {
        (now < self.until).then_some(self.index)
    }
}
