//! Handle-indexed arena of running generators
//!
//! [`Animations::start`] takes ownership of a freshly constructed generator and
//! returns an opaque [`AnimationId`]; [`Animations::advance`] pulls its next step.
//! A generator is dropped from the arena as soon as it hands out its terminal step,
//! so a stale handle is reported as [`EngineError::UnknownAnimation`].

use super::errors::EngineError;
use super::{Generator, Step};
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::debug;

/// Opaque handle to a running animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena of running animations
pub struct Animations {
    running: FxHashMap<AnimationId, Box<dyn Generator>>,
    next_id: u64,
}

impl Animations {
    pub fn new() -> Self {
        Animations {
            running: FxHashMap::default(),
            next_id: 1,
        }
    }

    /// Register a generator and return its handle
    pub fn start(&mut self, generator: Box<dyn Generator>) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        debug!(%id, name = generator.name(), "animation registered");
        self.running.insert(id, generator);
        id
    }

    /// Pull the next step of an animation
    pub fn advance(&mut self, id: AnimationId) -> Result<Step, EngineError> {
        let unknown = EngineError::UnknownAnimation { id: id.0 };
        let generator = self.running.get_mut(&id).ok_or(unknown.clone())?;
        let step = generator.advance();
        match step {
            Some(step) if !step.done => Ok(step),
            Some(step) => {
                self.running.remove(&id);
                debug!(%id, "animation completed");
                Ok(step)
            }
            None => {
                self.running.remove(&id);
                Err(unknown)
            }
        }
    }

    /// Drop a running animation; returns whether it existed
    pub fn cancel(&mut self, id: AnimationId) -> bool {
        let existed = self.running.remove(&id).is_some();
        if existed {
            debug!(%id, "animation cancelled");
        }
        existed
    }

    pub fn is_running(&self, id: AnimationId) -> bool {
        self.running.contains_key(&id)
    }

    /// Name of a running animation
    pub fn name(&self, id: AnimationId) -> Option<&'static str> {
        self.running.get(&id).map(|g| g.name())
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }
}

impl Default for Animations {
    fn default() -> Self {
        Self::new()
    }
}
