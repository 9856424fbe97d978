//! Primitive data structures animated by the engine
//!
//! - [`list`]: doubly-linked list with head/tail tracking, stored in an index arena
//! - [`queue`]: fixed-capacity circular queue
//! - [`stack`]: unbounded LIFO stack
//!
//! # Failure Policy
//!
//! Out-of-range list indices and queue overflow/underflow return
//! [`EngineError`](crate::engine::errors::EngineError) before anything is mutated.
//! Stack `pop`/`peek` and list `pop`/`shift` on an empty structure return `None`.

pub mod list;
pub mod queue;
pub mod stack;
