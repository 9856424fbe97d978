//! # Introduction
//!
//! stepviz animates classic algorithms and data-structure operations one visible
//! step at a time. Each algorithm runs as a resumable generator that yields
//! snapshots (frames) of its working data annotated with per-element highlight
//! states; a terminal UI built with [ratatui](https://docs.rs/ratatui) plays the
//! frames back on a fixed cadence.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Validation → Generator → Frames → Player → TUI
//! ```
//!
//! 1. [`engine::input`] validates raw text before anything is constructed.
//! 2. [`engine`] holds the generators: bubble and selection sort, string
//!    reversal, Fibonacci accumulation and linked-list insert/remove.
//! 3. [`frame`] is the immutable snapshot model every generator emits.
//! 4. [`structures`] provides the arena-backed linked list, the bounded circular
//!    queue and the stack.
//! 5. [`ui`] is the ratatui application; not part of the stable library API.
//!
//! [`cli`] and [`logging`] wire up the binary: argument parsing, the headless
//! `--print` mode and the tracing subscriber.

pub mod cli;
pub mod engine;
pub mod frame;
pub mod logging;
pub mod structures;
pub mod ui;
