//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: page state, keyboard event loop, animation playback and the
//!   stack/queue/list models behind each page
//! - **[`panes`]**: stateless render functions (circles, bars, input fields,
//!   status bar)
//! - **[`theme`]**: centralized color palette, including the highlight-state colours
//!
//! The entry point for consumers is [`App`]: construct it with a frame delay and
//! call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
