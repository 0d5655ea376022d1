//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, auto-advance ticker
//! - **[`panes`]** — stateless render functions for each visible pane (header,
//!   array or list canvas, message, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with one
//! [`Lesson`] per topic and call [`App::run`] to start the event loop.
//!
//! [`Lesson`]: crate::catalog::Lesson
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, Control};
