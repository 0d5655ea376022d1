//! # Introduction
//!
//! structviz replays data structure operations one step at a time. Each
//! operation is a short script of steps (highlight a cell, shift elements,
//! unlink a node, ...) and the viewer can step forward and backward through
//! it or let it play on a timer, in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Script (built in or TOML) → Operation → Sequencer → Visualization state → TUI
//! ```
//!
//! 1. [`script`] — the [`script::Operation`] / [`script::Step`] model and
//!    TOML script loading.
//! 2. [`sequencer`] — the replay engine. The state at any step is the fold
//!    of every step up to it over the initial data, so seeking backwards is
//!    a replay from the start.
//! 3. [`viz`] — the array and linked list action vocabularies and the
//!    states they act on.
//! 4. [`catalog`] — topics and their built-in operations, bound into
//!    [`catalog::Lesson`]s.
//! 5. [`config`] / [`errors`] — configuration file and error types.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod script;
pub mod sequencer;
pub mod ui;
pub mod viz;
