//! Concrete visualizations
//!
//! - [`array`]: contiguous block of integers with index/address labels
//! - [`list`]: singly or doubly linked list of integer nodes
//!
//! Each module defines an action vocabulary, the state the actions act on,
//! and a [`crate::sequencer::Visualization`] implementation tying them
//! together.

pub mod array;
pub mod list;

pub use array::{ArrayAction, ArrayState, ArrayViz};
pub use list::{ListAction, ListKind, ListState, ListViz};
