//! TUI pane rendering modules
//!
//! Every pane is a stateless render function over data taken from the active
//! sequencer; no pane changes playback state.
//!
//! # Pane Modules
//!
//! - [`header`]: Topic title and operation tabs
//! - [`array`]: Array cells with index and address labels
//! - [`list`]: Linked list nodes with pointers and markers
//! - [`message`]: Current step message and progress gauge
//! - [`status`]: Status bar with keybindings and playback state

pub mod array;
pub mod header;
pub mod list;
pub mod message;
pub mod status;

// Re-export render functions for convenience
pub use array::render_array_pane;
pub use header::{render_header, HeaderRenderData};
pub use list::render_list_pane;
pub use message::{render_message_pane, MessageRenderData};
pub use status::{render_status_bar, StatusRenderData};
