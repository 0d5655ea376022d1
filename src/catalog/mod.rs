//! Topics and their built-in operations
//!
//! - [`Topic`]: the data structures on offer, with their headline facts
//! - [`Lesson`]: a topic's operation list bound to a sequencer
//! - `arrays` / `linked_lists`: the built-in operation scripts
//!
//! Built-in lessons start on their first operation. Custom lessons can be
//! loaded from a [`crate::script::ScriptSet`] with [`Lesson::from_script`].

mod arrays;
mod lesson;
mod linked_lists;

pub use lesson::Lesson;

use crate::errors::Result;
use crate::script::Operation;
use crate::viz::{ArrayAction, ArrayViz, ListAction, ListKind, ListViz};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    #[default]
    Arrays,
    #[serde(alias = "linked-list", alias = "lists")]
    LinkedLists,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::Arrays, Topic::LinkedLists];

    pub fn slug(self) -> &'static str {
        match self {
            Topic::Arrays => "arrays",
            Topic::LinkedLists => "linked-lists",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Topic::Arrays => "Arrays",
            Topic::LinkedLists => "Linked Lists",
        }
    }

    pub fn category(self) -> &'static str {
        "Data Structures"
    }

    pub fn description(self) -> &'static str {
        match self {
            Topic::Arrays => "Contiguous memory storage for sequential data",
            Topic::LinkedLists => {
                "Dynamic sequential data structure with pointer-based node connections"
            }
        }
    }

    /// Headline (time, space) complexity
    pub fn complexity(self) -> (&'static str, &'static str) {
        match self {
            Topic::Arrays => ("O(1) access", "O(n)"),
            Topic::LinkedLists => ("O(n) access", "O(n)"),
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Topic::Arrays => Topic::LinkedLists,
            Topic::LinkedLists => Topic::Arrays,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arrays" | "array" => Ok(Topic::Arrays),
            "linked-lists" | "linked-list" | "lists" | "list" => Ok(Topic::LinkedLists),
            other => Err(format!(
                "unknown topic '{}' (expected arrays or linked-lists)",
                other
            )),
        }
    }
}

pub fn array_operations() -> Vec<Operation<ArrayAction>> {
    arrays::operations()
}

pub fn list_operations() -> Vec<Operation<ListAction>> {
    linked_lists::operations()
}

pub fn array_lesson(base_interval: Duration) -> Result<Lesson<ArrayViz>> {
    Lesson::new(ArrayViz::default(), array_operations(), base_interval)
}

pub fn list_lesson(kind: ListKind, base_interval: Duration) -> Result<Lesson<ListViz>> {
    Lesson::new(
        ListViz::default().with_kind(kind),
        list_operations(),
        base_interval,
    )
}
