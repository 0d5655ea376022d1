//! Linked list visualization
//!
//! Nodes are kept in list order. Each node gets an id from a counter stored
//! in the state itself, so replaying the same steps always produces the same
//! ids.

use crate::script::{Action, Step};
use crate::sequencer::Visualization;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Starting data for the built-in linked list operations
pub const INITIAL_LIST: [i64; 5] = [10, 20, 30, 40, 50];

/// Action vocabulary for linked list operations
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ListAction {
    /// Point at a node, clearing every other marker
    Highlight {
        #[serde(default)]
        node_index: Option<usize>,
    },
    /// Follow a next pointer; the node left behind is marked visited
    Move {
        node_index: usize,
        #[serde(default)]
        prev_index: Option<usize>,
    },
    Scan { node_index: usize },
    Found { node_index: usize },
    /// Show a detached node that a later insert links in
    CreateNode { value: i64 },
    LinkNew,
    InsertHead { value: i64 },
    InsertTail { value: i64 },
    InsertAt { value: i64, position: usize },
    MarkDelete { node_index: usize },
    DeleteHead,
    DeleteTail,
    DeleteValue { node_index: usize },
    Complete {
        #[serde(default)]
        node_index: Option<usize>,
    },
    #[serde(other)]
    Unknown,
}

impl Action for ListAction {
    fn is_unknown(&self) -> bool {
        matches!(self, ListAction::Unknown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub id: u64,
    pub value: i64,
}

/// Nodes and markers of the list at one step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub nodes: Vec<Node>,
    pub highlighted: Option<usize>,
    pub selected: Option<usize>,
    pub scanned: Vec<usize>,
    pub deleting: Option<usize>,
    /// Value of a created node that is not linked yet
    pub pending: Option<i64>,
    pub phase: Option<String>,
    next_id: u64,
}

impl ListState {
    pub fn new(values: &[i64]) -> Self {
        let mut state = ListState::default();
        let nodes = values.iter().map(|&value| state.alloc(value)).collect();
        state.nodes = nodes;
        state
    }

    fn alloc(&mut self, value: i64) -> Node {
        let node = Node {
            id: self.next_id,
            value,
        };
        self.next_id += 1;
        node
    }

    pub fn values(&self) -> Vec<i64> {
        self.nodes.iter().map(|n| n.value).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.phase.as_deref() == Some("complete")
    }
}

/// Singly or doubly linked presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListKind {
    #[default]
    Singly,
    Doubly,
}

impl ListKind {
    pub fn toggle(self) -> Self {
        match self {
            ListKind::Singly => ListKind::Doubly,
            ListKind::Doubly => ListKind::Singly,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListKind::Singly => "Singly Linked List",
            ListKind::Doubly => "Doubly Linked List",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ListKind::Singly => write!(f, "singly"),
            ListKind::Doubly => write!(f, "doubly"),
        }
    }
}

impl FromStr for ListKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "singly" | "single" => Ok(ListKind::Singly),
            "doubly" | "double" => Ok(ListKind::Doubly),
            other => Err(format!("unknown list kind '{}' (expected singly or doubly)", other)),
        }
    }
}

/// Linked list visualization with its starting data
#[derive(Debug, Clone, PartialEq)]
pub struct ListViz {
    initial: Vec<i64>,
    kind: ListKind,
}

impl ListViz {
    pub fn new(initial: Vec<i64>, kind: ListKind) -> Self {
        ListViz { initial, kind }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn with_kind(&self, kind: ListKind) -> Self {
        ListViz {
            initial: self.initial.clone(),
            kind,
        }
    }
}

impl Default for ListViz {
    fn default() -> Self {
        Self::new(INITIAL_LIST.to_vec(), ListKind::Singly)
    }
}

impl Visualization for ListViz {
    type State = ListState;
    type Action = ListAction;

    fn initial_state(&self) -> ListState {
        ListState::new(&self.initial)
    }

    fn apply_step(&self, mut state: ListState, step: &Step<ListAction>) -> ListState {
        if step.action == ListAction::Unknown {
            return state;
        }

        state.phase = Some(step.phase.clone());

        match &step.action {
            ListAction::Highlight { node_index } => {
                state.highlighted = *node_index;
                state.selected = None;
                state.scanned.clear();
                state.deleting = None;
                state.pending = None;
            }
            ListAction::Move {
                node_index,
                prev_index,
            } => {
                if let Some(prev) = prev_index {
                    if !state.scanned.contains(prev) {
                        state.scanned.push(*prev);
                    }
                }
                state.highlighted = Some(*node_index);
            }
            ListAction::Scan { node_index } => {
                state.scanned.push(*node_index);
                state.highlighted = Some(*node_index);
            }
            ListAction::Found { node_index } => {
                state.highlighted = None;
                state.selected = Some(*node_index);
            }
            ListAction::CreateNode { value } => {
                state.pending = Some(*value);
            }
            ListAction::LinkNew => {}
            ListAction::InsertHead { value } => {
                let node = state.alloc(*value);
                state.nodes.insert(0, node);
                state.pending = None;
                state.selected = Some(0);
                state.highlighted = None;
            }
            ListAction::InsertTail { value } => {
                let node = state.alloc(*value);
                state.nodes.push(node);
                state.pending = None;
                state.selected = Some(state.nodes.len() - 1);
                state.highlighted = None;
            }
            ListAction::InsertAt { value, position } => {
                let at = (*position).min(state.nodes.len());
                let node = state.alloc(*value);
                state.nodes.insert(at, node);
                state.pending = None;
                state.selected = Some(at);
                state.highlighted = None;
            }
            ListAction::MarkDelete { node_index } => {
                state.deleting = Some(*node_index);
                state.highlighted = None;
            }
            ListAction::DeleteHead => {
                if !state.nodes.is_empty() {
                    state.nodes.remove(0);
                }
                state.deleting = None;
            }
            ListAction::DeleteTail => {
                state.nodes.pop();
                state.deleting = None;
            }
            ListAction::DeleteValue { node_index } => {
                if *node_index < state.nodes.len() {
                    state.nodes.remove(*node_index);
                }
                state.deleting = None;
            }
            ListAction::Complete { node_index } => {
                if let Some(index) = node_index {
                    state.selected = Some(*index);
                }
                state.highlighted = None;
                state.deleting = None;
            }
            ListAction::Unknown => {}
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(viz: &ListViz, state: ListState, action: ListAction) -> ListState {
        viz.apply_step(state, &Step::new(action, "", "test"))
    }

    #[test]
    fn test_initial_ids_are_sequential() {
        let state = ListState::new(&INITIAL_LIST);
        let ids: Vec<u64> = state.nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_move_marks_previous_once() {
        let viz = ListViz::default();
        let state = apply(
            &viz,
            viz.initial_state(),
            ListAction::Move {
                node_index: 1,
                prev_index: Some(0),
            },
        );
        let state = apply(
            &viz,
            state,
            ListAction::Move {
                node_index: 1,
                prev_index: Some(0),
            },
        );
        assert_eq!(state.scanned, vec![0]);
        assert_eq!(state.highlighted, Some(1));
    }

    #[test]
    fn test_insert_head_gets_fresh_id() {
        let viz = ListViz::default();
        let state = apply(&viz, viz.initial_state(), ListAction::CreateNode { value: 5 });
        assert_eq!(state.pending, Some(5));

        let state = apply(&viz, state, ListAction::InsertHead { value: 5 });
        assert_eq!(state.values(), vec![5, 10, 20, 30, 40, 50]);
        assert_eq!(state.nodes[0].id, 5);
        assert_eq!(state.pending, None);
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_insert_tail_selects_new_node() {
        let viz = ListViz::default();
        let state = apply(&viz, viz.initial_state(), ListAction::InsertTail { value: 60 });
        assert_eq!(state.values(), vec![10, 20, 30, 40, 50, 60]);
        assert_eq!(state.selected, Some(5));
    }

    #[test]
    fn test_insert_at_position() {
        let viz = ListViz::default();
        let state = apply(
            &viz,
            viz.initial_state(),
            ListAction::InsertAt {
                value: 25,
                position: 2,
            },
        );
        assert_eq!(state.values(), vec![10, 20, 25, 30, 40, 50]);
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn test_deletes_on_empty_list_do_not_panic() {
        let viz = ListViz::new(Vec::new(), ListKind::Singly);
        let state = apply(&viz, viz.initial_state(), ListAction::DeleteHead);
        let state = apply(&viz, state, ListAction::DeleteTail);
        let state = apply(&viz, state, ListAction::DeleteValue { node_index: 3 });
        assert!(state.nodes.is_empty());
    }

    #[test]
    fn test_delete_value_clears_mark() {
        let viz = ListViz::default();
        let state = apply(&viz, viz.initial_state(), ListAction::MarkDelete { node_index: 2 });
        assert_eq!(state.deleting, Some(2));

        let state = apply(&viz, state, ListAction::DeleteValue { node_index: 2 });
        assert_eq!(state.values(), vec![10, 20, 40, 50]);
        assert_eq!(state.deleting, None);
    }

    #[test]
    fn test_unknown_action_is_noop() {
        let viz = ListViz::default();
        let before = apply(&viz, viz.initial_state(), ListAction::Scan { node_index: 0 });
        let after = apply(&viz, before.clone(), ListAction::Unknown);
        assert_eq!(before, after);
    }

    #[test]
    fn test_list_kind_parsing() {
        assert_eq!("doubly".parse::<ListKind>(), Ok(ListKind::Doubly));
        assert_eq!("Singly".parse::<ListKind>(), Ok(ListKind::Singly));
        assert!("triply".parse::<ListKind>().is_err());
        assert_eq!(ListKind::Singly.toggle(), ListKind::Doubly);
    }
}
