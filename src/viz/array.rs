//! Array visualization
//!
//! Models a fixed block of integers with per-cell markers. Most actions only
//! move markers around; `insert`, `shift_left` and `update` change the data.

use crate::script::{Action, Step};
use crate::sequencer::Visualization;
use serde::Deserialize;

/// Starting data for the built-in array operations
pub const INITIAL_ARRAY: [i64; 5] = [64, 25, 12, 22, 11];

/// Address of cell 0 in the rendered memory block
pub const BASE_ADDRESS: u64 = 0x3e8;

/// Bytes per cell in the rendered memory block
pub const CELL_SIZE: u64 = 4;

/// Action vocabulary for array operations
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ArrayAction {
    /// Point at a single cell, clearing selection and scan marks
    Highlight { index: usize },
    Select { index: usize },
    /// Mark a cell as visited by a linear scan
    Scan { index: usize },
    Found { index: usize },
    /// Mark cells that are about to move right
    Shift { indices: Vec<usize> },
    Insert { index: usize, value: i64 },
    /// Mark a cell for removal; the following `shift_left` removes it
    Remove { index: usize },
    ShiftLeft { indices: Vec<usize> },
    Update { index: usize, value: i64 },
    Complete {
        #[serde(default)]
        index: Option<usize>,
    },
    #[serde(other)]
    Unknown,
}

impl Action for ArrayAction {
    fn is_unknown(&self) -> bool {
        matches!(self, ArrayAction::Unknown)
    }
}

/// Contents and markers of the array at one step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayState {
    pub values: Vec<i64>,
    pub highlighted: Vec<usize>,
    pub selected: Option<usize>,
    pub scanned: Vec<usize>,
    pub shifting: Vec<usize>,
    pub phase: Option<String>,
}

/// Markers that apply to one cell, resolved for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellMarks {
    pub highlighted: bool,
    pub selected: bool,
    /// Only set when the cell is neither highlighted nor selected
    pub scanned: bool,
    pub shifting: bool,
    /// Selected cell of a finished operation
    pub done: bool,
}

impl ArrayState {
    pub fn new(values: Vec<i64>) -> Self {
        ArrayState {
            values,
            ..Default::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase.as_deref() == Some("complete")
    }

    pub fn marks(&self, index: usize) -> CellMarks {
        let highlighted = self.highlighted.contains(&index);
        let selected = self.selected == Some(index);
        CellMarks {
            highlighted,
            selected,
            scanned: self.scanned.contains(&index) && !highlighted && !selected,
            shifting: self.shifting.contains(&index),
            done: selected && self.is_complete(),
        }
    }

    pub fn address(index: usize) -> u64 {
        BASE_ADDRESS + index as u64 * CELL_SIZE
    }
}

/// Array visualization with its starting data
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayViz {
    initial: Vec<i64>,
}

impl ArrayViz {
    pub fn new(initial: Vec<i64>) -> Self {
        ArrayViz { initial }
    }
}

impl Default for ArrayViz {
    fn default() -> Self {
        Self::new(INITIAL_ARRAY.to_vec())
    }
}

impl Visualization for ArrayViz {
    type State = ArrayState;
    type Action = ArrayAction;

    fn initial_state(&self) -> ArrayState {
        ArrayState::new(self.initial.clone())
    }

    fn apply_step(&self, mut state: ArrayState, step: &Step<ArrayAction>) -> ArrayState {
        if step.action == ArrayAction::Unknown {
            return state;
        }

        state.phase = Some(step.phase.clone());

        match &step.action {
            ArrayAction::Highlight { index } => {
                state.highlighted = vec![*index];
                state.selected = None;
                state.scanned.clear();
            }
            ArrayAction::Select { index } | ArrayAction::Found { index } => {
                state.highlighted.clear();
                state.selected = Some(*index);
            }
            ArrayAction::Scan { index } => {
                state.scanned.push(*index);
                state.highlighted = vec![*index];
            }
            ArrayAction::Shift { indices } => {
                state.shifting = indices.clone();
            }
            ArrayAction::Insert { index, value } => {
                let at = (*index).min(state.values.len());
                state.values.insert(at, *value);
                state.shifting.clear();
                state.highlighted.clear();
                state.selected = Some(at);
            }
            ArrayAction::Remove { index } => {
                state.selected = Some(*index);
            }
            ArrayAction::ShiftLeft { indices } => {
                state.shifting = indices.clone();
                if let Some(at) = state.selected.take() {
                    if at < state.values.len() {
                        state.values.remove(at);
                    }
                }
            }
            ArrayAction::Update { index, value } => {
                if let Some(slot) = state.values.get_mut(*index) {
                    *slot = *value;
                }
            }
            ArrayAction::Complete { index } => {
                state.shifting.clear();
                if let Some(index) = index {
                    state.selected = Some(*index);
                }
            }
            ArrayAction::Unknown => {}
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(viz: &ArrayViz, state: ArrayState, action: ArrayAction) -> ArrayState {
        viz.apply_step(state, &Step::new(action, "", "test"))
    }

    #[test]
    fn test_highlight_clears_selection_and_scan() {
        let viz = ArrayViz::default();
        let mut state = viz.initial_state();
        state.selected = Some(4);
        state.scanned = vec![0, 1];

        let state = apply(&viz, state, ArrayAction::Highlight { index: 2 });
        assert_eq!(state.highlighted, vec![2]);
        assert_eq!(state.selected, None);
        assert!(state.scanned.is_empty());
        assert_eq!(state.phase.as_deref(), Some("test"));
    }

    #[test]
    fn test_scan_accumulates() {
        let viz = ArrayViz::default();
        let state = apply(&viz, viz.initial_state(), ArrayAction::Scan { index: 0 });
        let state = apply(&viz, state, ArrayAction::Scan { index: 1 });

        assert_eq!(state.scanned, vec![0, 1]);
        assert_eq!(state.highlighted, vec![1]);
        assert!(state.marks(0).scanned);
        // The highlighted cell does not also show as scanned
        assert!(!state.marks(1).scanned);
    }

    #[test]
    fn test_insert_past_end_appends() {
        let viz = ArrayViz::new(vec![1, 2]);
        let state = apply(&viz, viz.initial_state(), ArrayAction::Insert { index: 9, value: 3 });

        assert_eq!(state.values, vec![1, 2, 3]);
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn test_shift_left_removes_marked_cell() {
        let viz = ArrayViz::default();
        let state = apply(&viz, viz.initial_state(), ArrayAction::Remove { index: 3 });
        assert_eq!(state.values, INITIAL_ARRAY.to_vec());

        let state = apply(&viz, state, ArrayAction::ShiftLeft { indices: vec![4] });
        assert_eq!(state.values, vec![64, 25, 12, 11]);
        assert_eq!(state.selected, None);
        assert_eq!(state.shifting, vec![4]);
    }

    #[test]
    fn test_shift_left_without_mark_keeps_data() {
        let viz = ArrayViz::default();
        let state = apply(&viz, viz.initial_state(), ArrayAction::ShiftLeft { indices: vec![1] });
        assert_eq!(state.values, INITIAL_ARRAY.to_vec());
    }

    #[test]
    fn test_update_out_of_range_is_ignored() {
        let viz = ArrayViz::default();
        let state = apply(&viz, viz.initial_state(), ArrayAction::Update { index: 7, value: 1 });
        assert_eq!(state.values, INITIAL_ARRAY.to_vec());
    }

    #[test]
    fn test_unknown_action_is_noop() {
        let viz = ArrayViz::default();
        let before = apply(&viz, viz.initial_state(), ArrayAction::Highlight { index: 1 });
        let after = apply(&viz, before.clone(), ArrayAction::Unknown);
        assert_eq!(before, after);
    }

    #[test]
    fn test_done_mark_needs_complete_phase() {
        let viz = ArrayViz::default();
        let state = viz.apply_step(
            viz.initial_state(),
            &Step::new(ArrayAction::Complete { index: Some(2) }, "", "complete"),
        );
        assert!(state.marks(2).done);
        assert!(!state.marks(1).done);
    }

    #[test]
    fn test_addresses() {
        assert_eq!(ArrayState::address(0), 0x3e8);
        assert_eq!(ArrayState::address(3), 0x3f4);
    }
}
