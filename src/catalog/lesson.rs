//! A topic's operation set bound to one sequencer

use crate::errors::{Error, Result};
use crate::script::{Operation, ScriptSet};
use crate::sequencer::{Sequencer, Visualization};
use std::time::Duration;

/// The operations a viewer can pick from, plus the sequencer playing the
/// picked one
///
/// Operation validity is checked here; the sequencer only ever receives
/// operations from this list.
#[derive(Debug)]
pub struct Lesson<V: Visualization> {
    operations: Vec<Operation<V::Action>>,
    selected: usize,
    sequencer: Sequencer<V>,
}

impl<V> Lesson<V>
where
    V: Visualization,
    V::Action: Clone,
{
    pub fn new(
        viz: V,
        operations: Vec<Operation<V::Action>>,
        base_interval: Duration,
    ) -> Result<Self> {
        let first = operations.first().cloned().ok_or(Error::EmptyScript)?;
        if let Some(empty) = operations.iter().find(|op| op.is_empty()) {
            return Err(Error::EmptyOperation {
                id: empty.id().to_string(),
            });
        }

        Ok(Lesson {
            sequencer: Sequencer::with_base_interval(viz, first, base_interval),
            operations,
            selected: 0,
        })
    }

    /// Build a lesson from a loaded script, using its initial data if given
    pub fn from_script(
        script: ScriptSet<V::Action>,
        make_viz: impl FnOnce(Option<Vec<i64>>) -> V,
        base_interval: Duration,
    ) -> Result<Self> {
        let viz = make_viz(script.initial);
        Self::new(viz, script.operations, base_interval)
    }

    pub fn operations(&self) -> &[Operation<V::Action>] {
        &self.operations
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn operation(&self) -> &Operation<V::Action> {
        self.sequencer.operation()
    }

    pub fn sequencer(&self) -> &Sequencer<V> {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut Sequencer<V> {
        &mut self.sequencer
    }

    /// Switch to the operation at `index`
    ///
    /// Returns false if there is no such operation. Re-selecting the active
    /// operation leaves the playback position alone.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(operation) = self.operations.get(index) else {
            return false;
        };
        if index != self.selected {
            self.selected = index;
            self.sequencer.select_operation(operation.clone());
        }
        true
    }

    pub fn select_by_id(&mut self, id: &str) -> Result<()> {
        match self.operations.iter().position(|op| op.id() == id) {
            Some(index) => {
                self.select(index);
                Ok(())
            }
            None => Err(Error::UnknownOperation {
                id: id.to_string(),
                available: self
                    .operations
                    .iter()
                    .map(|op| op.id())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    pub fn next_operation(&mut self) {
        let index = (self.selected + 1) % self.operations.len();
        self.select(index);
    }

    pub fn previous_operation(&mut self) {
        let len = self.operations.len();
        let index = (self.selected + len - 1) % len;
        self.select(index);
    }
}
