//! Operation scripts
//!
//! An [`Operation`] is a named, ordered list of [`Step`]s. Each step carries
//! an action from a visualization's vocabulary (see [`crate::viz`]) plus the
//! progress message and phase label shown while it is the current step.
//!
//! Operations are either built in (see [`crate::catalog`]) or loaded from a
//! TOML [`ScriptSet`]:
//!
//! ```toml
//! initial = [64, 25, 12, 22, 11]
//!
//! [[operations]]
//! id = "access"
//! name = "Access"
//! description = "Accessing element at index 2"
//!
//! [[operations.steps]]
//! action = "highlight"
//! index = 2
//! message = "Calculate memory address"
//! phase = "calculate"
//! ```

use crate::errors::{Error, Result};
use rustc_hash::FxHashSet;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A visualization's action vocabulary as seen by script loading
pub trait Action {
    /// True for a tag the vocabulary does not recognise
    fn is_unknown(&self) -> bool;
}

/// One scripted transition
///
/// The action's tag and payload fields sit next to `message` and `phase`
/// in the serialized form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step<A> {
    #[serde(flatten)]
    pub action: A,
    pub message: String,
    #[serde(default)]
    pub phase: String,
}

impl<A> Step<A> {
    pub fn new(action: A, message: impl Into<String>, phase: impl Into<String>) -> Self {
        Step {
            action,
            message: message.into(),
            phase: phase.into(),
        }
    }
}

/// A named scenario made of ordered steps
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Operation<A> {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "Vec::new")]
    steps: Vec<Step<A>>,
}

impl<A> Operation<A> {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        steps: Vec<Step<A>>,
    ) -> Self {
        Operation {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            steps,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn steps(&self) -> &[Step<A>] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&Step<A>> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final step (0 for an empty operation)
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// A set of operations loaded from a script file
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "A: Deserialize<'de>"))]
pub struct ScriptSet<A> {
    /// Replaces the visualization's built-in starting data when present
    #[serde(default)]
    pub initial: Option<Vec<i64>>,
    #[serde(default = "Vec::new")]
    pub operations: Vec<Operation<A>>,
}

impl<A: DeserializeOwned + Action> ScriptSet<A> {
    /// Parse and validate a script from TOML text
    pub fn parse(text: &str) -> Result<Self> {
        let set: ScriptSet<A> = toml::from_str(text).map_err(|source| Error::Parse {
            what: "script".to_string(),
            source,
        })?;
        set.validate()?;
        set.warn_unknown_steps();
        Ok(set)
    }

    /// Read, parse and validate a script file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::parse(&text)?;
        tracing::info!(
            path = %path.display(),
            operations = set.operations.len(),
            "loaded script"
        );
        Ok(set)
    }
}

impl<A: Action> ScriptSet<A> {
    /// Operations with steps this vocabulary does not recognise, as
    /// (operation id, unknown steps, total steps)
    ///
    /// Unknown steps replay as no-ops; an operation made only of them is
    /// usually a script written for the other topic.
    pub fn unknown_steps(&self) -> Vec<(&str, usize, usize)> {
        self.operations
            .iter()
            .map(|op| {
                let unknown = op.steps.iter().filter(|s| s.action.is_unknown()).count();
                (op.id.as_str(), unknown, op.steps.len())
            })
            .filter(|&(_, unknown, _)| unknown > 0)
            .collect()
    }

    fn warn_unknown_steps(&self) {
        for (id, unknown, total) in self.unknown_steps() {
            if unknown == total {
                tracing::warn!(
                    operation = id,
                    steps = total,
                    "no step in this operation has a known action; is the script for another topic?"
                );
            } else {
                tracing::warn!(operation = id, unknown, total, "skipping steps with unknown actions");
            }
        }
    }
}

impl<A> ScriptSet<A> {
    fn validate(&self) -> Result<()> {
        if self.operations.is_empty() {
            return Err(Error::EmptyScript);
        }

        let mut seen = FxHashSet::default();
        for op in &self.operations {
            if op.is_empty() {
                return Err(Error::EmptyOperation { id: op.id.clone() });
            }
            if !seen.insert(op.id.as_str()) {
                return Err(Error::DuplicateOperation { id: op.id.clone() });
            }
        }

        Ok(())
    }
}
