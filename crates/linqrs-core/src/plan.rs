//! Pipeline descriptions: `StageInfo` and `Plan`.
//!
//! A plan is what a pipeline *is*, never what it has done: building one walks
//! the stage chain, not the data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One stage of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageInfo {
    /// Stable operator name (`source`, `where`, `select`, `take`, ...).
    pub name: String,
    /// Operator argument worth showing, e.g. the `n` of `take`.
    pub detail: Option<String>,
    /// Element count of this stage's output, when known without traversal.
    pub known_len: Option<usize>,
}

impl StageInfo {
    pub fn new(name: impl Into<String>, known_len: Option<usize>) -> Self {
        Self {
            name: name.into(),
            detail: None,
            known_len,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl fmt::Display for StageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(detail) = &self.detail {
            write!(f, "({})", detail)?;
        }
        if let Some(len) = self.known_len {
            write!(f, "[{}]", len)?;
        }
        Ok(())
    }
}

/// Ordered stage list, source first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Plan {
    pub stages: Vec<StageInfo>,
}

impl Plan {
    /// A plan consisting of a single anonymous source.
    pub fn source(known_len: Option<usize>) -> Self {
        Self::named_source("source", known_len)
    }

    pub fn named_source(name: &str, known_len: Option<usize>) -> Self {
        Self {
            stages: vec![StageInfo::new(name, known_len)],
        }
    }

    /// Append a downstream stage.
    pub fn with_stage(mut self, stage: StageInfo) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn depth(&self) -> usize {
        self.stages.len()
    }

    /// The outermost stage, i.e. the one a consumer pulls from.
    pub fn output(&self) -> Option<&StageInfo> {
        self.stages.last()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stage) in self.stages.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", stage)?;
        }
        Ok(())
    }
}
