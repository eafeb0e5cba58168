use crate::options::ValidationError;
use crate::result::Decision;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named step of the per-request decision path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Blocks originless requests to the API namespace unless the host already decided
    /// authentication.
    AuthGuard,
    /// Answers `OPTIONS` requests with the preflight headers and ends the request.
    Preflight,
    /// Matches the `Origin` header against the allow-list snapshot.
    OriginValidation,
    /// Hands the request to the wrapped handler with whatever headers were attached.
    PassThrough,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::AuthGuard => "auth_guard",
            Stage::Preflight => "preflight",
            Stage::OriginValidation => "origin_validation",
            Stage::PassThrough => "pass_through",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const DEFAULT_STAGES: [Stage; 4] = [
    Stage::AuthGuard,
    Stage::Preflight,
    Stage::OriginValidation,
    Stage::PassThrough,
];

/// Ordered stage list. Each stage appears at most once and the list ends with
/// [`Stage::PassThrough`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new<I>(stages: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = Stage>,
    {
        let stages: Vec<Stage> = stages.into_iter().collect();
        if stages.is_empty() {
            return Err(ValidationError::EmptyPipeline);
        }

        for (idx, stage) in stages.iter().enumerate() {
            if stages[..idx].contains(stage) {
                return Err(ValidationError::DuplicateStage(*stage));
            }
        }

        if stages.last() != Some(&Stage::PassThrough) {
            return Err(ValidationError::PassThroughNotLast);
        }

        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn position(&self, stage: Stage) -> Option<usize> {
        self.stages.iter().position(|candidate| *candidate == stage)
    }

    pub fn runs_before(&self, first: Stage, second: Stage) -> bool {
        match (self.position(first), self.position(second)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            stages: DEFAULT_STAGES.to_vec(),
        }
    }
}

/// Result of running one stage.
#[derive(Debug)]
pub(crate) enum StageOutcome {
    Continue,
    Terminate(Decision),
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
