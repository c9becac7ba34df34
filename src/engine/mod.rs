//! Automaton execution engines.
//!
//! [`DfaEngine`] executes a transition table using only the current state as
//! memory; [`PdaEngine`] adds an auxiliary stack keyed into every lookup.
//! Both expose the same surface: build a table one validated transition at
//! a time, then call `parse` repeatedly.
//!
//! Every `parse` call owns its transient run state (current state, step
//! count, stack) as a local value, so an engine can be shared and parsed
//! against concurrently without external locking. Rejection is a normal
//! outcome carried in [`RunOutcome`], never an error.

mod dfa;
mod pda;

pub use dfa::DfaEngine;
pub use pda::{Acceptance, PdaEngine};

use crate::core::{RunTrace, StepRecord};
use serde::{Deserialize, Serialize};

/// Step limit applied by `parse` when the caller does not supply one.
pub const DEFAULT_STEP_LIMIT: usize = 100;

/// Why a run ended the way it did.
///
/// The three rejection codes are expected outcomes of parsing, not errors:
/// a missing table entry, an end-of-input state that does not satisfy the
/// acceptance condition, or the step-limit safety valve firing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReasonCode {
    Accepted,
    NoTransition,
    NonFinalState,
    StepLimitExceeded,
}

/// Verdict and diagnostics for one `parse` call.
///
/// # Example
///
/// ```rust
/// use acceptor::samples::abb_prefix_dfa;
///
/// let dfa = abb_prefix_dfa();
/// let outcome = dfa.parse("abb");
///
/// assert!(outcome.accepted);
/// assert_eq!(outcome.final_state, "q3");
/// assert_eq!(outcome.trace.path(), vec!["q0", "q1", "q2", "q3"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RunOutcome<R: StepRecord> {
    /// Whether the input was accepted.
    pub accepted: bool,
    /// Why the run ended as it did.
    pub reason: ReasonCode,
    /// The state the automaton was in when the run ended.
    pub final_state: String,
    /// The input the run consumed, echoed for diagnostics.
    pub input: String,
    /// One record per consumed symbol.
    pub trace: RunTrace<R>,
}

impl<R: StepRecord> RunOutcome<R> {
    /// Render the outcome as JSON for an external presentation layer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Transient state of a run in progress. Created fresh by every `parse`
/// call and dropped when the verdict is returned.
pub(crate) struct RunCursor {
    pub state: String,
    pub steps: usize,
}

impl RunCursor {
    pub fn new(start: &str) -> Self {
        Self {
            state: start.to_string(),
            steps: 0,
        }
    }

    pub fn advance(&mut self, to: &str) {
        self.state = to.to_string();
        self.steps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DfaStep;

    #[test]
    fn outcome_renders_as_json() {
        let outcome: RunOutcome<DfaStep> = RunOutcome {
            accepted: false,
            reason: ReasonCode::NoTransition,
            final_state: "q0".into(),
            input: "ba".into(),
            trace: RunTrace::new(),
        };

        let json = outcome.to_json().unwrap();
        assert!(json.contains("\"NoTransition\""));
        assert!(json.contains("\"accepted\":false"));
    }

    #[test]
    fn cursor_tracks_state_and_step_count() {
        let mut cursor = RunCursor::new("q0");
        assert_eq!(cursor.state, "q0");
        assert_eq!(cursor.steps, 0);

        cursor.advance("q1");
        cursor.advance("q2");
        assert_eq!(cursor.state, "q2");
        assert_eq!(cursor.steps, 2);
    }
}
