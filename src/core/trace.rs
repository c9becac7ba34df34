//! Per-run execution traces.
//!
//! A [`RunTrace`] is the structured diagnostic record of a single `parse`
//! call: one [`StepRecord`] per consumed symbol, in order. Traces are
//! immutable — `record` returns a new trace with the step added — and are
//! discarded with the outcome; nothing is shared between runs.

use super::table::{StackAction, StackSymbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Duration;

/// A single executed transition inside a run.
///
/// Implemented by the DFA and PDA step records; the trait exposes the parts
/// every presentation layer needs regardless of the automaton variant.
pub trait StepRecord: Clone + Debug + Serialize + for<'de> Deserialize<'de> {
    /// State the automaton was in before the step.
    fn from_state(&self) -> &str;

    /// State the automaton moved to.
    fn to_state(&self) -> &str;

    /// Input symbol consumed by the step.
    fn symbol(&self) -> char;

    /// When the step executed.
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Step record for a finite automaton run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DfaStep {
    /// Zero-based position of the consumed symbol in the input.
    pub index: usize,
    pub from: String,
    pub symbol: char,
    pub to: String,
    pub timestamp: DateTime<Utc>,
}

impl StepRecord for DfaStep {
    fn from_state(&self) -> &str {
        &self.from
    }

    fn to_state(&self) -> &str {
        &self.to
    }

    fn symbol(&self) -> char {
        self.symbol
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Step record for a pushdown automaton run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PdaStep {
    /// Zero-based position of the consumed symbol in the input.
    pub index: usize,
    pub from: String,
    pub symbol: char,
    /// Stack top the transition was keyed on.
    pub stack_top: StackSymbol,
    pub to: String,
    pub action: StackAction,
    /// Stack depth after the action, bottom marker included.
    pub stack_depth: usize,
    pub timestamp: DateTime<Utc>,
}

impl StepRecord for PdaStep {
    fn from_state(&self) -> &str {
        &self.from
    }

    fn to_state(&self) -> &str {
        &self.to
    }

    fn symbol(&self) -> char {
        self.symbol
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Ordered trace of the steps taken by one run.
///
/// # Example
///
/// ```rust
/// use acceptor::core::{DfaStep, RunTrace};
/// use chrono::Utc;
///
/// let trace = RunTrace::new();
/// let trace = trace.record(DfaStep {
///     index: 0,
///     from: "q0".into(),
///     symbol: 'a',
///     to: "q1".into(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(trace.steps().len(), 1);
/// assert_eq!(trace.path(), vec!["q0", "q1"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RunTrace<R: StepRecord> {
    steps: Vec<R>,
}

impl<R: StepRecord> Default for RunTrace<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: StepRecord> RunTrace<R> {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new trace.
    ///
    /// The existing trace is left untouched.
    pub fn record(&self, step: R) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// All recorded steps, in execution order.
    pub fn steps(&self) -> &[R] {
        &self.steps
    }

    /// The sequence of states visited: the starting state, then the
    /// destination of each step. Empty for a run that took no steps.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.steps.first() {
            path.push(first.from_state());
        }
        for step in &self.steps {
            path.push(step.to_state());
        }
        path
    }

    /// Wall time between the first and last step, if any steps were taken.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            let duration = last.timestamp().signed_duration_since(first.timestamp());
            duration.to_std().ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(index: usize, from: &str, symbol: char, to: &str) -> DfaStep {
        DfaStep {
            index,
            from: from.into(),
            symbol,
            to: to.into(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_trace_is_empty() {
        let trace: RunTrace<DfaStep> = RunTrace::new();
        assert!(trace.steps().is_empty());
        assert!(trace.path().is_empty());
        assert!(trace.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let trace = RunTrace::new();
        let recorded = trace.record(step(0, "q0", 'a', "q1"));

        assert_eq!(trace.steps().len(), 0);
        assert_eq!(recorded.steps().len(), 1);
    }

    #[test]
    fn path_includes_starting_state() {
        let trace = RunTrace::new()
            .record(step(0, "q0", 'a', "q1"))
            .record(step(1, "q1", 'b', "q2"));

        assert_eq!(trace.path(), vec!["q0", "q1", "q2"]);
    }

    #[test]
    fn single_step_trace_has_a_duration() {
        let trace = RunTrace::new().record(step(0, "q0", 'a', "q1"));
        assert!(trace.duration().is_some());
    }

    #[test]
    fn duration_grows_with_step_timestamps() {
        let first = step(0, "q0", 'a', "q1");
        let mut second = step(1, "q1", 'b', "q2");
        second.timestamp = first.timestamp + chrono::Duration::milliseconds(25);

        let trace = RunTrace::new().record(first).record(second);
        assert_eq!(trace.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn pda_step_reports_stack_effect() {
        let step = PdaStep {
            index: 0,
            from: "q0".into(),
            symbol: 'a',
            stack_top: StackSymbol::Bottom,
            to: "q1".into(),
            action: StackAction::Push,
            stack_depth: 2,
            timestamp: Utc::now(),
        };

        assert_eq!(step.from_state(), "q0");
        assert_eq!(step.to_state(), "q1");
        assert_eq!(step.symbol(), 'a');
        assert_eq!(step.stack_depth, 2);
    }

    #[test]
    fn trace_serializes_correctly() {
        let trace = RunTrace::new().record(step(0, "q0", 'a', "q1"));

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: RunTrace<DfaStep> = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, deserialized);
    }
}
