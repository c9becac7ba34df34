//! Deterministic finite automaton execution.

use super::{ReasonCode, RunCursor, RunOutcome, DEFAULT_STEP_LIMIT};
use crate::core::{AutomatonDefinition, DfaKey, DfaStep, RunTrace, TransitionError, TransitionTable};
use chrono::Utc;

/// Executes a DFA transition table over input strings.
///
/// The engine holds only read-only configuration: the definition and the
/// table. `parse` takes `&self` and keeps all run state in a per-call
/// cursor, so one engine may serve any number of concurrent runs.
///
/// # Example
///
/// ```rust
/// use acceptor::core::AutomatonDefinition;
/// use acceptor::engine::DfaEngine;
///
/// let definition = AutomatonDefinition::new(
///     vec!["even".into(), "odd".into()],
///     vec!["even".into()],
///     vec!['x'],
/// ).unwrap();
///
/// let mut dfa = DfaEngine::new(definition);
/// dfa.add_transition("even", 'x', "odd").unwrap();
/// dfa.add_transition("odd", 'x', "even").unwrap();
///
/// assert!(dfa.parse("xx").accepted);
/// assert!(!dfa.parse("xxx").accepted);
/// ```
#[derive(Clone, Debug)]
pub struct DfaEngine {
    definition: AutomatonDefinition,
    table: TransitionTable<DfaKey, String>,
}

impl DfaEngine {
    /// Create an engine with an empty transition table.
    pub fn new(definition: AutomatonDefinition) -> Self {
        Self {
            definition,
            table: TransitionTable::new(),
        }
    }

    /// The definition this engine executes over.
    pub fn definition(&self) -> &AutomatonDefinition {
        &self.definition
    }

    /// The transition table built so far.
    pub fn table(&self) -> &TransitionTable<DfaKey, String> {
        &self.table
    }

    /// Add a transition `(from, symbol) -> to`.
    ///
    /// All components are validated against the definition, and a key that
    /// is already mapped is rejected — the table stays deterministic.
    pub fn add_transition(
        &mut self,
        from: &str,
        symbol: char,
        to: &str,
    ) -> Result<(), TransitionError> {
        self.table
            .insert(&self.definition, DfaKey::new(from, symbol), to.to_string())
    }

    /// Parse with the default step limit.
    pub fn parse(&self, input: &str) -> RunOutcome<DfaStep> {
        self.parse_with_limit(input, DEFAULT_STEP_LIMIT)
    }

    /// Run the automaton over `input`, consuming one symbol per step.
    ///
    /// Starts from `states[0]`, follows the table until the input is
    /// exhausted, a lookup misses (`NoTransition`), or `max_steps` symbols
    /// have been consumed (`StepLimitExceeded` — a safety valve against
    /// pathological configurations). A symbol outside the alphabet can
    /// never have a table entry, so it rejects as `NoTransition` too.
    /// At end of input the verdict is membership of the current state in
    /// the final-state set.
    pub fn parse_with_limit(&self, input: &str, max_steps: usize) -> RunOutcome<DfaStep> {
        let mut cursor = RunCursor::new(self.definition.start_state());
        let mut trace = RunTrace::new();

        for (index, symbol) in input.chars().enumerate() {
            if cursor.steps >= max_steps {
                return self.outcome(false, ReasonCode::StepLimitExceeded, cursor, input, trace);
            }

            let key = DfaKey::new(cursor.state.as_str(), symbol);
            let Some(target) = self.table.get(&key) else {
                return self.outcome(false, ReasonCode::NoTransition, cursor, input, trace);
            };

            trace = trace.record(DfaStep {
                index,
                from: cursor.state.clone(),
                symbol,
                to: target.clone(),
                timestamp: Utc::now(),
            });
            cursor.advance(target);
        }

        if self.definition.is_final(&cursor.state) {
            self.outcome(true, ReasonCode::Accepted, cursor, input, trace)
        } else {
            self.outcome(false, ReasonCode::NonFinalState, cursor, input, trace)
        }
    }

    fn outcome(
        &self,
        accepted: bool,
        reason: ReasonCode,
        cursor: RunCursor,
        input: &str,
        trace: RunTrace<DfaStep>,
    ) -> RunOutcome<DfaStep> {
        RunOutcome {
            accepted,
            reason,
            final_state: cursor.state,
            input: input.to_string(),
            trace,
        }
    }
}
