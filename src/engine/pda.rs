//! Deterministic pushdown automaton execution.

use super::{ReasonCode, RunCursor, RunOutcome, DEFAULT_STEP_LIMIT};
use crate::core::{
    AutomatonDefinition, PdaKey, PdaStep, PdaValue, RunTrace, StackAction, StackSymbol,
    TransitionError, TransitionTable,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// End-of-input acceptance condition for a pushdown automaton.
///
/// A PDA has two natural acceptance criteria: the state reached, and the
/// auxiliary stack being back at the bottom marker. Which one applies is an
/// explicit, per-engine policy rather than an implicit override.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Acceptance {
    /// Accept iff the final state reached is in the final-state set.
    FinalState,
    /// Accept iff the stack top is the bottom marker.
    EmptyStack,
    /// Accept if either criterion holds. This reproduces the classic
    /// behavior where draining the stack is itself an accept signal,
    /// including accepting the empty input (the stack is still `[⊥]`).
    #[default]
    Either,
    /// Accept only if both criteria hold.
    Both,
}

/// Per-call auxiliary stack, initialized to `[⊥]` by every parse.
struct Stack(Vec<StackSymbol>);

impl Stack {
    fn new() -> Self {
        Self(vec![StackSymbol::Bottom])
    }

    /// Top element, or `None` if the stack is empty. Ordinary transitions
    /// never pop the bottom marker, but an emptied stack is still handled
    /// rather than assumed away.
    fn top(&self) -> Option<StackSymbol> {
        self.0.last().copied()
    }

    fn apply(&mut self, action: StackAction, consumed: char) {
        match action {
            StackAction::Push => self.0.push(StackSymbol::Symbol(consumed)),
            StackAction::Pop => {
                self.0.pop();
            }
            StackAction::None => {}
        }
    }

    fn depth(&self) -> usize {
        self.0.len()
    }
}

/// Executes a PDA transition table over input strings.
///
/// Transitions are keyed on `(state, symbol, stack top)` and carry a stack
/// action along with the destination state. `push` pushes the consumed
/// input symbol; any richer stack alphabet is out of scope. As with
/// [`DfaEngine`](super::DfaEngine), `parse` takes `&self` and every call
/// owns its run state, stack included.
///
/// # Example
///
/// ```rust
/// use acceptor::core::{AutomatonDefinition, StackAction, StackSymbol};
/// use acceptor::engine::{Acceptance, PdaEngine};
///
/// let definition = AutomatonDefinition::new(
///     vec!["q0".into(), "q1".into()],
///     vec!["q1".into()],
///     vec!['(', ')'],
/// ).unwrap();
///
/// let mut pda = PdaEngine::new(definition).with_acceptance(Acceptance::EmptyStack);
/// pda.add_transition("q0", '(', StackSymbol::Bottom, "q0", StackAction::Push).unwrap();
/// pda.add_transition("q0", '(', StackSymbol::Symbol('('), "q0", StackAction::Push).unwrap();
/// pda.add_transition("q0", ')', StackSymbol::Symbol('('), "q0", StackAction::Pop).unwrap();
///
/// assert!(pda.parse("(())").accepted);
/// assert!(!pda.parse("(()").accepted);
/// ```
#[derive(Clone, Debug)]
pub struct PdaEngine {
    definition: AutomatonDefinition,
    table: TransitionTable<PdaKey, PdaValue>,
    acceptance: Acceptance,
}

impl PdaEngine {
    /// Create an engine with an empty table and the default
    /// [`Acceptance::Either`] policy.
    pub fn new(definition: AutomatonDefinition) -> Self {
        Self {
            definition,
            table: TransitionTable::new(),
            acceptance: Acceptance::default(),
        }
    }

    /// Replace the acceptance policy.
    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// The definition this engine executes over.
    pub fn definition(&self) -> &AutomatonDefinition {
        &self.definition
    }

    /// The transition table built so far.
    pub fn table(&self) -> &TransitionTable<PdaKey, PdaValue> {
        &self.table
    }

    /// The end-of-input acceptance policy.
    pub fn acceptance(&self) -> Acceptance {
        self.acceptance
    }

    /// Add a transition `(from, symbol, top) -> (to, action)`.
    ///
    /// The stack-top component must be an alphabet symbol or the bottom
    /// marker; everything else is validated as for the DFA table, and
    /// duplicate keys are rejected.
    pub fn add_transition(
        &mut self,
        from: &str,
        symbol: char,
        stack_top: StackSymbol,
        to: &str,
        action: StackAction,
    ) -> Result<(), TransitionError> {
        self.table.insert(
            &self.definition,
            PdaKey::new(from, symbol, stack_top),
            PdaValue::new(to, action),
        )
    }

    /// Parse with the default step limit.
    pub fn parse(&self, input: &str) -> RunOutcome<PdaStep> {
        self.parse_with_limit(input, DEFAULT_STEP_LIMIT)
    }

    /// Run the automaton over `input`.
    ///
    /// Each step looks up `(current state, symbol, stack top)`, moves to
    /// the destination, and applies the stack action. A missing entry —
    /// including the defensive case of an emptied stack — rejects with
    /// `NoTransition`; exceeding `max_steps` rejects with
    /// `StepLimitExceeded`. At end of input the verdict is decided by the
    /// engine's [`Acceptance`] policy; the reported state is the one
    /// actually reached.
    pub fn parse_with_limit(&self, input: &str, max_steps: usize) -> RunOutcome<PdaStep> {
        let mut cursor = RunCursor::new(self.definition.start_state());
        let mut stack = Stack::new();
        let mut trace = RunTrace::new();

        for (index, symbol) in input.chars().enumerate() {
            if cursor.steps >= max_steps {
                return self.outcome(false, ReasonCode::StepLimitExceeded, cursor, input, trace);
            }

            let Some(top) = stack.top() else {
                return self.outcome(false, ReasonCode::NoTransition, cursor, input, trace);
            };

            let key = PdaKey::new(cursor.state.as_str(), symbol, top);
            let Some(value) = self.table.get(&key) else {
                return self.outcome(false, ReasonCode::NoTransition, cursor, input, trace);
            };

            stack.apply(value.action, symbol);
            trace = trace.record(PdaStep {
                index,
                from: cursor.state.clone(),
                symbol,
                stack_top: top,
                to: value.target.clone(),
                action: value.action,
                stack_depth: stack.depth(),
                timestamp: Utc::now(),
            });
            cursor.advance(&value.target);
        }

        let stack_clear = stack.top() == Some(StackSymbol::Bottom);
        let in_final = self.definition.is_final(&cursor.state);
        let accepted = match self.acceptance {
            Acceptance::FinalState => in_final,
            Acceptance::EmptyStack => stack_clear,
            Acceptance::Either => stack_clear || in_final,
            Acceptance::Both => stack_clear && in_final,
        };

        if accepted {
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
        trace: RunTrace<PdaStep>,
    ) -> RunOutcome<PdaStep> {
        RunOutcome {
            accepted,
            reason,
            final_state: cursor.state,
            input: input.to_string(),
            trace,
        }
    }
}
