//! Validated automaton descriptions.
//!
//! An [`AutomatonDefinition`] is the immutable configuration shared by both
//! engine variants: the ordered state set, the final-state set, and the
//! input alphabet. All validation happens eagerly at construction; once
//! built, a definition never changes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised when constructing an [`AutomatonDefinition`].
///
/// These are configuration errors: they mean the automaton was described
/// incorrectly and must be surfaced immediately, never retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("state set must contain at least one state")]
    EmptyStates,

    #[error("state '{state}' is listed more than once")]
    DuplicateState { state: String },

    #[error("final state set must contain at least one state")]
    EmptyFinalStates,

    #[error("final state '{state}' is not in the state set")]
    UnknownFinalState { state: String },

    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
}

/// Immutable, validated description of an automaton.
///
/// The first state in `states` is the start state. Alphabet symbols are
/// `char`s, so the single-character requirement holds by construction.
///
/// # Example
///
/// ```rust
/// use acceptor::core::AutomatonDefinition;
///
/// let definition = AutomatonDefinition::new(
///     vec!["q0".into(), "q1".into()],
///     vec!["q1".into()],
///     vec!['a', 'b'],
/// ).unwrap();
///
/// assert_eq!(definition.start_state(), "q0");
/// assert!(definition.is_final("q1"));
/// assert!(definition.in_alphabet('a'));
/// assert!(!definition.in_alphabet('c'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonDefinition {
    states: Vec<String>,
    final_states: BTreeSet<String>,
    alphabet: BTreeSet<char>,
}

impl AutomatonDefinition {
    /// Create a validated definition.
    ///
    /// Fails if any collection is empty, if a state identifier repeats, or
    /// if a final state is not drawn from the state set. Final states are
    /// checked here rather than at parse time so that a bad configuration
    /// cannot masquerade as a string rejection later.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acceptor::core::{AutomatonDefinition, DefinitionError};
    ///
    /// let result = AutomatonDefinition::new(
    ///     vec!["q0".into()],
    ///     vec!["q9".into()],
    ///     vec!['a'],
    /// );
    ///
    /// assert_eq!(
    ///     result.unwrap_err(),
    ///     DefinitionError::UnknownFinalState { state: "q9".into() },
    /// );
    /// ```
    pub fn new(
        states: Vec<String>,
        final_states: Vec<String>,
        alphabet: Vec<char>,
    ) -> Result<Self, DefinitionError> {
        if states.is_empty() {
            return Err(DefinitionError::EmptyStates);
        }

        let mut seen = BTreeSet::new();
        for state in &states {
            if !seen.insert(state.as_str()) {
                return Err(DefinitionError::DuplicateState {
                    state: state.clone(),
                });
            }
        }

        if final_states.is_empty() {
            return Err(DefinitionError::EmptyFinalStates);
        }
        for state in &final_states {
            if !seen.contains(state.as_str()) {
                return Err(DefinitionError::UnknownFinalState {
                    state: state.clone(),
                });
            }
        }

        if alphabet.is_empty() {
            return Err(DefinitionError::EmptyAlphabet);
        }

        Ok(Self {
            final_states: final_states.into_iter().collect(),
            alphabet: alphabet.into_iter().collect(),
            states,
        })
    }

    /// All state identifiers, in declaration order.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// The start state (`states[0]`).
    pub fn start_state(&self) -> &str {
        &self.states[0]
    }

    /// The final-state set.
    pub fn final_states(&self) -> &BTreeSet<String> {
        &self.final_states
    }

    /// The input alphabet.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Check membership in the state set.
    pub fn contains_state(&self, state: &str) -> bool {
        self.states.iter().any(|s| s == state)
    }

    /// Check whether `state` is a final state.
    pub fn is_final(&self, state: &str) -> bool {
        self.final_states.contains(state)
    }

    /// Check membership in the alphabet.
    pub fn in_alphabet(&self, symbol: char) -> bool {
        self.alphabet.contains(&symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AutomatonDefinition {
        AutomatonDefinition::new(
            vec!["q0".into(), "q1".into(), "q2".into()],
            vec!["q2".into()],
            vec!['a', 'b'],
        )
        .unwrap()
    }

    #[test]
    fn first_state_is_the_start_state() {
        let definition = sample();
        assert_eq!(definition.start_state(), "q0");
    }

    #[test]
    fn empty_states_rejected() {
        let result = AutomatonDefinition::new(vec![], vec!["q0".into()], vec!['a']);
        assert_eq!(result.unwrap_err(), DefinitionError::EmptyStates);
    }

    #[test]
    fn duplicate_state_rejected() {
        let result = AutomatonDefinition::new(
            vec!["q0".into(), "q1".into(), "q0".into()],
            vec!["q1".into()],
            vec!['a'],
        );
        assert_eq!(
            result.unwrap_err(),
            DefinitionError::DuplicateState { state: "q0".into() }
        );
    }

    #[test]
    fn empty_final_states_rejected() {
        let result = AutomatonDefinition::new(vec!["q0".into()], vec![], vec!['a']);
        assert_eq!(result.unwrap_err(), DefinitionError::EmptyFinalStates);
    }

    #[test]
    fn final_state_must_be_a_state() {
        let result =
            AutomatonDefinition::new(vec!["q0".into()], vec!["missing".into()], vec!['a']);
        assert_eq!(
            result.unwrap_err(),
            DefinitionError::UnknownFinalState {
                state: "missing".into()
            }
        );
    }

    #[test]
    fn empty_alphabet_rejected() {
        let result = AutomatonDefinition::new(vec!["q0".into()], vec!["q0".into()], vec![]);
        assert_eq!(result.unwrap_err(), DefinitionError::EmptyAlphabet);
    }

    #[test]
    fn membership_queries() {
        let definition = sample();

        assert!(definition.contains_state("q1"));
        assert!(!definition.contains_state("q9"));
        assert!(definition.is_final("q2"));
        assert!(!definition.is_final("q0"));
        assert!(definition.in_alphabet('b'));
        assert!(!definition.in_alphabet('z'));
    }

    #[test]
    fn definition_serializes_correctly() {
        let definition = sample();
        let json = serde_json::to_string(&definition).unwrap();
        let deserialized: AutomatonDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(definition, deserialized);
    }
}
