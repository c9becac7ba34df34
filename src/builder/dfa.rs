//! Builder for deterministic finite automata.

use crate::builder::error::BuildError;
use crate::core::AutomatonDefinition;
use crate::engine::DfaEngine;

/// Builder for constructing a [`DfaEngine`] with a fluent API.
///
/// Each step validates immediately, so a malformed automaton fails at the
/// declaration site rather than at parse time.
///
/// # Example
///
/// ```rust
/// use acceptor::builder::DfaBuilder;
///
/// let dfa = DfaBuilder::new(["q0", "q1"], ["q1"], ['a'])?
///     .transition("q0", 'a', "q1")?
///     .transition("q1", 'a', "q1")?
///     .build();
///
/// assert!(dfa.parse("aaa").accepted);
/// # Ok::<(), acceptor::builder::BuildError>(())
/// ```
pub struct DfaBuilder {
    engine: DfaEngine,
}

impl DfaBuilder {
    /// Start a builder from the raw state, final-state, and alphabet
    /// collections. The definition is validated here.
    pub fn new<S, F, A>(states: S, final_states: F, alphabet: A) -> Result<Self, BuildError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
        A: IntoIterator<Item = char>,
    {
        let definition = AutomatonDefinition::new(
            states.into_iter().map(Into::into).collect(),
            final_states.into_iter().map(Into::into).collect(),
            alphabet.into_iter().collect(),
        )?;
        Ok(Self {
            engine: DfaEngine::new(definition),
        })
    }

    /// Declare a transition `(from, symbol) -> to`.
    pub fn transition(mut self, from: &str, symbol: char, to: &str) -> Result<Self, BuildError> {
        self.engine.add_transition(from, symbol, to)?;
        Ok(self)
    }

    /// Finish building. A sparse (even empty) table is legitimate — it
    /// just rejects every input it has no path for.
    pub fn build(self) -> DfaEngine {
        self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DefinitionError, TransitionError};

    #[test]
    fn fluent_api_builds_engine() {
        let dfa = DfaBuilder::new(["q0", "q1"], ["q1"], ['a', 'b'])
            .unwrap()
            .transition("q0", 'a', "q1")
            .unwrap()
            .build();

        assert!(dfa.parse("a").accepted);
        assert_eq!(dfa.table().len(), 1);
    }

    #[test]
    fn definition_errors_surface_at_new() {
        let result = DfaBuilder::new(["q0"], ["q7"], ['a']);
        assert_eq!(
            result.err(),
            Some(BuildError::Definition(DefinitionError::UnknownFinalState {
                state: "q7".into()
            }))
        );
    }

    #[test]
    fn transition_errors_surface_at_declaration() {
        let result = DfaBuilder::new(["q0"], ["q0"], ['a'])
            .unwrap()
            .transition("q0", 'z', "q0");

        assert_eq!(
            result.err(),
            Some(BuildError::Transition(
                TransitionError::SymbolNotInAlphabet { symbol: 'z' }
            ))
        );
    }

    #[test]
    fn empty_table_rejects_non_empty_input() {
        let dfa = DfaBuilder::new(["q0"], ["q0"], ['a']).unwrap().build();

        assert!(!dfa.parse("a").accepted);
        assert!(dfa.parse("").accepted);
    }
}
