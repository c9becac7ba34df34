//! Builder for deterministic pushdown automata.

use crate::builder::error::BuildError;
use crate::core::{AutomatonDefinition, StackAction, StackSymbol};
use crate::engine::{Acceptance, PdaEngine};

/// Builder for constructing a [`PdaEngine`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use acceptor::builder::PdaBuilder;
/// use acceptor::core::{StackAction, StackSymbol};
///
/// let pda = PdaBuilder::new(["q0", "q1"], ["q1"], ['a', 'b'])?
///     .transition("q0", 'a', StackSymbol::Bottom, "q1", StackAction::Push)?
///     .transition("q1", 'b', StackSymbol::Symbol('a'), "q1", StackAction::Pop)?
///     .build();
///
/// assert!(pda.parse("ab").accepted);
/// # Ok::<(), acceptor::builder::BuildError>(())
/// ```
pub struct PdaBuilder {
    engine: PdaEngine,
}

impl PdaBuilder {
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
            engine: PdaEngine::new(definition),
        })
    }

    /// Declare a transition `(from, symbol, top) -> (to, action)`.
    pub fn transition(
        mut self,
        from: &str,
        symbol: char,
        stack_top: StackSymbol,
        to: &str,
        action: StackAction,
    ) -> Result<Self, BuildError> {
        self.engine
            .add_transition(from, symbol, stack_top, to, action)?;
        Ok(self)
    }

    /// Set the end-of-input acceptance policy (defaults to
    /// [`Acceptance::Either`]).
    pub fn acceptance(mut self, acceptance: Acceptance) -> Self {
        self.engine = self.engine.with_acceptance(acceptance);
        self
    }

    /// Finish building.
    pub fn build(self) -> PdaEngine {
        self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransitionError;

    #[test]
    fn fluent_api_builds_engine() {
        let pda = PdaBuilder::new(["q0", "q1"], ["q1"], ['a', 'b'])
            .unwrap()
            .transition("q0", 'a', StackSymbol::Bottom, "q1", StackAction::Push)
            .unwrap()
            .acceptance(Acceptance::EmptyStack)
            .build();

        assert_eq!(pda.acceptance(), Acceptance::EmptyStack);
        assert_eq!(pda.table().len(), 1);
    }

    #[test]
    fn duplicate_transition_fails_while_building() {
        let result = PdaBuilder::new(["q0"], ["q0"], ['a'])
            .unwrap()
            .transition("q0", 'a', StackSymbol::Bottom, "q0", StackAction::Push)
            .unwrap()
            // Same key, different action: still a duplicate.
            .transition("q0", 'a', StackSymbol::Bottom, "q0", StackAction::Pop);

        assert!(matches!(
            result.err(),
            Some(BuildError::Transition(TransitionError::Duplicate { .. }))
        ));
    }

    #[test]
    fn stack_top_is_validated() {
        let result = PdaBuilder::new(["q0"], ["q0"], ['a'])
            .unwrap()
            .transition("q0", 'a', StackSymbol::Symbol('b'), "q0", StackAction::None);

        assert_eq!(
            result.err(),
            Some(BuildError::Transition(TransitionError::UnknownStackSymbol {
                symbol: 'b'
            }))
        );
    }
}
