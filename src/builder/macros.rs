//! Macros for declarative automaton construction.

/// Declare a complete DFA in one expression.
///
/// Expands to a [`DfaBuilder`](crate::builder::DfaBuilder) chain and
/// evaluates to `Result<DfaEngine, BuildError>`, so a malformed declaration
/// fails loudly where it is written.
///
/// # Example
///
/// ```rust
/// use acceptor::dfa;
///
/// let dfa = dfa! {
///     states: [q0, q1],
///     final: [q1],
///     alphabet: ['a'],
///     (q0, 'a') => q1,
///     (q1, 'a') => q1,
/// }.unwrap();
///
/// assert!(dfa.parse("aa").accepted);
/// ```
#[macro_export]
macro_rules! dfa {
    (
        states: [$($state:ident),+ $(,)?],
        final: [$($final_state:ident),+ $(,)?],
        alphabet: [$($symbol:literal),+ $(,)?]
        $(, ($from:ident, $input:literal) => $to:ident)* $(,)?
    ) => {{
        (|| -> ::std::result::Result<$crate::engine::DfaEngine, $crate::builder::BuildError> {
            let builder = $crate::builder::DfaBuilder::new(
                [$(stringify!($state)),+],
                [$(stringify!($final_state)),+],
                [$($symbol),+],
            )?;
            $(let builder = builder.transition(stringify!($from), $input, stringify!($to))?;)*
            Ok(builder.build())
        })()
    }};
}

/// Declare a complete PDA in one expression.
///
/// Stack tops are written as a symbol literal or the word `bottom`;
/// actions as `push`, `pop`, or `none`. Evaluates to
/// `Result<PdaEngine, BuildError>`.
///
/// # Example
///
/// ```rust
/// use acceptor::pda;
///
/// let pda = pda! {
///     states: [q0, q1, q2],
///     final: [q2],
///     alphabet: ['a', 'b'],
///     (q0, 'a', bottom) => (q1, push),
///     (q1, 'a', 'a') => (q1, push),
///     (q1, 'b', 'a') => (q2, pop),
///     (q2, 'b', 'a') => (q2, pop),
/// }.unwrap();
///
/// assert!(pda.parse("aabb").accepted);
/// ```
#[macro_export]
macro_rules! pda {
    (
        states: [$($state:ident),+ $(,)?],
        final: [$($final_state:ident),+ $(,)?],
        alphabet: [$($symbol:literal),+ $(,)?]
        $(, accept: $acceptance:ident)?
        $(, ($from:ident, $input:literal, $top:tt) => ($to:ident, $action:ident))* $(,)?
    ) => {{
        (|| -> ::std::result::Result<$crate::engine::PdaEngine, $crate::builder::BuildError> {
            let builder = $crate::builder::PdaBuilder::new(
                [$(stringify!($state)),+],
                [$(stringify!($final_state)),+],
                [$($symbol),+],
            )?;
            $(let builder = builder.acceptance($crate::engine::Acceptance::$acceptance);)?
            $(let builder = builder.transition(
                stringify!($from),
                $input,
                $crate::stack_symbol!($top),
                stringify!($to),
                $crate::stack_action!($action),
            )?;)*
            Ok(builder.build())
        })()
    }};
}

/// Map a `pda!` stack-top token to a [`StackSymbol`](crate::core::StackSymbol).
#[doc(hidden)]
#[macro_export]
macro_rules! stack_symbol {
    (bottom) => {
        $crate::core::StackSymbol::Bottom
    };
    ($symbol:literal) => {
        $crate::core::StackSymbol::Symbol($symbol)
    };
}

/// Map a `pda!` action token to a [`StackAction`](crate::core::StackAction).
#[doc(hidden)]
#[macro_export]
macro_rules! stack_action {
    (push) => {
        $crate::core::StackAction::Push
    };
    (pop) => {
        $crate::core::StackAction::Pop
    };
    (none) => {
        $crate::core::StackAction::None
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::BuildError;
    use crate::core::{DefinitionError, StackSymbol};
    use crate::engine::Acceptance;

    #[test]
    fn dfa_macro_builds_working_engine() {
        let dfa = dfa! {
            states: [start, done],
            final: [done],
            alphabet: ['x'],
            (start, 'x') => done,
        }
        .unwrap();

        assert!(dfa.parse("x").accepted);
        assert!(!dfa.parse("xx").accepted);
    }

    #[test]
    fn dfa_macro_reports_definition_errors() {
        let result = dfa! {
            states: [q0],
            final: [q9],
            alphabet: ['a'],
        };

        assert_eq!(
            result.err(),
            Some(BuildError::Definition(DefinitionError::UnknownFinalState {
                state: "q9".into()
            }))
        );
    }

    #[test]
    fn pda_macro_builds_working_engine() {
        let pda = pda! {
            states: [q0, q1],
            final: [q1],
            alphabet: ['a', 'b'],
            accept: EmptyStack,
            (q0, 'a', bottom) => (q1, push),
            (q1, 'b', 'a') => (q1, pop),
        }
        .unwrap();

        assert_eq!(pda.acceptance(), Acceptance::EmptyStack);
        assert!(pda.parse("ab").accepted);
        assert!(!pda.parse("a").accepted);
    }

    #[test]
    fn stack_symbol_tokens_map_to_variants() {
        assert_eq!(stack_symbol!(bottom), StackSymbol::Bottom);
        assert_eq!(stack_symbol!('a'), StackSymbol::Symbol('a'));
    }
}
