//! Pre-populated example automata.
//!
//! These factories are pure: they construct and populate an engine and do
//! nothing else. They double as reference material for the declaration
//! macros and as fixtures for the crate's tests.

use crate::engine::{DfaEngine, PdaEngine};
use crate::{dfa, pda};

/// DFA over `{a, b}` accepting the language `abb(a|b)*`.
///
/// # Example
///
/// ```rust
/// use acceptor::samples::abb_prefix_dfa;
///
/// let dfa = abb_prefix_dfa();
/// assert!(dfa.parse("abbab").accepted);
/// assert!(!dfa.parse("ab").accepted);
/// ```
pub fn abb_prefix_dfa() -> DfaEngine {
    dfa! {
        states: [q0, q1, q2, q3],
        final: [q3],
        alphabet: ['a', 'b'],
        (q0, 'a') => q1,
        (q1, 'b') => q2,
        (q2, 'b') => q3,
        (q3, 'a') => q3,
        (q3, 'b') => q3,
    }
    .expect("sample DFA is well-formed")
}

/// PDA over `{a, b}` accepting `{aⁿbⁿ : n ≥ 1}`, under the default
/// `Either` acceptance policy.
///
/// Note that the policy also accepts the empty string: no symbol is
/// consumed, so the stack is still at the bottom marker when the run ends.
///
/// # Example
///
/// ```rust
/// use acceptor::samples::balanced_pda;
///
/// let pda = balanced_pda();
/// assert!(pda.parse("aaabbb").accepted);
/// assert!(!pda.parse("aaab").accepted);
/// ```
pub fn balanced_pda() -> PdaEngine {
    pda! {
        states: [q0, q1, q2, q3],
        final: [q3],
        alphabet: ['a', 'b'],
        (q0, 'a', bottom) => (q1, push),
        (q1, 'a', 'a') => (q1, push),
        (q1, 'b', 'a') => (q2, pop),
        (q2, 'b', 'a') => (q2, pop),
    }
    .expect("sample PDA is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ReasonCode;

    #[test]
    fn abb_prefix_dfa_accepts_the_language() {
        let dfa = abb_prefix_dfa();

        assert!(dfa.parse("abb").accepted);
        assert!(dfa.parse("abba").accepted);
        assert!(dfa.parse("abbaabbaababa").accepted);
    }

    #[test]
    fn abb_prefix_dfa_rejects_short_prefix() {
        let outcome = abb_prefix_dfa().parse("ab");

        assert!(!outcome.accepted);
        assert_eq!(outcome.reason, ReasonCode::NonFinalState);
        assert_eq!(outcome.final_state, "q2");
    }

    #[test]
    fn abb_prefix_dfa_rejects_wrong_start() {
        let outcome = abb_prefix_dfa().parse("ba");

        assert!(!outcome.accepted);
        assert_eq!(outcome.reason, ReasonCode::NoTransition);
    }

    #[test]
    fn abb_prefix_dfa_rejects_foreign_symbol() {
        // 'c' is outside the alphabet, so no table entry can exist for it.
        let outcome = abb_prefix_dfa().parse("abc");

        assert!(!outcome.accepted);
        assert_eq!(outcome.reason, ReasonCode::NoTransition);
    }

    #[test]
    fn balanced_pda_accepts_matched_counts() {
        let pda = balanced_pda();

        assert!(pda.parse("ab").accepted);
        assert!(pda.parse("aabb").accepted);
        assert!(pda.parse("aaabbb").accepted);
        assert!(pda.parse("aaaaaaaaabbbbbbbbb").accepted);
    }

    #[test]
    fn balanced_pda_rejects_unmatched_counts() {
        let pda = balanced_pda();

        assert!(!pda.parse("aaaabb").accepted);
        assert!(!pda.parse("aabbbb").accepted);
        assert!(!pda.parse("ba").accepted);
    }

    #[test]
    fn balanced_pda_accepts_empty_input_by_policy() {
        // Documented edge case: nothing is consumed, the stack is still
        // [⊥], and the Either policy treats that as acceptance.
        let outcome = balanced_pda().parse("");

        assert!(outcome.accepted);
        assert_eq!(outcome.final_state, "q0");
    }
}
