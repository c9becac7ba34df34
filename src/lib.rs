//! Acceptor: a deterministic automata simulation library
//!
//! Acceptor executes finite-state and pushdown automata that are already
//! fully and deterministically specified: build a validated description of
//! states, alphabet, and transitions, then ask whether input strings are
//! accepted. Every run returns a structured verdict with a reason code and
//! a step-by-step trace, leaving presentation entirely to the caller.
//!
//! # Core Concepts
//!
//! - **Definition**: immutable validated description via
//!   [`AutomatonDefinition`]
//! - **Transition table**: deterministic `(state, symbol[, stack top])`
//!   mapping, validated per insertion
//! - **Engines**: [`DfaEngine`] and [`PdaEngine`] execute a table with all
//!   run state owned per call
//! - **Outcomes**: rejection is a normal [`RunOutcome`] value, never an
//!   error; configuration mistakes fail loudly at build time
//!
//! # Example
//!
//! ```rust
//! use acceptor::dfa;
//! use acceptor::engine::ReasonCode;
//!
//! let dfa = dfa! {
//!     states: [q0, q1, q2, q3],
//!     final: [q3],
//!     alphabet: ['a', 'b'],
//!     (q0, 'a') => q1,
//!     (q1, 'b') => q2,
//!     (q2, 'b') => q3,
//!     (q3, 'a') => q3,
//!     (q3, 'b') => q3,
//! }.unwrap();
//!
//! let outcome = dfa.parse("abba");
//! assert!(outcome.accepted);
//!
//! let outcome = dfa.parse("ba");
//! assert!(!outcome.accepted);
//! assert_eq!(outcome.reason, ReasonCode::NoTransition);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod samples;

// Re-export commonly used types
pub use builder::{BuildError, DfaBuilder, PdaBuilder};
pub use self::core::{
    AutomatonDefinition, DefinitionError, StackAction, StackSymbol, TransitionError,
};
pub use engine::{Acceptance, DfaEngine, PdaEngine, ReasonCode, RunOutcome, DEFAULT_STEP_LIMIT};
