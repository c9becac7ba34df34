//! Builder API for ergonomic automaton construction.
//!
//! This module provides fluent builders and declaration macros for creating
//! automata with minimal boilerplate while keeping every validation the
//! engines perform.

pub mod dfa;
pub mod error;
pub mod macros;
pub mod pda;

pub use dfa::DfaBuilder;
pub use error::BuildError;
pub use pda::PdaBuilder;
