//! Core automaton data types.
//!
//! This module contains the read-only configuration both engines execute
//! over, and the diagnostic values they produce:
//! - Validated automaton descriptions via [`AutomatonDefinition`]
//! - Deterministic transition tables via [`TransitionTable`]
//! - Immutable per-run traces via [`RunTrace`]
//!
//! Everything here is a plain value: construction validates eagerly, and
//! nothing mutates after it is built.

mod definition;
mod table;
mod trace;

pub use definition::{AutomatonDefinition, DefinitionError};
pub use table::{
    DfaKey, PdaKey, PdaValue, StackAction, StackSymbol, TableKey, TableValue, TransitionError,
    TransitionTable,
};
pub use trace::{DfaStep, PdaStep, RunTrace, StepRecord};
