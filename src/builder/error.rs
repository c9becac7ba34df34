//! Build errors for automaton builders.

use crate::core::{DefinitionError, TransitionError};
use thiserror::Error;

/// Errors that can occur while building an automaton through the fluent
/// API: either the definition itself is malformed, or one of the declared
/// transitions fails validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}
