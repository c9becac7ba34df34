//! Deterministic transition tables.
//!
//! A [`TransitionTable`] is a finite mapping from a composite key to a
//! composite output, built incrementally with uniqueness and domain
//! validation against an [`AutomatonDefinition`]. The DFA variant keys on
//! `(state, symbol)`; the PDA variant keys additionally on the stack-top
//! symbol and maps to a destination plus a stack action.

use super::definition::AutomatonDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// Errors raised when adding a transition to a table.
///
/// The first four variants are domain violations; [`Duplicate`] is a
/// determinism violation — the key already maps to an output, and a
/// deterministic table admits at most one output per key.
///
/// [`Duplicate`]: TransitionError::Duplicate
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("input symbol '{symbol}' is not in the alphabet")]
    SymbolNotInAlphabet { symbol: char },

    #[error("source state '{state}' is not a defined state")]
    UnknownSourceState { state: String },

    #[error("stack symbol '{symbol}' is not in the alphabet or the bottom marker")]
    UnknownStackSymbol { symbol: char },

    #[error("destination state '{state}' is not a defined state")]
    UnknownDestinationState { state: String },

    #[error("transition already defined for {key}")]
    Duplicate { key: String },
}

/// A key that can be validated against a definition before insertion.
pub trait TableKey: Clone + Eq + Hash + fmt::Display {
    fn validate(&self, definition: &AutomatonDefinition) -> Result<(), TransitionError>;
}

/// An output that can be validated against a definition before insertion.
pub trait TableValue: Clone {
    fn validate(&self, definition: &AutomatonDefinition) -> Result<(), TransitionError>;
}

/// DFA transition key: `(state, symbol)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DfaKey {
    pub state: String,
    pub symbol: char,
}

impl DfaKey {
    pub fn new(state: impl Into<String>, symbol: char) -> Self {
        Self {
            state: state.into(),
            symbol,
        }
    }
}

impl fmt::Display for DfaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, '{}')", self.state, self.symbol)
    }
}

impl TableKey for DfaKey {
    fn validate(&self, definition: &AutomatonDefinition) -> Result<(), TransitionError> {
        if !definition.in_alphabet(self.symbol) {
            return Err(TransitionError::SymbolNotInAlphabet {
                symbol: self.symbol,
            });
        }
        if !definition.contains_state(&self.state) {
            return Err(TransitionError::UnknownSourceState {
                state: self.state.clone(),
            });
        }
        Ok(())
    }
}

/// A symbol on the auxiliary stack of a pushdown automaton.
///
/// `Bottom` is the ⊥ marker every run starts with; it is never pushed or
/// popped by ordinary transitions, and as an enum variant it can never
/// collide with an alphabet symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackSymbol {
    Bottom,
    Symbol(char),
}

impl fmt::Display for StackSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bottom => write!(f, "⊥"),
            Self::Symbol(c) => write!(f, "{c}"),
        }
    }
}

/// Effect a PDA transition has on the auxiliary stack.
///
/// `Push` appends the just-consumed input symbol (not an independently
/// specified symbol); `Pop` removes the top element; `None` leaves the
/// stack unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackAction {
    Push,
    Pop,
    None,
}

impl fmt::Display for StackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push => write!(f, "push"),
            Self::Pop => write!(f, "pop"),
            Self::None => write!(f, "none"),
        }
    }
}

/// PDA transition key: `(state, symbol, stack top)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PdaKey {
    pub state: String,
    pub symbol: char,
    pub stack_top: StackSymbol,
}

impl PdaKey {
    pub fn new(state: impl Into<String>, symbol: char, stack_top: StackSymbol) -> Self {
        Self {
            state: state.into(),
            symbol,
            stack_top,
        }
    }
}

impl fmt::Display for PdaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, '{}', {})", self.state, self.symbol, self.stack_top)
    }
}

impl TableKey for PdaKey {
    fn validate(&self, definition: &AutomatonDefinition) -> Result<(), TransitionError> {
        if !definition.in_alphabet(self.symbol) {
            return Err(TransitionError::SymbolNotInAlphabet {
                symbol: self.symbol,
            });
        }
        if !definition.contains_state(&self.state) {
            return Err(TransitionError::UnknownSourceState {
                state: self.state.clone(),
            });
        }
        if let StackSymbol::Symbol(c) = self.stack_top {
            if !definition.in_alphabet(c) {
                return Err(TransitionError::UnknownStackSymbol { symbol: c });
            }
        }
        Ok(())
    }
}

/// PDA transition output: destination state plus stack action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdaValue {
    pub target: String,
    pub action: StackAction,
}

impl PdaValue {
    pub fn new(target: impl Into<String>, action: StackAction) -> Self {
        Self {
            target: target.into(),
            action,
        }
    }
}

impl TableValue for String {
    fn validate(&self, definition: &AutomatonDefinition) -> Result<(), TransitionError> {
        if !definition.contains_state(self) {
            return Err(TransitionError::UnknownDestinationState {
                state: self.clone(),
            });
        }
        Ok(())
    }
}

impl TableValue for PdaValue {
    fn validate(&self, definition: &AutomatonDefinition) -> Result<(), TransitionError> {
        if !definition.contains_state(&self.target) {
            return Err(TransitionError::UnknownDestinationState {
                state: self.target.clone(),
            });
        }
        Ok(())
    }
}

/// Deterministic transition table.
///
/// Built incrementally; each insertion validates the key and value against
/// the definition and rejects duplicate keys. Once built, the table is
/// read-only during parsing and may be shared freely across engines.
///
/// # Example
///
/// ```rust
/// use acceptor::core::{AutomatonDefinition, DfaKey, TransitionTable};
///
/// let definition = AutomatonDefinition::new(
///     vec!["q0".into(), "q1".into()],
///     vec!["q1".into()],
///     vec!['a'],
/// ).unwrap();
///
/// let mut table = TransitionTable::new();
/// table.insert(&definition, DfaKey::new("q0", 'a'), "q1".to_string()).unwrap();
///
/// assert_eq!(table.get(&DfaKey::new("q0", 'a')), Some(&"q1".to_string()));
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "K: Serialize, V: Serialize"))]
#[serde(bound(deserialize = "K: Deserialize<'de> + Eq + Hash, V: Deserialize<'de>"))]
pub struct TransitionTable<K, V> {
    // Serialized as a sequence of pairs; composite keys are not valid JSON
    // map keys.
    #[serde(with = "entry_seq")]
    entries: HashMap<K, V>,
}

mod entry_seq {
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};
    use std::collections::HashMap;
    use std::hash::Hash;

    pub fn serialize<K, V, S>(entries: &HashMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Serialize,
        V: Serialize,
        S: Serializer,
    {
        serializer.collect_seq(entries.iter())
    }

    pub fn deserialize<'de, K, V, D>(deserializer: D) -> Result<HashMap<K, V>, D::Error>
    where
        K: Deserialize<'de> + Eq + Hash,
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let pairs: Vec<(K, V)> = Vec::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

impl<K: TableKey, V: TableValue> TransitionTable<K, V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert a transition, validating domain membership and uniqueness.
    ///
    /// The checks run in a fixed order: input symbol, source state,
    /// stack-top symbol (PDA keys), destination state, then key uniqueness.
    /// A duplicate key fails even when the new value equals the existing
    /// one.
    pub fn insert(
        &mut self,
        definition: &AutomatonDefinition,
        key: K,
        value: V,
    ) -> Result<(), TransitionError> {
        key.validate(definition)?;
        value.validate(definition)?;
        if self.entries.contains_key(&key) {
            return Err(TransitionError::Duplicate {
                key: key.to_string(),
            });
        }
        self.entries.insert(key, value);
        Ok(())
    }

    /// Look up the output for a key, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Number of transitions in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no transitions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: TableKey, V: TableValue> Default for TransitionTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for TransitionTable<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}
