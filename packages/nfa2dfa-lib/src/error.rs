use std::fmt::Display;

use thiserror::Error;

use crate::automaton::{state::State, symbol::Symbol};

/// Where a state was referenced when it turned out not to be declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateReference {
    Initial,
    Accepting,
    TransitionSource,
    TransitionTarget,
}

impl Display for StateReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateReference::Initial => write!(f, "initial state"),
            StateReference::Accepting => write!(f, "accepting state"),
            StateReference::TransitionSource => write!(f, "transition source"),
            StateReference::TransitionTarget => write!(f, "transition target"),
        }
    }
}

/// Errors raised while constructing an automaton. Once an automaton exists it
/// is consistent, so no other operation of this crate fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// The text does not follow the automaton grammar.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// A state is used that is not part of the declared state set.
    #[error("{reference} {state} is not a declared state")]
    UnknownStateReference {
        state: State,
        reference: StateReference,
    },

    /// A transition is labelled with a symbol outside the alphabet.
    #[error("transition ({from}, {symbol}, {to}) uses symbol {symbol} which is not in the alphabet")]
    UnknownSymbolReference {
        symbol: Symbol,
        from: State,
        to: State,
    },

    /// A DFA state has zero or several successors for one symbol.
    #[error("state {state} has {count} transitions on symbol {symbol}, a DFA needs exactly one")]
    NonTotalOrAmbiguousTransition {
        state: State,
        symbol: Symbol,
        count: usize,
    },
}

pub type AutomatonResult<T> = Result<T, AutomatonError>;
