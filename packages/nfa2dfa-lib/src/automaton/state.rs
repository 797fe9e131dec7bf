use std::{collections::BTreeSet, fmt::Display};

use itertools::Itertools;
use serde::Serialize;

/// A state of an automaton.
///
/// Simple states carry an integer id. Composite states are the states of a
/// DFA built by subset construction and stand for a set of NFA states. Two
/// composite states are equal exactly when their member sets are equal, no
/// matter in which order they were built. The empty composite state is the
/// dead state.
///
/// The derived ordering puts every simple state before every composite state
/// and compares composite states by their member sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum State {
    Simple(u32),
    Composite(BTreeSet<State>),
}

impl State {
    pub fn simple(id: u32) -> Self {
        State::Simple(id)
    }

    pub fn composite(members: impl IntoIterator<Item = State>) -> Self {
        State::Composite(members.into_iter().collect())
    }

    /// Shorthand for a composite state over simple states.
    pub fn composite_of_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        State::composite(ids.into_iter().map(State::Simple))
    }

    pub fn dead() -> Self {
        State::Composite(BTreeSet::new())
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, State::Composite(members) if members.is_empty())
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, State::Composite(_))
    }

    pub fn id(&self) -> Option<u32> {
        match self {
            State::Simple(id) => Some(*id),
            State::Composite(_) => None,
        }
    }

    /// The NFA states this state stands for. A simple state stands for itself.
    pub fn members(&self) -> Vec<&State> {
        match self {
            State::Simple(_) => vec![self],
            State::Composite(members) => members.iter().collect(),
        }
    }
}

impl From<u32> for State {
    fn from(value: u32) -> Self {
        State::Simple(value)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Simple(id) => write!(f, "{}", id),
            State::Composite(members) if members.is_empty() => write!(f, "∅"),
            State::Composite(members) => write!(f, "{{{}}}", members.iter().join(", ")),
        }
    }
}

/// Formats a set of states in set notation, e.g. `{0, 1, {1, 2}}`.
pub fn format_state_set<'a>(states: impl IntoIterator<Item = &'a State>) -> String {
    format!("{{{}}}", states.into_iter().join(", "))
}

#[test]
fn test_composite_equality_ignores_construction_order() {
    let a = State::composite_of_ids([2, 0, 1]);
    let b = State::composite([State::simple(1), State::simple(2), State::simple(0)]);
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "{0, 1, 2}");
}

#[test]
fn test_dead_state() {
    let dead = State::dead();
    assert!(dead.is_dead());
    assert!(!State::composite_of_ids([0]).is_dead());
    assert!(!State::simple(0).is_dead());
    assert_eq!(dead.to_string(), "∅");
}

#[test]
fn test_state_ordering() {
    assert!(State::simple(100) < State::dead());
    assert!(State::composite_of_ids([0]) < State::composite_of_ids([1]));
    assert!(State::composite_of_ids([0, 1]) < State::composite_of_ids([0, 2]));
}
