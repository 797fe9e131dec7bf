use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    automaton::{
        state::State,
        symbol::{Alphabet, Symbol},
        transition::{Transition, TransitionRelation},
    },
    error::{AutomatonError, AutomatonResult, StateReference},
};

pub mod canonical;
pub mod closure;
pub mod dfa;
pub mod display;
pub mod encoding;
pub mod reachability;
pub mod state;
pub mod subset;
pub mod symbol;
pub mod transition;
pub mod utils;

/// A finite automaton: states, an alphabet, a transition relation, one
/// initial state and a set of accepting states.
///
/// An `Automaton` may be nondeterministic and may contain epsilon-transitions.
/// It is validated when it is built and never changes afterwards, every
/// transformation returns a new automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    states: BTreeSet<State>,
    alphabet: Alphabet,
    transitions: TransitionRelation,
    initial: State,
    accepting: BTreeSet<State>,
}

/// The automata read from an encoding are nondeterministic in general.
pub type NFA = Automaton;

impl Automaton {
    /// Builds an automaton from its components.
    ///
    /// Fails if the alphabet contains whitespace or one of the separators
    /// `,;/`, if the initial state or an accepting state is not declared, or
    /// if a transition references an undeclared state or a symbol outside the
    /// alphabet.
    pub fn new(
        states: impl IntoIterator<Item = State>,
        alphabet: Alphabet,
        transitions: impl IntoIterator<Item = Transition>,
        initial: State,
        accepting: impl IntoIterator<Item = State>,
    ) -> AutomatonResult<Self> {
        if let Some(symbol) = alphabet.iter().find(|c| !Symbol::is_encodable(*c)) {
            return Err(AutomatonError::MalformedEncoding(format!(
                "symbol {:?} is reserved by the encoding and cannot be part of an alphabet",
                symbol
            )));
        }

        let states: BTreeSet<State> = states.into_iter().collect();

        if !states.contains(&initial) {
            return Err(AutomatonError::UnknownStateReference {
                state: initial,
                reference: StateReference::Initial,
            });
        }

        let accepting: BTreeSet<State> = accepting.into_iter().collect();
        if let Some(state) = accepting.iter().find(|s| !states.contains(*s)) {
            return Err(AutomatonError::UnknownStateReference {
                state: state.clone(),
                reference: StateReference::Accepting,
            });
        }

        let transitions = TransitionRelation::new(&states, &alphabet, transitions)?;

        Ok(Automaton {
            states,
            alphabet,
            transitions,
            initial,
            accepting,
        })
    }

    /// Builds an automaton whose consistency follows from how the parts were
    /// computed.
    pub(crate) fn from_parts_unchecked(
        states: BTreeSet<State>,
        alphabet: Alphabet,
        transitions: impl IntoIterator<Item = Transition>,
        initial: State,
        accepting: BTreeSet<State>,
    ) -> Self {
        debug_assert!(states.contains(&initial), "Initial state must be declared");
        debug_assert!(
            accepting.is_subset(&states),
            "Accepting states must be declared"
        );

        let transitions = TransitionRelation::new_unchecked(&states, transitions);

        Automaton {
            states,
            alphabet,
            transitions,
            initial,
            accepting,
        }
    }

    pub fn states(&self) -> &BTreeSet<State> {
        &self.states
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn transitions(&self) -> &TransitionRelation {
        &self.transitions
    }

    pub fn initial(&self) -> &State {
        &self.initial
    }

    pub fn accepting(&self) -> &BTreeSet<State> {
        &self.accepting
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn contains_state(&self, state: &State) -> bool {
        self.states.contains(state)
    }

    pub fn is_accepting(&self, state: &State) -> bool {
        self.accepting.contains(state)
    }

    /// Checks if a set of states contains an accepting state.
    pub fn is_accepting_set<'a>(&self, states: impl IntoIterator<Item = &'a State>) -> bool {
        states.into_iter().any(|s| self.is_accepting(s))
    }

    /// All states reachable from `state` by one move on `symbol`.
    pub fn at<'a, S: Into<Symbol>>(
        &'a self,
        state: &State,
        symbol: S,
    ) -> impl Iterator<Item = &'a State> + use<'a, S> {
        self.transitions.at(state, symbol.into())
    }

    pub fn has_epsilon_transitions(&self) -> bool {
        self.transitions.has_epsilon_transitions()
    }
}

/// Anything that defines a language over an alphabet of characters.
pub trait Language {
    fn alphabet(&self) -> &Alphabet;

    /// Whether the automaton accepts the word. A word containing a character
    /// outside the alphabet is rejected.
    fn accepts(&self, input: impl IntoIterator<Item = char>) -> bool;
}

impl Language for Automaton {
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn accepts(&self, input: impl IntoIterator<Item = char>) -> bool {
        let mut current = self.epsilon_closure(&self.initial);

        for symbol in input {
            if !self.alphabet.contains(symbol) {
                return false;
            }

            let targets = current
                .iter()
                .flat_map(|state| self.transitions.at(state, Symbol::Char(symbol)));
            current = self.epsilon_closure_of(targets);

            if current.is_empty() {
                return false;
            }
        }

        self.is_accepting_set(&current)
    }
}

/// The plain-data view of an automaton used for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableAutomaton<'a> {
    pub states: &'a BTreeSet<State>,
    pub alphabet: &'a Alphabet,
    pub transitions: BTreeSet<Transition>,
    pub initial: &'a State,
    pub accepting: &'a BTreeSet<State>,
}

impl<'a> From<&'a Automaton> for SerializableAutomaton<'a> {
    fn from(automaton: &'a Automaton) -> Self {
        SerializableAutomaton {
            states: &automaton.states,
            alphabet: &automaton.alphabet,
            transitions: automaton.transitions.sorted(),
            initial: &automaton.initial,
            accepting: &automaton.accepting,
        }
    }
}
