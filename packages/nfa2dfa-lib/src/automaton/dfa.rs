use std::ops::Deref;

use crate::{
    automaton::{
        Automaton, Language,
        state::State,
        symbol::{Alphabet, Symbol},
        transition::Transition,
    },
    error::{AutomatonError, AutomatonResult},
};

/// A deterministic, complete automaton: no epsilon-transitions and exactly
/// one transition for every state and every alphabet symbol.
///
/// Derefs to the underlying [`Automaton`], so every read-only operation of
/// automata is available on DFAs as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DFA {
    automaton: Automaton,
}

impl DFA {
    /// Builds a DFA from its components, validating both the automaton
    /// invariants and determinism.
    pub fn new(
        states: impl IntoIterator<Item = State>,
        alphabet: Alphabet,
        transitions: impl IntoIterator<Item = Transition>,
        initial: State,
        accepting: impl IntoIterator<Item = State>,
    ) -> AutomatonResult<Self> {
        DFA::try_from(Automaton::new(
            states,
            alphabet,
            transitions,
            initial,
            accepting,
        )?)
    }

    /// Wraps an automaton that is known to be deterministic and complete.
    pub(crate) fn from_automaton_unchecked(automaton: Automaton) -> Self {
        #[cfg(debug_assertions)]
        if let Err(e) = DFA::check_deterministic(&automaton) {
            panic!("Automaton is not a DFA: {}", e);
        }

        DFA { automaton }
    }

    fn check_deterministic(automaton: &Automaton) -> AutomatonResult<()> {
        if let Some(t) = automaton
            .transitions()
            .iter()
            .find(|t| t.symbol.is_epsilon())
        {
            return Err(AutomatonError::UnknownSymbolReference {
                symbol: Symbol::Epsilon,
                from: t.from,
                to: t.to,
            });
        }

        for state in automaton.states() {
            for symbol in automaton.alphabet().iter() {
                let count = automaton.at(state, symbol).count();

                if count != 1 {
                    return Err(AutomatonError::NonTotalOrAmbiguousTransition {
                        state: state.clone(),
                        symbol: Symbol::Char(symbol),
                        count,
                    });
                }
            }
        }

        Ok(())
    }

    /// The unique successor of `state` on `symbol`. `None` if the state is not
    /// part of this DFA or the symbol is not in its alphabet.
    pub fn successor(&self, state: &State, symbol: char) -> Option<&State> {
        self.automaton.at(state, symbol).next()
    }

    /// The dead state, if subset construction produced one.
    pub fn dead_state(&self) -> Option<&State> {
        self.automaton.states().iter().find(|s| s.is_dead())
    }

    /// See [`Automaton::canonicalize`]. Canonicalization keeps every reachable
    /// state with all of its transitions, so the result is still a DFA.
    pub fn canonicalize(&self) -> DFA {
        DFA::from_automaton_unchecked(self.automaton.canonicalize())
    }

    /// See [`Automaton::remove_unreachable`]. All successors of a reachable
    /// state are reachable, so the result is still a DFA.
    pub fn remove_unreachable(&self) -> DFA {
        DFA::from_automaton_unchecked(self.automaton.remove_unreachable())
    }

    pub fn as_automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn into_automaton(self) -> Automaton {
        self.automaton
    }
}

impl TryFrom<Automaton> for DFA {
    type Error = AutomatonError;

    fn try_from(automaton: Automaton) -> Result<Self, Self::Error> {
        DFA::check_deterministic(&automaton)?;
        Ok(DFA { automaton })
    }
}

impl From<DFA> for Automaton {
    fn from(dfa: DFA) -> Self {
        dfa.automaton
    }
}

impl Deref for DFA {
    type Target = Automaton;

    fn deref(&self) -> &Self::Target {
        &self.automaton
    }
}

impl Language for DFA {
    fn alphabet(&self) -> &Alphabet {
        self.automaton.alphabet()
    }

    fn accepts(&self, input: impl IntoIterator<Item = char>) -> bool {
        let mut current = self.automaton.initial();

        for symbol in input {
            match self.successor(current, symbol) {
                Some(next) => current = next,
                None => return false,
            }
        }

        self.automaton.is_accepting(current)
    }
}
