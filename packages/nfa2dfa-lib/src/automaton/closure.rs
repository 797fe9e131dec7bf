use std::collections::BTreeSet;

use crate::automaton::{Automaton, state::State, symbol::Symbol, utils::worklist_fixpoint};

impl Automaton {
    /// Calculates the epsilon closure of a state: the state itself together
    /// with everything reachable from it by epsilon-transitions only.
    pub fn epsilon_closure(&self, state: &State) -> BTreeSet<State> {
        self.epsilon_closure_of([state])
    }

    /// Calculates the union of the epsilon closures of a set of states.
    /// An empty input yields an empty closure.
    pub fn epsilon_closure_of<'a>(
        &self,
        states: impl IntoIterator<Item = &'a State>,
    ) -> BTreeSet<State> {
        worklist_fixpoint(states.into_iter().cloned(), |state| {
            self.transitions()
                .at(state, Symbol::Epsilon)
                .cloned()
                .collect::<Vec<_>>()
        })
    }
}
