use std::collections::BTreeSet;

use crate::automaton::{Automaton, state::State, utils::worklist_fixpoint};

impl Automaton {
    /// Returns all states reachable from the initial state, following
    /// transitions on every symbol including epsilon.
    pub fn reachable_states(&self) -> BTreeSet<State> {
        worklist_fixpoint([self.initial().clone()], |state| {
            self.transitions()
                .outgoing(state)
                .map(|(_, target)| target.clone())
                .collect::<Vec<_>>()
        })
    }

    /// Returns a version of this automaton without the states that cannot be
    /// reached from the initial state. It recognizes the same language.
    pub fn remove_unreachable(&self) -> Automaton {
        let reachable = self.reachable_states();

        let transitions = self
            .transitions()
            .iter()
            .filter(|t| reachable.contains(&t.from) && reachable.contains(&t.to))
            .collect::<Vec<_>>();

        let accepting = self
            .accepting()
            .iter()
            .filter(|s| reachable.contains(*s))
            .cloned()
            .collect();

        tracing::debug!(
            "Removed {} unreachable states",
            self.state_count() - reachable.len()
        );

        Automaton::from_parts_unchecked(
            reachable,
            self.alphabet().clone(),
            transitions,
            self.initial().clone(),
            accepting,
        )
    }
}
