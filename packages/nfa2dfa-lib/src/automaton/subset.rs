use std::collections::{BTreeMap, BTreeSet, VecDeque};

use hashbrown::HashSet;

use crate::{
    automaton::{
        Automaton, dfa::DFA, state::State, symbol::Symbol, transition::Transition,
    },
    config::{SubsetConstructionConfig, WorklistOrder},
};

impl Automaton {
    /// Determinizes this automaton with the default configuration.
    ///
    /// See [`Automaton::to_dfa_with`].
    pub fn to_dfa(&self) -> DFA {
        self.to_dfa_with(&SubsetConstructionConfig::default())
    }

    /// Determinizes this automaton by subset construction.
    ///
    /// Every state of the resulting DFA is a composite state holding the set
    /// of NFA states the automaton can be in simultaneously. The initial state
    /// is the epsilon closure of the NFA's initial state. The DFA is complete:
    /// a symbol without targets leads to the dead state, which loops to itself
    /// on every symbol and is never accepting.
    pub fn to_dfa_with(&self, config: &SubsetConstructionConfig) -> DFA {
        let initial = State::Composite(self.epsilon_closure(self.initial()));

        // composite states are identified by their member sets
        let mut discovered = HashSet::new();
        discovered.insert(initial.clone());

        let mut worklist = VecDeque::from([initial.clone()]);
        let mut delta: BTreeMap<(State, char), State> = BTreeMap::new();

        while let Some(current) = next_from(&mut worklist, *config.get_worklist()) {
            let members = current.members();

            for symbol in self.alphabet().iter() {
                let targets = members
                    .iter()
                    .flat_map(|member| self.transitions().at(member, Symbol::Char(symbol)));
                let successor = State::Composite(self.epsilon_closure_of(targets));

                if discovered.insert(successor.clone()) {
                    tracing::trace!("Discovered composite state {}", successor);
                    worklist.push_back(successor.clone());
                }

                let previous = delta.insert((current.clone(), symbol), successor);
                assert!(
                    previous.is_none(),
                    "Transition conflict, composite state {} was expanded twice on symbol {}",
                    current,
                    symbol
                );
            }
        }

        let states: BTreeSet<State> = discovered.into_iter().collect();
        let accepting = states
            .iter()
            .filter(|state| self.is_accepting_set(state.members()))
            .cloned()
            .collect();

        tracing::debug!(
            "Determinized NFA with {} states into DFA with {} states",
            self.state_count(),
            states.len()
        );

        let transitions = delta.into_iter().map(|((from, symbol), to)| Transition {
            from,
            symbol: Symbol::Char(symbol),
            to,
        });

        DFA::from_automaton_unchecked(Automaton::from_parts_unchecked(
            states,
            self.alphabet().clone(),
            transitions,
            initial,
            accepting,
        ))
    }
}

fn next_from(worklist: &mut VecDeque<State>, order: WorklistOrder) -> Option<State> {
    match order {
        WorklistOrder::Fifo => worklist.pop_front(),
        WorklistOrder::Lifo => worklist.pop_back(),
    }
}
