use std::collections::BTreeSet;

use hashbrown::HashMap;

use crate::automaton::{Automaton, state::State, transition::Transition};

impl Automaton {
    /// Returns a canonical version of this automaton.
    ///
    /// States are renumbered `0, 1, 2, ...` in the order a depth-first
    /// traversal from the initial state first discovers them. At each state
    /// the symbols are visited epsilon first and then in alphabet order, and
    /// the targets of one symbol in state order. States that are not reachable
    /// are dropped, including unreachable accepting states.
    ///
    /// Two minimal automata for the same language have identical encodings
    /// after canonicalization.
    pub fn canonicalize(&self) -> Automaton {
        let mut canonical: HashMap<&State, State> = HashMap::new();
        let mut transitions = vec![];
        let mut stack = vec![self.initial()];
        let mut free = 0;

        canonical.insert(self.initial(), State::Simple(free));
        free += 1;

        while let Some(top) = stack.pop() {
            let from = canonical[top].clone();

            for symbol in self.alphabet().with_epsilon() {
                let targets: BTreeSet<&State> = self.transitions().at(top, symbol).collect();

                for target in targets {
                    let to = canonical
                        .entry(target)
                        .or_insert_with(|| {
                            let id = State::Simple(free);
                            free += 1;
                            stack.push(target);
                            id
                        })
                        .clone();

                    transitions.push(Transition {
                        from: from.clone(),
                        symbol,
                        to,
                    });
                }
            }
        }

        let accepting = self
            .accepting()
            .iter()
            .filter_map(|s| canonical.get(s).cloned())
            .collect();

        tracing::debug!(
            "Canonicalized automaton with {} states into {} states",
            self.state_count(),
            canonical.len()
        );

        Automaton::from_parts_unchecked(
            canonical.values().cloned().collect(),
            self.alphabet().clone(),
            transitions,
            State::Simple(0),
            accepting,
        )
    }
}
