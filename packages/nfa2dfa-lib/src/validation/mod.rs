use crate::automaton::{Language, dfa::DFA};

pub mod same_language;

/// Asserts that a DFA has exactly one transition for every state and every
/// symbol of its alphabet, and no epsilon-transitions.
pub fn assert_total(dfa: &DFA) {
    assert!(
        !dfa.has_epsilon_transitions(),
        "DFA contains epsilon-transitions"
    );

    for state in dfa.states() {
        for symbol in Language::alphabet(dfa).iter() {
            let count = dfa.at(state, symbol).count();
            assert_eq!(
                count, 1,
                "DFA is not total. State {} has {} transitions for symbol {}",
                state, count, symbol
            );
        }
    }
}
