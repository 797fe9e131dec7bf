use std::collections::BTreeSet;

use nfa2dfa_lib::automaton::{Automaton, state::State};

fn states(ids: &[u32]) -> BTreeSet<State> {
    ids.iter().copied().map(State::simple).collect()
}

#[test]
fn test_epsilon_closure_chain() {
    let nfa = Automaton::parse("0 1 2 3/a/0,,1;1,,2;2,a,3;3,,0/0/3").unwrap();

    assert_eq!(nfa.epsilon_closure(&State::simple(0)), states(&[0, 1, 2]));
    assert_eq!(nfa.epsilon_closure(&State::simple(1)), states(&[1, 2]));
    assert_eq!(nfa.epsilon_closure(&State::simple(2)), states(&[2]));
    assert_eq!(nfa.epsilon_closure(&State::simple(3)), states(&[0, 1, 2, 3]));
}

#[test]
fn test_epsilon_closure_cycle() {
    let nfa = Automaton::parse("0 1 2/a/0,,1;1,,0;1,a,2/0/2").unwrap();

    assert_eq!(nfa.epsilon_closure(&State::simple(0)), states(&[0, 1]));
    assert_eq!(nfa.epsilon_closure(&State::simple(1)), states(&[0, 1]));
}

#[test]
fn test_epsilon_closure_without_epsilon_transitions() {
    let nfa = Automaton::parse("0 1/a/0,a,1;1,a,0/0/1").unwrap();

    for state in nfa.states() {
        assert_eq!(nfa.epsilon_closure(state), BTreeSet::from([state.clone()]));
    }
}

#[test]
fn test_epsilon_closure_idempotent() {
    let nfa = Automaton::parse("0 1 2 3 4/a b/0,,1;1,a,2;2,,3;3,,1;4,,0;3,b,4/0/4").unwrap();

    for state in nfa.states() {
        let closure = nfa.epsilon_closure(state);
        assert!(closure.contains(state));
        assert_eq!(nfa.epsilon_closure_of(&closure), closure);
    }
}

#[test]
fn test_epsilon_closure_of_sets() {
    let nfa = Automaton::parse("0 1 2 3/a/0,,1;2,,3/0/3").unwrap();

    assert!(nfa.epsilon_closure_of(&BTreeSet::new()).is_empty());
    assert_eq!(
        nfa.epsilon_closure_of(&states(&[0, 2])),
        states(&[0, 1, 2, 3])
    );
}
