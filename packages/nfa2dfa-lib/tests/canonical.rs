use std::collections::BTreeSet;

use nfa2dfa_lib::{
    automaton::{Automaton, state::State},
    validation::same_language::assert_same_language,
};

#[test]
fn test_canonicalize_isomorphic_automata() {
    let a = Automaton::parse("5 7 9/a b/5,a,7;7,b,9;9,a,9;9,b,5;7,a,5;5,b,5/5/9").unwrap();
    // 5 -> 1, 7 -> 2, 9 -> 0
    let b = Automaton::parse("0 1 2/a b/1,a,2;2,b,0;0,a,0;0,b,1;2,a,1;1,b,1/1/0").unwrap();

    let expected = "0 1 2/a b/0,a,1;0,b,0;1,a,0;1,b,2;2,a,2;2,b,0/0/2";
    assert_eq!(a.canonicalize().encode(), expected);
    assert_eq!(b.canonicalize().encode(), expected);
}

#[test]
fn test_canonicalize_visits_epsilon_first() {
    let nfa = Automaton::parse("0 1 2/a/0,a,1;0,,2/0/1").unwrap();
    assert_eq!(nfa.canonicalize().encode(), "0 1 2/a/0,,1;0,a,2/0/2");
}

#[test]
fn test_canonicalize_drops_unreachable_states() {
    let nfa = Automaton::parse("0 1 2 3/a/0,a,1;2,a,3/0/1 3").unwrap();
    assert_eq!(nfa.canonicalize().encode(), "0 1/a/0,a,1/0/1");
}

#[test]
fn test_canonicalize_idempotent() {
    let nfa = Automaton::parse("3 8 1/a b/3,a,8;8,,1;1,b,3;1,a,1/8/3").unwrap();
    let canonical = nfa.canonicalize();

    assert_eq!(canonical.initial(), &State::simple(0));
    assert_eq!(canonical.canonicalize(), canonical);
    assert_same_language(&nfa, &canonical, 6);
}

#[test]
fn test_reachable_states() {
    let nfa = Automaton::parse("0 1 2 3/a b/0,a,1;1,,2;3,b,0/0/2 3").unwrap();

    assert_eq!(
        nfa.reachable_states(),
        BTreeSet::from([State::simple(0), State::simple(1), State::simple(2)])
    );
}

#[test]
fn test_remove_unreachable() {
    let nfa = Automaton::parse("0 1 2 3/a b/0,a,1;1,,2;3,b,0/0/2 3").unwrap();
    let pruned = nfa.remove_unreachable();

    assert_eq!(pruned.encode(), "0 1 2/a b/0,a,1;1,,2/0/2");
    assert_eq!(pruned.remove_unreachable(), pruned);
    assert_same_language(&nfa, &pruned, 6);
}

#[test]
fn test_remove_unreachable_keeps_everything_reachable() {
    let nfa = Automaton::parse("0 1/a/0,a,1;1,a,0/0/1").unwrap();
    assert_eq!(nfa.remove_unreachable(), nfa);
}

#[test]
fn test_remove_unreachable_dfa() {
    let dfa = Automaton::parse("0 1 2/a/0,a,0;1,a,2;2,a,1/0/0")
        .unwrap()
        .to_dfa();

    // subset construction only creates reachable states
    assert_eq!(dfa.remove_unreachable(), dfa);
}
