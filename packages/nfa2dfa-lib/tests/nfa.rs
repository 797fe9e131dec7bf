use nfa2dfa_lib::{
    automaton::{
        Automaton, Language, NFA,
        state::State,
        symbol::{Alphabet, Symbol},
        transition::Transition,
    },
    config::{SubsetConstructionConfig, WorklistOrder},
    validation::{assert_total, same_language::assert_same_language},
};

fn t(from: u32, symbol: char, to: u32) -> Transition {
    Transition::new(from, symbol, to)
}

fn eps(from: u32, to: u32) -> Transition {
    Transition::epsilon(from, to)
}

fn ids(ids: &[u32]) -> Vec<State> {
    ids.iter().copied().map(State::simple).collect()
}

#[test]
fn test_nfa_to_dfa_two_states() {
    let nfa = Automaton::parse("1 2/0 1/1,0,1;1,1,2;2,0,2;2,1,1/1/2").unwrap();
    let dfa = nfa.to_dfa();

    assert_total(&dfa);
    assert_eq!(dfa.state_count(), 2);
    assert_eq!(dfa.initial(), &State::composite_of_ids([1]));
    assert!(dfa.is_accepting(&State::composite_of_ids([2])));
    assert!(dfa.dead_state().is_none());

    assert_eq!(
        dfa.canonicalize().encode(),
        "0 1/0 1/0,0,0;0,1,1;1,0,1;1,1,0/0/1"
    );
    assert_eq!(
        nfa.canonicalize().encode(),
        "0 1/0 1/0,0,0;0,1,1;1,0,1;1,1,0/0/1"
    );

    assert_same_language(&nfa, &dfa, 8);
}

#[test]
fn test_nfa_to_dfa_epsilon_chain() {
    let nfa = Automaton::parse("0 1 2/a b/0,,1;1,,2;2,a,2/0/2").unwrap();
    let dfa = nfa.to_dfa();

    assert_total(&dfa);
    assert_eq!(dfa.initial(), &State::composite_of_ids([0, 1, 2]));
    assert_eq!(
        dfa.successor(dfa.initial(), 'a'),
        Some(&State::composite_of_ids([2]))
    );
    assert_eq!(dfa.successor(dfa.initial(), 'b'), Some(&State::dead()));

    assert!(dfa.accepts("".chars()));
    assert!(dfa.accepts("a".chars()));
    assert!(dfa.accepts("aaa".chars()));
    assert!(!dfa.accepts("b".chars()));
    assert!(!dfa.accepts("ab".chars()));

    assert_same_language(&nfa, &dfa, 6);
}

#[test]
fn test_nfa_to_dfa_dead_state() {
    let nfa = Automaton::parse("0 1/a b/0,a,1;1,a,1;1,b,0/0/1").unwrap();
    let dfa = nfa.to_dfa();

    assert_total(&dfa);
    assert_eq!(dfa.state_count(), 3);

    let dead = State::dead();
    assert_eq!(dfa.dead_state(), Some(&dead));
    assert_eq!(dfa.successor(&State::composite_of_ids([0]), 'b'), Some(&dead));
    assert_eq!(dfa.successor(&dead, 'a'), Some(&dead));
    assert_eq!(dfa.successor(&dead, 'b'), Some(&dead));
    assert!(!dfa.is_accepting(&dead));

    assert_same_language(&nfa, &dfa, 8);
}

#[test]
fn test_nfa_to_dfa_empty_alphabet() {
    let nfa = Automaton::parse("0 1//0,,1/0/1").unwrap();
    let dfa = nfa.to_dfa();

    assert_eq!(dfa.state_count(), 1);
    assert!(dfa.transitions().is_empty());
    assert!(dfa.accepts("".chars()));
    assert!(dfa.dead_state().is_none());
}

#[test]
fn test_nfa_to_dfa_accepting_by_any_member() {
    let nfa = NFA::new(
        ids(&[0, 1, 2]),
        Alphabet::new(['a']),
        vec![t(0, 'a', 1), t(0, 'a', 2)],
        State::simple(0),
        ids(&[2]),
    )
    .unwrap();
    let dfa = nfa.to_dfa();

    let both = State::composite_of_ids([1, 2]);
    assert_eq!(dfa.successor(dfa.initial(), 'a'), Some(&both));
    assert!(dfa.is_accepting(&both));
    assert!(!dfa.is_accepting(dfa.initial()));
}

#[test]
fn test_nfa_to_dfa_mixed() {
    let nfa = NFA::new(
        ids(&[0, 1, 2, 3, 4]),
        Alphabet::new(['a', 'b']),
        vec![
            t(0, 'a', 1),
            eps(0, 2),
            t(1, 'b', 2),
            t(2, 'a', 3),
            eps(2, 4),
            t(3, 'b', 2),
        ],
        State::simple(0),
        ids(&[4]),
    )
    .unwrap();
    let dfa = nfa.to_dfa();

    assert_total(&dfa);
    assert!(!dfa.has_epsilon_transitions());
    assert_same_language(&nfa, &dfa, 8);

    assert!(dfa.accepts("".chars()));
    assert!(dfa.accepts("ab".chars()));
    assert!(dfa.accepts("abab".chars()));
    assert!(!dfa.accepts("a".chars()));
    assert!(!dfa.accepts("ba".chars()));
}

#[test]
fn test_nfa_insertion_order_does_not_matter() {
    let transitions = vec![t(0, 'a', 1), eps(1, 2), t(2, 'b', 0), t(2, 'a', 2)];
    let mut reversed = transitions.clone();
    reversed.reverse();

    let a = NFA::new(
        ids(&[0, 1, 2]),
        Alphabet::new(['a', 'b']),
        transitions,
        State::simple(0),
        ids(&[2]),
    )
    .unwrap();
    let b = NFA::new(
        ids(&[2, 1, 0]),
        Alphabet::new(['b', 'a']),
        reversed,
        State::simple(0),
        ids(&[2]),
    )
    .unwrap();

    assert_eq!(a, b);
    assert_eq!(a.to_dfa(), b.to_dfa());
    assert_eq!(a.encode(), b.encode());
}

#[test]
fn test_worklist_order_does_not_matter() {
    let nfa = Automaton::parse("0 1 2 3/a b/0,a,0;0,b,0;0,a,1;1,,2;2,b,3;3,a,1/0/3").unwrap();

    let fifo = nfa.to_dfa_with(&SubsetConstructionConfig::default().with_worklist(WorklistOrder::Fifo));
    let lifo = nfa.to_dfa_with(&SubsetConstructionConfig::default().with_worklist(WorklistOrder::Lifo));

    assert_total(&fifo);
    assert_total(&lifo);
    assert_eq!(fifo, lifo);
    assert_eq!(fifo.canonicalize().encode(), lifo.canonicalize().encode());
}

#[test]
fn test_nfa_accepts() {
    let nfa = Automaton::parse("0 1 2/a b/0,a,0;0,b,0;0,a,1;1,b,2/0/2").unwrap();

    assert!(nfa.accepts("ab".chars()));
    assert!(nfa.accepts("babab".chars()));
    assert!(!nfa.accepts("ba".chars()));
    assert!(!nfa.accepts("".chars()));
    // characters outside the alphabet are rejected
    assert!(!nfa.accepts("abc".chars()));
}

#[test]
fn test_nfa_at() {
    let nfa = Automaton::parse("0 1 2/a/0,a,1;0,a,2;0,,2/0/2").unwrap();

    let mut targets = nfa.at(&State::simple(0), 'a').collect::<Vec<_>>();
    targets.sort();
    assert_eq!(targets, vec![&State::simple(1), &State::simple(2)]);

    assert_eq!(
        nfa.at(&State::simple(0), Symbol::Epsilon).collect::<Vec<_>>(),
        vec![&State::simple(2)]
    );
    assert_eq!(nfa.at(&State::simple(1), 'a').count(), 0);
}
