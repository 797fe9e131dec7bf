use nfa2dfa_lib::{
    automaton::{Automaton, NFA, state::State, symbol::Alphabet, transition::Transition},
    config::{SubsetConstructionConfig, WorklistOrder},
    validation::{assert_total, same_language::assert_same_language},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_nfa(r: &mut StdRng, state_count: u32, transition_count: usize, alphabet: &[char]) -> NFA {
    let mut transitions = vec![];

    for _ in 0..transition_count {
        let from = r.gen_range(0..state_count);
        let to = r.gen_range(0..state_count);

        if r.gen_bool(0.2) {
            transitions.push(Transition::epsilon(from, to));
        } else {
            let symbol = alphabet[r.gen_range(0..alphabet.len())];
            transitions.push(Transition::new(from, symbol, to));
        }
    }

    let accepting = (0..state_count)
        .filter(|_| r.gen_bool(0.3))
        .map(State::simple)
        .collect::<Vec<_>>();
    let initial = State::simple(r.gen_range(0..state_count));

    Automaton::new(
        (0..state_count).map(State::simple),
        Alphabet::new(alphabet.iter().copied()),
        transitions,
        initial,
        accepting,
    )
    .unwrap()
}

fn random_nfa_test(seed: u64, max_states: u32, count: usize) {
    let mut r = StdRng::seed_from_u64(seed);
    let alphabet = ['a', 'b'];

    for _ in 0..count {
        let state_count = r.gen_range(1..=max_states);
        let transition_count = r.gen_range(0..(state_count as usize * 4));
        let nfa = random_nfa(&mut r, state_count, transition_count, &alphabet);

        let dfa = nfa.to_dfa();
        assert_total(&dfa);
        assert_same_language(&nfa, &dfa, 7);

        let canonical = dfa.canonicalize();
        assert_total(&canonical);
        assert_same_language(&dfa, &canonical, 7);
        assert_eq!(canonical.canonicalize(), canonical);
        // determinizing a canonical DFA only wraps every state in a singleton
        assert_eq!(canonical.to_dfa().canonicalize(), canonical);

        let lifo = nfa.to_dfa_with(
            &SubsetConstructionConfig::default().with_worklist(WorklistOrder::Lifo),
        );
        assert_eq!(lifo, dfa);

        let pruned = nfa.remove_unreachable();
        assert_eq!(pruned.remove_unreachable(), pruned);
        assert_same_language(&nfa, &pruned, 7);
        assert_eq!(pruned.to_dfa(), dfa);

        for state in nfa.states() {
            let closure = nfa.epsilon_closure(state);
            assert!(closure.contains(state));
            assert_eq!(nfa.epsilon_closure_of(&closure), closure);
        }

        assert_eq!(Automaton::parse(&nfa.encode()).unwrap(), nfa);
    }
}

#[test]
fn test_random_nfa_small() {
    random_nfa_test(0, 3, 200);
}

#[test]
fn test_random_nfa_medium() {
    random_nfa_test(42, 6, 100);
}
