use itertools::Itertools;

use crate::automaton::{
    Automaton,
    dfa::DFA,
    state::{State, format_state_set},
};

impl Automaton {
    /// Describes this automaton in set notation, one component per line:
    /// ```text
    /// K = {0, 1}
    /// Σ = {a, b}
    /// Δ = {(0, a, 1), (1, ε, 0)}
    /// s = 0
    /// A = {1}
    /// ```
    pub fn to_set_notation(&self) -> String {
        self.set_notation_with("Δ")
    }

    fn set_notation_with(&self, relation_name: &str) -> String {
        let transitions = self.transitions().sorted().iter().join(", ");

        format!(
            "K = {}\nΣ = {}\n{} = {{{}}}\ns = {}\nA = {}\n",
            format_state_set(self.states()),
            self.alphabet(),
            relation_name,
            transitions,
            self.initial(),
            format_state_set(self.accepting()),
        )
    }

    pub fn to_graphviz(&self) -> String {
        let ids: Vec<&State> = self.states().iter().collect();
        let index_of = |state: &State| ids.binary_search(&state).unwrap_or(usize::MAX);

        let mut dot = String::new();
        dot.push_str("digraph finite_state_machine {\n");
        dot.push_str("fontname=\"Helvetica,Arial,sans-serif\"\n");
        dot.push_str("node [fontname=\"Helvetica,Arial,sans-serif\"]\n");
        dot.push_str("edge [fontname=\"Helvetica,Arial,sans-serif\"]\n");
        dot.push_str("rankdir=LR;\n");
        dot.push_str("node [shape=point,label=\"\"]START\n");

        dot.push_str(&format!(
            "node [shape = doublecircle]; {};\n",
            self.accepting()
                .iter()
                .map(|state| format!("n{}", index_of(state)))
                .join(" ")
        ));
        dot.push_str("node [shape = circle];\n");
        dot.push_str(&format!("START -> n{};\n", index_of(self.initial())));

        for (i, state) in ids.iter().enumerate() {
            dot.push_str(&format!("n{} [ label=\"{}\" ];\n", i, state));
        }

        for t in self.transitions().sorted() {
            dot.push_str(&format!(
                "n{} -> n{} [ label=\"{}\" ];\n",
                index_of(&t.from),
                index_of(&t.to),
                t.symbol
            ));
        }

        dot.push_str("}\n");

        dot
    }
}

impl DFA {
    /// Like [`Automaton::to_set_notation`], but names the transition function
    /// `δ`.
    pub fn to_set_notation(&self) -> String {
        self.as_automaton().set_notation_with("δ")
    }
}
