use std::{collections::BTreeSet, fmt::Display};

use hashbrown::HashMap;
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use serde::Serialize;

use crate::{
    automaton::{state::State, symbol::Alphabet, symbol::Symbol},
    error::{AutomatonError, AutomatonResult, StateReference},
};

/// A single move `from --symbol--> to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Transition {
    pub from: State,
    pub symbol: Symbol,
    pub to: State,
}

impl Transition {
    pub fn new(from: impl Into<State>, symbol: impl Into<Symbol>, to: impl Into<State>) -> Self {
        Transition {
            from: from.into(),
            symbol: symbol.into(),
            to: to.into(),
        }
    }

    pub fn epsilon(from: impl Into<State>, to: impl Into<State>) -> Self {
        Transition::new(from, Symbol::Epsilon, to)
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.from, self.symbol, self.to)
    }
}

/// The relation `(state, symbol) -> {state, ...}` of an automaton.
///
/// Every declared state is a node of the underlying graph, so states without
/// any transition are still present. Each edge carries the symbol it is
/// labelled with. The same triple is never stored twice.
#[derive(Debug, Clone)]
pub struct TransitionRelation {
    graph: DiGraph<State, Symbol>,
    nodes: HashMap<State, NodeIndex>,
}

impl TransitionRelation {
    /// Builds the relation over the given states, checking that every
    /// transition only references declared states and symbols.
    pub fn new(
        states: &BTreeSet<State>,
        alphabet: &Alphabet,
        transitions: impl IntoIterator<Item = Transition>,
    ) -> AutomatonResult<Self> {
        let mut relation = TransitionRelation::with_states(states);

        for transition in transitions {
            relation.verify(&transition, alphabet)?;
            relation.insert(transition);
        }

        Ok(relation)
    }

    /// Builds the relation without checking the transitions. Used by
    /// transformations whose output is consistent by construction.
    pub(crate) fn new_unchecked(
        states: &BTreeSet<State>,
        transitions: impl IntoIterator<Item = Transition>,
    ) -> Self {
        let mut relation = TransitionRelation::with_states(states);

        for transition in transitions {
            debug_assert!(
                relation.nodes.contains_key(&transition.from)
                    && relation.nodes.contains_key(&transition.to),
                "Transition {} references an undeclared state",
                transition
            );
            relation.insert(transition);
        }

        relation
    }

    fn with_states(states: &BTreeSet<State>) -> Self {
        let mut graph = DiGraph::with_capacity(states.len(), 0);
        let mut nodes = HashMap::with_capacity(states.len());

        for state in states {
            let node = graph.add_node(state.clone());
            nodes.insert(state.clone(), node);
        }

        TransitionRelation { graph, nodes }
    }

    fn verify(&self, transition: &Transition, alphabet: &Alphabet) -> AutomatonResult<()> {
        if !self.nodes.contains_key(&transition.from) {
            return Err(AutomatonError::UnknownStateReference {
                state: transition.from.clone(),
                reference: StateReference::TransitionSource,
            });
        }

        if !self.nodes.contains_key(&transition.to) {
            return Err(AutomatonError::UnknownStateReference {
                state: transition.to.clone(),
                reference: StateReference::TransitionTarget,
            });
        }

        if !alphabet.admits(&transition.symbol) {
            return Err(AutomatonError::UnknownSymbolReference {
                symbol: transition.symbol,
                from: transition.from.clone(),
                to: transition.to.clone(),
            });
        }

        Ok(())
    }

    fn insert(&mut self, transition: Transition) {
        let from = self.nodes[&transition.from];
        let to = self.nodes[&transition.to];

        let exists = self
            .graph
            .edges_connecting(from, to)
            .any(|edge| *edge.weight() == transition.symbol);

        if !exists {
            self.graph.add_edge(from, to, transition.symbol);
        }
    }

    /// All states reachable from `state` by a single `symbol` move.
    pub fn at<'a>(&'a self, state: &State, symbol: Symbol) -> impl Iterator<Item = &'a State> + use<'a> {
        self.nodes
            .get(state)
            .copied()
            .into_iter()
            .flat_map(move |node| {
                self.graph
                    .edges_directed(node, Direction::Outgoing)
                    .filter(move |edge| *edge.weight() == symbol)
                    .map(move |edge| &self.graph[edge.target()])
            })
    }

    /// All outgoing moves of `state`, on any symbol including epsilon.
    pub fn outgoing<'a>(
        &'a self,
        state: &State,
    ) -> impl Iterator<Item = (Symbol, &'a State)> + use<'a> {
        self.nodes
            .get(state)
            .copied()
            .into_iter()
            .flat_map(move |node| {
                self.graph
                    .edges_directed(node, Direction::Outgoing)
                    .map(move |edge| (*edge.weight(), &self.graph[edge.target()]))
            })
    }

    /// Iterates over all transitions in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Transition> + '_ {
        self.graph.edge_references().map(|edge| Transition {
            from: self.graph[edge.source()].clone(),
            symbol: *edge.weight(),
            to: self.graph[edge.target()].clone(),
        })
    }

    /// All transitions, sorted by source, symbol and target.
    pub fn sorted(&self) -> BTreeSet<Transition> {
        self.iter().collect()
    }

    pub fn has_epsilon_transitions(&self) -> bool {
        self.graph.edge_weights().any(Symbol::is_epsilon)
    }

    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }
}

impl PartialEq for TransitionRelation {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.sorted() == other.sorted()
    }
}

impl Eq for TransitionRelation {}
