//! In this file, we parse and write the textual encoding of automata.
//!
//! An example encoding is as follows:
//! ```text
//! 0 1 2 / a b / 0,a,1; 0,,2; 1,b,2; 2,a,2 / 0 / 2
//! ```
//! The five `/`-separated fields are the states, the alphabet, the
//! transitions, the initial state and the accepting states. States are
//! non-negative integers, symbols are single characters. A transition is
//! `from,symbol,to`, where an empty symbol stands for epsilon.
//!
//! Whitespace around separators is ignored. The accepting field may be empty
//! or left out together with its `/`, the transition list may be empty and
//! may end with a `;`.
use std::str::FromStr;

use hashbrown::HashMap;
use itertools::Itertools;
use nom::{
    Parser,
    character::complete::{multispace0, multispace1, satisfy},
    combinator::{all_consuming, opt},
    error::ParseError,
    multi::{separated_list0, separated_list1},
    sequence::delimited,
};

use crate::{
    automaton::{
        Automaton,
        state::State,
        symbol::{Alphabet, Symbol},
        transition::Transition,
    },
    error::{AutomatonError, AutomatonResult},
};

type NomError<'a> = nom::error::Error<&'a str>;

fn state_id<'a, E: ParseError<&'a str>>(input: &'a str) -> nom::IResult<&'a str, u32, E> {
    nom::character::complete::u32(input)
}

fn separator<'a, E: ParseError<&'a str>>(
    sep: char,
) -> impl Parser<&'a str, Output = (), Error = E> {
    delimited(multispace0, nom::character::complete::char(sep), multispace0).map(|_| ())
}

// E.g., 0 1 2
fn state_list<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> nom::IResult<&'a str, Vec<u32>, E> {
    separated_list1(multispace1, state_id).parse(input)
}

// Like `state_list`, but may be empty.
fn optional_state_list<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> nom::IResult<&'a str, Vec<u32>, E> {
    separated_list0(multispace1, state_id).parse(input)
}

fn symbol<'a, E: ParseError<&'a str>>(input: &'a str) -> nom::IResult<&'a str, char, E> {
    satisfy(Symbol::is_encodable).parse(input)
}

// E.g., a b c
fn alphabet<'a, E: ParseError<&'a str>>(input: &'a str) -> nom::IResult<&'a str, Vec<char>, E> {
    separated_list0(multispace1, symbol).parse(input)
}

#[test]
fn test_state_list() {
    let (rest, states) = state_list::<NomError>("0 1  12 ").unwrap();
    assert_eq!(states, vec![0, 1, 12]);
    assert_eq!(rest, " ");
}

#[test]
fn test_state_list_not_empty() {
    assert!(state_list::<NomError>("").is_err());
    assert_eq!(optional_state_list::<NomError>("").unwrap().1, vec![]);
}

#[test]
fn test_alphabet() {
    let (_, symbols) = alphabet::<NomError>("a b 0").unwrap();
    assert_eq!(symbols, vec!['a', 'b', '0']);
}

#[test]
fn test_alphabet_rejects_multi_character_symbols() {
    let (rest, symbols) = alphabet::<NomError>("ab c").unwrap();
    assert_eq!(symbols, vec!['a']);
    assert_eq!(rest, "b c");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTransition {
    pub from: u32,
    pub symbol: Option<char>,
    pub to: u32,
}

fn transition<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> nom::IResult<&'a str, EncodedTransition, E> {
    let (input, from) = state_id(input)?;
    let (input, _) = separator(',').parse(input)?;
    let (input, symbol) = opt(symbol).parse(input)?;
    let (input, _) = separator(',').parse(input)?;
    let (input, to) = state_id(input)?;

    Ok((input, EncodedTransition { from, symbol, to }))
}

#[test]
fn test_transition_1() {
    let (_, t) = transition::<NomError>("0 , a , 1").unwrap();
    assert_eq!(
        t,
        EncodedTransition {
            from: 0,
            symbol: Some('a'),
            to: 1
        }
    );
}

#[test]
fn test_transition_epsilon() {
    let (_, t) = transition::<NomError>("3,,4").unwrap();
    assert_eq!(t.symbol, None);

    let (_, t) = transition::<NomError>("3, ,4").unwrap();
    assert_eq!(t.symbol, None);
}

#[test]
fn test_transition_unterminated() {
    assert!(transition::<NomError>("0,a").is_err());
    assert!(transition::<NomError>("0,a,").is_err());
}

fn transition_list<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> nom::IResult<&'a str, Vec<EncodedTransition>, E> {
    let (input, transitions) = separated_list0(separator(';'), transition).parse(input)?;
    let (input, _) = opt(separator(';')).parse(input)?;

    Ok((input, transitions))
}

#[test]
fn test_transition_list() {
    let (rest, transitions) =
        transition_list::<NomError>("0 , a , 0; 0,b, 1 ;1, a, 0 ; 1, b, 1").unwrap();
    assert_eq!(rest, "");
    assert_eq!(transitions.len(), 4);
    assert_eq!(transitions[2].from, 1);
    assert_eq!(transitions[2].symbol, Some('a'));
    assert_eq!(transitions[2].to, 0);
}

#[test]
fn test_transition_list_trailing_separator() {
    let (rest, transitions) = transition_list::<NomError>("0,a,1;").unwrap();
    assert_eq!(rest, "");
    assert_eq!(transitions.len(), 1);
}

/// Runs `parser` on a whole field, surrounding whitespace included.
fn field<'a, O>(
    name: &str,
    input: &'a str,
    parser: impl Parser<&'a str, Output = O, Error = NomError<'a>>,
) -> AutomatonResult<O> {
    all_consuming(delimited(multispace0, parser, multispace0))
        .parse(input)
        .map(|(_, output)| output)
        .map_err(|e| {
            AutomatonError::MalformedEncoding(format!(
                "invalid {} field `{}`: {}",
                name,
                input.trim(),
                e
            ))
        })
}

/// The syntactic content of an encoding, before any validation of state and
/// symbol references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAutomaton {
    pub states: Vec<u32>,
    pub alphabet: Vec<char>,
    pub transitions: Vec<EncodedTransition>,
    pub initial: u32,
    pub accepting: Vec<u32>,
}

impl EncodedAutomaton {
    pub fn parse(text: &str) -> AutomatonResult<EncodedAutomaton> {
        let fields = text.split('/').collect_vec();

        let [states, symbols, transitions, initial, rest @ ..] = fields.as_slice() else {
            return Err(AutomatonError::MalformedEncoding(format!(
                "expected 5 fields separated by '/', found {}",
                fields.len()
            )));
        };

        let accepting = match rest {
            [] => "",
            [accepting] => *accepting,
            _ => {
                return Err(AutomatonError::MalformedEncoding(format!(
                    "expected 5 fields separated by '/', found {}",
                    fields.len()
                )));
            }
        };

        Ok(EncodedAutomaton {
            states: field("states", states, state_list::<NomError>)?,
            alphabet: field("alphabet", symbols, alphabet::<NomError>)?,
            transitions: field("transitions", transitions, transition_list::<NomError>)?,
            initial: field("initial state", initial, state_id::<NomError>)?,
            accepting: field("accepting states", accepting, optional_state_list::<NomError>)?,
        })
    }

    /// Resolves the ids and symbols against the declared sets.
    pub fn to_automaton(&self) -> AutomatonResult<Automaton> {
        let transitions = self.transitions.iter().map(|t| Transition {
            from: State::Simple(t.from),
            symbol: Symbol::from(t.symbol),
            to: State::Simple(t.to),
        });

        Automaton::new(
            self.states.iter().copied().map(State::Simple),
            Alphabet::new(self.alphabet.iter().copied()),
            transitions,
            State::Simple(self.initial),
            self.accepting.iter().copied().map(State::Simple),
        )
    }
}

#[test]
fn test_encoded_automaton_1() {
    let encoded = EncodedAutomaton::parse("0 1/a b/0 , a , 0; 0,b, 1 ;1, a, 0 ; 1, b, 1/0/ 1")
        .unwrap();
    assert_eq!(encoded.states, vec![0, 1]);
    assert_eq!(encoded.alphabet, vec!['a', 'b']);
    assert_eq!(encoded.transitions.len(), 4);
    assert_eq!(encoded.initial, 0);
    assert_eq!(encoded.accepting, vec![1]);
}

#[test]
fn test_encoded_automaton_without_accepting_field() {
    let encoded = EncodedAutomaton::parse("0 1/a/0,a,1/0").unwrap();
    assert!(encoded.accepting.is_empty());
}

impl Automaton {
    /// Parses and validates an encoded automaton.
    pub fn parse(text: &str) -> AutomatonResult<Automaton> {
        EncodedAutomaton::parse(text)?.to_automaton()
    }

    /// Writes this automaton in the textual encoding. States, symbols and
    /// transitions are written in sorted order, so equal automata have equal
    /// encodings.
    ///
    /// If every state is simple, states are written with their own ids.
    /// Otherwise each state is written as its position in the state order.
    pub fn encode(&self) -> String {
        let ids = self.state_ids();

        let states = self.states().iter().map(|s| ids[s]).sorted().join(" ");

        let transitions = self
            .transitions()
            .iter()
            .map(|t| (ids[&t.from], t.symbol, ids[&t.to]))
            .sorted()
            .map(|(from, symbol, to)| format!("{},{},{}", from, symbol.encode(), to))
            .join(";");

        let accepting = self.accepting().iter().map(|s| ids[s]).sorted().join(" ");

        format!(
            "{}/{}/{}/{}/{}",
            states,
            self.alphabet().encode(),
            transitions,
            ids[self.initial()],
            accepting
        )
    }

    fn state_ids(&self) -> HashMap<&State, u32> {
        if self.states().iter().all(|s| !s.is_composite()) {
            self.states()
                .iter()
                .filter_map(|s| s.id().map(|id| (s, id)))
                .collect()
        } else {
            self.states()
                .iter()
                .enumerate()
                .map(|(i, s)| (s, i as u32))
                .collect()
        }
    }
}

impl FromStr for Automaton {
    type Err = AutomatonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Automaton::parse(s)
    }
}

/// Reads an encoded NFA, determinizes it and returns the encoding of the
/// canonical DFA.
pub fn convert(text: &str) -> AutomatonResult<String> {
    Ok(Automaton::parse(text)?.to_dfa().canonicalize().encode())
}
