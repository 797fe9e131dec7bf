use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;

/// The label of a transition. Epsilon is its own variant and never part of an
/// [`Alphabet`]. It orders before every character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Symbol {
    Epsilon,
    Char(char),
}

impl Symbol {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Char(c) => Some(*c),
            Symbol::Epsilon => None,
        }
    }

    /// Whether `c` can be written in the textual encoding. Whitespace and the
    /// separators `,`, `;` and `/` cannot.
    pub fn is_encodable(c: char) -> bool {
        !c.is_whitespace() && !matches!(c, ',' | ';' | '/')
    }

    /// The symbol as it appears in the middle field of an encoded transition.
    /// Epsilon is the empty string.
    pub fn encode(&self) -> String {
        match self {
            Symbol::Char(c) => c.to_string(),
            Symbol::Epsilon => String::new(),
        }
    }
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Symbol::Char(value)
    }
}

impl From<Option<char>> for Symbol {
    fn from(value: Option<char>) -> Self {
        match value {
            Some(c) => Symbol::Char(c),
            None => Symbol::Epsilon,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{}", c),
            Symbol::Epsilon => write!(f, "ε"),
        }
    }
}

/// A finite set of input characters, kept sorted so that every traversal over
/// it is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Self {
        let mut symbols = symbols.into_iter().collect_vec();
        symbols.sort_unstable();
        symbols.dedup();

        Alphabet { symbols }
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.binary_search(&symbol).is_ok()
    }

    /// Whether a transition label is allowed in an automaton over this
    /// alphabet. Epsilon is always allowed here, DFAs reject it separately.
    pub fn admits(&self, symbol: &Symbol) -> bool {
        match symbol {
            Symbol::Char(c) => self.contains(*c),
            Symbol::Epsilon => true,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// All symbols, epsilon first, then the characters in order.
    pub fn with_epsilon(&self) -> impl Iterator<Item = Symbol> + '_ {
        std::iter::once(Symbol::Epsilon).chain(self.iter().map(Symbol::Char))
    }

    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn encode(&self) -> String {
        self.symbols.iter().join(" ")
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Alphabet::new(iter)
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.symbols.iter().join(", "))
    }
}
