use std::collections::BTreeSet;
use std::fmt::Display;

pub mod pda;
pub mod sim;

/// A single input or stack symbol.
pub type Symbol = char;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct State(pub u16);

/// Largest number of states an automaton can have; every state number fits
/// in a `u16`.
pub const MAX_STATES: usize = u16::MAX as usize + 1;

impl State {
    /// Every automaton starts here.
    pub const INITIAL: State = State(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sequence of symbols matched against the front of the remaining input or
/// the top of the stack. The empty pattern always matches, which is how
/// epsilon moves are expressed.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Pattern(Vec<Symbol>);

impl Pattern {
    pub const EPSILON: Pattern = Pattern(Vec::new());

    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self(symbols.into_iter().collect())
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_prefix_of(&self, symbols: &[Symbol]) -> bool {
        symbols.starts_with(&self.0)
    }

    /// Two patterns overlap when some sequence starts with both of them.
    pub fn overlaps(&self, other: &Pattern) -> bool {
        self.0.starts_with(&other.0) || other.0.starts_with(&self.0)
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Self(value.chars().collect())
    }
}

impl FromIterator<Symbol> for Pattern {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "{}", crate::loader::EPSILON);
        }
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Alphabet(BTreeSet<Symbol>);

impl Alphabet {
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0.contains(&symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first symbol of `symbols` that is not in this alphabet.
    pub fn first_foreign(&self, symbols: &[Symbol]) -> Option<Symbol> {
        symbols.iter().copied().find(|s| !self.contains(*s))
    }

    /// Every string over this alphabet of length at most `max_len`, shortest
    /// first and in symbol order within a length.
    pub fn words(&self, max_len: usize) -> Vec<String> {
        let mut words = vec![String::new()];
        let mut previous = 0..1;
        for _ in 0..max_len {
            let start = words.len();
            for i in previous.clone() {
                for symbol in self.symbols() {
                    let mut word = words[i].clone();
                    word.push(symbol);
                    words.push(word);
                }
            }
            previous = start..words.len();
        }
        words
    }
}

impl From<&str> for Alphabet {
    fn from(value: &str) -> Self {
        Self(value.chars().collect())
    }
}

impl FromIterator<Symbol> for Alphabet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, symbol) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{symbol}")?;
        }
        write!(f, "}}")
    }
}

/// Dense map from every state of an automaton to a value. State numbers
/// past [`MAX_STATES`] wrap, so automata reject larger maps.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct StateMap<T>(Vec<T>);

impl<T> StateMap<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self(values)
    }

    pub fn get(&self, state: State) -> Option<&T> {
        self.0.get(state.index())
    }

    pub fn get_mut(&mut self, state: State) -> Option<&mut T> {
        self.0.get_mut(state.index())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, state: State) -> bool {
        state.index() < self.0.len()
    }

    pub fn states(&self) -> impl Iterator<Item = State> + use<T> {
        (0..self.0.len()).map(|i| State(i as u16))
    }

    pub fn entries(&self) -> impl Iterator<Item = (State, &T)> {
        self.0.iter().enumerate().map(|(i, v)| (State(i as u16), v))
    }
}

impl<T: Default> StateMap<T> {
    pub fn with_states(count: usize) -> Self {
        Self(std::iter::repeat_with(T::default).take(count).collect())
    }
}

impl<T> std::ops::Index<State> for StateMap<T> {
    type Output = T;

    fn index(&self, state: State) -> &T {
        &self.0[state.index()]
    }
}

impl<T> std::ops::IndexMut<State> for StateMap<T> {
    fn index_mut(&mut self, state: State) -> &mut T {
        &mut self.0[state.index()]
    }
}

/// Which properties a configuration with no remaining input needs in order to
/// accept.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AcceptCondition {
    #[default]
    FinalState,
    EmptyStack,
    FinalStateAndEmptyStack,
}

impl AcceptCondition {
    pub fn requires_final_state(self) -> bool {
        matches!(self, Self::FinalState | Self::FinalStateAndEmptyStack)
    }

    pub fn requires_empty_stack(self) -> bool {
        matches!(self, Self::EmptyStack | Self::FinalStateAndEmptyStack)
    }
}

/// How an automaton is built from its textual table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildOptions {
    pub input_alphabet: Alphabet,
    pub stack_alphabet: Alphabet,
    pub initial_stack: Pattern,
    pub accept_condition: AcceptCondition,
    /// Reject automata that can fire two rules on the same configuration.
    pub deterministic: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            input_alphabet: Alphabet::from("01"),
            stack_alphabet: Alphabet::from("AZ"),
            initial_stack: Pattern::from("Z"),
            accept_condition: AcceptCondition::FinalState,
            deterministic: true,
        }
    }
}

/// Execution budgets for a single simulation. `None` disables a budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    pub max_iterations: Option<usize>,
    pub max_configs: Option<usize>,
    pub max_stack_size: Option<usize>,
}

impl Limits {
    /// No budgets at all. Only safe for automata known to halt.
    pub const fn unbounded() -> Self {
        Self {
            max_iterations: None,
            max_configs: None,
            max_stack_size: None,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_iterations: Some(1000),
            max_configs: Some(100),
            max_stack_size: Some(100),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub build: BuildOptions,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub limits: Limits,
}
