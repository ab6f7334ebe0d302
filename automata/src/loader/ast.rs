use super::Spanned;

use crate::automatan::{Pattern, State};
use crate::loader::{Context, log::LogSink};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol<'a> {
    /// One of the spellings of the empty pattern.
    Epsilon(&'a str),
    Word(&'a str),
}

#[derive(Clone, Debug)]
pub struct Tuple<'a>(pub Vec<Spanned<Item<'a>>>);

#[derive(Clone, Debug)]
pub struct List<'a>(pub Vec<Spanned<Item<'a>>>);

#[derive(Clone, Debug)]
pub enum Item<'a> {
    Symbol(Symbol<'a>),
    Tuple(Tuple<'a>),
    List(List<'a>),
}

#[derive(Clone, Debug)]
pub enum TopLevel<'a> {
    /// `(state, input, stack) -> outputs`
    Transition(Spanned<Tuple<'a>>, Spanned<Item<'a>>),
    /// `{state, ...}`
    FinalStates(Spanned<List<'a>>),
}

impl Item<'_> {
    fn describe(&self) -> &'static str {
        match self {
            Item::Symbol(Symbol::Epsilon(_)) => "empty pattern",
            Item::Symbol(Symbol::Word(_)) => "word",
            Item::Tuple(_) => "tuple",
            Item::List(_) => "set",
        }
    }
}

impl<'a> Spanned<Item<'a>> {
    pub fn expect_state(&self, ctx: &mut Context<'a>) -> Option<Spanned<State>> {
        match &self.0 {
            Item::Symbol(Symbol::Word(word)) if word.bytes().all(|b| b.is_ascii_digit()) => {
                match word.parse() {
                    Ok(state) => return Some(Spanned(State(state), self.1)),
                    Err(_) => _ = ctx.emit_error(
                        format!("state {word} is out of range (at most {})", u16::MAX),
                        self.1,
                    ),
                }
            }
            other => {
                _ = ctx.emit_error(
                    format!("expected state number found {}", other.describe()),
                    self.1,
                )
            }
        }
        None
    }

    pub fn expect_pattern(&self, ctx: &mut Context<'a>) -> Option<Pattern> {
        match &self.0 {
            Item::Symbol(Symbol::Epsilon(_)) => return Some(Pattern::EPSILON),
            Item::Symbol(Symbol::Word(word)) => return Some(Pattern::from(*word)),
            other => {
                _ = ctx.emit_error(
                    format!("expected pattern found {}", other.describe()),
                    self.1,
                )
            }
        }
        None
    }

    pub fn expect_tuple(&self, ctx: &mut Context<'a>) -> Option<Spanned<&Tuple<'a>>> {
        match &self.0 {
            Item::Tuple(tuple) => return Some(Spanned(tuple, self.1)),
            other => {
                _ = ctx.emit_error(format!("expected tuple found {}", other.describe()), self.1)
            }
        }
        None
    }

    /// The items of a set, or this item alone.
    pub fn set_weak(&self) -> &[Spanned<Item<'a>>] {
        match &self.0 {
            Item::List(list) => &list.0,
            _ => std::slice::from_ref(self),
        }
    }
}
