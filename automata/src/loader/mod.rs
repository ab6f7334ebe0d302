use crate::automatan::pda::{FinalStates, Table};
use crate::loader::log::{LogEntry, LogSink, Logs};

pub mod ast;
pub mod lexer;
pub mod log;
pub mod parser;

#[macro_export]
macro_rules! maker {
    (pat: $($pat:pat),*) => {
      $($pat)|*
    };
    (arr: $($expr:expr),*) => {
        [$($expr),*]
    };
}

/// How the writer spells the empty pattern.
pub const EPSILON: &str = "e";

#[macro_export]
macro_rules! epsilon {
    ($ident: ident) => {
      $crate::maker!($ident: "e", "ε", "ϵ", "Ɛ")
    };
}

/// Byte range into the source text.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span(pub usize, pub usize);
impl Span {
    pub fn join(&self, end: Span) -> Span {
        Span(self.0, end.1)
    }
}

#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub struct Spanned<T>(pub T, pub Span);
impl<T> Spanned<T> {
    pub fn map<R>(self, map: impl Fn(T) -> R) -> Spanned<R> {
        Spanned(map(self.0), self.1)
    }

    pub fn as_ref(&self) -> Spanned<&T> {
        Spanned(&self.0, self.1)
    }
}

pub struct Context<'a> {
    logs: Logs,
    src: &'a str,
}

impl<'a> LogSink for Context<'a> {
    fn emit(&mut self, entry: LogEntry) -> &mut LogEntry {
        self.logs.emit(entry)
    }
}

impl<'a> Context<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            logs: Logs::new(),
            src,
        }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn logs(&self) -> &Logs {
        &self.logs
    }

    pub fn eof(&self) -> Span {
        Span(self.src.len(), self.src.len())
    }

    pub fn contains_errors(&self) -> bool {
        self.logs.contains_errors()
    }

    pub fn into_logs(self) -> Logs {
        self.logs
    }
}

/// The transition table text could not be read. Holds every diagnostic that
/// was reported, warnings included.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", summary(.logs))]
pub struct SyntaxError {
    logs: Logs,
}

fn summary(logs: &Logs) -> String {
    let mut errors = logs.errors();
    let Some(first) = errors.next() else {
        return "invalid transition table".into();
    };
    match errors.count() {
        0 => first.message.clone(),
        1 => format!("{} (and 1 more error)", first.message),
        more => format!("{} (and {more} more errors)", first.message),
    }
}

impl SyntaxError {
    pub fn logs(&self) -> &Logs {
        &self.logs
    }

    /// Renders every diagnostic with an excerpt of `src`, which must be the
    /// text that was parsed.
    pub fn display_with(&self, src: &str) -> String {
        self.logs
            .displayable_with(src)
            .map(|entry| entry.to_string())
            .collect()
    }
}

/// Reads a transition table and its final state declaration, if any.
pub fn parse(src: &str) -> Result<(Table, Option<FinalStates>), SyntaxError> {
    let mut ctx = Context::new(src);
    let parsed = parse_with(&mut ctx);
    for warning in ctx.logs().warnings() {
        ::log::warn!("{}", warning.message);
    }
    parsed.ok_or_else(|| SyntaxError {
        logs: ctx.into_logs(),
    })
}

/// Like [`parse`] but reports into a caller owned context. Returns `None` if
/// any error was reported.
pub fn parse_with<'a>(ctx: &mut Context<'a>) -> Option<(Table, Option<FinalStates>)> {
    let items = parser::Parser::new(ctx).collect::<Vec<_>>();
    if ctx.contains_errors() {
        return None;
    }
    Table::load(items.into_iter(), ctx)
}
