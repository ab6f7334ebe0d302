use crate::epsilon;
use crate::loader::log::LogSink;
use crate::loader::{Context, Span};

use super::lexer::Token as T;
use crate::loader::Spanned as S;

use super::ast::*;
use super::lexer::Lexer;

/// Reads clauses one at a time. Line breaks carry no meaning except that
/// after an error the parser skips to the next line before resuming.
pub struct Parser<'a, 'b> {
    lexer: Lexer<'a>,
    peek: Option<S<T<'a>>>,
    // whether a line break separates `peek` from the token before it
    peek_on_new_line: bool,
    ctx: &'b mut Context<'a>,
}

impl<'a, 'b> Iterator for Parser<'a, 'b> {
    type Item = S<TopLevel<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_element()
    }
}

impl<'a, 'b> Parser<'a, 'b> {
    pub fn new(ctx: &'b mut Context<'a>) -> Self {
        Parser {
            lexer: Lexer::new(ctx.src()),
            peek: None,
            peek_on_new_line: true,
            ctx,
        }
    }

    fn lex_token(&mut self) -> Option<(S<T<'a>>, bool)> {
        let mut new_line = false;
        loop {
            match self.lexer.next()? {
                S(Ok(T::Comment(_)), _) => {}
                S(Ok(T::LineEnd), _) => new_line = true,
                S(Ok(tok), span) => return Some((S(tok, span), new_line)),
                S(Err(err), span) => _ = self.ctx.emit_error(err.to_string(), span),
            }
        }
    }

    fn peek_token_optional(&mut self) -> Option<S<T<'a>>> {
        if self.peek.is_none()
            && let Some((tok, new_line)) = self.lex_token()
        {
            self.peek = Some(tok);
            self.peek_on_new_line = new_line;
        }
        self.peek
    }

    fn peek_token(&mut self) -> S<T<'a>> {
        self.peek_token_optional()
            .unwrap_or(S(T::Eof, self.ctx.eof()))
    }

    fn next_token(&mut self) -> S<T<'a>> {
        let tok = self.peek_token();
        self.peek = None;
        tok
    }

    fn expect_token(&mut self, expected: T<'a>) -> Option<Span> {
        match self.peek_token() {
            S(token, span) if token == expected => {
                self.next_token();
                Some(span)
            }
            S(token, span) => {
                self.ctx
                    .emit_error(format!("unexpected {token:#} expected {expected}"), span);
                None
            }
        }
    }

    /// Skips the rest of the line the error occurred on. A token that
    /// already starts a new line is kept.
    fn recover(&mut self) {
        if self.peek.is_some() && self.peek_on_new_line {
            return;
        }
        self.peek = None;
        while let Some(S(tok, _)) = self.lexer.next() {
            if tok == Ok(T::LineEnd) {
                break;
            }
        }
        self.peek_on_new_line = true;
    }

    fn parse_symbol(&mut self) -> S<Symbol<'a>> {
        match self.next_token() {
            S(T::Tilde, span) => S(Symbol::Epsilon("~"), span),
            S(T::Word(repr @ epsilon!(pat)), span) => S(Symbol::Epsilon(repr), span),
            S(T::Word(word), span) => S(Symbol::Word(word), span),
            S(_, span) => S(Symbol::Word(""), span),
        }
    }

    /// Comma separated items between `open` and `close`.
    fn parse_sequence(&mut self, open: T<'a>, close: T<'a>) -> Option<S<Vec<S<Item<'a>>>>> {
        let start = self.expect_token(open)?;
        let mut items = Vec::new();
        if let S(tok, end) = self.peek_token()
            && tok == close
        {
            self.next_token();
            return Some(S(items, start.join(end)));
        }

        loop {
            items.push(self.parse_item()?);
            match self.next_token() {
                S(T::Comma, _) => {}
                S(tok, end) if tok == close => return Some(S(items, start.join(end))),
                S(tok, span) => {
                    self.ctx.emit_error(
                        format!("unexpected {tok:#} expected {} | {close}", T::Comma),
                        span,
                    );
                    return None;
                }
            }
        }
    }

    fn parse_tuple(&mut self) -> Option<S<Tuple<'a>>> {
        self.parse_sequence(T::LPar, T::RPar)
            .map(|items| items.map(Tuple))
    }

    fn parse_list(&mut self) -> Option<S<List<'a>>> {
        self.parse_sequence(T::LBrace, T::RBrace)
            .map(|items| items.map(List))
    }

    fn parse_item(&mut self) -> Option<S<Item<'a>>> {
        match self.peek_token().0 {
            T::Word(_) | T::Tilde => Some(self.parse_symbol().map(Item::Symbol)),
            T::LPar => Some(self.parse_tuple()?.map(Item::Tuple)),
            T::LBrace => Some(self.parse_list()?.map(Item::List)),
            _ => {
                let S(got, span) = self.peek_token();
                self.ctx.emit_error(
                    format!(
                        "unexpected {got:#} expected item ( {} | {} | {} | {} )",
                        T::Word(""),
                        T::Tilde,
                        T::LPar,
                        T::LBrace,
                    ),
                    span,
                );
                None
            }
        }
    }

    fn parse_transition(&mut self) -> Option<S<TopLevel<'a>>> {
        let source = self.parse_tuple()?;
        self.expect_token(T::Arrow)?;
        let target = self.parse_item()?;
        let span = source.1.join(target.1);
        Some(S(TopLevel::Transition(source, target), span))
    }

    pub fn next_element(&mut self) -> Option<S<TopLevel<'a>>> {
        loop {
            let S(tok, span) = self.peek_token_optional()?;
            let element = match tok {
                T::LPar => self.parse_transition(),
                T::LBrace => self.parse_list().map(|list| {
                    let span = list.1;
                    S(TopLevel::FinalStates(list), span)
                }),
                _ => {
                    self.next_token();
                    self.ctx.emit_error(
                        format!(
                            "unexpected {tok:#} expected transition {} or final states {}",
                            T::LPar,
                            T::LBrace
                        ),
                        span,
                    );
                    None
                }
            };
            match element {
                Some(element) => return Some(element),
                None => self.recover(),
            }
        }
    }
}
