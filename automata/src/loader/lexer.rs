use crate::loader::{Span, Spanned};

#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub enum Token<'a> {
    LPar,
    RPar,

    LBrace,
    RBrace,

    Comma,
    Tilde,
    Arrow,

    Comment(&'a str),

    /// A state number or a pattern; which one depends on where it appears.
    Word(&'a str),
    LineEnd,

    /// Never produced by the lexer; stands for the end of the input.
    Eof,
}

impl<'a> std::fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::LPar => write!(f, "'('"),
            Token::RPar => write!(f, "')'"),
            Token::LBrace => write!(f, "'{{'"),
            Token::RBrace => write!(f, "'}}'"),
            Token::Comma => write!(f, "','"),
            Token::Tilde => write!(f, "'~'"),
            Token::Arrow => write!(f, "'->'"),
            Token::Comment(_) => write!(f, "<comment>"),
            Token::Word(word) if f.alternate() => write!(f, "{word:?}"),
            Token::Word(_) => write!(f, "word"),
            Token::LineEnd => write!(f, "eol"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub enum Error {
    InvalidChar(char),
    UnclosedMultiLine,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidChar(c) => write!(f, "invalid character {c:?}"),
            Error::UnclosedMultiLine => write!(f, "unclosed block comment"),
        }
    }
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn consume(&mut self) -> Option<char> {
        let next = self.peek()?;
        self.position += next.len_utf8();
        Some(next)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position..)?.chars().next()
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek()
            && pred(c)
        {
            self.position += c.len_utf8();
        }
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || (!c.is_ascii() && !c.is_control() && !c.is_whitespace())
}

impl<'a> std::iter::Iterator for Lexer<'a> {
    type Item = Spanned<Result<Token<'a>, Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.consume_while(|c| c.is_whitespace() && c != '\n');
        let start = self.position;

        let res = match self.consume()? {
            '\n' => Ok(Token::LineEnd),
            '(' => Ok(Token::LPar),
            ')' => Ok(Token::RPar),
            '{' => Ok(Token::LBrace),
            '}' => Ok(Token::RBrace),
            ',' => Ok(Token::Comma),
            '~' => Ok(Token::Tilde),
            '-' => match self.peek() {
                Some('>') => {
                    self.consume();
                    Ok(Token::Arrow)
                }
                _ => Err(Error::InvalidChar('-')),
            },

            '/' => match self.peek() {
                Some('/') => {
                    self.consume_while(|c| c != '\n');
                    Ok(Token::Comment(&self.input[start + 2..self.position]))
                }
                Some('*') => {
                    self.consume();
                    loop {
                        match self.consume() {
                            Some('*') if self.peek() == Some('/') => {
                                self.consume();
                                break Ok(Token::Comment(
                                    &self.input[start + 2..self.position - 2],
                                ));
                            }
                            Some(_) => {}
                            None => break Err(Error::UnclosedMultiLine),
                        }
                    }
                }
                _ => Err(Error::InvalidChar('/')),
            },

            c if is_word(c) => {
                self.consume_while(is_word);
                Ok(Token::Word(&self.input[start..self.position]))
            }

            c => Err(Error::InvalidChar(c)),
        };
        Some(Spanned(res, Span(start, self.position)))
    }
}
