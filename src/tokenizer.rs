use std::iter::Peekable;
use std::str::Chars;

use log::{debug, trace};

use crate::column;

const COMMENT_START: char = ';';
const QUOTE: char = '"';
const ESCAPE: char = '\\';

fn is_delimiter(character: char) -> bool {
    matches!(character, '(' | ')')
}

fn is_whitespace(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\n' | '\r')
}

fn is_special(character: char) -> bool {
    is_delimiter(character)
        || is_whitespace(character)
        || character == QUOTE
        || character == COMMENT_START
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    LeftParenthesis,
    RightParenthesis,
    StringLiteral,
    /// A string literal that ran into the end of input.
    UnterminatedStringLiteral,
    Whitespace,
    Atom,
}

/// A slice of source text paired with the column in effect before it.
///
/// `indent_before` is the column where the preceding whitespace run ended,
/// which for most tokens is the column the token starts at. Comments reset
/// the running column without touching it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub indent_before: usize,
}

impl Token {
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

/// Single forward pass over source text, yielding [`Token`]s on demand.
pub struct Tokenizer<'a> {
    input_characters: Peekable<Chars<'a>>,
    previous_indent: usize,
    current_indent: usize,
}

/// Tokenizes `text`. Comments are dropped and never produce a token.
pub fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer::new(text)
}

impl<'a> Tokenizer<'a> {
    pub fn new(input_text: &'a str) -> Self {
        Self {
            input_characters: input_text.chars().peekable(),
            previous_indent: 0,
            current_indent: 0,
        }
    }

    fn advance_position(&mut self, character: char) {
        self.current_indent = column::advance(self.current_indent, character);
    }

    fn consume_while<Predicate>(&mut self, predicate: Predicate) -> String
    where
        Predicate: Fn(char) -> bool,
    {
        let mut result = String::new();
        while let Some(&character) = self.input_characters.peek() {
            if predicate(character) {
                result.push(character);
                self.input_characters.next();
                self.advance_position(character);
            } else {
                break;
            }
        }
        result
    }

    /// Skips to the end of the line, leaving the newline itself unread.
    fn skip_comment(&mut self) {
        while let Some(&character) = self.input_characters.peek() {
            if character == '\n' {
                break;
            }
            self.input_characters.next();
        }
        self.current_indent = 0;
    }

    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            let &character = self.input_characters.peek()?;
            let indent_before = self.previous_indent;
            let (kind, text) = match character {
                COMMENT_START => {
                    self.skip_comment();
                    continue;
                }
                '(' | ')' => {
                    self.input_characters.next();
                    self.advance_position(character);
                    let kind = if character == '(' {
                        TokenKind::LeftParenthesis
                    } else {
                        TokenKind::RightParenthesis
                    };
                    (kind, character.to_string())
                }
                QUOTE => self.read_string_literal(),
                character if is_whitespace(character) => {
                    (TokenKind::Whitespace, self.read_whitespace())
                }
                _ => (TokenKind::Atom, self.consume_while(|character| !is_special(character))),
            };
            self.previous_indent = self.current_indent;
            trace!("token {:?} {:?} before column {}", kind, text, indent_before);
            return Some(Token {
                kind,
                text,
                indent_before,
            });
        }
    }

    /// Reads a maximal whitespace run. Comments inside the run are skipped
    /// in place and are not part of the returned text.
    fn read_whitespace(&mut self) -> String {
        let mut whitespace = String::new();
        while let Some(&character) = self.input_characters.peek() {
            if is_whitespace(character) {
                whitespace.push(character);
                self.input_characters.next();
                self.advance_position(character);
            } else if character == COMMENT_START {
                self.skip_comment();
            } else {
                break;
            }
        }
        whitespace
    }

    /// Reads a quoted literal verbatim, quotes and escapes included.
    fn read_string_literal(&mut self) -> (TokenKind, String) {
        let start_indent = self.current_indent;
        let mut literal = String::new();
        let mut opening = true;
        while let Some(character) = self.input_characters.next() {
            literal.push(character);
            self.current_indent = column::advance_in_literal(self.current_indent, character);
            match character {
                QUOTE if opening => opening = false,
                QUOTE => return (TokenKind::StringLiteral, literal),
                ESCAPE => match self.input_characters.next() {
                    Some(escaped) => {
                        literal.push(escaped);
                        self.current_indent =
                            column::advance_in_literal(self.current_indent, escaped);
                    }
                    None => break,
                },
                _ => {}
            }
        }
        debug!(
            "string literal at column {} runs to end of input",
            start_indent
        );
        (TokenKind::UnterminatedStringLiteral, literal)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
