use itertools::Itertools as _;
use log::{debug, trace};
use thiserror::Error;

use crate::{
    tokenizer::{tokenize, Token, TokenKind},
    tree::Node,
};

/// Deepest list nesting the builder descends into. Deeper input is cut off
/// so that building, checking and dropping the tree stay within the stack.
pub const MAX_DEPTH: usize = 512;

/// Structural problems reported by [`parse`]. The lenient [`build_tree`]
/// never fails and absorbs these into the shape of the tree instead.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("string literal at column {indent} runs to end of input")]
    UnterminatedStringLiteral { indent: usize },
    #[error("list opened at column {indent} is never closed")]
    UnclosedList { indent: usize },
    #[error("unexpected `)` at column {indent}")]
    UnexpectedClose { indent: usize },
    #[error("list opened at column {indent} is nested deeper than {} levels", MAX_DEPTH)]
    TooDeep { indent: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// What a single read produced.
#[derive(Debug)]
enum Read {
    Node(Node),
    Close { indent: usize },
    EndOfInput,
}

struct Parser<I> {
    tokens: I,
    depth: usize,
    /// Column of the first list that exceeded [`MAX_DEPTH`].
    too_deep: Option<usize>,
}

impl<I> Parser<I>
where
    I: Iterator<Item = Token>,
{
    fn new(tokens: I) -> Parser<I> {
        Self {
            tokens,
            depth: 0,
            too_deep: None,
        }
    }

    fn read_one(&mut self) -> Read {
        if self.too_deep.is_some() {
            return Read::EndOfInput;
        }
        let mut leading_space = String::new();
        let token = loop {
            match self.tokens.next() {
                Some(token) if token.is_whitespace() => leading_space.push_str(&token.text),
                Some(token) => break token,
                None => return Read::EndOfInput,
            }
        };
        let mut node = match token.kind {
            TokenKind::RightParenthesis => {
                return Read::Close {
                    indent: token.indent_before,
                }
            }
            TokenKind::LeftParenthesis => {
                if self.depth == MAX_DEPTH {
                    debug!(
                        "list opened at column {} exceeds the nesting limit",
                        token.indent_before
                    );
                    self.too_deep = Some(token.indent_before);
                    return Read::EndOfInput;
                }
                self.depth += 1;
                let mut list = self.read_list();
                self.depth -= 1;
                if list.close_indent().is_none() {
                    debug!(
                        "list opened at column {} reached end of input",
                        token.indent_before
                    );
                }
                list.indent = token.indent_before;
                list
            }
            _ => Node::atom(token.text, token.indent_before),
        };
        node.leading_space = leading_space;
        Read::Node(node)
    }

    fn read_list(&mut self) -> Node {
        let mut children = vec![];
        let close_indent = loop {
            match self.read_one() {
                Read::Node(node) => children.push(node),
                Read::Close { indent } => break Some(indent),
                Read::EndOfInput => break None,
            }
        };
        trace!(
            "list of {} children closed at {:?}",
            children.len(),
            close_indent
        );
        Node::list(children, close_indent)
    }
}

/// Builds the tree for a token stream.
///
/// The root is always a list holding the top-level forms. It stays open
/// on well-formed input; a stray `)` closes it and drops whatever follows.
/// Lists nested past [`MAX_DEPTH`] end the build, leaving every enclosing
/// list unclosed.
pub fn build_tree<T>(tokens: T) -> Node
where
    T: IntoIterator<Item = Token>,
{
    build(tokens).0
}

fn build<T>(tokens: T) -> (Node, Option<usize>)
where
    T: IntoIterator<Item = Token>,
{
    let mut parser = Parser::new(tokens.into_iter());
    let root = parser.read_list();
    (root, parser.too_deep)
}

/// Tokenizes and builds `input_text`, rejecting unbalanced parentheses and
/// unterminated string literals and nesting past [`MAX_DEPTH`].
pub fn parse(input_text: &str) -> ParseResult<Node> {
    let tokens = tokenize(input_text).collect_vec();
    if let Some(token) = tokens
        .iter()
        .find(|token| token.kind == TokenKind::UnterminatedStringLiteral)
    {
        return Err(ParseError::UnterminatedStringLiteral {
            indent: token.indent_before,
        });
    }
    let (root, too_deep) = build(tokens);
    if let Some(indent) = too_deep {
        return Err(ParseError::TooDeep { indent });
    }
    if let Some(indent) = root.close_indent() {
        return Err(ParseError::UnexpectedClose { indent });
    }
    match find_unclosed(root.children()) {
        Some(error) => Err(error),
        None => Ok(root),
    }
}

fn find_unclosed(nodes: &[Node]) -> Option<ParseError> {
    nodes
        .iter()
        .filter(|node| node.is_list())
        .find_map(|node| match node.close_indent() {
            None => Some(ParseError::UnclosedList {
                indent: node.indent(),
            }),
            Some(_) => find_unclosed(node.children()),
        })
}
