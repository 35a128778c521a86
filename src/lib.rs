//! Indentation linter for parenthesized, Lisp-like source text.
//!
//! Text goes through three stages: [`tokenize`] yields tokens tagged with
//! the column in effect before them, [`build_tree`] nests them by
//! parentheses, and [`check_syntax`] decides whether every form is indented
//! consistently with that nesting.
//!
//! ```
//! assert!(indentcheck::check_text("(a\n b)"));
//! assert!(!indentcheck::check_text("(a b\n c)"));
//! ```

mod check;
mod column;
mod parse;
mod tokenizer;
mod tree;

pub use check::{check_syntax, check_syntax_under};
pub use column::{advance, TAB_WIDTH};
pub use parse::{build_tree, parse, ParseError, ParseResult, MAX_DEPTH};
pub use tokenizer::{tokenize, Token, TokenKind, Tokenizer};
pub use tree::{Node, NodeKind};

/// Runs the whole pipeline. Malformed input yields whatever verdict its
/// degenerate tree produces.
pub fn check_text(input_text: &str) -> bool {
    check_syntax(&build_tree(tokenize(input_text)))
}

/// Like [`check_text`], but unbalanced parentheses and unterminated string
/// literals are errors rather than a verdict.
pub fn check(input_text: &str) -> ParseResult<bool> {
    parse(input_text).map(|root| check_syntax(&root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_verdicts() -> ParseResult<()> {
        assert!(check("(a\n b)")?);
        assert!(!check("(a b\n c)")?);
        Ok(())
    }

    #[test]
    fn check_reports_structure_errors() {
        assert_eq!(check("(a (b"), Err(ParseError::UnclosedList { indent: 0 }));
        assert_eq!(check("a)"), Err(ParseError::UnexpectedClose { indent: 1 }));
    }

    #[test]
    fn deep_nesting_finishes() {
        let input = format!("{}a{}", "(".repeat(20_000), ")".repeat(20_000));
        assert!(check_text(&input));
        assert_eq!(check(&input), Err(ParseError::TooDeep { indent: MAX_DEPTH }));
    }

    #[test]
    fn check_text_never_fails() {
        assert!(check_text("(a \"unterminated"));
        assert!(!check_text("a)"));
    }
}
