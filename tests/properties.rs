//! Property-based tests for the tokenize, build and check pipeline.

use indentcheck::{advance, build_tree, check_syntax, tokenize, Node, TAB_WIDTH};
use proptest::prelude::*;

/// Source built from atoms, strings, parentheses and whitespace, with no
/// comments, so every character ends up in some token.
fn comment_free_source() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z0-9*+-]{1,6}",
            "\"[a-z ()\\t]{0,6}\"",
            Just("(".to_string()),
            Just(")".to_string()),
            "[ \t\n]{1,4}",
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

/// Balanced source: a random nesting of atoms with random line breaks.
fn balanced_source() -> impl Strategy<Value = String> {
    "[a-z]{1,4}".prop_recursive(4, 32, 6, |inner| {
        prop::collection::vec((inner, "( |\n {0,6}|\n\t)"), 1..6).prop_map(|items| {
            let body: String = items
                .into_iter()
                .enumerate()
                .map(|(index, (item, gap))| {
                    if index == 0 {
                        item
                    } else {
                        format!("{}{}", gap, item)
                    }
                })
                .collect();
            format!("({})", body)
        })
    })
}

fn empty_lists(node: &Node) -> Vec<&Node> {
    let mut found = vec![];
    if node.is_list() && node.children().is_empty() {
        found.push(node);
    }
    for child in node.children() {
        found.extend(empty_lists(child));
    }
    found
}

proptest! {
    #[test]
    fn token_texts_reconstruct_input(source in comment_free_source()) {
        let rebuilt: String = tokenize(&source).map(|token| token.text).collect();
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn building_is_repeatable(source in comment_free_source()) {
        prop_assert_eq!(build_tree(tokenize(&source)), build_tree(tokenize(&source)));
    }

    #[test]
    fn balanced_source_closes_every_list(source in balanced_source()) {
        prop_assert!(indentcheck::parse(&source).is_ok());
    }

    #[test]
    fn verdict_matches_between_lenient_and_strict(source in balanced_source()) {
        prop_assert_eq!(indentcheck::check(&source).ok(), Some(indentcheck::check_text(&source)));
    }

    #[test]
    fn childless_lists_always_pass(source in comment_free_source()) {
        let root = build_tree(tokenize(&source));
        for list in empty_lists(&root) {
            prop_assert!(check_syntax(list));
        }
    }

    #[test]
    fn tab_moves_to_next_stop(column in 0usize..1000) {
        let next = advance(column, '\t');
        prop_assert_eq!(next % TAB_WIDTH, 0);
        prop_assert!(next > column);
        prop_assert!(next - column <= TAB_WIDTH);
    }
}
