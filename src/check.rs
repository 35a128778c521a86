use log::debug;

use crate::tree::{Node, NodeKind};

/// Checks that indentation is consistent with nesting, starting from a
/// parent column of zero.
pub fn check_syntax(node: &Node) -> bool {
    check_syntax_under(node, 0)
}

/// Checks `node` as a child of a form that opened at `parent_indent`.
///
/// An atom must sit strictly right of its parent. A list checks each child
/// against its own opening column instead. Every child must also sit at or
/// right of the first child, and at or left of the list's closing `)` when
/// one was seen. A list without children always passes.
pub fn check_syntax_under(node: &Node, parent_indent: usize) -> bool {
    match node.kind() {
        NodeKind::Atom(label) => {
            if node.indent() <= parent_indent {
                debug!(
                    "{:?} at column {} is not right of its parent at column {}",
                    label,
                    node.indent(),
                    parent_indent
                );
                return false;
            }
            true
        }
        NodeKind::List {
            children,
            close_indent,
        } => {
            let Some(first) = children.first() else {
                return true;
            };
            // Both bounds are fixed for the whole list, not per sibling.
            let min_indent = first.indent();
            children
                .iter()
                .all(|child| check_child(node.indent(), min_indent, *close_indent, child))
        }
    }
}

fn check_child(
    list_indent: usize,
    min_indent: usize,
    close_indent: Option<usize>,
    child: &Node,
) -> bool {
    if !check_syntax_under(child, list_indent) {
        return false;
    }
    if child.indent() < min_indent {
        debug!(
            "child at column {} is left of the first child at column {}",
            child.indent(),
            min_indent
        );
        return false;
    }
    match close_indent {
        Some(close_indent) if close_indent < child.indent() => {
            debug!(
                "child at column {} is right of the closing parenthesis at column {}",
                child.indent(),
                close_indent
            );
            false
        }
        _ => true,
    }
}
