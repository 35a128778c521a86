use std::fmt;

/// A node of the parenthesis tree: either an atom or a list.
///
/// Nodes are built once by the tree builder and only read afterwards.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Node {
    pub(crate) indent: usize,
    pub(crate) leading_space: String,
    pub(crate) kind: NodeKind,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum NodeKind {
    Atom(String),
    List {
        children: Vec<Node>,
        /// Column of the `)` that closed the list, if one was seen.
        close_indent: Option<usize>,
    },
}

impl Node {
    pub(crate) fn atom(label: String, indent: usize) -> Node {
        Node {
            indent,
            leading_space: String::new(),
            kind: NodeKind::Atom(label),
        }
    }

    pub(crate) fn list(children: Vec<Node>, close_indent: Option<usize>) -> Node {
        Node {
            indent: 0,
            leading_space: String::new(),
            kind: NodeKind::List {
                children,
                close_indent,
            },
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The atom's text; empty for lists.
    pub fn label(&self) -> &str {
        match &self.kind {
            NodeKind::Atom(label) => label,
            NodeKind::List { .. } => "",
        }
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Children in source order; empty for atoms.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Atom(_) => &[],
            NodeKind::List { children, .. } => children,
        }
    }

    /// Whitespace that preceded the node in the source.
    pub fn leading_space(&self) -> &str {
        &self.leading_space
    }

    pub fn close_indent(&self) -> Option<usize> {
        match &self.kind {
            NodeKind::Atom(_) => None,
            NodeKind::List { close_indent, .. } => *close_indent,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self.kind, NodeKind::List { .. })
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        write!(f, "{:width$}", "", width = level * 2)?;
        match &self.kind {
            NodeKind::Atom(label) => write!(f, "{:?} indent={} close=-", label, self.indent)?,
            NodeKind::List {
                close_indent: Some(close_indent),
                ..
            } => write!(f, "list indent={} close={}", self.indent, close_indent)?,
            NodeKind::List {
                close_indent: None, ..
            } => write!(f, "list indent={} close=-", self.indent)?,
        }
        writeln!(f, " space={:?}", self.leading_space)?;
        self.children()
            .iter()
            .try_for_each(|child| child.write_tree(f, level + 1))
    }
}

/// One line per node, children indented two spaces below their parent.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_accessors() {
        let node = Node::atom("foo".to_string(), 3);
        assert_eq!(node.label(), "foo");
        assert_eq!(node.indent(), 3);
        assert!(node.children().is_empty());
        assert_eq!(node.close_indent(), None);
        assert!(!node.is_list());
    }

    #[test]
    fn test_list_accessors() {
        let node = Node::list(vec![Node::atom("a".to_string(), 1)], Some(2));
        assert_eq!(node.label(), "");
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.close_indent(), Some(2));
        assert!(node.is_list());
    }

    #[test]
    fn test_display_nested_open_list() {
        let inner = Node::list(vec![Node::atom("x".to_string(), 2)], None);
        let node = Node::list(vec![inner], None);
        assert_eq!(
            node.to_string(),
            "list indent=0 close=- space=\"\"\n  list indent=0 close=- space=\"\"\n    \"x\" indent=2 close=- space=\"\"\n"
        );
    }

    #[test]
    fn test_display_tree() {
        let mut inner = Node::atom("b".to_string(), 3);
        inner.leading_space = " ".to_string();
        let node = Node::list(vec![Node::atom("a".to_string(), 1), inner], Some(4));
        assert_eq!(
            node.to_string(),
            "list indent=0 close=4 space=\"\"\n  \"a\" indent=1 close=- space=\"\"\n  \"b\" indent=3 close=- space=\" \"\n"
        );
    }
}
