//! Position-preserving YAML syntax tree.
//!
//! The typed schema decode knows nothing about source positions, so line numbers for
//! diagnostics come from this separate tree, built from the parser's marked event
//! stream and matched back to keys by name.

use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, ScanError};

/// A node with the 1-based line where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document(Vec<Node>),
    /// Key/value pairs in declaration order.
    Mapping(Vec<(Node, Node)>),
    Sequence(Vec<Node>),
    Scalar(String),
    Alias,
}

impl Node {
    /// Textual value of a scalar node.
    pub fn as_scalar(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

/// All documents of one YAML stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyntaxTree {
    pub documents: Vec<Node>,
}

impl SyntaxTree {
    /// The document the config is read from; later documents are ignored.
    pub fn first_document(&self) -> Option<&Node> {
        self.documents.first()
    }

    /// Raw text of the top-level scalar keys, in declaration order.
    pub fn top_level_keys(&self) -> Vec<&str> {
        let Some(Node {
            kind: NodeKind::Document(children),
            ..
        }) = self.first_document()
        else {
            return Vec::new();
        };

        children
            .iter()
            .filter_map(|child| match &child.kind {
                NodeKind::Mapping(entries) => Some(entries),
                _ => None,
            })
            .flatten()
            .filter_map(|(key, _)| key.as_scalar())
            .collect()
    }

    /// Line of the first declaration of `key` in the first document.
    pub fn key_line(&self, key: &str) -> Option<usize> {
        self.first_document()
            .and_then(|document| find_key_line(document, key))
    }
}

/// A syntax error with the line the parser stopped at, when it reported one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub line: Option<usize>,
}

impl From<ScanError> for SyntaxError {
    fn from(err: ScanError) -> Self {
        let line = err.marker().line();
        Self {
            message: err.to_string(),
            line: (line > 0).then_some(line),
        }
    }
}

/// Parse `content` into a syntax tree.
pub fn parse_tree(content: &str) -> Result<SyntaxTree, SyntaxError> {
    let mut builder = TreeBuilder::default();
    let mut parser = Parser::new_from_str(content);
    parser.load(&mut builder, true)?;
    Ok(SyntaxTree {
        documents: builder.documents,
    })
}

/// Find the line where `key` is declared.
///
/// Documents are searched child by child; mappings are scanned in declaration order
/// and the first key whose text equals `key` wins. Nested mappings are not entered.
pub fn find_key_line(node: &Node, key: &str) -> Option<usize> {
    match &node.kind {
        NodeKind::Document(children) => children
            .iter()
            .find_map(|child| find_key_line(child, key)),
        NodeKind::Mapping(entries) => entries
            .iter()
            .find(|(k, _)| k.as_scalar() == Some(key))
            .map(|(k, _)| k.line),
        _ => None,
    }
}

enum Frame {
    Document {
        line: usize,
        children: Vec<Node>,
    },
    Mapping {
        line: usize,
        entries: Vec<(Node, Node)>,
        pending_key: Option<Node>,
    },
    Sequence {
        line: usize,
        items: Vec<Node>,
    },
}

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    documents: Vec<Node>,
}

impl TreeBuilder {
    fn attach(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(Frame::Document { children, .. }) => children.push(node),
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping {
                entries,
                pending_key,
                ..
            }) => match pending_key.take() {
                Some(key) => entries.push((key, node)),
                None => *pending_key = Some(node),
            },
            // Only reachable on a malformed event stream; the parser errors first.
            None => self.documents.push(node),
        }
    }

    fn close(&mut self) {
        let node = match self.stack.pop() {
            Some(Frame::Document { line, children }) => {
                self.documents.push(Node {
                    kind: NodeKind::Document(children),
                    line,
                });
                return;
            }
            Some(Frame::Mapping { line, entries, .. }) => Node {
                kind: NodeKind::Mapping(entries),
                line,
            },
            Some(Frame::Sequence { line, items }) => Node {
                kind: NodeKind::Sequence(items),
                line,
            },
            None => return,
        };
        self.attach(node);
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event, mark: Marker) {
        let line = mark.line();
        match ev {
            Event::DocumentStart { .. } => self.stack.push(Frame::Document {
                line,
                children: Vec::new(),
            }),
            Event::MappingStart { .. } => self.stack.push(Frame::Mapping {
                line,
                entries: Vec::new(),
                pending_key: None,
            }),
            Event::SequenceStart { .. } => self.stack.push(Frame::Sequence {
                line,
                items: Vec::new(),
            }),
            Event::DocumentEnd { .. } | Event::MappingEnd { .. } | Event::SequenceEnd { .. } => {
                self.close()
            }
            Event::Scalar(value, ..) => self.attach(Node {
                kind: NodeKind::Scalar(value),
                line,
            }),
            Event::Alias { .. } => self.attach(Node {
                kind: NodeKind::Alias,
                line,
            }),
            _ => {}
        }
    }
}
