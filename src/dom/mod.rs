//! Markup parsing and traversal.
//!
//! Extractors never touch html5ever directly. They walk documents through
//! [`MarkupTree`], which exposes just enough of a DOM to find headings, step
//! across siblings and read text or markup back out. [`ArenaDom`] is the
//! html5ever-backed implementation.
//!
//! # Example
//!
//! ```
//! use rulebook_import::dom::{MarkupTree, parse_html};
//!
//! let dom = parse_html("<h3>CAMINHO DA FERA</h3><p>Você tem um animal.</p>");
//! let heading = dom.descendants_by_tag(dom.root(), "h3")[0];
//! let next = dom.next_element_sibling(heading).unwrap();
//!
//! assert_eq!(dom.text_content(heading), "CAMINHO DA FERA");
//! assert_eq!(dom.tag_name(next), Some("p"));
//! ```

mod arena;
mod serialize;
mod tree_sink;

pub use arena::{ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute};
pub use serialize::{SerializeFilter, escape_text, inner_html};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use tree_sink::ArenaSink;

/// What a node is, as far as extraction cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    /// Element with its lowercase local name.
    Element(&'a str),
    Text(&'a str),
    Comment(&'a str),
    /// Document root, doctype and anything else without content.
    Other,
}

/// Minimal read-only traversal over a parsed document.
pub trait MarkupTree {
    type Node: Copy + PartialEq;

    fn root(&self) -> Self::Node;

    fn kind(&self, node: Self::Node) -> NodeKind<'_>;

    /// Attributes in source order. Empty for non-elements.
    fn attributes(&self, node: Self::Node) -> Vec<(&str, &str)>;

    /// Children in document order.
    fn child_nodes(&self, node: Self::Node) -> Vec<Self::Node>;

    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    fn tag_name(&self, node: Self::Node) -> Option<&str> {
        match self.kind(node) {
            NodeKind::Element(tag) => Some(tag),
            _ => None,
        }
    }

    /// ASCII case-insensitive tag check.
    fn has_tag(&self, node: Self::Node, tag: &str) -> bool {
        self.tag_name(node)
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
    }

    /// Concatenated text of the node and all its descendants.
    fn text_content(&self, node: Self::Node) -> String {
        let mut out = String::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            match self.kind(id) {
                NodeKind::Text(text) => out.push_str(text),
                NodeKind::Comment(_) => {}
                NodeKind::Element(_) | NodeKind::Other => {
                    stack.extend(self.child_nodes(id).into_iter().rev());
                }
            }
        }
        out
    }

    /// Next sibling that is an element, skipping text and comments.
    fn next_element_sibling(&self, node: Self::Node) -> Option<Self::Node> {
        let mut current = self.next_sibling(node);
        while let Some(id) = current {
            if self.tag_name(id).is_some() {
                return Some(id);
            }
            current = self.next_sibling(id);
        }
        None
    }

    /// Descendant elements with the given tag, in document order.
    /// The node itself is not included.
    fn descendants_by_tag(&self, node: Self::Node, tag: &str) -> Vec<Self::Node> {
        let mut found = Vec::new();
        let mut stack: Vec<_> = self.child_nodes(node).into_iter().rev().collect();
        while let Some(id) = stack.pop() {
            if self.has_tag(id, tag) {
                found.push(id);
            }
            stack.extend(self.child_nodes(id).into_iter().rev());
        }
        found
    }
}

/// Parse an HTML document or fragment into an [`ArenaDom`].
///
/// Fragments get the implied `html`/`head`/`body` wrappers a browser would
/// add. Parsing never fails; broken markup is repaired the same way a
/// browser's `DOMParser` repairs it.
pub fn parse_html(html: &str) -> ArenaDom {
    let sink = ArenaSink::new();
    let result = parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes());
    result.into_dom()
}
