//! `innerHTML`-style serialization with element and attribute filtering.
//!
//! The filtered view is fed to html5ever's HTML serializer, so escaping, void
//! elements and raw-text elements follow the fragment serialization rules
//! browsers use. A cleaned list item reads the same as it would after a round
//! trip through `element.innerHTML` in the rulebook page.

use std::io;

use html5ever::serialize::{
    HtmlSerializer, Serialize, SerializeOpts, Serializer, TraversalScope, serialize,
};
use html5ever::{LocalName, QualName, ns};

use super::{MarkupTree, NodeKind};

/// What to leave out while serializing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializeFilter<'a> {
    /// Elements dropped together with everything inside them.
    pub skip_elements: &'a [&'a str],
    /// Attributes dropped from every element.
    pub drop_attributes: &'a [&'a str],
}

impl<'a> SerializeFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip_elements(mut self, tags: &'a [&'a str]) -> Self {
        self.skip_elements = tags;
        self
    }

    pub fn drop_attributes(mut self, names: &'a [&'a str]) -> Self {
        self.drop_attributes = names;
        self
    }

    fn skips(&self, tag: &str) -> bool {
        self.skip_elements.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    fn drops(&self, attr: &str) -> bool {
        self.drop_attributes.iter().any(|a| a.eq_ignore_ascii_case(attr))
    }
}

/// A subtree seen through a [`SerializeFilter`].
struct FilteredNode<'a, 'f, T: MarkupTree> {
    tree: &'a T,
    node: T::Node,
    filter: &'a SerializeFilter<'f>,
}

enum Step<N> {
    Enter(N),
    Leave(QualName),
}

fn element_name(tag: &str) -> QualName {
    QualName::new(None, ns!(html), LocalName::from(tag))
}

fn attribute_name(name: &str) -> QualName {
    QualName::new(None, ns!(), LocalName::from(name))
}

impl<T: MarkupTree> Serialize for FilteredNode<'_, '_, T> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        // Explicit stack: rulebook pastes can nest arbitrarily deep.
        let mut stack = match traversal_scope {
            TraversalScope::IncludeNode => vec![Step::Enter(self.node)],
            TraversalScope::ChildrenOnly(_) => self
                .tree
                .child_nodes(self.node)
                .into_iter()
                .rev()
                .map(Step::Enter)
                .collect(),
        };

        while let Some(step) = stack.pop() {
            let node = match step {
                Step::Leave(name) => {
                    serializer.end_elem(name)?;
                    continue;
                }
                Step::Enter(node) => node,
            };

            match self.tree.kind(node) {
                NodeKind::Text(text) => serializer.write_text(text)?,
                NodeKind::Comment(text) => serializer.write_comment(text)?,
                NodeKind::Element(tag) if self.filter.skips(tag) => {}
                NodeKind::Element(tag) => {
                    let name = element_name(tag);
                    let attrs: Vec<_> = self
                        .tree
                        .attributes(node)
                        .into_iter()
                        .filter(|(attr, _)| !self.filter.drops(attr))
                        .map(|(attr, value)| (attribute_name(attr), value))
                        .collect();
                    serializer.start_elem(
                        name.clone(),
                        attrs.iter().map(|(attr, value)| (attr, *value)),
                    )?;

                    stack.push(Step::Leave(name));
                    stack.extend(self.tree.child_nodes(node).into_iter().rev().map(Step::Enter));
                }
                NodeKind::Other => {}
            }
        }
        Ok(())
    }
}

fn into_string(buf: Vec<u8>, result: io::Result<()>) -> String {
    if let Err(e) = result {
        log::warn!("html serialization failed: {e}");
    }
    String::from_utf8(buf).unwrap_or_default()
}

/// Serialize the children of `node`, like reading `element.innerHTML`.
///
/// # Example
///
/// ```
/// use rulebook_import::dom::{MarkupTree, SerializeFilter, inner_html, parse_html};
///
/// let dom = parse_html(r#"<li><span style="color: red">✥</span> <strong style="x">CATEGORIA 1:</strong> ok</li>"#);
/// let li = dom.descendants_by_tag(dom.root(), "li")[0];
/// let filter = SerializeFilter::new()
///     .skip_elements(&["span"])
///     .drop_attributes(&["style"]);
///
/// assert_eq!(inner_html(&dom, li, &filter), " <strong>CATEGORIA 1:</strong> ok");
/// ```
pub fn inner_html<T: MarkupTree>(tree: &T, node: T::Node, filter: &SerializeFilter<'_>) -> String {
    let view = FilteredNode { tree, node, filter };
    // The parent's name decides whether text is escaped (`<style>` is not).
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(tree.tag_name(node).map(element_name)),
        ..Default::default()
    };

    let mut buf = Vec::new();
    let result = serialize(&mut buf, &view, opts);
    into_string(buf, result)
}

/// Escape text for use as HTML element content.
pub fn escape_text(text: &str) -> String {
    let mut buf = Vec::new();
    let result = HtmlSerializer::new(&mut buf, SerializeOpts::default()).write_text(text);
    into_string(buf, result)
}
