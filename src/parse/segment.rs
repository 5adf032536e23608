//! Splitting a document into one block per item.

use crate::dom::MarkupTree;
use crate::record::ItemKind;

/// All heading elements in document order. Each one opens an item.
pub fn find_headings<T: MarkupTree>(tree: &T, heading_tag: &str) -> Vec<T::Node> {
    tree.descendants_by_tag(tree.root(), heading_tag)
}

/// The heading's trimmed text, or the kind's placeholder when blank.
pub fn heading_name<T: MarkupTree>(tree: &T, heading: T::Node, kind: ItemKind) -> String {
    let text = tree.text_content(heading);
    let name = text.trim();
    if name.is_empty() {
        kind.placeholder_name().to_string()
    } else {
        name.to_string()
    }
}

/// Element siblings following a heading, up to the next heading.
///
/// The next heading itself is never yielded, so it stays available as the
/// start of the following item.
pub struct ItemBlock<'a, T: MarkupTree> {
    tree: &'a T,
    heading_tag: &'a str,
    current: Option<T::Node>,
}

impl<'a, T: MarkupTree> ItemBlock<'a, T> {
    pub fn new(tree: &'a T, heading: T::Node, heading_tag: &'a str) -> Self {
        Self {
            tree,
            heading_tag,
            current: tree.next_element_sibling(heading),
        }
    }
}

impl<T: MarkupTree> Iterator for ItemBlock<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        if self.tree.has_tag(node, self.heading_tag) {
            self.current = None;
            return None;
        }
        self.current = self.tree.next_element_sibling(node);
        Some(node)
    }
}

/// Whether input should go through the HTML path rather than the
/// plain-text fallback.
pub fn looks_like_markup(input: &str, heading_tag: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.starts_with('<') {
        return true;
    }
    let open_tag = format!("<{heading_tag}");
    trimmed.to_ascii_lowercase().contains(&open_tag)
}
