//! Arena-allocated DOM that html5ever parses into.
//!
//! Nodes live in one vector and link to each other by index, which keeps
//! sibling walks cheap and lets the whole tree drop in one go.

use html5ever::QualName;

use super::{MarkupTree, NodeKind};

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArenaNodeId(pub u32);

impl ArenaNodeId {
    /// Sentinel value for no node.
    pub const NONE: ArenaNodeId = ArenaNodeId(u32::MAX);

    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }

    fn into_option(self) -> Option<ArenaNodeId> {
        self.is_some().then_some(self)
    }
}

/// Payload of a node.
#[derive(Debug, Clone)]
pub enum ArenaNodeData {
    Document,
    Element { name: QualName, attrs: Vec<Attribute> },
    Text(String),
    Comment(String),
    Doctype { name: String },
    /// Contents of a `<template>`. Never linked into the document tree.
    Fragment,
}

/// Element attribute, value already entity-decoded by the tokenizer.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

#[derive(Debug)]
pub struct ArenaNode {
    pub data: ArenaNodeData,
    pub parent: ArenaNodeId,
    pub first_child: ArenaNodeId,
    pub last_child: ArenaNodeId,
    pub prev_sibling: ArenaNodeId,
    pub next_sibling: ArenaNodeId,
}

impl ArenaNode {
    fn new(data: ArenaNodeData) -> Self {
        Self {
            data,
            parent: ArenaNodeId::NONE,
            first_child: ArenaNodeId::NONE,
            last_child: ArenaNodeId::NONE,
            prev_sibling: ArenaNodeId::NONE,
            next_sibling: ArenaNodeId::NONE,
        }
    }
}

/// Arena-based DOM tree.
#[derive(Debug)]
pub struct ArenaDom {
    nodes: Vec<ArenaNode>,
    document: ArenaNodeId,
}

impl ArenaDom {
    /// Create an empty DOM holding only the document root.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: ArenaNodeId::NONE,
        };
        dom.document = dom.alloc(ArenaNodeData::Document);
        dom
    }

    fn alloc(&mut self, data: ArenaNodeData) -> ArenaNodeId {
        let id = ArenaNodeId(self.nodes.len() as u32);
        self.nodes.push(ArenaNode::new(data));
        id
    }

    pub fn document(&self) -> ArenaNodeId {
        self.document
    }

    pub fn get(&self, id: ArenaNodeId) -> Option<&ArenaNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: ArenaNodeId) -> Option<&mut ArenaNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> ArenaNodeId {
        self.alloc(ArenaNodeData::Element { name, attrs })
    }

    pub fn create_text(&mut self, text: String) -> ArenaNodeId {
        self.alloc(ArenaNodeData::Text(text))
    }

    pub fn create_comment(&mut self, text: String) -> ArenaNodeId {
        self.alloc(ArenaNodeData::Comment(text))
    }

    pub fn create_doctype(&mut self, name: String) -> ArenaNodeId {
        self.alloc(ArenaNodeData::Doctype { name })
    }

    pub fn create_fragment(&mut self) -> ArenaNodeId {
        self.alloc(ArenaNodeData::Fragment)
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: ArenaNodeId, child: ArenaNodeId) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(ArenaNodeId::NONE);

        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
            node.prev_sibling = last_child;
            node.next_sibling = ArenaNodeId::NONE;
        }

        if let Some(last) = self.get_mut(last_child) {
            last.next_sibling = child;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert `new_node` immediately before `sibling`.
    pub fn insert_before(&mut self, sibling: ArenaNodeId, new_node: ArenaNodeId) {
        let Some((parent, prev)) = self.get(sibling).map(|n| (n.parent, n.prev_sibling)) else {
            return;
        };

        if let Some(node) = self.get_mut(new_node) {
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = sibling;
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Insert text before `sibling`, merging into a preceding text node.
    pub fn insert_text_before(&mut self, sibling: ArenaNodeId, text: &str) {
        let prev = self
            .get(sibling)
            .map(|n| n.prev_sibling)
            .unwrap_or(ArenaNodeId::NONE);

        if let Some(ArenaNode {
            data: ArenaNodeData::Text(existing),
            ..
        }) = self.get_mut(prev)
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text.to_string());
        self.insert_before(sibling, text_node);
    }

    /// Append text to `parent`, merging into a trailing text node.
    pub fn append_text(&mut self, parent: ArenaNodeId, text: &str) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(ArenaNodeId::NONE);

        if let Some(ArenaNode {
            data: ArenaNodeData::Text(existing),
            ..
        }) = self.get_mut(last_child)
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Unlink a node from its parent and siblings. The node stays allocated.
    pub fn detach(&mut self, id: ArenaNodeId) {
        let Some((parent, prev, next)) = self
            .get(id)
            .map(|n| (n.parent, n.prev_sibling, n.next_sibling))
        else {
            return;
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(id) {
            node.parent = ArenaNodeId::NONE;
            node.prev_sibling = ArenaNodeId::NONE;
            node.next_sibling = ArenaNodeId::NONE;
        }
    }

    /// Iterate over the children of a node.
    pub fn children(&self, parent: ArenaNodeId) -> ChildrenIter<'_> {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(ArenaNodeId::NONE);
        ChildrenIter {
            dom: self,
            current: first,
        }
    }
}

impl Default for ArenaDom {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node.
pub struct ChildrenIter<'a> {
    dom: &'a ArenaDom,
    current: ArenaNodeId,
}

impl Iterator for ChildrenIter<'_> {
    type Item = ArenaNodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self
            .dom
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(ArenaNodeId::NONE);
        Some(id)
    }
}

impl MarkupTree for ArenaDom {
    type Node = ArenaNodeId;

    fn root(&self) -> ArenaNodeId {
        self.document
    }

    fn kind(&self, node: ArenaNodeId) -> NodeKind<'_> {
        match self.get(node).map(|n| &n.data) {
            Some(ArenaNodeData::Element { name, .. }) => NodeKind::Element(name.local.as_ref()),
            Some(ArenaNodeData::Text(text)) => NodeKind::Text(text),
            Some(ArenaNodeData::Comment(text)) => NodeKind::Comment(text),
            _ => NodeKind::Other,
        }
    }

    fn attributes(&self, node: ArenaNodeId) -> Vec<(&str, &str)> {
        match self.get(node).map(|n| &n.data) {
            Some(ArenaNodeData::Element { attrs, .. }) => attrs
                .iter()
                .map(|a| (a.name.local.as_ref(), a.value.as_str()))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn child_nodes(&self, node: ArenaNodeId) -> Vec<ArenaNodeId> {
        self.children(node).collect()
    }

    fn next_sibling(&self, node: ArenaNodeId) -> Option<ArenaNodeId> {
        self.get(node).and_then(|n| n.next_sibling.into_option())
    }
}

#[cfg(test)]
mod tests {
    use html5ever::{LocalName, ns};

    use super::*;

    fn make_qname(local: &str) -> QualName {
        QualName::new(None, ns!(html), LocalName::from(local))
    }

    #[test]
    fn test_append_children() {
        let mut dom = ArenaDom::new();

        let parent = dom.create_element(make_qname("ul"), vec![]);
        let first = dom.create_element(make_qname("li"), vec![]);
        let second = dom.create_element(make_qname("li"), vec![]);

        dom.append(dom.document(), parent);
        dom.append(parent, first);
        dom.append(parent, second);

        let children: Vec<_> = dom.children(parent).collect();
        assert_eq!(children, vec![first, second]);
        assert_eq!(dom.next_sibling(first), Some(second));
        assert_eq!(dom.next_sibling(second), None);
    }

    #[test]
    fn test_text_merging() {
        let mut dom = ArenaDom::new();

        let p = dom.create_element(make_qname("p"), vec![]);
        dom.append(dom.document(), p);

        dom.append_text(p, "Voc");
        dom.append_text(p, "ê tem");

        let children: Vec<_> = dom.children(p).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(dom.kind(children[0]), NodeKind::Text("Você tem"));
    }

    #[test]
    fn test_detach_relinks_siblings() {
        let mut dom = ArenaDom::new();

        let ul = dom.create_element(make_qname("ul"), vec![]);
        let a = dom.create_element(make_qname("li"), vec![]);
        let b = dom.create_element(make_qname("li"), vec![]);
        let c = dom.create_element(make_qname("li"), vec![]);
        dom.append(dom.document(), ul);
        for li in [a, b, c] {
            dom.append(ul, li);
        }

        dom.detach(b);
        assert_eq!(dom.children(ul).collect::<Vec<_>>(), vec![a, c]);

        dom.detach(a);
        dom.detach(c);
        assert_eq!(dom.children(ul).count(), 0);
    }

    #[test]
    fn test_insert_before_first_child() {
        let mut dom = ArenaDom::new();

        let ul = dom.create_element(make_qname("ul"), vec![]);
        let li = dom.create_element(make_qname("li"), vec![]);
        dom.append(dom.document(), ul);
        dom.append(ul, li);

        dom.insert_text_before(li, "\n");
        let children: Vec<_> = dom.children(ul).collect();
        assert_eq!(children.len(), 2);
        assert_eq!(dom.kind(children[0]), NodeKind::Text("\n"));
        assert_eq!(children[1], li);
    }

    #[test]
    fn test_markup_tree_kind() {
        let mut dom = ArenaDom::new();
        let attrs = vec![Attribute {
            name: make_qname("style"),
            value: "color: red".to_string(),
        }];
        let span = dom.create_element(make_qname("span"), attrs);
        dom.append(dom.document(), span);
        dom.append_text(span, "✥");

        assert!(matches!(dom.kind(span), NodeKind::Element("span")));
        assert_eq!(dom.attributes(span), vec![("style", "color: red")]);
        assert_eq!(dom.text_content(span), "✥");
    }
}
