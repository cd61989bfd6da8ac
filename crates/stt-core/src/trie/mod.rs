//! Word-token prefix tree.
//!
//! Nodes live in a flat arena and refer to their children by [`NodeId`].
//! Every node except the root has exactly one parent, and nodes are never
//! removed: insertion only adds nodes and sets terminal flags.


use std::collections::BTreeMap;
use std::ops::Bound;

use crate::text::tokens;

/// Index of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

#[derive(Debug, Default, Clone)]
struct Node {
    /// token → child. Ordered so prefix filters are a range scan.
    children: BTreeMap<String, NodeId>,
    terminal: bool,
}

#[derive(Debug, Clone)]
pub struct TokenTrie {
    nodes: Vec<Node>,
}

impl Default for TokenTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Insert the token sequence of `line` and mark its last node terminal.
    ///
    /// Returns `false` for a blank line, which leaves the trie untouched.
    pub fn insert(&mut self, line: &str) -> bool {
        let mut node = NodeId::ROOT;
        let mut inserted = false;
        for token in tokens(line) {
            node = self.child_or_insert(node, token.text);
            inserted = true;
        }
        if inserted {
            self.nodes[node.0].terminal = true;
        }
        inserted
    }

    fn child_or_insert(&mut self, parent: NodeId, token: &str) -> NodeId {
        if let Some(id) = self.child(parent, token) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::default());
        self.nodes[parent.0].children.insert(token.to_string(), id);
        id
    }

    /// Exact, case-sensitive child lookup.
    pub fn child(&self, node: NodeId, token: &str) -> Option<NodeId> {
        self.nodes[node.0].children.get(token).copied()
    }

    /// Follow `line`'s tokens from the root. `None` if any token is missing.
    pub fn walk(&self, line: &str) -> Option<NodeId> {
        tokens(line).try_fold(NodeId::ROOT, |node, token| self.child(node, token.text))
    }

    /// Whether exactly this token sequence was learned as a complete line.
    pub fn contains(&self, line: &str) -> bool {
        self.walk(line).is_some_and(|node| self.is_terminal(node))
    }

    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0].terminal
    }

    pub fn child_count(&self, node: NodeId) -> usize {
        self.nodes[node.0].children.len()
    }

    /// A node ends a group when a learned line stops there or the text
    /// branches after it.
    pub fn is_cut_point(&self, node: NodeId) -> bool {
        let n = &self.nodes[node.0];
        n.terminal || n.children.len() > 1
    }

    /// Children of `node` whose token starts with `prefix`, in token order.
    pub fn children_with_prefix<'a>(
        &'a self,
        node: NodeId,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, NodeId)> + 'a {
        self.nodes[node.0]
            .children
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(token, _)| token.starts_with(prefix))
            .map(|(token, &id)| (token.as_str(), id))
    }

    /// Walk the single-child chain below `node` until a cut point or a leaf,
    /// yielding each token passed on the way.
    pub fn unambiguous_run(&self, node: NodeId) -> UnambiguousRun<'_> {
        UnambiguousRun { trie: self, node }
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[NodeId::ROOT.0].children.is_empty()
    }
}

pub struct UnambiguousRun<'a> {
    trie: &'a TokenTrie,
    node: NodeId,
}

impl<'a> Iterator for UnambiguousRun<'a> {
    type Item = (&'a str, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        let n = &self.trie.nodes[self.node.0];
        if n.terminal || n.children.len() != 1 {
            return None;
        }
        let (token, &id) = n.children.iter().next()?;
        self.node = id;
        Some((token.as_str(), id))
    }
}
