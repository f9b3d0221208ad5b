//! # Parse Tree
//!
//! Arena-backed tree of [`Token`]s.
//!
//! Nodes live in a flat vector and refer to each other by [`NodeId`], so the
//! parent back-reference stays valid however often nodes are re-parented.
//! Nodes are never removed.
//!
//! ## Example
//!
//! ```rust
//! use exprtree::token::{BinaryOperator, Token};
//! use exprtree::tree::Tree;
//!
//! let mut tree = Tree::new(Token::Empty);
//! let one = tree.add(tree.root(), Token::Number(1.0));
//! let plus = tree.push(one, Token::BinaryOperator(BinaryOperator::Add));
//! tree.add(plus, Token::Number(2.0));
//!
//! assert_eq!(tree.children(tree.root()), &[plus]);
//! assert_eq!(tree.parent(one), Some(plus));
//! ```

use crate::token::Token;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

// =============================================================================
// NODE ID
// =============================================================================

/// Stable index of a node within its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

// =============================================================================
// TREE NODE
// =============================================================================

/// A node: its token, its parent, its ordered children and the height of
/// the subtree below it.
#[derive(Debug, Clone, PartialEq)]
struct TreeNode {
    token: Token,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    height: usize,
}

// =============================================================================
// TREE
// =============================================================================

/// A rooted tree. The root is created with the tree and never moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    /// Create a tree whose root holds `root`.
    pub fn new(root: Token) -> Self {
        Self {
            nodes: vec![TreeNode {
                height: nested_height(&root),
                token: root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root node.
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Token held by `id`.
    pub fn token(&self, id: NodeId) -> &Token {
        &self.nodes[id.0].token
    }

    /// Children of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Parent of `id`, or `None` at the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Most recently appended child of `id`.
    pub fn last_element(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].children.last().copied()
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&node| self.parent(node))
    }

    /// First expression under the root.
    pub fn first_expression(&self) -> Option<NodeId> {
        self.children(self.root()).first().copied()
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nesting levels below the root.
    ///
    /// A call counts one level more than its deepest argument tree, so this
    /// bounds the nesting of the serialised form as well.
    ///
    /// ## Example
    ///
    /// ```rust
    /// let result = exprtree::parse("1 + 2 * 3");
    /// assert_eq!(result.tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        self.nodes[self.root().0].height
    }

    /// Append a child holding `token` under `parent`.
    ///
    /// ## Parameters
    ///
    /// - `parent`: Node that receives the new child as its last element
    /// - `token`: Payload of the new node
    ///
    /// ## Returns
    ///
    /// Id of the new node.
    pub fn add(&mut self, parent: NodeId, token: Token) -> NodeId {
        let height = nested_height(&token);
        let id = self.alloc(token, Some(parent), Vec::new(), height);
        self.nodes[parent.0].children.push(id);
        self.raise(parent, height);
        id
    }

    /// Wrap `node` in a new node holding `token`.
    ///
    /// The new node takes `node`'s slot in its parent's child list and
    /// `node` becomes its only child. The root cannot be wrapped.
    ///
    /// ## Parameters
    ///
    /// - `node`: Node to re-parent; becomes the left operand
    /// - `token`: Payload of the wrapping node
    ///
    /// ## Returns
    ///
    /// Id of the wrapping node.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use exprtree::token::{BinaryOperator, Token};
    /// use exprtree::tree::Tree;
    ///
    /// let mut tree = Tree::new(Token::Empty);
    /// let x = tree.add(tree.root(), Token::Identity("x".into()));
    /// let minus = tree.push(x, Token::BinaryOperator(BinaryOperator::Sub));
    /// assert_eq!(tree.children(minus), &[x]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn push(&mut self, node: NodeId, token: Token) -> NodeId {
        debug_assert_ne!(node, self.root(), "the root cannot be re-parented");
        let parent = self.nodes[node.0].parent;
        let height = self.nodes[node.0].height + 1;
        let id = self.alloc(token, parent, vec![node], height);
        if let Some(parent) = parent {
            if let Some(slot) = self.nodes[parent.0]
                .children
                .iter_mut()
                .find(|child| **child == node)
            {
                *slot = id;
            }
            self.raise(parent, height);
        }
        self.nodes[node.0].parent = Some(id);
        id
    }

    /// Count error markers reachable from the root, including those inside
    /// call arguments.
    pub fn error_count(&self) -> usize {
        self.descendants(self.root())
            .map(|id| match self.token(id) {
                Token::Error(_) => 1,
                Token::Function { arguments, .. } => {
                    arguments.iter().map(Tree::error_count).sum::<usize>()
                }
                _ => 0,
            })
            .sum()
    }

    /// `id` and every node below it, depth first in child order.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![id];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.children(next).iter().rev().copied());
            Some(next)
        })
    }

    fn alloc(
        &mut self,
        token: Token,
        parent: Option<NodeId>,
        children: Vec<NodeId>,
        height: usize,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            token,
            parent,
            children,
            height,
        });
        id
    }

    /// Propagate a child of height `child_height` under `node` upwards.
    /// Heights only grow, so the walk stops at the first unchanged node.
    fn raise(&mut self, node: NodeId, child_height: usize) {
        let mut next = Some(node);
        let mut height = child_height + 1;
        while let Some(id) = next {
            let entry = &mut self.nodes[id.0];
            if entry.height >= height {
                break;
            }
            entry.height = height;
            height += 1;
            next = entry.parent;
        }
    }
}

/// Levels a token adds below its own node.
fn nested_height(token: &Token) -> usize {
    match token {
        Token::Function { arguments, .. } => arguments
            .iter()
            .map(|argument| argument.height() + 1)
            .max()
            .unwrap_or(0),
        _ => 0,
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self.root(), 0)];
        while let Some((id, depth)) = stack.pop() {
            writeln!(f, "{:indent$}{}", "", self.token(id), indent = depth * 2)?;
            stack.extend(self.children(id).iter().rev().map(|&child| (child, depth + 1)));
        }
        Ok(())
    }
}

// =============================================================================
// SERIALIZATION
// =============================================================================

/// Nested view of one node, serialised as `{ token, children }`.
///
/// Serialisation recurses once per level; parsed trees are bounded by
/// `ParserConfig::max_depth`.
struct NodeView<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let children: Vec<NodeView<'_>> = self
            .tree
            .children(self.id)
            .iter()
            .map(|&id| NodeView {
                tree: self.tree,
                id,
            })
            .collect();
        let mut state = serializer.serialize_struct("TreeNode", 2)?;
        state.serialize_field("token", self.tree.token(self.id))?;
        state.serialize_field("children", &children)?;
        state.end()
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeView {
            tree: self,
            id: self.root(),
        }
        .serialize(serializer)
    }
}

// =============================================================================
// TESTS
// =============================================================================
