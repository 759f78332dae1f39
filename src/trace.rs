//! Arena-allocated record of an explored search tree
//!
//! The searcher can write every node it visits into a [`SearchTrace`] for
//! later inspection, for example to see which branches alpha-beta pruning
//! skipped. The trace is a pure side channel: nothing in it feeds back
//! into the move the search returns.

use crate::board::{Action, Board, Player};

/// Index into the node arena.
///
/// A lightweight handle referencing a node in the trace. Indices avoid
/// the ownership gymnastics of parent and child pointers while keeping
/// both directions walkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// One explored position in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Label unique among this node's siblings, derived from the action
    pub label: String,

    /// Parent node, `None` for the root
    pub parent: Option<NodeId>,

    /// Children in exploration order
    pub children: Vec<NodeId>,

    /// The mark that acted to produce this position, `None` for the root
    pub player: Option<Player>,

    /// The action that led here, `None` for the root
    pub action: Option<Action>,

    /// The position itself
    pub board: Board,

    /// Backed-up result, set exactly once when the subtree is done
    pub value: Option<i32>,

    /// Plies from the root
    pub depth: usize,

    /// Whether this node is the best candidate found so far at its level.
    /// The flag moves to a sibling when that sibling supersedes it, so
    /// after a finished search the selected child of the root is the move
    /// the search returned.
    pub selected: bool,
}

/// The explored search tree for one search call.
#[derive(Debug, Clone)]
pub struct SearchTrace {
    nodes: Vec<SearchNode>,
}

impl SearchTrace {
    /// Create a trace holding only the root position
    pub fn new(board: Board) -> Self {
        SearchTrace {
            nodes: vec![SearchNode {
                label: "root".to_string(),
                parent: None,
                children: Vec::new(),
                player: None,
                action: None,
                board,
                value: None,
                depth: 0,
                selected: false,
            }],
        }
    }

    /// Record a newly explored candidate under `parent`.
    ///
    /// The node's depth is its parent's plus one and its label is derived
    /// from the action, which is unique among siblings by construction.
    pub fn record(
        &mut self,
        parent: NodeId,
        player: Player,
        action: Action,
        board: Board,
    ) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            label: format!("r{}c{}", action.row, action.col),
            parent: Some(parent),
            children: Vec::new(),
            player: Some(player),
            action: Some(action),
            board,
            value: None,
            depth,
            selected: false,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Set a node's backed-up result once its subtree has been evaluated
    pub fn finalize(&mut self, id: NodeId, value: i32) {
        let node = &mut self.nodes[id.0];
        debug_assert!(node.value.is_none(), "search node finalized twice");
        node.value = Some(value);
    }

    /// Mark a node as the best candidate at its level, clearing the flag
    /// on whichever sibling held it before
    pub fn select(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent {
            let siblings = self.nodes[parent.0].children.clone();
            for sibling in siblings {
                self.nodes[sibling.0].selected = false;
            }
        }
        self.nodes[id.0].selected = true;
    }

    /// Get a node by ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID does not belong to this trace.
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// The root node
    pub fn root(&self) -> &SearchNode {
        self.get(NodeId::ROOT)
    }

    /// Parent of a node, `None` for the root
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Children of a node in exploration order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Plies from the root
    pub fn depth(&self, id: NodeId) -> usize {
        self.nodes[id.0].depth
    }

    /// The selected child of a node, if any candidate has been marked
    pub fn selected_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0]
            .children
            .iter()
            .copied()
            .find(|child| self.nodes[child.0].selected)
    }

    /// Node IDs from the root down to `id`, inclusive
    pub fn path_from_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }

    /// All nodes with their IDs, in exploration order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }

    /// Number of explored nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A trace always holds at least the root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
