//! Mindmap outline artifact
//!
//! The outline is the boundary with the graph renderer: a flat list of
//! parent-linked nodes. Layout, coloring, and labeling policy belong to the
//! consumer and are not part of this contract.

use serde::{Deserialize, Serialize};

/// One node of the outline tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    /// 1-based id in assignment order
    pub id: u32,

    /// Node label with the bullet marker stripped
    pub label: String,

    /// Depth derived from indentation (0 = root)
    pub level: usize,

    /// Id of the nearest preceding node with a strictly smaller level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u32>,
}

/// A parent-linked outline tree, stored as a flat node list.
///
/// Invariant: every `parent` id refers to exactly one node appearing
/// earlier in the list, and that node's level is strictly smaller than the
/// child's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    /// Nodes in source order
    pub nodes: Vec<OutlineNode>,
}

impl Outline {
    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the source produced no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes with no parent.
    pub fn roots(&self) -> impl Iterator<Item = &OutlineNode> {
        self.nodes.iter().filter(|n| n.parent.is_none())
    }

    /// Parent/child id pairs, in child order. This is the edge list the
    /// renderer draws.
    pub fn edges(&self) -> Vec<(u32, u32)> {
        self.nodes
            .iter()
            .filter_map(|n| n.parent.map(|p| (p, n.id)))
            .collect()
    }
}
