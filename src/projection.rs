//! Projection of a (sub-)tree plus a collapse set into the flat node/edge
//! graph consumed by the force-directed rendering collaborator.
//!
//! A projection is derived data: it is recomputed on every change to
//! `(tree, collapse set, view root)` and carries no identity of its own.
//! Continuity across recomputations is by node id, which is what lets the
//! [`crate::layout::LayoutTable`] carry simulated positions from one frame
//! to the next.

use petgraph::graphmap::DiGraphMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::f64::consts::TAU;

use crate::{
    locator::find_node,
    topic::{RelationKind, TopicNode},
};

/// Distance from a parent at which child seeds are placed.
pub const SEED_RADIUS: f64 = 10.0;

/// One rendered node. `x`/`y`/`vx`/`vy` start as deterministic seeds and
/// are overwritten by reconciliation for any id the previous frame knew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub group: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
    /// Distance from the projection root (root = 0). Monotonically
    /// non-decreasing along every tree edge; the renderer derives
    /// level-of-detail classes from it.
    pub level: u32,
    /// Authored child count, irrespective of collapse state.
    pub child_count: usize,
    pub collapsed: bool,
}

/// Edge kind as rendered: parent/child edges are `Tree`, authored
/// relations keep their [`RelationKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Tree,
    Solid,
    Dashed,
}

impl From<RelationKind> for EdgeKind {
    fn from(kind: RelationKind) -> Self {
        match kind {
            RelationKind::Solid => EdgeKind::Solid,
            RelationKind::Dashed => EdgeKind::Dashed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curvature: Option<f64>,
}

/// The flat graph handed to the rendering collaborator.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Projection {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adjacency view over the projected edges. Parallel edges between the
    /// same pair collapse to one entry, which is sufficient for neighbor
    /// queries.
    pub fn graph(&self) -> DiGraphMap<&str, &GraphEdge> {
        DiGraphMap::from_edges(
            self.edges
                .iter()
                .map(|edge| (edge.source.as_str(), edge.target.as_str(), edge)),
        )
    }

    /// Ids adjacent to `id` in either direction, for hover highlighting.
    pub fn neighbors<'a>(&'a self, id: &'a str) -> BTreeSet<&'a str> {
        let graph = self.graph();
        let mut neighbors = BTreeSet::new();
        if graph.contains_node(id) {
            for dir in [petgraph::Incoming, petgraph::Outgoing] {
                for other in graph.neighbors_directed(id, dir) {
                    neighbors.insert(other);
                }
            }
        }
        neighbors.remove(id);
        neighbors
    }
}

struct Traversal<'a> {
    collapsed: &'a BTreeSet<String>,
    visited: BTreeSet<String>,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

/// Project `tree` into a flat node/edge graph.
///
/// When `sub_root_id` names a node found in the tree, traversal starts
/// there at level 0 and the sub-root is linked to nothing above it,
/// re-rooting the view. Otherwise traversal starts at the global root.
/// Pure: identical arguments yield an identical node/edge set.
pub fn project(
    tree: &TopicNode,
    collapsed: &BTreeSet<String>,
    sub_root_id: Option<&str>,
) -> Projection {
    let start = match sub_root_id {
        Some(id) => find_node(tree, id).unwrap_or_else(|| {
            tracing::debug!("view root '{id}' not found, projecting from global root");
            tree
        }),
        None => tree,
    };

    let mut traversal = Traversal {
        collapsed,
        visited: BTreeSet::new(),
        nodes: Vec::new(),
        edges: Vec::new(),
    };
    traverse(start, 0.0, 0.0, 0, None, &mut traversal);

    let Traversal {
        nodes, mut edges, ..
    } = traversal;

    // Relations are emitted before their targets are known; drop every edge
    // with an endpoint outside the emitted node set.
    let ids: BTreeSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let before = edges.len();
    edges.retain(|edge| ids.contains(edge.source.as_str()) && ids.contains(edge.target.as_str()));
    if edges.len() < before {
        tracing::debug!(
            "dropped {} edge(s) with endpoints outside the current view",
            before - edges.len()
        );
    }

    Projection { nodes, edges }
}

fn traverse(
    node: &TopicNode,
    x: f64,
    y: f64,
    level: u32,
    parent_id: Option<&str>,
    traversal: &mut Traversal<'_>,
) {
    // Backstop against structural cycles and duplicate ids: an id already
    // emitted this projection is silently dropped.
    if !traversal.visited.insert(node.id.clone()) {
        tracing::warn!("skipping already-emitted node id '{}'", node.id);
        return;
    }

    let collapsed = traversal.collapsed.contains(&node.id);
    traversal.nodes.push(GraphNode {
        id: node.id.clone(),
        group: node.group,
        description: node.description.clone(),
        x,
        y,
        vx: 0.0,
        vy: 0.0,
        level,
        child_count: node.children.len(),
        collapsed,
    });

    if let Some(parent) = parent_id {
        traversal.edges.push(GraphEdge {
            source: parent.to_string(),
            target: node.id.clone(),
            kind: EdgeKind::Tree,
            label: None,
            curvature: None,
        });
    }

    for relation in &node.relations {
        traversal.edges.push(GraphEdge {
            source: node.id.clone(),
            target: relation.target_id.clone(),
            kind: relation.kind.into(),
            label: relation.label.clone(),
            curvature: relation.curvature,
        });
    }

    // Collapsed nodes still appear (with their authored child count) but
    // contribute no descendants.
    if collapsed {
        return;
    }

    let angle_step = TAU / node.children.len().max(1) as f64;
    for (index, child) in node.children.iter().enumerate() {
        let angle = index as f64 * angle_step;
        traverse(
            child,
            x + angle.cos() * SEED_RADIUS,
            y + angle.sin() * SEED_RADIUS,
            level + 1,
            Some(node.id.as_str()),
            traversal,
        );
    }
}
