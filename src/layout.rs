//! Layout continuity across projections.
//!
//! The rendering collaborator owns the physical simulation; this module
//! owns the id-keyed table that carries simulated position and velocity
//! from one projection to the next so the layout does not reset on every
//! collapse toggle or drill-down. An explicit keyed table, not incidental
//! object reuse.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::projection::GraphNode;

/// Last-known position and velocity for one node id.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl From<&GraphNode> for LayoutState {
    fn from(node: &GraphNode) -> Self {
        LayoutState {
            x: node.x,
            y: node.y,
            vx: node.vx,
            vy: node.vy,
        }
    }
}

/// Mapping from node id to [`LayoutState`], owned by the navigation
/// session. Updated once per projection; reset wholesale on language
/// switch.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTable(BTreeMap<String, LayoutState>);

impl LayoutTable {
    /// Copy persisted state into every matching node, leaving genuinely
    /// new nodes on their projector seeds, then rebuild the table from the
    /// current node set exactly. Entries for ids no longer projected are
    /// dropped. Synchronous; edges are left untouched.
    pub fn reconcile(&mut self, nodes: &mut [GraphNode]) {
        for node in nodes.iter_mut() {
            if let Some(prev) = self.0.get(&node.id) {
                node.x = prev.x;
                node.y = prev.y;
                node.vx = prev.vx;
                node.vy = prev.vy;
            }
        }
        self.0 = nodes
            .iter()
            .map(|node| (node.id.clone(), LayoutState::from(node)))
            .collect();
    }

    /// Record simulated state reported back by the renderer, so the next
    /// reconcile sees settled positions rather than last frame's seeds.
    pub fn record(&mut self, id: &str, state: LayoutState) {
        if let Some(entry) = self.0.get_mut(id) {
            *entry = state;
        }
    }

    pub fn get(&self, id: &str) -> Option<&LayoutState> {
        self.0.get(id)
    }

    pub fn reset(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|id| id.as_str())
    }
}
