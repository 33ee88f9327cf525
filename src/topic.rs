//! The authored data model: topic nodes, relations, and the external
//! reference convention.
//!
//! A universe is authored as a tree of [`TopicNode`]s, possibly split across
//! multiple JSON documents. A child whose `id` ends with
//! [`DOCUMENT_SUFFIX`] is not a real topic: it is a placeholder that the
//! resolver replaces wholesale with the root of the referenced document.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Reserved filename suffix marking a child node as an external document
/// reference. Resolution guarantees no id in a unified tree retains it.
pub const DOCUMENT_SUFFIX: &str = ".json";

/// One authored unit of the knowledge universe.
///
/// The `id` is globally unique by authoring convention (not validated, see
/// [`crate::locator::find_node`]) and doubles as the display label and as
/// the splice key for external references. Loaded immutable for the
/// duration of a language/session.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicNode {
    pub id: String,
    /// Palette/category index for the rendering collaborator.
    #[serde(default)]
    pub group: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered; order is preserved through resolution and projection.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TopicNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,
}

impl TopicNode {
    /// Whether this node is an unresolved external document reference.
    pub fn is_external_ref(&self) -> bool {
        self.id.ends_with(DOCUMENT_SUFFIX)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl Display for TopicNode {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} ({} children)", self.id, self.children.len())
    }
}

/// An authored non-hierarchical edge from its owning node to `target_id`.
///
/// Not required to reference an existing node; the projector filters
/// relations whose target is absent from the current view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub target_id: String,
    /// Wire field is `type`; absent means [`RelationKind::Dashed`].
    #[serde(rename = "type", default)]
    pub kind: RelationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curvature: Option<f64>,
}

/// Semantics of a relation: `Solid` is a same-level association, `Dashed` a
/// weak or typed cross-reference.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Solid,
    #[default]
    Dashed,
}

impl Display for RelationKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            RelationKind::Solid => write!(f, "solid"),
            RelationKind::Dashed => write!(f, "dashed"),
        }
    }
}
