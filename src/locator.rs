//! Pure lookups over an already-resolved unified tree.
//!
//! Both operations are depth-first in document order and run in time
//! proportional to tree size. The tree is resolved once per session so no
//! memoization is kept.

use std::collections::BTreeSet;

use crate::topic::TopicNode;

/// Find a node by id, first match in document order wins.
///
/// Duplicate ids are tolerated rather than rejected: ids are expected to be
/// unique by authoring convention but are not validated, so a duplicate
/// silently shadows later occurrences.
pub fn find_node<'a>(root: &'a TopicNode, id: &str) -> Option<&'a TopicNode> {
    if root.id == id {
        return Some(root);
    }
    root.children
        .iter()
        .find_map(|child| find_node(child, id))
}

/// The root-to-node path, inclusive of both endpoints. Returns the first
/// discovered path, `None` when `id` does not occur.
pub fn path_to<'a>(root: &'a TopicNode, id: &str) -> Option<Vec<&'a TopicNode>> {
    if root.id == id {
        return Some(vec![root]);
    }
    for child in &root.children {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }
    None
}

/// Ids of every node with at least one child. Used to seed expand/collapse
/// affordances in the shell.
pub fn parent_ids(root: &TopicNode) -> BTreeSet<String> {
    let mut parents = BTreeSet::new();
    collect_parents(root, &mut parents);
    parents
}

fn collect_parents(node: &TopicNode, parents: &mut BTreeSet<String>) {
    if !node.children.is_empty() {
        parents.insert(node.id.clone());
        for child in &node.children {
            collect_parents(child, parents);
        }
    }
}
