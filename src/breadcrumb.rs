//! Breadcrumb trail for the current drill-down root.

use crate::{locator::path_to, topic::TopicNode};

/// The display path for `sub_root_id`, global root excluded (the root is
/// shown by a separate always-visible title affordance, not repeated in
/// the trail). Empty for the global view or an unresolved id.
pub fn breadcrumbs<'a>(tree: &'a TopicNode, sub_root_id: Option<&str>) -> Vec<&'a TopicNode> {
    let Some(id) = sub_root_id else {
        return Vec::new();
    };
    let Some(path) = path_to(tree, id) else {
        return Vec::new();
    };
    path.into_iter().filter(|node| node.id != tree.id).collect()
}
