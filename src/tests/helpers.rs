//! Shared fixture builders for unit tests.

use crate::topic::{Relation, RelationKind, TopicNode};

/// Leaf node with no children or relations.
pub fn topic(id: &str, group: u32) -> TopicNode {
    TopicNode {
        id: id.to_string(),
        group,
        ..Default::default()
    }
}

pub fn topic_with_children(id: &str, group: u32, children: Vec<TopicNode>) -> TopicNode {
    TopicNode {
        id: id.to_string(),
        group,
        children,
        ..Default::default()
    }
}

pub fn relation(target_id: &str, kind: RelationKind, label: Option<&str>) -> Relation {
    Relation {
        target_id: target_id.to_string(),
        kind,
        label: label.map(str::to_string),
        curvature: None,
    }
}

/// A small unified tree exercising every projection concern:
///
/// ```text
/// Root
/// ├── Music        (relations: Reading dashed "inspires")
/// │   ├── Guitar
/// │   └── Piano    (relations: Guitar solid)
/// ├── Reading
/// │   └── Philosophy
/// │       └── Stoicism
/// └── Code         (relations: Vaporware dashed, target does not exist)
/// ```
pub fn sample_universe() -> TopicNode {
    let piano = {
        let mut piano = topic("Piano", 1);
        piano.relations = vec![relation("Guitar", RelationKind::Solid, None)];
        piano
    };
    let mut music = topic_with_children("Music", 1, vec![topic("Guitar", 1), piano]);
    music.relations = vec![relation("Reading", RelationKind::Dashed, Some("inspires"))];

    let reading = topic_with_children(
        "Reading",
        2,
        vec![topic_with_children(
            "Philosophy",
            2,
            vec![topic("Stoicism", 2)],
        )],
    );

    let mut code = topic("Code", 3);
    code.relations = vec![relation("Vaporware", RelationKind::Dashed, None)];

    topic_with_children("Root", 0, vec![music, reading, code])
}
