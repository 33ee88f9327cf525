//! Tests for session-level navigation state: events, stale-load
//! discarding, and breadcrumb wiring.

use test_log::test;

use super::helpers::*;
use crate::{
    config::UniverseConfig,
    event::NavEvent,
    session::UniverseSession,
};

fn session_with_tree() -> UniverseSession {
    let mut session = UniverseSession::new(UniverseConfig::default());
    let token = session.begin_load();
    assert!(session.commit_tree(token, sample_universe()));
    session
}

#[test]
fn test_frame_empty_before_commit() {
    let mut session = UniverseSession::new(UniverseConfig::default());
    assert!(session.frame().is_empty());
    assert!(session.breadcrumbs().is_empty());
}

#[test]
fn test_stale_token_is_discarded() {
    let mut session = session_with_tree();

    let stale = session.begin_load();
    let fresh = session.begin_load();

    // A late-arriving stale result must never overwrite fresher state.
    let mut stale_tree = sample_universe();
    stale_tree.id = "StaleRoot".to_string();
    assert!(!session.commit_tree(stale, stale_tree));
    assert_eq!(session.tree().unwrap().id, "Root");

    assert!(session.commit_tree(fresh, sample_universe()));
}

#[test]
fn test_commit_resets_view_state() {
    let mut session = session_with_tree();
    session.enter_node("Music");
    session.toggle_collapse("Reading");
    let _ = session.frame();
    assert!(!session.layout().is_empty());

    let token = session.begin_load();
    assert!(session.commit_tree(token, sample_universe()));

    assert!(session.view_root().is_none());
    assert!(session.collapsed().is_empty());
    assert!(session.layout().is_empty());
}

#[test]
fn test_enter_node_and_breadcrumbs() {
    let mut session = session_with_tree();
    session.apply(NavEvent::EnterNode("Philosophy".to_string()));

    let frame = session.frame();
    let philosophy = frame.nodes.iter().find(|n| n.id == "Philosophy").unwrap();
    assert_eq!(philosophy.level, 0);

    // Global root is excluded from the trail.
    let trail: Vec<&str> = session.breadcrumbs().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(trail, vec!["Reading", "Philosophy"]);

    session.apply(NavEvent::NavigateTo(None));
    assert!(session.breadcrumbs().is_empty());
    assert!(session.view_root().is_none());
}

#[test]
fn test_toggle_collapse_round_trip() {
    let mut session = session_with_tree();
    session.apply(NavEvent::ToggleCollapse("Music".to_string()));
    assert!(session.is_collapsed("Music"));
    assert!(!session.frame().nodes.iter().any(|n| n.id == "Guitar"));

    session.apply(NavEvent::ToggleCollapse("Music".to_string()));
    assert!(!session.is_collapsed("Music"));
    assert!(session.frame().nodes.iter().any(|n| n.id == "Guitar"));
}

#[test]
fn test_layout_persists_across_navigation() {
    let mut session = session_with_tree();
    let _ = session.frame();
    session.record_layout(
        "Reading",
        crate::layout::LayoutState {
            x: 42.0,
            y: -7.0,
            vx: 0.0,
            vy: 0.0,
        },
    );

    session.toggle_collapse("Music");
    let frame = session.frame();
    let reading = frame.nodes.iter().find(|n| n.id == "Reading").unwrap();
    assert_eq!((reading.x, reading.y), (42.0, -7.0));
}

#[test]
fn test_set_language_keeps_tree_until_commit() {
    let mut session = session_with_tree();
    session.apply(NavEvent::SetLanguage("zh".to_string()));
    assert_eq!(session.language(), "zh");
    // Stale-but-valid data remains displayed until a new tree commits.
    assert!(session.tree().is_some());
}
