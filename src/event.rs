//! Discrete navigation events arriving from the interaction shell.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// User interactions that change what the next frame projects. Applied
/// through [`crate::session::UniverseSession::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavEvent {
    /// Drill into a sub-universe, making the named node the view root.
    EnterNode(String),
    /// Breadcrumb jump; `None` returns to the global root view.
    NavigateTo(Option<String>),
    /// Hide or reveal the named node's subtree.
    ToggleCollapse(String),
    /// Switch content language. The session clears its view state; the
    /// caller is expected to resolve and commit the new tree.
    SetLanguage(String),
}

impl Display for NavEvent {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            NavEvent::EnterNode(_) => write!(f, "EnterNode"),
            NavEvent::NavigateTo(_) => write!(f, "NavigateTo"),
            NavEvent::ToggleCollapse(_) => write!(f, "ToggleCollapse"),
            NavEvent::SetLanguage(_) => write!(f, "SetLanguage"),
        }
    }
}
