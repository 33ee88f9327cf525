//! The navigation session: one explorable view over one universe.
//!
//! A session owns everything mutable in this core (the unified tree, the
//! collapse set, the drill-down root, and the layout table) so multiple
//! graph views and test cases stay isolated from each other. Projection is
//! synchronous and only one runs at a time; the only asynchronous
//! operation is document resolution, whose results are committed through a
//! token so a stale resolve can never overwrite fresher state.

use std::collections::BTreeSet;
use url::Url;

use crate::{
    breadcrumb::breadcrumbs,
    config::UniverseConfig,
    error::UniverseError,
    event::NavEvent,
    layout::{LayoutState, LayoutTable},
    projection::{project, Projection},
    resolver::{resolve, DocumentFetcher},
    topic::TopicNode,
};

/// Identifies one load request. A token is only accepted by
/// [`UniverseSession::commit_tree`] while no newer load has begun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

#[derive(Debug, Default)]
pub struct UniverseSession {
    config: UniverseConfig,
    language: String,
    tree: Option<TopicNode>,
    collapsed: BTreeSet<String>,
    view_root: Option<String>,
    layout: LayoutTable,
    generation: u64,
}

impl UniverseSession {
    pub fn new(config: UniverseConfig) -> Self {
        let language = config.default_language.clone();
        UniverseSession {
            config,
            language,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &UniverseConfig {
        &self.config
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The entry document URL for the session's current language.
    pub fn entry_url(&self) -> Result<Url, UniverseError> {
        self.config.entry_url(&self.language)
    }

    pub fn tree(&self) -> Option<&TopicNode> {
        self.tree.as_ref()
    }

    pub fn view_root(&self) -> Option<&str> {
        self.view_root.as_deref()
    }

    pub fn collapsed(&self) -> &BTreeSet<String> {
        &self.collapsed
    }

    pub fn is_collapsed(&self, id: &str) -> bool {
        self.collapsed.contains(id)
    }

    pub fn layout(&self) -> &LayoutTable {
        &self.layout
    }

    /// Start a new load request, invalidating the tokens of every load
    /// still in flight.
    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        LoadToken(self.generation)
    }

    /// Install a freshly resolved unified tree, resetting view root,
    /// collapse set, and layout table. Returns false (and changes nothing)
    /// when `token` is stale, i.e. a newer load has begun since it was
    /// issued.
    pub fn commit_tree(&mut self, token: LoadToken, tree: TopicNode) -> bool {
        if token.0 != self.generation {
            tracing::debug!(
                "discarding stale resolve result for '{}' (token {} < {})",
                tree.id,
                token.0,
                self.generation
            );
            return false;
        }
        tracing::debug!("installing unified tree rooted at '{}'", tree.id);
        self.tree = Some(tree);
        self.view_root = None;
        self.collapsed.clear();
        self.layout.reset();
        true
    }

    /// Resolve and install the entry document for the current language.
    /// On failure the previous tree stays displayed.
    pub async fn load<F: DocumentFetcher>(&mut self, fetcher: &F) -> Result<(), UniverseError> {
        let url = self.entry_url()?;
        let token = self.begin_load();
        let tree = resolve(fetcher, &url).await?;
        self.commit_tree(token, tree);
        Ok(())
    }

    /// Switch the session language. View state is kept until the caller's
    /// next [`Self::load`] commits the new tree, so stale-but-valid data
    /// remains displayed while the switch is in flight.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Drill into `id`, making it the projection root. An id missing from
    /// the tree projects from the global root instead.
    pub fn enter_node(&mut self, id: impl Into<String>) {
        self.view_root = Some(id.into());
    }

    /// Breadcrumb jump; `None` returns to the global view.
    pub fn navigate_to(&mut self, target: Option<String>) {
        self.view_root = target;
    }

    pub fn toggle_collapse(&mut self, id: &str) {
        if !self.collapsed.remove(id) {
            self.collapsed.insert(id.to_string());
        }
    }

    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::EnterNode(id) => self.enter_node(id),
            NavEvent::NavigateTo(target) => self.navigate_to(target),
            NavEvent::ToggleCollapse(id) => self.toggle_collapse(&id),
            NavEvent::SetLanguage(language) => self.set_language(language),
        }
    }

    /// Project the current view and reconcile it against the previous
    /// frame's layout state. Empty until a tree has been committed.
    pub fn frame(&mut self) -> Projection {
        let Some(tree) = self.tree.as_ref() else {
            return Projection::default();
        };
        let mut frame = project(tree, &self.collapsed, self.view_root.as_deref());
        self.layout.reconcile(&mut frame.nodes);
        frame
    }

    /// The breadcrumb trail for the current drill-down root.
    pub fn breadcrumbs(&self) -> Vec<&TopicNode> {
        match self.tree.as_ref() {
            Some(tree) => breadcrumbs(tree, self.view_root.as_deref()),
            None => Vec::new(),
        }
    }

    /// Feed simulated position/velocity back from the renderer so the next
    /// reconcile starts from settled state.
    pub fn record_layout(&mut self, id: &str, state: LayoutState) {
        self.layout.record(id, state);
    }
}
