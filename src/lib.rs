//! # universe-core
//!
//! Graph materialization and navigation engine for an explorable,
//! hierarchical "knowledge universe".
//!
//! Content is authored as a tree of topic nodes split across multiple JSON
//! documents that reference each other, plus non-hierarchical relations
//! between arbitrary nodes. This crate resolves those documents into one
//! unified tree, projects a chosen sub-tree into the flat node/edge graph a
//! force-directed renderer consumes, computes breadcrumb paths, and carries
//! simulated layout state across re-projections so the picture stays stable
//! while the user drills in, collapses branches, and jumps around.
//!
//! What it deliberately does not do: simulate forces, paint pixels, or talk
//! to the network. Rendering and transport are collaborators; the fetch
//! side is the [`resolver::DocumentFetcher`] trait.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use universe_core::{config::UniverseConfig, session::UniverseSession};
//! # use universe_core::{resolver::DocumentFetcher, UniverseError};
//! # use std::future::Future;
//! # use url::Url;
//! # struct HttpFetcher;
//! # impl DocumentFetcher for HttpFetcher {
//! #     fn get(&self, _url: &Url) -> impl Future<Output = Result<String, UniverseError>> + Send {
//! #         async { Ok(String::new()) }
//! #     }
//! # }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = UniverseConfig::load("universe.toml")?;
//!     let mut session = UniverseSession::new(config);
//!     session.load(&HttpFetcher).await?;
//!
//!     // Hand the reconciled frame to the rendering collaborator.
//!     let frame = session.frame();
//!     for node in &frame.nodes {
//!         println!("{} at level {}", node.id, node.level);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module guide
//!
//! - [`topic`]: the authored data model and wire format
//! - [`resolver`]: multi-document resolution into a unified tree
//! - [`locator`]: pure find-by-id and root-to-node path lookups
//! - [`projection`]: tree → flat node/edge graph with collapse pruning
//! - [`breadcrumb`]: display path for the drill-down root
//! - [`layout`]: position/velocity continuity across projections
//! - [`session`]: the mutable view state, scoped to one object
//! - [`event`]: discrete navigation events from the interaction shell
//! - [`config`]: content location and language configuration

pub mod breadcrumb;
pub mod config;
pub mod error;
pub mod event;
pub mod layout;
pub mod locator;
pub mod projection;
pub mod resolver;
pub mod session;
#[cfg(test)]
mod tests;
pub mod topic;

pub use error::*;
