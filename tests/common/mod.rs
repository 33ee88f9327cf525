//! Shared test utilities for integration tests.
//!
//! Import from integration test files as:
//! ```ignore
//! mod common;
//! ```

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use universe_core::{resolver::DocumentFetcher, UniverseError};
use url::Url;

/// Initialize tracing for tests, respecting RUST_LOG env var.
///
/// Safe to call multiple times — subsequent calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// In-memory stand-in for the fetch collaborator: serves documents by full
/// URL, optionally after a per-URL delay so tests can force out-of-order
/// sibling completion.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    docs: BTreeMap<String, String>,
    delays: BTreeMap<String, u64>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_doc(mut self, url: &str, body: &str) -> Self {
        self.docs.insert(url.to_string(), body.to_string());
        self
    }

    #[allow(dead_code)]
    pub fn with_delay(mut self, url: &str, millis: u64) -> Self {
        self.delays.insert(url.to_string(), millis);
        self
    }
}

impl DocumentFetcher for StaticFetcher {
    fn get(&self, url: &Url) -> impl Future<Output = Result<String, UniverseError>> + Send {
        let key = url.as_str().to_string();
        let body = self.docs.get(&key).cloned();
        let delay = self.delays.get(&key).copied();
        async move {
            if let Some(millis) = delay {
                tokio::time::sleep(Duration::from_millis(millis)).await;
            }
            body.ok_or_else(|| UniverseError::Fetch(format!("404 not found: {key}")))
        }
    }
}

/// The concrete multi-document universe most tests resolve:
///
/// `.../en/universe.json` references `Y.json` alongside an inline child.
#[allow(dead_code)]
pub fn split_universe_fetcher(root: &str) -> StaticFetcher {
    StaticFetcher::new()
        .with_doc(
            &format!("{root}/en/universe.json"),
            r#"{ "id": "Root", "children": [ { "id": "X" }, { "id": "Y.json" } ] }"#,
        )
        .with_doc(
            &format!("{root}/en/Y.json"),
            r#"{ "id": "Y", "children": [ { "id": "Z" } ] }"#,
        )
}
