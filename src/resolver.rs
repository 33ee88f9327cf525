//! Recursive resolution of a universe fragmented across multiple JSON
//! documents into one unified tree.
//!
//! A child whose id carries the reserved document suffix is a placeholder:
//! it is replaced wholesale (children and relations included) by the root
//! of the document fetched from a URL joined from the referencing
//! document's URL and that id. Sibling branches resolve concurrently, but
//! results are placed positionally so the unified child sequence always
//! matches authored document order regardless of completion order.
//!
//! The first failure anywhere in the fetch tree propagates and the resolve
//! call returns no partial tree; prior session state stays untouched.

use futures::future::{try_join_all, BoxFuture};
use std::collections::BTreeSet;
use std::future::Future;
use url::Url;

use crate::{error::UniverseError, topic::TopicNode};

/// The fetch capability this core consumes. Transport, timeouts, and
/// retries are the implementor's concern; failures surface as
/// [`UniverseError::Fetch`].
pub trait DocumentFetcher: Sync {
    /// Retrieve the raw document text at `url`.
    fn get(&self, url: &Url) -> impl Future<Output = Result<String, UniverseError>> + Send;
}

/// Fetch the document at `entry_url` and splice every external reference,
/// recursively, into one unified tree.
///
/// Each branch tracks the set of document URLs currently being resolved
/// above it; a document referencing one of its own ancestors fails fast
/// with [`UniverseError::Cycle`] rather than recursing unbounded.
/// Post-condition: no id in the returned tree retains the document suffix.
pub async fn resolve<F: DocumentFetcher>(
    fetcher: &F,
    entry_url: &Url,
) -> Result<TopicNode, UniverseError> {
    let ancestors = BTreeSet::new();
    resolve_document(fetcher, entry_url.clone(), &ancestors).await
}

fn resolve_document<'a, F: DocumentFetcher>(
    fetcher: &'a F,
    url: Url,
    ancestors: &'a BTreeSet<Url>,
) -> BoxFuture<'a, Result<TopicNode, UniverseError>> {
    Box::pin(async move {
        if ancestors.contains(&url) {
            return Err(UniverseError::Cycle {
                url: url.to_string(),
            });
        }
        tracing::debug!("resolving document {url}");
        let body = fetcher.get(&url).await?;
        let mut root: TopicNode = serde_json::from_str(&body)?;

        let mut in_progress = ancestors.clone();
        in_progress.insert(url.clone());
        splice_children(fetcher, &mut root, &url, &in_progress).await?;
        Ok(root)
    })
}

/// Resolve all of `node`'s children concurrently, replacing external
/// references in place and recursing into ordinary children.
fn splice_children<'a, F: DocumentFetcher>(
    fetcher: &'a F,
    node: &'a mut TopicNode,
    base_url: &'a Url,
    in_progress: &'a BTreeSet<Url>,
) -> BoxFuture<'a, Result<(), UniverseError>> {
    Box::pin(async move {
        if node.children.is_empty() {
            return Ok(());
        }
        let branches = node
            .children
            .drain(..)
            .map(|child| async move {
                if child.is_external_ref() {
                    let child_url = base_url.join(&child.id)?;
                    resolve_document(fetcher, child_url, in_progress).await
                } else {
                    let mut child = child;
                    splice_children(fetcher, &mut child, base_url, in_progress).await?;
                    Ok(child)
                }
            })
            .collect::<Vec<_>>();

        // try_join_all yields results in argument order, which is what
        // keeps the spliced child sequence in authored document order.
        node.children = try_join_all(branches).await?;
        Ok(())
    })
}
