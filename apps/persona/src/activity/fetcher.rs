//! Activity Fetcher — pulls a bounded window of a user's recent posts and
//! comments from an [`ActivitySource`].
//!
//! Retrieval is best-effort: an upstream error ends that category's iteration
//! and keeps whatever was collected so far. The outcome of every category is
//! reported as a [`FetchStatus`] so callers can tell "nothing there" apart
//! from "upstream broke".

use async_trait::async_trait;
use tracing::{info, warn};

use crate::activity::{ActivityItem, ActivityKind};
use crate::reddit_client::RedditError;

/// Default number of items fetched per category.
pub const MAX_ITEMS: usize = 10;
/// Largest page the listing API will serve.
pub const PAGE_SIZE: usize = 100;

// ────────────────────────────────────────────────────────────────────────────
// Source trait
// ────────────────────────────────────────────────────────────────────────────

/// One page of a newest-first listing.
#[derive(Debug, Clone, Default)]
pub struct ActivityPage {
    pub items: Vec<ActivityItem>,
    /// Cursor for the next page; `None` when the listing is exhausted.
    pub after: Option<String>,
}

/// Read access to a user's public history. Implemented by `RedditClient`
/// and by in-memory sources in tests.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    async fn fetch_page(
        &self,
        username: &str,
        kind: ActivityKind,
        limit: usize,
        after: Option<&str>,
    ) -> Result<ActivityPage, RedditError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Result types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum FetchStatus {
    /// The listing ran out or the cap was reached.
    Complete,
    /// The upstream failed after at least one item was collected.
    Partial(RedditError),
    /// The upstream failed before any item was collected.
    Failed(RedditError),
}

/// Items collected for one category plus how the iteration ended.
#[derive(Debug)]
pub struct CategoryFetch {
    pub items: Vec<ActivityItem>,
    pub status: FetchStatus,
}

impl CategoryFetch {
    /// Prompt blocks, newest first.
    pub fn blocks(&self) -> Vec<String> {
        self.items.iter().map(ActivityItem::to_block).collect()
    }
}

#[derive(Debug)]
pub struct UserActivity {
    pub posts: CategoryFetch,
    pub comments: CategoryFetch,
}

impl UserActivity {
    pub fn is_empty(&self) -> bool {
        self.posts.items.is_empty() && self.comments.items.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fetching
// ────────────────────────────────────────────────────────────────────────────

/// Fetches up to `cap` posts and up to `cap` comments for `username`.
///
/// The two categories are fetched independently; a failure in one does not
/// stop the other. Upstream order (newest first) is preserved.
pub async fn fetch_user_activity(
    source: &dyn ActivitySource,
    username: &str,
    cap: usize,
) -> UserActivity {
    let posts = fetch_category(source, username, ActivityKind::Post, cap).await;
    let comments = fetch_category(source, username, ActivityKind::Comment, cap).await;
    UserActivity { posts, comments }
}

async fn fetch_category(
    source: &dyn ActivitySource,
    username: &str,
    kind: ActivityKind,
    cap: usize,
) -> CategoryFetch {
    let mut items: Vec<ActivityItem> = Vec::new();
    let mut after: Option<String> = None;

    while items.len() < cap {
        let remaining = cap - items.len();
        let page = match source
            .fetch_page(username, kind, remaining.min(PAGE_SIZE), after.as_deref())
            .await
        {
            Ok(page) => page,
            Err(e) => {
                let status = if items.is_empty() {
                    warn!("Fetching {} for u/{username} failed: {e}", kind.label());
                    FetchStatus::Failed(e)
                } else {
                    warn!(
                        "Fetching {} for u/{username} stopped after {} items: {e}",
                        kind.label(),
                        items.len()
                    );
                    FetchStatus::Partial(e)
                };
                return CategoryFetch { items, status };
            }
        };

        let received = page.items.len();
        items.extend(
            page.items
                .into_iter()
                .take(remaining)
                .map(ActivityItem::normalized),
        );

        match page.after {
            Some(next) if received > 0 => after = Some(next),
            _ => break,
        }
    }

    info!("Fetched {} {} for u/{username}", items.len(), kind.label());
    CategoryFetch {
        items,
        status: FetchStatus::Complete,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
