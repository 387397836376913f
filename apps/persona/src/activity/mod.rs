// Activity model: what a user posted and commented, and how each item is
// rendered into the prompt.

pub mod fetcher;

/// Public site root that platform-relative permalinks are joined onto.
pub const SITE_BASE_URL: &str = "https://www.reddit.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Post,
    Comment,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Post => "posts",
            ActivityKind::Comment => "comments",
        }
    }
}

/// A single post or comment from the user's public history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    /// Posts only.
    pub title: Option<String>,
    pub body: String,
    /// Platform-relative path, e.g. `/r/rust/comments/abc/title/`.
    pub permalink: String,
}

impl ActivityItem {
    pub fn post(title: impl Into<String>, body: impl Into<String>, permalink: impl Into<String>) -> Self {
        Self {
            kind: ActivityKind::Post,
            title: Some(title.into()),
            body: body.into(),
            permalink: permalink.into(),
        }
    }

    pub fn comment(body: impl Into<String>, permalink: impl Into<String>) -> Self {
        Self {
            kind: ActivityKind::Comment,
            title: None,
            body: body.into(),
            permalink: permalink.into(),
        }
    }

    /// Returns the item with whitespace collapsed in every text field.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.as_deref().map(normalize_whitespace),
            body: normalize_whitespace(&self.body),
            ..self
        }
    }

    /// Absolute link to the item on the public site.
    pub fn link(&self) -> String {
        join_link(SITE_BASE_URL, &self.permalink)
    }

    /// Renders the item as the text block embedded in the prompt.
    pub fn to_block(&self) -> String {
        match self.kind {
            ActivityKind::Post => format!(
                "Title: {}\nBody: {}\nLink: {}",
                self.title.as_deref().unwrap_or_default(),
                self.body,
                self.link()
            ),
            ActivityKind::Comment => format!("Comment: {}\nLink: {}", self.body, self.link()),
        }
    }
}

/// Collapses every run of whitespace into one space and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Joins a base URL and a relative permalink with exactly one `/` between them.
pub fn join_link(base: &str, permalink: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        permalink.trim_start_matches('/')
    )
}
