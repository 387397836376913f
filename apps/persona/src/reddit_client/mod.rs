/// Reddit Client — read-only access to a user's public submissions and comments.
///
/// Uses the application-only OAuth flow (client credentials). The bearer token
/// is requested lazily on the first listing call and reused for the lifetime
/// of the client, so an auth failure surfaces where the fetcher can contain it.
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::activity::fetcher::{ActivityPage, ActivitySource};
use crate::activity::{ActivityItem, ActivityKind};
use crate::config::RedditCredentials;

const REDDIT_AUTH_URL: &str = "https://www.reddit.com/api/v1/access_token";
const REDDIT_API_BASE: &str = "https://oauth.reddit.com";

#[derive(Debug, Error)]
pub enum RedditError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication rejected (status {status}): {message}")]
    Auth { status: u16, message: String },

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("Access to user '{0}' is forbidden (suspended or private)")]
    Forbidden(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    after: Option<String>,
    #[serde(default)]
    children: Vec<Thing>,
}

#[derive(Debug, Deserialize)]
struct Thing {
    data: ThingData,
}

/// Union of the submission (`t3`) and comment (`t1`) fields we read.
#[derive(Debug, Deserialize)]
struct ThingData {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    selftext: Option<String>,
    #[serde(default)]
    body: Option<String>,
    permalink: String,
}

impl ThingData {
    fn into_item(self, kind: ActivityKind) -> ActivityItem {
        match kind {
            ActivityKind::Post => ActivityItem::post(
                self.title.unwrap_or_default(),
                self.selftext.unwrap_or_default(),
                self.permalink,
            ),
            ActivityKind::Comment => {
                ActivityItem::comment(self.body.unwrap_or_default(), self.permalink)
            }
        }
    }
}

fn listing_segment(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Post => "submitted",
        ActivityKind::Comment => "comments",
    }
}

pub struct RedditClient {
    client: Client,
    credentials: RedditCredentials,
    auth_url: String,
    api_base: String,
    token: OnceCell<String>,
}

impl RedditClient {
    pub fn new(credentials: RedditCredentials) -> Self {
        Self::with_endpoints(credentials, REDDIT_AUTH_URL, REDDIT_API_BASE)
    }

    /// Points the client at alternative endpoints (used against mock servers).
    pub fn with_endpoints(
        credentials: RedditCredentials,
        auth_url: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .user_agent(credentials.user_agent.clone())
                .build()
                .expect("Failed to build HTTP client"),
            credentials,
            auth_url: auth_url.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: OnceCell::new(),
        }
    }

    async fn token(&self) -> Result<&str, RedditError> {
        self.token
            .get_or_try_init(|| self.request_token())
            .await
            .map(String::as_str)
    }

    async fn request_token(&self) -> Result<String, RedditError> {
        let response = self
            .client
            .post(&self.auth_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RedditError::Auth {
                status: status.as_u16(),
                message,
            });
        }

        let token: TokenResponse = response.json().await?;
        debug!("Obtained Reddit application token");
        Ok(token.access_token)
    }
}

#[async_trait]
impl ActivitySource for RedditClient {
    async fn fetch_page(
        &self,
        username: &str,
        kind: ActivityKind,
        limit: usize,
        after: Option<&str>,
    ) -> Result<ActivityPage, RedditError> {
        let token = self.token().await?;
        let url = format!(
            "{}/user/{username}/{}",
            self.api_base,
            listing_segment(kind)
        );

        let limit = limit.to_string();
        let mut query = vec![("sort", "new"), ("limit", limit.as_str()), ("raw_json", "1")];
        if let Some(after) = after {
            query.push(("after", after));
        }

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => return Err(RedditError::UserNotFound(username.to_string())),
            StatusCode::FORBIDDEN => return Err(RedditError::Forbidden(username.to_string())),
            StatusCode::UNAUTHORIZED => {
                let message = response.text().await.unwrap_or_default();
                return Err(RedditError::Auth {
                    status: status.as_u16(),
                    message,
                });
            }
            s if !s.is_success() => {
                let message = response.text().await.unwrap_or_default();
                return Err(RedditError::Api {
                    status: s.as_u16(),
                    message,
                });
            }
            _ => {}
        }

        let listing: Listing = response.json().await?;
        debug!(
            "Listing page for u/{username} ({}): {} items",
            kind.label(),
            listing.data.children.len()
        );

        Ok(ActivityPage {
            items: listing
                .data
                .children
                .into_iter()
                .map(|thing| thing.data.into_item(kind))
                .collect(),
            after: listing.data.after,
        })
    }
}
