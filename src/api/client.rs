//! Reddit HTTP client.

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;

use crate::api::types::{Listing, ListingData, ThingData};
use crate::config::AccountConfig;
use crate::crawl::SavedFeed;
use crate::error::{Error, Result};
use crate::resolve::PostSource;

/// Items requested per saved-feed page.
pub const PAGE_SIZE: usize = 20;

/// Reddit JSON API client for the saved feed and post metadata.
pub struct RedditApi {
    client: Client,
    origin: String,
    username: String,
}

impl RedditApi {
    /// Create a new client for the given account.
    pub fn new(account: &AccountConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(cookie) = account.session_cookie.as_deref().filter(|c| !c.is_empty()) {
            let value = header::HeaderValue::from_str(&format!("reddit_session={}", cookie))
                .map_err(|_| Error::ConfigValidation {
                    field: "session_cookie".to_string(),
                    message: "Cookie contains invalid header characters".to_string(),
                })?;
            headers.insert(header::COOKIE, value);
        }

        let client = Client::builder()
            .user_agent(&account.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            origin: account.origin.trim_end_matches('/').to_string(),
            username: account.username.trim().trim_start_matches("u/").to_string(),
        })
    }

    /// The site origin, without trailing slash.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Make a GET request and check the status.
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        tracing::debug!("GET {} {:?}", url, query);

        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == 429 {
            let retry_after = response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(60);
            return Err(Error::RateLimited(retry_after));
        }

        if status == 401 || status == 403 {
            return Err(Error::Authentication(format!(
                "HTTP {} for {}. Is the saved feed visible to this session?",
                status, url
            )));
        }

        if !status.is_success() {
            return Err(Error::Api(format!("HTTP {} for {}", status, url)));
        }

        Ok(response)
    }

    /// GET a URL and parse the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self.get(url, query).await?;
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse response from {}: {} - Response: {}",
                url,
                e,
                text.chars().take(500).collect::<String>()
            ))
        })
    }

    /// Get one page of the user's saved items, newest first.
    pub async fn get_saved_page(&self, after: Option<&str>) -> Result<Listing> {
        let url = format!("{}/user/{}/saved/.json", self.origin, self.username);
        let limit = PAGE_SIZE.to_string();

        let mut query = vec![("limit", limit.as_str())];
        if let Some(after) = after {
            query.push(("after", after));
        }

        self.get_json(&url, &query).await
    }

    /// Get the listings of a post page (post listing first, then comments).
    pub async fn get_post(&self, permalink_url: &str) -> Result<Vec<Listing>> {
        let url = format!("{}/.json", permalink_url.trim_end_matches('/'));
        self.get_json(&url, &[]).await
    }
}

#[async_trait]
impl SavedFeed for RedditApi {
    async fn saved_page(&self, after: Option<&str>) -> Result<ListingData> {
        Ok(self.get_saved_page(after).await?.data)
    }
}

#[async_trait]
impl PostSource for RedditApi {
    async fn post_data(&self, permalink_url: &str) -> Result<ThingData> {
        self.get_post(permalink_url)
            .await?
            .into_iter()
            .next()
            .and_then(|listing| listing.data.children.into_iter().next())
            .map(|thing| thing.data)
            .ok_or_else(|| Error::Api(format!("No post data at {}", permalink_url)))
    }
}
