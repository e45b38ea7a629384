//! Imgur REST API client.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;

use crate::api::types::ImgurResponse;
use crate::error::{Error, Result};
use crate::resolve::ImgurSource;

/// Imgur API base URL.
const API_BASE: &str = "https://api.imgur.com/3/";

/// Which Imgur endpoint an ID belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImgurKind {
    Album,
    Gallery,
}

impl ImgurKind {
    fn path_segment(self) -> &'static str {
        match self {
            ImgurKind::Album => "album",
            ImgurKind::Gallery => "gallery",
        }
    }
}

impl fmt::Display for ImgurKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Imgur API client.
pub struct ImgurApi {
    client: Client,
    base: String,
}

impl ImgurApi {
    /// Create a client against the public API.
    pub fn new(user_agent: &str) -> Result<Self> {
        Self::with_base(user_agent, API_BASE)
    }

    /// Create a client against a custom API base (must end with `/`).
    pub fn with_base(user_agent: &str, base: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base: base.to_string(),
        })
    }

    /// Endpoint URL listing the images of an album or gallery.
    pub fn images_url(&self, kind: ImgurKind, id: &str) -> String {
        format!("{}{}/{}/images", self.base, kind, id)
    }

    /// Fetch the image links of an album or gallery, in API order.
    pub async fn get_images(&self, kind: ImgurKind, id: &str, client_id: &str) -> Result<Vec<String>> {
        let url = self.images_url(kind, id);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("client_id", client_id)])
            .send()
            .await?;

        let status = response.status();
        if status == 429 {
            return Err(Error::RateLimited(60));
        }

        let text = response.text().await?;
        let parsed: ImgurResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse Imgur {} {}: {} - Response: {}",
                kind,
                id,
                e,
                text.chars().take(500).collect::<String>()
            ))
        })?;

        if !parsed.success || !status.is_success() {
            return Err(Error::Api(format!(
                "Imgur {} {} failed with HTTP {}",
                kind,
                id,
                parsed.status.unwrap_or(status.as_u16())
            )));
        }

        Ok(parsed.data.into_links())
    }
}

#[async_trait]
impl ImgurSource for ImgurApi {
    async fn images(&self, kind: ImgurKind, id: &str, client_id: &str) -> Result<Vec<String>> {
        self.get_images(kind, id, client_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use httpmock::MockServer;
    use serde_json::json;

    fn api_for(server: &MockServer) -> ImgurApi {
        ImgurApi::with_base("test-agent", &format!("{}/3/", server.base_url())).unwrap()
    }

    #[test]
    fn test_images_url() {
        let api = ImgurApi::new("test-agent").unwrap();
        assert_eq!(
            api.images_url(ImgurKind::Album, "w0ouO"),
            "https://api.imgur.com/3/album/w0ouO/images"
        );
        assert_eq!(
            api.images_url(ImgurKind::Gallery, "abc"),
            "https://api.imgur.com/3/gallery/abc/images"
        );
    }

    #[test]
    fn test_custom_base() {
        let api = ImgurApi::with_base("test-agent", "http://localhost:9000/3/").unwrap();
        assert_eq!(
            api.images_url(ImgurKind::Album, "x"),
            "http://localhost:9000/3/album/x/images"
        );
    }

    #[tokio::test]
    async fn test_album_request_and_links() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/3/album/w0ouO/images")
                .query_param("client_id", "key");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "data": [
                        {"id": "a", "link": "https://i.imgur.com/a.jpg"},
                        {"id": "b", "link": "https://i.imgur.com/b.png"}
                    ],
                    "success": true,
                    "status": 200
                }));
        });

        let links = api_for(&server)
            .images(ImgurKind::Album, "w0ouO", "key")
            .await
            .unwrap();

        mock.assert();
        assert_eq!(links, ["https://i.imgur.com/a.jpg", "https://i.imgur.com/b.png"]);
    }

    #[tokio::test]
    async fn test_gallery_request_single_image() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/3/gallery/xyz/images")
                .query_param("client_id", "key");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "data": {"id": "xyz", "link": "https://i.imgur.com/xyz.gif"},
                    "success": true,
                    "status": 200
                }));
        });

        let links = api_for(&server)
            .images(ImgurKind::Gallery, "xyz", "key")
            .await
            .unwrap();

        mock.assert();
        assert_eq!(links, ["https://i.imgur.com/xyz.gif"]);
    }

    #[tokio::test]
    async fn test_unsuccessful_body_is_api_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/3/album/gone/images");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "data": {"error": "Permission denied"},
                    "success": false,
                    "status": 403
                }));
        });

        let err = api_for(&server)
            .images(ImgurKind::Album, "gone", "key")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(_)));
    }

    #[tokio::test]
    async fn test_http_failure_is_api_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/3/gallery/missing/images");
            then.status(404)
                .header("content-type", "application/json")
                .json_body(json!({
                    "data": {"error": "Unable to find a gallery with the id missing"},
                    "success": false,
                    "status": 404
                }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/3/gallery/broken/images");
            then.status(502).body("Bad Gateway");
        });

        let api = api_for(&server);
        let err = api
            .images(ImgurKind::Gallery, "missing", "key")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(_)));

        let err = api
            .images(ImgurKind::Gallery, "broken", "key")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(_)));
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/3/album/busy/images");
            then.status(429);
        });

        let err = api_for(&server)
            .images(ImgurKind::Album, "busy", "key")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::RateLimited(60)));
    }
}
