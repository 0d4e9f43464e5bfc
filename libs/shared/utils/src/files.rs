use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use shared_config::AppConfig;

/// Turns an opaque file reference (a trainer's photo) into a download URL.
/// Implementations never fail: an unresolvable reference is `None`.
#[async_trait]
pub trait FileUrlResolver: Send + Sync {
    async fn resolve_url(&self, file_id: &str) -> Option<String>;
}

/// Resolves an optional photo reference, skipping the lookup when the trainer
/// has no photo.
pub async fn resolve_photo(resolver: &dyn FileUrlResolver, photo: Option<&str>) -> Option<String> {
    match photo {
        Some(file_id) if !file_id.is_empty() => resolver.resolve_url(file_id).await,
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
struct GetFileResponse {
    ok: bool,
    result: Option<TelegramFile>,
}

#[derive(Debug, Deserialize)]
struct TelegramFile {
    file_path: Option<String>,
}

/// Bot API `getFile` lookup.
pub struct TelegramFileResolver {
    client: Client,
    api_base_url: String,
    bot_token: String,
}

impl TelegramFileResolver {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        Self {
            client,
            api_base_url: config.telegram_api_base_url.trim_end_matches('/').to_string(),
            bot_token: config.telegram_bot_token.clone(),
        }
    }

    fn download_url(&self, file_path: &str) -> String {
        format!("{}/file/bot{}/{}", self.api_base_url, self.bot_token, file_path)
    }

    async fn fetch_file_path(&self, file_id: &str) -> Result<Option<String>, reqwest::Error> {
        let url = format!("{}/bot{}/getFile", self.api_base_url, self.bot_token);

        let response = self
            .client
            .get(&url)
            .query(&[("file_id", file_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("getFile for {} returned {}", file_id, response.status());
            return Ok(None);
        }

        let body: GetFileResponse = response.json().await?;
        if !body.ok {
            return Ok(None);
        }

        Ok(body.result.and_then(|file| file.file_path))
    }
}

#[async_trait]
impl FileUrlResolver for TelegramFileResolver {
    async fn resolve_url(&self, file_id: &str) -> Option<String> {
        if self.bot_token.is_empty() {
            debug!("No bot token configured, skipping lookup of {}", file_id);
            return None;
        }

        match self.fetch_file_path(file_id).await {
            Ok(Some(file_path)) => Some(self.download_url(&file_path)),
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to resolve file {}: {}", file_id, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn resolver_for(server: &MockServer, token: &str) -> TelegramFileResolver {
        let config = AppConfig {
            telegram_bot_token: token.to_string(),
            telegram_api_base_url: server.uri(),
            ..AppConfig::default()
        };
        TelegramFileResolver::new(&config)
    }

    #[tokio::test]
    async fn test_resolves_download_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bot123:abc/getFile"))
            .and(query_param("file_id", "photo-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": {
                    "file_id": "photo-1",
                    "file_unique_id": "u1",
                    "file_size": 2048,
                    "file_path": "photos/file_7.jpg"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resolver = resolver_for(&server, "123:abc");
        let url = resolver.resolve_url("photo-1").await;

        assert_eq!(url, Some(format!("{}/file/bot123:abc/photos/file_7.jpg", server.uri())));
    }

    #[tokio::test]
    async fn test_error_response_resolves_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: invalid file_id"
            })))
            .mount(&server)
            .await;

        let resolver = resolver_for(&server, "123:abc");
        assert_eq!(resolver.resolve_url("bogus").await, None);
    }

    #[tokio::test]
    async fn test_missing_file_path_resolves_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": { "file_id": "photo-1" }
            })))
            .mount(&server)
            .await;

        let resolver = resolver_for(&server, "123:abc");
        assert_eq!(resolver.resolve_url("photo-1").await, None);
    }

    #[tokio::test]
    async fn test_malformed_body_resolves_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let resolver = resolver_for(&server, "123:abc");
        assert_eq!(resolver.resolve_url("photo-1").await, None);
    }

    #[tokio::test]
    async fn test_without_token_no_request_is_made() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let resolver = resolver_for(&server, "");
        assert_eq!(resolve_photo(&resolver, Some("photo-1")).await, None);
    }

    #[tokio::test]
    async fn test_resolve_photo_skips_empty_reference() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let resolver = resolver_for(&server, "123:abc");
        assert_eq!(resolve_photo(&resolver, None).await, None);
        assert_eq!(resolve_photo(&resolver, Some("")).await, None);
    }
}
