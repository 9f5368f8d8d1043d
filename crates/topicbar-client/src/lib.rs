//! Kafka UI REST client.
//!
//! Talks to the Kafka UI server's `/api` endpoints:
//!
//! | call | endpoint |
//! |---|---|
//! | `auth_info` | `GET /api/authorization` |
//! | `list_topics` | `GET /api/clusters/{cluster}/topics` (all pages) |
//! | `delete_topic` | `DELETE /api/clusters/{cluster}/topics/{topic}` |
//! | `clear_messages` | `DELETE /api/clusters/{cluster}/topics/{topic}/messages` |
//!
//! Topic listings go through an optional `TopicCache`; batch actions
//! invalidate it.

use futures::future::BoxFuture;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use topicbar_core::{topic_keys, ClusterName, ConfigError, RemoteError, ServerConfig, Topic, TopicName};
use topicbar_engine::{TopicAdmin, TopicCache};
use topicbar_rbac::AuthenticationInfo;

/// Page size used when walking the topic list.
const TOPICS_PER_PAGE: u32 = 100;

/// Client construction errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Build(String),
}

#[derive(Debug, Clone)]
struct Auth {
    username: String,
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TopicsPage {
    #[serde(default)]
    page_count: u32,
    #[serde(default)]
    topics: Vec<Topic>,
}

/// REST client for one Kafka UI server.
#[derive(Clone)]
pub struct KafkaUiClient {
    inner: reqwest::Client,
    base_url: Url,
    auth: Option<Auth>,
    timeout: Duration,
    cache: Option<Arc<TopicCache>>,
}

impl KafkaUiClient {
    /// Create a client from server settings.
    pub fn new(config: &ServerConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url()?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl(config.url.clone()).into());
        }

        let timeout = Duration::from_secs(config.timeout_secs);
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        let auth = config.username.clone().map(|username| Auth {
            username,
            password: config.password.clone(),
        });

        Ok(Self {
            inner,
            base_url,
            auth,
            timeout,
            cache: None,
        })
    }

    /// Serve topic listings through `cache`.
    pub fn with_cache(mut self, cache: Arc<TopicCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL for `/api/{segments...}`. Segments are percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteError::Transport(format!("Invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.inner.request(method, url);
        match &self.auth {
            Some(auth) => builder.basic_auth(&auth.username, auth.password.as_ref()),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RemoteError> {
        tracing::debug!("GET {}", url);
        let response = send(self.request(Method::GET, url), self.timeout).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    /// The signed-in user's permissions.
    pub async fn auth_info(&self) -> Result<AuthenticationInfo, RemoteError> {
        self.get_json(self.endpoint(&["authorization"])?).await
    }

    /// Every topic of `cluster`, internal ones included.
    pub async fn list_topics(&self, cluster: &ClusterName) -> Result<Vec<Topic>, RemoteError> {
        let key = topic_keys::list(cluster);
        if let Some(topics) = self.cache.as_ref().and_then(|c| c.get(&key)) {
            tracing::debug!("Topic list of '{}' served from cache", cluster);
            return Ok(topics);
        }

        let mut topics = Vec::new();
        let mut page = 1;
        loop {
            let mut url = self.endpoint(&["clusters", cluster.as_ref(), "topics"])?;
            url.query_pairs_mut()
                .append_pair("page", &page.to_string())
                .append_pair("perPage", &TOPICS_PER_PAGE.to_string())
                .append_pair("showInternal", "true");

            let batch: TopicsPage = self.get_json(url).await?;
            topics.extend(batch.topics);
            if page >= batch.page_count {
                break;
            }
            page += 1;
        }

        tracing::info!("Listed {} topics in '{}'", topics.len(), cluster);
        if let Some(cache) = &self.cache {
            cache.put(key, topics.clone());
        }
        Ok(topics)
    }

    fn delete(&self, segments: &[&str]) -> BoxFuture<'static, Result<(), RemoteError>> {
        let timeout = self.timeout;
        let request = self
            .endpoint(segments)
            .map(|url| {
                tracing::debug!("DELETE {}", url);
                self.request(Method::DELETE, url)
            });
        Box::pin(async move {
            send(request?, timeout).await?;
            Ok(())
        })
    }
}

impl TopicAdmin for KafkaUiClient {
    fn delete_topic(
        &self,
        cluster: &ClusterName,
        topic: &TopicName,
    ) -> BoxFuture<'static, Result<(), RemoteError>> {
        self.delete(&["clusters", cluster.as_ref(), "topics", topic.as_ref()])
    }

    fn clear_messages(
        &self,
        cluster: &ClusterName,
        topic: &TopicName,
    ) -> BoxFuture<'static, Result<(), RemoteError>> {
        self.delete(&[
            "clusters",
            cluster.as_ref(),
            "topics",
            topic.as_ref(),
            "messages",
        ])
    }
}

/// Send a request, mapping transport failures and non-success statuses.
async fn send(request: RequestBuilder, timeout: Duration) -> Result<Response, RemoteError> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            RemoteError::Timeout { duration: timeout }
        } else {
            RemoteError::Transport(e.to_string())
        }
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(status_error(status.as_u16(), &body))
}

/// Error for a non-success response, preferring the server's message.
fn status_error(status: u16, body: &str) -> RemoteError {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| body.trim().to_string());

    RemoteError::Http { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> KafkaUiClient {
        KafkaUiClient::new(&ServerConfig {
            url: url.to_string(),
            ..ServerConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = client("http://localhost:8080");
        let url = client
            .endpoint(&["clusters", "local", "topics", "a b/c", "messages"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/clusters/local/topics/a%20b%2Fc/messages"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client("https://ops.example.com/kafka-ui/");
        let url = client.endpoint(&["authorization"]).unwrap();
        assert_eq!(url.as_str(), "https://ops.example.com/kafka-ui/api/authorization");
    }

    #[test]
    fn test_rejects_non_base_url() {
        let err = KafkaUiClient::new(&ServerConfig {
            url: "mailto:ops@example.com".to_string(),
            ..ServerConfig::default()
        })
        .err()
        .unwrap();
        assert!(matches!(err, ClientError::Config(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_status_error_prefers_server_message() {
        assert_eq!(
            status_error(403, r#"{"code": 5000, "message": "Access denied"}"#),
            RemoteError::Http {
                status: 403,
                message: "Access denied".to_string()
            }
        );
        assert_eq!(
            status_error(502, "Bad Gateway\n"),
            RemoteError::Http {
                status: 502,
                message: "Bad Gateway".to_string()
            }
        );
    }

    #[test]
    fn test_decode_topics_page() {
        let page: TopicsPage = serde_json::from_str(
            r#"{"pageCount": 2, "topics": [{"name": "orders", "partitionCount": 3}]}"#,
        )
        .unwrap();
        assert_eq!(page.page_count, 2);
        assert_eq!(page.topics[0].name, TopicName::from("orders"));
    }

    #[tokio::test]
    async fn test_list_topics_served_from_cache() {
        let cache = Arc::new(TopicCache::new());
        let cluster = ClusterName::from("local");
        cache.put(topic_keys::list(&cluster), vec![Topic::new("orders")]);

        // Nothing listens here; a cache miss would fail.
        let client = client("http://127.0.0.1:9").with_cache(cache);
        let topics = client.list_topics(&cluster).await.unwrap();
        assert_eq!(topics, vec![Topic::new("orders")]);
    }
}
