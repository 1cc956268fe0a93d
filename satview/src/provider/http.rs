//! HTTP client abstraction for testability

use super::types::ProviderError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Trait for asynchronous HTTP client operations.
///
/// Tile fetching only ever needs "give me the bytes at this URL", so that is
/// all the trait asks for. Mocks implement it in tests.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send;
}

/// Default User-Agent string for HTTP requests.
const DEFAULT_USER_AGENT: &str = concat!("satview/", env!("CARGO_PKG_VERSION"));

/// Async HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

impl AsyncReqwestClient {
    /// Creates a client.
    ///
    /// With `timeout` set to `None` a request may wait forever; a hung
    /// fetch then holds its slot in `Loading` until the server gives up.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ProviderError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(30))
            .tcp_nodelay(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            ProviderError::HttpError(format!("Failed to create async HTTP client: {}", e))
        })?;

        Ok(Self { client })
    }
}

/// The URL without its query string.
///
/// Tile URLs carry the access token as a query parameter, so only this form
/// may reach logs or error messages.
pub fn redact_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        let shown = redact_query(url);
        trace!(url = shown, "HTTP GET request starting");

        let response = match self.client.get(url).send().await {
            Ok(resp) => {
                debug!(
                    url = shown,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                let e = e.without_url();
                warn!(
                    url = shown,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                return Err(ProviderError::HttpError(format!(
                    "Request to {} failed: {}",
                    shown, e
                )));
            }
        };

        if !response.status().is_success() {
            warn!(
                url = shown,
                status = response.status().as_u16(),
                "HTTP error status"
            );
            return Err(ProviderError::HttpError(format!(
                "HTTP {} from {}",
                response.status(),
                shown
            )));
        }

        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = shown, bytes = bytes.len(), "HTTP response body read");
                Ok(bytes.to_vec())
            }
            Err(e) => {
                let e = e.without_url();
                warn!(url = shown, error = %e, "Failed to read response body");
                Err(ProviderError::HttpError(format!(
                    "Failed to read response: {}",
                    e
                )))
            }
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Mock async HTTP client that answers every request the same way and
    /// records the URLs it was asked for.
    #[derive(Clone)]
    pub struct MockAsyncHttpClient {
        pub response: Result<Vec<u8>, ProviderError>,
        pub requests: Arc<Mutex<Vec<String>>>,
    }

    impl MockAsyncHttpClient {
        pub fn new(response: Result<Vec<u8>, ProviderError>) -> Self {
            Self {
                response,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn requested(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl AsyncHttpClient for MockAsyncHttpClient {
        async fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
            self.requests.lock().unwrap().push(url.to_string());
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn test_mock_async_client_success() {
        let mock = MockAsyncHttpClient::new(Ok(vec![1, 2, 3, 4]));

        let result = mock.get("http://example.com").await;
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(mock.requested(), vec!["http://example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_async_client_error() {
        let error = ProviderError::HttpError("Test error".to_string());
        let mock = MockAsyncHttpClient::new(Err(error));

        let result = mock.get("http://example.com").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_redact_query_drops_everything_after_question_mark() {
        let url = "https://api.mapbox.com/v4/mapbox.satellite/2/1/1.jpg90?access_token=pk.x";
        assert_eq!(
            redact_query(url),
            "https://api.mapbox.com/v4/mapbox.satellite/2/1/1.jpg90"
        );
        assert_eq!(redact_query("http://example.com/a"), "http://example.com/a");
        assert_eq!(redact_query("http://example.com/?"), "http://example.com/");
    }

    /// Serves one canned response on a local port and returns the base URL.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_error_status_does_not_leak_access_token() {
        let base = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let client = AsyncReqwestClient::new(Some(Duration::from_secs(5))).unwrap();
        let url = format!(
            "{}/v4/mapbox.satellite/2/1/1.jpg90?access_token=pk.SECRET",
            base
        );

        let message = client.get(&url).await.unwrap_err().to_string();
        assert!(message.contains("500"), "{}", message);
        assert!(message.contains("/v4/mapbox.satellite/2/1/1.jpg90"), "{}", message);
        assert!(!message.contains("pk.SECRET"), "{}", message);
        assert!(!message.contains("access_token"), "{}", message);
    }

    #[tokio::test]
    async fn test_connect_failure_does_not_leak_access_token() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = AsyncReqwestClient::new(Some(Duration::from_secs(5))).unwrap();
        let url = format!(
            "http://{}/v4/mapbox.satellite/0/0/0.jpg90?access_token=pk.SECRET",
            addr
        );

        let message = client.get(&url).await.unwrap_err().to_string();
        assert!(!message.contains("pk.SECRET"), "{}", message);
    }

    #[test]
    fn test_reqwest_client_builds_with_and_without_timeout() {
        assert!(AsyncReqwestClient::new(None).is_ok());
        assert!(AsyncReqwestClient::new(Some(Duration::from_secs(5))).is_ok());
    }
}
