use crate::error::LoadError;
use crate::feed::loader::load_units_from_str;
use crate::feed::models::Unit;

/// HTTP client for the unit feed (native builds; the browser page fetches the
/// feed itself and hands the body to the wasm facade).
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the feed and return the raw body. Network errors and non-2xx
    /// statuses are fetch failures.
    pub async fn fetch_body(&self) -> Result<String, LoadError> {
        log::debug!("Fetching unit feed from {}", self.url);

        let response = self
            .http
            .get(&self.url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))
    }

    /// Fetch and normalize in one pass.
    pub async fn fetch_units(&self) -> Result<Vec<Unit>, LoadError> {
        let body = self.fetch_body().await?;
        load_units_from_str(&body).map_err(|e| {
            log::error!("Error fetching unit data: {}", e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // Serve exactly one canned HTTP response and return the feed URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/units", addr)
    }

    #[tokio::test]
    async fn test_fetch_units_success() {
        let url = serve_once(
            "200 OK",
            r#"[{"unit":"4B","bedbath":"2 Bed/1 Bath","rent":"4200"},{"unit":"5A","rent":"HPD"}]"#,
        )
        .await;

        let units = FeedClient::new(url).fetch_units().await.unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].id, "Unit 4B");
        assert_eq!(units[0].formatted_rent, "$4,200.00");
        assert_eq!(units[1].formatted_rent, "HPD");
    }

    #[tokio::test]
    async fn test_non_success_status_is_fetch_failure() {
        let url = serve_once("500 Internal Server Error", "oops").await;
        let err = FeedClient::new(url).fetch_units().await.unwrap_err();
        assert_eq!(err, LoadError::Status(500));
        assert!(err.is_fetch_failure());
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_failure() {
        let url = serve_once("200 OK", "<html>not json</html>").await;
        let err = FeedClient::new(url).fetch_units().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_failure() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = FeedClient::new(format!("http://{}/units", addr))
            .fetch_units()
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Fetch(_)));
    }
}
