//! HTTP/JSON catalog source.
//!
//! Issues a single `GET` against a product endpoint and decodes the body as
//! a JSON array of [`Product`]s.  No query parameters, no auth headers, and
//! no timeout: the request waits for the network stack to resolve or fail.

use tracing::debug;

use super::{CatalogSource, FetchError, Product};

/// Public catalog used when no endpoint is given on the command line.
pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// A catalog served as JSON over HTTP.
pub struct HttpSource {
    client: reqwest::Client,
    /// The endpoint to fetch.
    pub url: String,
}

impl HttpSource {
    /// Create a source for `url` with a fresh HTTP client.
    ///
    /// Fails only if the TLS backend cannot be initialised.
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(url, client))
    }

    /// Create a source that sends its request through `client`.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Decode a response body into the catalog.
    ///
    /// This is a pure function (no I/O) so that tests can exercise the
    /// decoding rules without a server.
    pub fn parse_body(body: &[u8]) -> Result<Vec<Product>, FetchError> {
        Ok(serde_json::from_slice(body)?)
    }
}

impl CatalogSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<Product>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        let body = response.bytes().await.map_err(FetchError::Network)?;
        debug!(url = %self.url, bytes = body.len(), "catalog body received");
        Self::parse_body(&body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{local_source, spawn_http_stub, StubResponse};

    const TWO_PRODUCTS: &str = r#"[
        {"id":1,"title":"Red Shirt","price":19.5,"image":"u1","category":"clothing"},
        {"id":2,"title":"Blue Hat","price":9,"image":"u2","category":"clothing"}
    ]"#;

    #[test]
    fn parses_product_array_in_order() {
        let products = HttpSource::parse_body(TWO_PRODUCTS.as_bytes()).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].title, "Red Shirt");
        assert_eq!(products[1].id, 2);
        assert_eq!(products[1].price, Some(9.0));
    }

    #[test]
    fn empty_array_is_an_empty_catalog() {
        let products = HttpSource::parse_body(b"[]").unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn object_instead_of_array_is_a_parse_failure() {
        let err = HttpSource::parse_body(br#"{"id":1,"title":"x"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn invalid_json_is_a_parse_failure() {
        let err = HttpSource::parse_body(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn name_returns_url() {
        let src = HttpSource::new("http://example.com/products").unwrap();
        assert_eq!(src.name(), "http://example.com/products");
    }

    #[tokio::test]
    async fn fetch_returns_catalog_on_success() {
        let (url, _server) = spawn_http_stub(StubResponse::ok(TWO_PRODUCTS));
        let src = local_source(url);

        let products = src.fetch().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].title, "Blue Hat");
    }

    #[tokio::test]
    async fn fetch_maps_server_error_to_http_status() {
        let (url, _server) = spawn_http_stub(StubResponse::status(500, "Internal Server Error"));
        let src = local_source(url);

        let err = src.fetch().await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::HttpStatus(code) if code == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn fetch_maps_bad_body_to_parse_failure() {
        let (url, _server) = spawn_http_stub(StubResponse::ok("not json"));
        let src = local_source(url);

        let err = src.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn fetch_maps_refused_connection_to_network_failure() {
        // Bind then drop to get a port nobody is listening on.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let src = local_source(format!("http://127.0.0.1:{port}/products"));

        let err = src.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
