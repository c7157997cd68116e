use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{redirect, Client, StatusCode};
use tracing::debug;

const REDIRECT_LIMIT: usize = 10;

/// Source of page text and image bytes.
///
/// The scraper and image fetcher only talk to this trait, so tests can serve
/// canned pages without a network.
#[async_trait]
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_text(&self, url: &str) -> Result<String>;

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        Ok(Self {
            client: build_client(user_agent)?,
        })
    }
}

/// Build the shared client: bounded redirects, compression, fixed headers.
fn build_client(user_agent: &str) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,image/*;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.8"));
    let ua = HeaderValue::from_str(user_agent)
        .map_err(|e| Error::Config(format!("invalid user agent {user_agent:?}: {e}")))?;
    headers.insert(USER_AGENT, ua);

    Client::builder()
        .default_headers(headers)
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()
        .map_err(|e| Error::Config(format!("Failed to build client: {}", e)))
}

/// Reject non-success responses.
pub(crate) fn validate_status(url: &str, status: StatusCode) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    Err(Error::Status {
        url: url.to_string(),
        status: status.as_u16(),
    })
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::network(url, e))?;
        validate_status(url, resp.status())?;
        let text = resp.text().await.map_err(|e| Error::network(url, e))?;
        debug!("fetched {} bytes of text from {}", text.len(), url);
        Ok(text)
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::network(url, e))?;
        validate_status(url, resp.status())?;
        let bytes = resp.bytes().await.map_err(|e| Error::network(url, e))?;
        debug!("fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
