use anyhow::{Context, Result};
use async_trait::async_trait;

/// Page fetch seam. The pipeline only ever asks for a page's text; tests
/// substitute fixture-backed sources.
#[async_trait(?Send)]
pub trait PageSource {
    async fn get_text(&self, url: &str) -> Result<String>;
}

/// Thin fetch collaborator: one client, sequential GETs, fatal on any
/// transport error. No retry and no backoff; a failed fetch aborts the run
/// before either sink is written.
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl PageSource for Fetcher {
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed to fetch {}", url))?;
        let response = response
            .error_for_status()
            .with_context(|| format!("bad status fetching {}", url))?;
        response
            .text()
            .await
            .with_context(|| format!("failed to read body of {}", url))
    }
}
