//! Feed fetcher: downloads the RSS document and hands back its newest item.

use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::error::{AppError, Result};

// Shared client so connections are pooled across requests. No timeout is
// set, fetch duration is bounded by reqwest defaults only.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client")
});

/// Top-level `<rss>` document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Rss {
    pub channel: Channel,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Channel {
    pub title: String,
    // Prefixes are dropped on deserialization, so `<atom:link rel="self"/>`
    // lands here next to the plain `<link>`.
    #[serde(rename = "link")]
    links: Vec<LinkElement>,
    pub description: String,
    /// Feed order, newest first.
    #[serde(rename = "item")]
    pub items: Vec<Item>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LinkElement {
    #[serde(rename = "$text")]
    text: String,
}

impl Channel {
    /// First non-empty `<link>` of the channel.
    pub fn link(&self) -> &str {
        self.links
            .iter()
            .map(|l| l.text.trim())
            .find(|l| !l.is_empty())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Item {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Kept as the raw string from the feed.
    #[serde(rename = "pubDate")]
    pub pub_date: String,
    /// HTML body from `<content:encoded>`, matched by local name.
    #[serde(rename = "encoded")]
    pub content_encoded: String,
}

impl Rss {
    /// The most recent item, which the feed lists first.
    pub fn latest_item(self) -> Result<Item> {
        self.channel
            .items
            .into_iter()
            .next()
            .ok_or(AppError::EmptyFeed)
    }
}

/// GETs `url` and returns the body. Anything other than 200 is rejected
/// before the body is read.
pub async fn fetch_feed_xml(url: &str) -> Result<String> {
    let response = CLIENT.get(url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(AppError::FetchError(format!(
            "received status code {}",
            status.as_u16()
        )));
    }

    response
        .text()
        .await
        .map_err(|e| AppError::FetchError(format!("error reading response body: {}", e)))
}

pub fn parse_feed(xml: &str) -> Result<Rss> {
    let rss: Rss = quick_xml::de::from_str(xml)?;
    Ok(rss)
}

/// Fetches the feed at `url` and returns its newest item.
pub async fn fetch_latest_item(url: &str) -> Result<Item> {
    let xml = fetch_feed_xml(url).await?;
    debug!(bytes = xml.len(), "Fetched feed");

    let rss = parse_feed(&xml)?;
    debug!(items = rss.channel.items.len(), title = %rss.channel.title, "Parsed feed");

    rss.latest_item()
}
