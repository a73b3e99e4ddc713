use crate::error::{Result, TrustError};
use crate::types::config::TrustConfig;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use tokio::task::JoinSet;

/// Well-known paths that answered 200, in probe order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathProbe {
    pub urls: Vec<String>,
}

impl PathProbe {
    pub fn found(&self) -> bool {
        !self.urls.is_empty()
    }
}

/// Prefixes `https://` when the input has no scheme. Only http and https
/// targets are accepted.
pub fn normalize_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TrustError::InvalidUrl("empty url".to_string()));
    }
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let url = Url::parse(&candidate)
        .map_err(|e| TrustError::InvalidUrl(format!("{trimmed}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(TrustError::InvalidUrl(format!(
            "{trimmed}: unsupported scheme '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(TrustError::InvalidUrl(format!("{trimmed}: missing host")));
    }
    Ok(url)
}

/// Root of the site on the default https port.
fn https_root(url: &Url) -> std::result::Result<Url, String> {
    let mut https = url.clone();
    if https.set_scheme("https").is_err() || https.set_port(None).is_err() {
        return Err(format!("cannot build https url for {url}"));
    }
    https.set_path("/");
    https.set_query(None);
    https.set_fragment(None);
    Ok(https)
}

/// Shared HTTP client for every probe of one analysis run.
#[derive(Clone)]
pub struct Prober {
    client: Client,
}

impl Prober {
    pub fn new(cfg: &TrustConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(cfg.http.user_agent.clone())
            .timeout(cfg.timeout())
            .build()?;
        Ok(Self { client })
    }

    /// HEADs every path concurrently. A failed or timed-out probe counts as
    /// not found.
    pub async fn probe_paths(&self, base: &Url, paths: &[String]) -> PathProbe {
        let mut tasks = JoinSet::new();
        for (index, path) in paths.iter().enumerate() {
            let url = match base.join(path) {
                Ok(url) => url,
                Err(e) => {
                    tracing::debug!(path = %path, error = %e, "skipping unjoinable probe path");
                    continue;
                }
            };
            let client = self.client.clone();
            tasks.spawn(async move {
                let hit = match client.head(url.clone()).send().await {
                    Ok(response) => response.status() == StatusCode::OK,
                    Err(e) => {
                        tracing::debug!(url = %url, error = %e, "probe failed");
                        false
                    }
                };
                tracing::debug!(url = %url, hit, "probe finished");
                (index, url, hit)
            });
        }

        let mut hits = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, url, true)) => hits.push((index, url.to_string())),
                Ok(_) => {}
                Err(e) => tracing::warn!(error = %e, "probe task aborted"),
            }
        }
        hits.sort_by_key(|(index, _)| *index);

        PathProbe {
            urls: hits.into_iter().map(|(_, url)| url).collect(),
        }
    }

    /// GETs a page body. Non-200 responses and transport errors come back as
    /// an error message.
    pub async fn fetch_page(&self, url: &Url) -> std::result::Result<String, String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if response.status() != StatusCode::OK {
            return Err(format!("{url} returned {}", response.status()));
        }
        response.text().await.map_err(|e| e.to_string())
    }

    pub async fn head(&self, url: &Url) -> std::result::Result<HeaderMap, String> {
        self.client
            .head(url.clone())
            .send()
            .await
            .map(|response| response.headers().clone())
            .map_err(|e| e.to_string())
    }

    /// Any response over HTTPS means the certificate chain validated.
    pub async fn https_reachable(&self, url: &Url) -> std::result::Result<(), String> {
        self.client
            .get(https_root(url)?)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
