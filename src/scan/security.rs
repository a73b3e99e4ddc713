use super::http::{PathProbe, Prober};
use crate::types::config::ProbePaths;
use crate::types::signals::SslStatus;
use reqwest::header::HeaderMap;
use reqwest::Url;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SslObservation {
    pub status: SslStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderObservation {
    pub has_hsts: bool,
    pub has_xframe: bool,
    pub has_content_security: bool,
    pub has_xss_protection: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HeaderObservation {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            has_hsts: headers.contains_key("strict-transport-security"),
            has_xframe: headers.contains_key("x-frame-options"),
            has_content_security: headers.contains_key("content-security-policy"),
            has_xss_protection: headers.contains_key("x-xss-protection"),
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SecurityObservation {
    pub ssl: SslObservation,
    pub headers: HeaderObservation,
    pub privacy_policy: PathProbe,
    pub terms: PathProbe,
    pub contact: PathProbe,
}

pub async fn collect_security(prober: &Prober, url: &Url, paths: &ProbePaths) -> SecurityObservation {
    let (ssl, headers, privacy_policy, terms, contact) = tokio::join!(
        check_ssl(prober, url),
        check_headers(prober, url),
        prober.probe_paths(url, &paths.privacy),
        prober.probe_paths(url, &paths.terms),
        prober.probe_paths(url, &paths.contact),
    );

    SecurityObservation {
        ssl,
        headers,
        privacy_policy,
        terms,
        contact,
    }
}

async fn check_ssl(prober: &Prober, url: &Url) -> SslObservation {
    match prober.https_reachable(url).await {
        Ok(()) => SslObservation {
            status: SslStatus::Valid,
            error: None,
        },
        Err(error) => {
            tracing::warn!(url = %url, error = %error, "https check failed");
            SslObservation {
                status: SslStatus::Invalid,
                error: Some(error),
            }
        }
    }
}

async fn check_headers(prober: &Prober, url: &Url) -> HeaderObservation {
    match prober.head(url).await {
        Ok(headers) => HeaderObservation::from_headers(&headers),
        Err(error) => {
            tracing::warn!(url = %url, error = %error, "security header check failed");
            HeaderObservation::failed(error)
        }
    }
}
