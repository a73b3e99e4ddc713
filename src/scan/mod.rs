pub mod content;
pub mod html;
pub mod http;
pub mod security;
pub mod social;
#[cfg(test)]
pub(crate) mod stub;

use crate::analyze::diversity::analyze_review_diversity;
use crate::error::Result;
use crate::types::config::TrustConfig;
use crate::types::scoring::DiversityResult;
use content::ContentObservation;
use http::Prober;
use reqwest::Url;
use security::SecurityObservation;
use serde::Serialize;
use social::SocialObservation;

/// Everything the collectors saw for one site.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteObservations {
    pub url: String,
    pub security: SecurityObservation,
    pub social: SocialObservation,
    pub content: ContentObservation,
    pub review_diversity: DiversityResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_error: Option<String>,
}

/// Runs every collector against `url`. Individual probe failures are folded
/// into the observations; only failing to build the HTTP client is an error.
pub async fn collect(url: &Url, cfg: &TrustConfig) -> Result<SiteObservations> {
    let prober = Prober::new(cfg)?;
    let paths = cfg.probe_paths();
    tracing::info!(url = %url, "collecting trust signals");

    let (page, security, (team, testimonials), content) = tokio::join!(
        prober.fetch_page(url),
        security::collect_security(&prober, url, &paths),
        social::collect_social(&prober, url, &paths),
        content::collect_content(&prober, url, &paths),
    );

    let (review_diversity, social_profiles, page_error) = match page {
        Ok(body) => {
            let links = html::extract_links(&body);
            tracing::debug!(
                hrefs = links.hrefs.len(),
                scripts = links.script_srcs.len(),
                "landing page scanned"
            );
            (
                analyze_review_diversity(&links.hrefs, &links.script_srcs),
                social::detect_social_profiles(&links.hrefs),
                None,
            )
        }
        Err(error) => {
            tracing::warn!(url = %url, error = %error, "landing page fetch failed");
            (
                DiversityResult::failed(format!("Analysis failed: {error}")),
                Vec::new(),
                Some(error),
            )
        }
    };

    Ok(SiteObservations {
        url: url.to_string(),
        security,
        social: SocialObservation {
            team,
            testimonials,
            social_profiles,
        },
        content,
        review_diversity,
        page_error,
    })
}
