use super::http::{PathProbe, Prober};
use crate::types::config::ProbePaths;
use reqwest::Url;
use serde::Serialize;

const SOCIAL_PLATFORMS: [(&str, &[&str]); 5] = [
    ("facebook", &["facebook.com"]),
    ("twitter", &["twitter.com", "x.com"]),
    ("linkedin", &["linkedin.com"]),
    ("instagram", &["instagram.com"]),
    ("youtube", &["youtube.com"]),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialObservation {
    pub team: PathProbe,
    pub testimonials: PathProbe,
    pub social_profiles: Vec<String>,
}

pub async fn collect_social(prober: &Prober, url: &Url, paths: &ProbePaths) -> (PathProbe, PathProbe) {
    tokio::join!(
        prober.probe_paths(url, &paths.team),
        prober.probe_paths(url, &paths.testimonials),
    )
}

/// Social networks linked from the page, first occurrence order.
pub fn detect_social_profiles<S: AsRef<str>>(hrefs: &[S]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for href in hrefs {
        let Ok(url) = Url::parse(href.as_ref()) else {
            continue;
        };
        let Some(host) = url.host_str().map(str::to_lowercase) else {
            continue;
        };
        for (platform, domains) in SOCIAL_PLATFORMS {
            let on_platform = domains
                .iter()
                .any(|domain| host == *domain || host.ends_with(&format!(".{domain}")));
            if on_platform && !found.iter().any(|name| name == platform) {
                found.push(platform.to_string());
            }
        }
    }
    found
}
