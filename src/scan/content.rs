use super::html::extract_dates;
use super::http::{PathProbe, Prober};
use crate::types::config::ProbePaths;
use chrono::{Duration, NaiveDate, Utc};
use reqwest::Url;
use serde::Serialize;

/// Blog dates within this many days count as recent.
pub const FRESHNESS_WINDOW_DAYS: i64 = 180;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentFreshness {
    #[default]
    NoBlog,
    Unavailable,
    Undated,
    Stale,
    Recent,
}

impl ContentFreshness {
    pub fn describe(self) -> &'static str {
        match self {
            ContentFreshness::NoBlog => "No blog found",
            ContentFreshness::Unavailable => "Blog could not be fetched",
            ContentFreshness::Undated => "No dated content found",
            ContentFreshness::Stale => "Content is outdated",
            ContentFreshness::Recent => "Recent content found",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentObservation {
    pub documentation: PathProbe,
    pub blog: PathProbe,
    pub freshness: ContentFreshness,
    pub expertise: PathProbe,
}

pub async fn collect_content(prober: &Prober, url: &Url, paths: &ProbePaths) -> ContentObservation {
    let (documentation, blog, expertise) = tokio::join!(
        prober.probe_paths(url, &paths.documentation),
        prober.probe_paths(url, &paths.blog),
        prober.probe_paths(url, &paths.expertise),
    );

    let freshness = match blog.urls.first().map(|first| Url::parse(first)) {
        None => ContentFreshness::NoBlog,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "blog url unparsable");
            ContentFreshness::Unavailable
        }
        Some(Ok(blog_url)) => match prober.fetch_page(&blog_url).await {
            Ok(html) => assess_freshness(&html, Utc::now().date_naive()),
            Err(error) => {
                tracing::warn!(url = %blog_url, error = %error, "blog fetch failed");
                ContentFreshness::Unavailable
            }
        },
    };

    ContentObservation {
        documentation,
        blog,
        freshness,
        expertise,
    }
}

/// Recent when any date on the page falls inside the freshness window and is
/// at most one day ahead of `today`.
pub fn assess_freshness(html: &str, today: NaiveDate) -> ContentFreshness {
    let dates = extract_dates(html);
    if dates.is_empty() {
        return ContentFreshness::Undated;
    }
    let earliest = today - Duration::days(FRESHNESS_WINDOW_DAYS);
    let latest = today + Duration::days(1);
    if dates.iter().any(|date| (earliest..=latest).contains(date)) {
        ContentFreshness::Recent
    } else {
        ContentFreshness::Stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn recent_post_inside_window() {
        let html = r#"<article><time datetime="2026-09-01">Sep 1, 2026</time></article>"#;
        assert_eq!(assess_freshness(html, day(2026, 10, 17)), ContentFreshness::Recent);
    }

    #[test]
    fn old_posts_are_stale() {
        let html = "<p>Published 2021-02-03</p><p>January 4, 2022</p>";
        assert_eq!(assess_freshness(html, day(2026, 10, 17)), ContentFreshness::Stale);
    }

    #[test]
    fn far_future_dates_do_not_count() {
        let html = "<p>Event on 2027-05-01</p>";
        assert_eq!(assess_freshness(html, day(2026, 10, 17)), ContentFreshness::Stale);
    }

    #[test]
    fn undated_blog() {
        assert_eq!(
            assess_freshness("<p>hello</p>", day(2026, 10, 17)),
            ContentFreshness::Undated
        );
    }

    #[test]
    fn freshness_window_boundary_is_inclusive() {
        let today = day(2026, 10, 17);
        let edge = today - Duration::days(FRESHNESS_WINDOW_DAYS);
        let html = format!("<time>{}</time>", edge.format("%Y-%m-%d"));
        assert_eq!(assess_freshness(&html, today), ContentFreshness::Recent);
    }
}
