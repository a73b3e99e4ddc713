use super::catalog::{ReviewPlatform, REVIEW_PLATFORMS};
use crate::types::scoring::{DiversityResult, ReviewSource, Score};

/// Total catalog weight at which the weighted half of the score saturates.
pub const WEIGHT_SATURATION: Score = 10.0;
/// Matched-link count at which the variety half of the score saturates.
pub const SOURCE_SATURATION: Score = 5.0;

/// Matches page links against the review platform catalog and scores how
/// many, and how heavily weighted, review sources the page exposes.
pub fn analyze_review_diversity<S: AsRef<str>>(hrefs: &[S], script_srcs: &[S]) -> DiversityResult {
    let catalog: &[ReviewPlatform] = &REVIEW_PLATFORMS;
    let mut result = DiversityResult::default();

    for href in hrefs {
        let href = href.as_ref().to_lowercase();
        for platform in catalog.iter().filter(|platform| platform.matches(&href)) {
            result.review_sources.push(ReviewSource {
                platform: platform.name.to_string(),
                url: href.clone(),
                weight: platform.weight,
            });
            if platform.is_primary() {
                result.primary_sources.insert(platform.name.to_string());
            } else {
                result.secondary_sources.insert(platform.name.to_string());
            }
        }
    }

    for src in script_srcs {
        let src = src.as_ref().to_lowercase();
        for platform in catalog.iter().filter(|platform| src.contains(platform.domain)) {
            result.embedded_widgets.insert(platform.name.to_string());
        }
    }

    result.total_sources = result.review_sources.len();
    let total_weight: u32 = result
        .review_sources
        .iter()
        .map(|source| u32::from(source.weight))
        .sum();
    result.diversity_score = diversity_score(total_weight, result.total_sources);

    tracing::debug!(
        total_sources = result.total_sources,
        total_weight,
        diversity_score = result.diversity_score,
        "review diversity computed"
    );
    result
}

/// Mean of two saturating half-metrics, each on a 0-10 scale.
pub fn diversity_score(total_weight: u32, total_sources: usize) -> Score {
    if total_sources == 0 {
        return 0.0;
    }
    let weighted = (Score::from(total_weight) / WEIGHT_SATURATION).min(1.0) * 10.0;
    let variety = (total_sources as Score / SOURCE_SATURATION).min(1.0) * 10.0;
    (weighted + variety) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_SCRIPTS: [&str; 0] = [];

    #[test]
    fn empty_page_scores_zero() {
        let result = analyze_review_diversity(&NO_SCRIPTS, &NO_SCRIPTS);
        assert_eq!(result.diversity_score, 0.0);
        assert_eq!(result.total_sources, 0);
        assert!(result.primary_sources.is_empty());
        assert!(result.error.is_none());
    }

    #[test]
    fn three_sources_weighted_five_four_three_score_eight() {
        let hrefs = [
            "https://www.trustpilot.com/review/example.com",
            "https://www.yelp.com/biz/example",
            "https://www.sitejabber.com/reviews/example.com",
        ];
        let result = analyze_review_diversity(&hrefs, &NO_SCRIPTS);

        assert_eq!(result.total_sources, 3);
        let weights: Vec<u8> = result.review_sources.iter().map(|s| s.weight).collect();
        assert_eq!(weights, vec![5, 4, 3]);
        assert!((result.diversity_score - 8.0).abs() < 1e-9);
        assert!(result.primary_sources.contains("trustpilot"));
        assert!(result.primary_sources.contains("yelp"));
        assert!(result.secondary_sources.contains("sitejabber"));
    }

    #[test]
    fn repeated_platform_counts_each_link_but_classifies_once() {
        let hrefs = [
            "https://www.trustpilot.com/review/example.com",
            "https://uk.trustpilot.com/review/example.com",
        ];
        let result = analyze_review_diversity(&hrefs, &NO_SCRIPTS);
        assert_eq!(result.total_sources, 2);
        assert_eq!(result.primary_sources.len(), 1);
        assert_eq!(result.distinct_platforms(), 1);
    }

    #[test]
    fn hrefs_are_lowercased_before_matching() {
        let hrefs = ["HTTPS://WWW.YELP.COM/BIZ/Example"];
        let result = analyze_review_diversity(&hrefs, &NO_SCRIPTS);
        assert_eq!(result.review_sources[0].url, "https://www.yelp.com/biz/example");
    }

    #[test]
    fn scripts_detect_embedded_widgets_by_domain() {
        let scripts = [
            "https://widget.trustpilot.com/bootstrap/v5/tp.widget.bootstrap.min.js",
            "https://staticw2.yotpo.com/loader.js",
            "https://cdn.example.com/app.js",
        ];
        let result = analyze_review_diversity(&NO_SCRIPTS, &scripts);
        assert_eq!(result.total_sources, 0);
        assert_eq!(result.diversity_score, 0.0);
        assert!(result.embedded_widgets.contains("trustpilot"));
        assert!(result.embedded_widgets.contains("yotpo"));
        assert_eq!(result.embedded_widgets.len(), 2);
    }

    #[test]
    fn unrelated_links_are_ignored() {
        let hrefs = ["/about", "https://example.com/blog", "mailto:hi@example.com"];
        let result = analyze_review_diversity(&hrefs, &NO_SCRIPTS);
        assert_eq!(result.total_sources, 0);
    }

    #[test]
    fn score_saturates_and_never_decreases() {
        let mut previous = 0.0;
        for sources in 0..8usize {
            let score = diversity_score(3 * sources as u32, sources);
            assert!(score >= previous);
            assert!((0.0..=10.0).contains(&score));
            previous = score;
        }
        assert_eq!(diversity_score(50, 12), 10.0);

        let mut previous = 0.0;
        for weight in 0..20u32 {
            let score = diversity_score(weight, 2);
            assert!(score >= previous);
            previous = score;
        }
    }
}
