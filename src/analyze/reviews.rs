use super::rubric::{Check, Rubric};
use crate::types::scoring::{Category, ScoreComponent};
use crate::types::signals::ReviewSignals;

pub fn review_score(signals: &ReviewSignals) -> ScoreComponent {
    let mut rubric = Rubric::new(Category::ReviewsRatings);
    rubric
        .check(
            signals.has_reviews,
            Check {
                key: "review_presence",
                points: 5.0,
                pass_detail: "Has user reviews",
                fail_detail: "No user reviews found",
                recommendation: "Implement a review system",
            },
        )
        .check(
            signals.recent_reviews,
            Check {
                key: "freshness",
                points: 5.0,
                pass_detail: "Has recent reviews",
                fail_detail: "No recent reviews",
                recommendation: "Encourage recent reviews",
            },
        )
        .check(
            signals.diverse_reviews,
            Check {
                key: "diversity",
                points: 5.0,
                pass_detail: "Has diverse reviews",
                fail_detail: "Limited review diversity",
                recommendation: "Encourage reviews from diverse sources",
            },
        );
    rubric.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_missing_check_adds_a_recommendation() {
        let component = review_score(&ReviewSignals {
            has_reviews: true,
            ..ReviewSignals::default()
        });
        assert_eq!(component.score, 5.0);
        assert_eq!(
            component.recommendations,
            vec![
                "Encourage recent reviews".to_string(),
                "Encourage reviews from diverse sources".to_string(),
            ]
        );
        assert_eq!(component.details["review_presence"], "Has user reviews");
        assert_eq!(component.details["diversity"], "Limited review diversity");
    }
}
