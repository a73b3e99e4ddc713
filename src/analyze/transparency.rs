use super::rubric::{Check, Rubric};
use crate::types::scoring::{Category, ScoreComponent};
use crate::types::signals::TransparencySignals;

pub fn transparency_score(signals: &TransparencySignals) -> ScoreComponent {
    let mut rubric = Rubric::new(Category::Transparency);
    rubric
        .check(
            signals.has_privacy_policy,
            Check {
                key: "privacy",
                points: 5.0,
                pass_detail: "Clear privacy policy",
                fail_detail: "Missing privacy policy",
                recommendation: "Add clear privacy policy",
            },
        )
        .check(
            signals.has_terms,
            Check {
                key: "terms",
                points: 5.0,
                pass_detail: "Clear terms and conditions",
                fail_detail: "Missing terms and conditions",
                recommendation: "Add clear terms and conditions",
            },
        )
        .check(
            signals.clear_pricing,
            Check {
                key: "pricing",
                points: 5.0,
                pass_detail: "Clear pricing information",
                fail_detail: "Unclear pricing information",
                recommendation: "Add clear pricing information",
            },
        );
    rubric.finish()
}
