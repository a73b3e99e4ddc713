use super::rubric::{Check, Rubric};
use crate::types::scoring::{Category, ScoreComponent};
use crate::types::signals::ContentSignals;

pub fn content_score(signals: &ContentSignals) -> ScoreComponent {
    let mut rubric = Rubric::new(Category::ContentQuality);
    rubric
        .check(
            signals.has_resources,
            Check {
                key: "resources",
                points: 5.0,
                pass_detail: "Quality resources present",
                fail_detail: "Missing or low-quality resources",
                recommendation: "Add high-quality resources and documentation",
            },
        )
        .check(
            signals.recent_content,
            Check {
                key: "freshness",
                points: 5.0,
                pass_detail: "Content is up to date",
                fail_detail: "Content needs updating",
                recommendation: "Update content regularly",
            },
        )
        .check(
            signals.expert_content,
            Check {
                key: "expertise",
                points: 5.0,
                pass_detail: "Expert content present",
                fail_detail: "Missing expert content",
                recommendation: "Add expert-level content",
            },
        );
    rubric.finish()
}
