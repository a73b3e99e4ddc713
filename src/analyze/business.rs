use super::rubric::{Check, Rubric};
use crate::types::scoring::{Category, ScoreComponent};
use crate::types::signals::BusinessSignals;

pub fn business_verification_score(signals: &BusinessSignals) -> ScoreComponent {
    let mut rubric = Rubric::new(Category::BusinessVerification);
    rubric
        .check(
            signals.has_credentials,
            Check {
                key: "credentials",
                points: 5.0,
                pass_detail: "Business credentials verified",
                fail_detail: "Missing business credentials",
                recommendation: "Add business verification credentials",
            },
        )
        .check(
            signals.contact_verified,
            Check {
                key: "contact",
                points: 5.0,
                pass_detail: "Contact information verified",
                fail_detail: "Contact information not verified",
                recommendation: "Add verified contact information",
            },
        );
    rubric.finish()
}
