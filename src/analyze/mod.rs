pub mod business;
pub mod catalog;
pub mod content;
pub mod diversity;
pub mod mapping;
pub mod reviews;
mod rubric;
pub mod security;
pub mod transparency;

use crate::types::scoring::{Category, Score, ScoreComponent, TrustLevel, TrustScoreResult};
use crate::types::signals::{
    BusinessSignals, ContentSignals, ReviewSignals, SecuritySignals, SignalSet,
    TransparencySignals,
};
use std::collections::BTreeMap;

pub fn calculate_total_score(
    security: &SecuritySignals,
    reviews: &ReviewSignals,
    business: &BusinessSignals,
    content: &ContentSignals,
    transparency: &TransparencySignals,
) -> TrustScoreResult {
    let components = BTreeMap::from([
        (Category::TechnicalSecurity, security::technical_score(security)),
        (Category::ReviewsRatings, reviews::review_score(reviews)),
        (
            Category::BusinessVerification,
            business::business_verification_score(business),
        ),
        (Category::ContentQuality, content::content_score(content)),
        (
            Category::Transparency,
            transparency::transparency_score(transparency),
        ),
    ]);

    let total: Score = components.values().map(|component| component.score).sum();
    let max_possible: Score = components
        .values()
        .map(|component| component.max_score)
        .sum();
    let total_score = normalize(total, max_possible);
    let trust_level = TrustLevel::classify(total_score);

    // BTreeMap iteration follows Category declaration order.
    let recommendations = components
        .values()
        .flat_map(|component: &ScoreComponent| component.recommendations.iter().cloned())
        .collect::<Vec<_>>();

    tracing::info!(
        total,
        max_possible,
        total_score,
        trust_level = trust_level.label(),
        "trust score calculated"
    );

    TrustScoreResult {
        total_score,
        trust_level,
        components,
        recommendations,
        review_diversity: None,
    }
}

pub fn score_signals(signals: &SignalSet) -> TrustScoreResult {
    calculate_total_score(
        &signals.security,
        &signals.reviews,
        &signals.business,
        &signals.content,
        &signals.transparency,
    )
}

fn normalize(total: Score, max_possible: Score) -> Score {
    if max_possible <= 0.0 {
        return 0.0;
    }
    (total / max_possible * 100.0).clamp(0.0, 100.0)
}
