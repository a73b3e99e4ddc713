use super::scoring::TrustScoreResult;
use crate::scan::SiteObservations;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TrustReport {
    pub target: String,
    pub generated_at: String,
    pub trust_score: TrustScoreResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_profiles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<SiteObservations>,
}

impl TrustReport {
    pub fn new(target: impl Into<String>, trust_score: TrustScoreResult) -> Self {
        Self {
            target: target.into(),
            generated_at: Utc::now().to_rfc3339(),
            trust_score,
            social_profiles: Vec::new(),
            observations: None,
        }
    }

    pub fn with_observations(mut self, observations: SiteObservations) -> Self {
        self.social_profiles = observations.social.social_profiles.clone();
        self.observations = Some(observations);
        self
    }
}
