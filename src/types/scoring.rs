use serde::Serialize;
use std::collections::BTreeMap;

pub type Score = f64;

/// Trust dimensions with their fixed point budgets.
///
/// Declaration order is the report and recommendation order.
/// `ReviewQuality` and `SocialProof` carry a weight but have no scorer.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TechnicalSecurity,
    ReviewsRatings,
    BusinessVerification,
    ReviewQuality,
    SocialProof,
    ContentQuality,
    Transparency,
}

impl Category {
    pub fn weight(self) -> Score {
        match self {
            Category::BusinessVerification => 10.0,
            Category::TechnicalSecurity
            | Category::ReviewsRatings
            | Category::ReviewQuality
            | Category::SocialProof
            | Category::ContentQuality
            | Category::Transparency => 15.0,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::TechnicalSecurity => "Technical Security",
            Category::ReviewsRatings => "Reviews & Ratings",
            Category::BusinessVerification => "Business Verification",
            Category::ReviewQuality => "Review Quality",
            Category::SocialProof => "Social Proof",
            Category::ContentQuality => "Content Quality",
            Category::Transparency => "Transparency",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub score: Score,
    pub max_score: Score,
    pub details: BTreeMap<String, String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrustLevel {
    #[serde(rename = "Exceptional Trust")]
    Exceptional,
    #[serde(rename = "High Trust")]
    High,
    #[serde(rename = "Good Trust")]
    Good,
    #[serde(rename = "Moderate Trust")]
    Moderate,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl TrustLevel {
    /// Lower bound of each band is inclusive.
    pub fn classify(normalized: Score) -> Self {
        if normalized >= 90.0 {
            TrustLevel::Exceptional
        } else if normalized >= 80.0 {
            TrustLevel::High
        } else if normalized >= 70.0 {
            TrustLevel::Good
        } else if normalized >= 60.0 {
            TrustLevel::Moderate
        } else {
            TrustLevel::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrustLevel::Exceptional => "Exceptional Trust",
            TrustLevel::High => "High Trust",
            TrustLevel::Good => "Good Trust",
            TrustLevel::Moderate => "Moderate Trust",
            TrustLevel::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSource {
    pub platform: String,
    pub url: String,
    pub weight: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiversityResult {
    pub review_sources: Vec<ReviewSource>,
    pub diversity_score: Score,
    pub total_sources: usize,
    pub primary_sources: std::collections::BTreeSet<String>,
    pub secondary_sources: std::collections::BTreeSet<String>,
    pub embedded_widgets: std::collections::BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DiversityResult {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn distinct_platforms(&self) -> usize {
        self.primary_sources.len() + self.secondary_sources.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrustScoreResult {
    pub total_score: Score,
    pub trust_level: TrustLevel,
    pub components: BTreeMap<Category, ScoreComponent>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_diversity: Option<DiversityResult>,
}

impl TrustScoreResult {
    pub fn with_diversity(mut self, diversity: DiversityResult) -> Self {
        self.review_diversity = Some(diversity);
        self
    }
}
