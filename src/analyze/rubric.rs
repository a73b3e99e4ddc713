use crate::types::scoring::{Category, Score, ScoreComponent};
use std::collections::BTreeMap;

/// Accumulates pass/fail checks for one category into a `ScoreComponent`.
pub struct Rubric {
    max_score: Score,
    score: Score,
    details: BTreeMap<String, String>,
    recommendations: Vec<String>,
}

pub struct Check<'a> {
    pub key: &'a str,
    pub points: Score,
    pub pass_detail: &'a str,
    pub fail_detail: &'a str,
    pub recommendation: &'a str,
}

impl Rubric {
    pub fn new(category: Category) -> Self {
        Self {
            max_score: category.weight(),
            score: 0.0,
            details: BTreeMap::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn check(&mut self, passed: bool, check: Check<'_>) -> &mut Self {
        if passed {
            self.score += check.points;
            self.detail(check.key, check.pass_detail);
        } else {
            self.detail(check.key, check.fail_detail);
            self.recommend(check.recommendation);
        }
        self
    }

    pub fn award(&mut self, points: Score) -> &mut Self {
        self.score += points;
        self
    }

    pub fn detail(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    pub fn recommend(&mut self, recommendation: &str) -> &mut Self {
        self.recommendations.push(recommendation.to_string());
        self
    }

    pub fn finish(&mut self) -> ScoreComponent {
        ScoreComponent {
            score: self.score.clamp(0.0, self.max_score),
            max_score: self.max_score,
            details: std::mem::take(&mut self.details),
            recommendations: std::mem::take(&mut self.recommendations),
        }
    }
}
