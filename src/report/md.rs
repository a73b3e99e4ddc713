use crate::types::report::TrustReport;
use crate::types::scoring::DiversityResult;

pub fn to_markdown(report: &TrustReport) -> String {
    let score = &report.trust_score;
    let mut output = String::new();
    output.push_str("# Trust Report\n\n");
    output.push_str(&format!("Target: {}\n\n", report.target));
    output.push_str(&format!("Overall trust score: {:.2}\n\n", score.total_score));
    output.push_str(&format!("Trust level: {}\n\n", score.trust_level.label()));

    output.push_str("## Category Scores\n\n");
    for (category, component) in &score.components {
        output.push_str(&format!(
            "### {}\n\nScore: {}/{}\n\n",
            category.title(),
            component.score,
            component.max_score
        ));
        for (key, value) in &component.details {
            output.push_str(&format!("- {key}: {value}\n"));
        }
        output.push('\n');
    }

    if let Some(diversity) = &score.review_diversity {
        output.push_str("## Review Sources\n\n");
        push_diversity(&mut output, diversity);
    }

    if !report.social_profiles.is_empty() {
        output.push_str("## Social Profiles\n\n");
        for profile in &report.social_profiles {
            output.push_str(&format!("- {profile}\n"));
        }
        output.push('\n');
    }

    if let Some(observations) = &report.observations {
        output.push_str("## Collector Notes\n\n");
        output.push_str(&format!(
            "- blog freshness: {}\n",
            observations.content.freshness.describe()
        ));
        if let Some(error) = &observations.security.ssl.error {
            output.push_str(&format!("- ssl check: {error}\n"));
        }
        if let Some(error) = &observations.security.headers.error {
            output.push_str(&format!("- header check: {error}\n"));
        }
        if let Some(error) = &observations.page_error {
            output.push_str(&format!("- landing page: {error}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Recommendations\n\n");
    if score.recommendations.is_empty() {
        output.push_str("- none\n");
    } else {
        for (index, recommendation) in score.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, recommendation));
        }
    }

    output
}

pub(crate) fn push_diversity(output: &mut String, diversity: &DiversityResult) {
    if let Some(error) = &diversity.error {
        output.push_str(&format!("- error: {error}\n\n"));
    }
    output.push_str(&format!(
        "- diversity score: {:.1}/10\n- total review sources: {}\n",
        diversity.diversity_score, diversity.total_sources
    ));
    for (label, set) in [
        ("primary review sources", &diversity.primary_sources),
        ("secondary review sources", &diversity.secondary_sources),
        ("embedded review widgets", &diversity.embedded_widgets),
    ] {
        if !set.is_empty() {
            let names = set.iter().map(String::as_str).collect::<Vec<_>>();
            output.push_str(&format!("- {label}: {}\n", names.join(", ")));
        }
    }
    output.push('\n');
}
