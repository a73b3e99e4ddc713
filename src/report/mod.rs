pub mod json;
pub mod md;

use crate::error::TrustError;
use crate::types::report::TrustReport;
use crate::types::scoring::DiversityResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &TrustReport, format: OutputFormat) -> Result<String, TrustError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(TrustError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_diversity(
    diversity: &DiversityResult,
    format: OutputFormat,
) -> Result<String, TrustError> {
    match format {
        OutputFormat::Json => json::to_json(diversity).map_err(TrustError::Json),
        OutputFormat::Md => {
            let mut output = String::from("# Review Diversity\n\n");
            md::push_diversity(&mut output, diversity);
            Ok(output)
        }
    }
}
