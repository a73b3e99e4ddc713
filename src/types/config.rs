use crate::error::TrustError;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 trustscope";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrustConfig {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub probes: ProbesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    pub fail_under: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    #[default]
    Md,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormatSetting,
}

/// Optional per-group overrides of the well-known paths the collectors probe.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbesConfig {
    pub privacy: Option<Vec<String>>,
    pub terms: Option<Vec<String>>,
    pub contact: Option<Vec<String>>,
    pub team: Option<Vec<String>>,
    pub testimonials: Option<Vec<String>>,
    pub documentation: Option<Vec<String>>,
    pub blog: Option<Vec<String>>,
    pub expertise: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbePaths {
    pub privacy: Vec<String>,
    pub terms: Vec<String>,
    pub contact: Vec<String>,
    pub team: Vec<String>,
    pub testimonials: Vec<String>,
    pub documentation: Vec<String>,
    pub blog: Vec<String>,
    pub expertise: Vec<String>,
}

fn paths(list: &[&str]) -> Vec<String> {
    list.iter().map(|path| path.to_string()).collect()
}

impl Default for ProbePaths {
    fn default() -> Self {
        Self {
            privacy: paths(&["/privacy", "/privacy-policy", "/privacy-notice", "/legal/privacy"]),
            terms: paths(&[
                "/terms",
                "/terms-of-service",
                "/terms-and-conditions",
                "/tos",
                "/legal/terms",
            ]),
            contact: paths(&["/contact", "/contact-us", "/about", "/about-us"]),
            team: paths(&[
                "/team",
                "/about/team",
                "/about-us/team",
                "/our-team",
                "/about",
                "/about-us",
            ]),
            testimonials: paths(&[
                "/testimonials",
                "/reviews",
                "/case-studies",
                "/success-stories",
                "/what-our-customers-say",
            ]),
            documentation: paths(&[
                "/docs",
                "/documentation",
                "/help",
                "/resources",
                "/guides",
                "/faq",
            ]),
            blog: paths(&["/blog", "/news", "/articles"]),
            expertise: paths(&[
                "/whitepapers",
                "/research",
                "/insights",
                "/publications",
                "/webinars",
            ]),
        }
    }
}

impl TrustConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }

    pub fn probe_paths(&self) -> ProbePaths {
        let defaults = ProbePaths::default();
        let probes = &self.probes;
        ProbePaths {
            privacy: probes.privacy.clone().unwrap_or(defaults.privacy),
            terms: probes.terms.clone().unwrap_or(defaults.terms),
            contact: probes.contact.clone().unwrap_or(defaults.contact),
            team: probes.team.clone().unwrap_or(defaults.team),
            testimonials: probes.testimonials.clone().unwrap_or(defaults.testimonials),
            documentation: probes.documentation.clone().unwrap_or(defaults.documentation),
            blog: probes.blog.clone().unwrap_or(defaults.blog),
            expertise: probes.expertise.clone().unwrap_or(defaults.expertise),
        }
    }

    pub fn validate(&self) -> Result<(), TrustError> {
        if self.http.timeout_secs == 0 {
            return Err(TrustError::ConfigParse(
                "http.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(TrustError::ConfigParse(
                "http.user_agent cannot be empty".to_string(),
            ));
        }

        if let Some(fail_under) = self.scoring.fail_under {
            if !(0.0..=100.0).contains(&fail_under) {
                return Err(TrustError::ConfigParse(
                    "scoring.fail_under must be between 0.0 and 100.0".to_string(),
                ));
            }
        }

        let probes = &self.probes;
        for (group, list) in [
            ("privacy", &probes.privacy),
            ("terms", &probes.terms),
            ("contact", &probes.contact),
            ("team", &probes.team),
            ("testimonials", &probes.testimonials),
            ("documentation", &probes.documentation),
            ("blog", &probes.blog),
            ("expertise", &probes.expertise),
        ] {
            let Some(list) = list else { continue };
            for path in list {
                if !path.starts_with('/') {
                    return Err(TrustError::ConfigParse(format!(
                        "probes.{group} entries must be absolute paths (found '{path}')"
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: TrustConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.http.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(cfg.http.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(cfg.report.format, ReportFormatSetting::Md);
        assert!(cfg.scoring.fail_under.is_none());
        assert_eq!(cfg.probe_paths(), ProbePaths::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let cfg: TrustConfig = toml::from_str(
            r#"
[http]
user_agent = "audit-bot/1.0"
timeout_secs = 3

[scoring]
fail_under = 70.0

[report]
format = "json"

[probes]
blog = ["/journal"]
"#,
        )
        .expect("full config should parse");

        assert_eq!(cfg.http.user_agent, "audit-bot/1.0");
        assert_eq!(cfg.timeout(), Duration::from_secs(3));
        assert_eq!(cfg.scoring.fail_under, Some(70.0));
        assert_eq!(cfg.report.format, ReportFormatSetting::Json);

        let paths = cfg.probe_paths();
        assert_eq!(paths.blog, vec!["/journal".to_string()]);
        assert_eq!(paths.privacy, ProbePaths::default().privacy);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let cfg: TrustConfig = toml::from_str(
            r#"
[http]
timeout_secs = 0
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn validate_rejects_fail_under_out_of_range() {
        let cfg: TrustConfig = toml::from_str(
            r#"
[scoring]
fail_under = 120.0
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_fail_under_boundaries() {
        for value in ["0.0", "100.0"] {
            let cfg: TrustConfig = toml::from_str(&format!("[scoring]\nfail_under = {value}\n"))
                .expect("config should parse");
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn validate_rejects_relative_probe_paths() {
        let cfg: TrustConfig = toml::from_str(
            r#"
[probes]
terms = ["/terms", "legal"]
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("probes.terms"));
    }

    #[test]
    fn validate_accepts_site_root_as_probe_path() {
        let cfg: TrustConfig = toml::from_str(
            r#"
[probes]
contact = ["/"]
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_ok());

        let cfg: TrustConfig = toml::from_str(
            r#"
[probes]
contact = [""]
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }
}
