//! Typed inputs for the category scorers.
//!
//! Every field defaults to the negative case. Values of the wrong type, at
//! any level including whole tables, are read as absent rather than
//! rejected, so a hand-written signals file with a typo'd value degrades the
//! score instead of failing the run.

use crate::error::{Result, TrustError};
use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SslStatus {
    Valid,
    Invalid,
    #[default]
    Unknown,
}

impl SslStatus {
    pub fn is_valid(self) -> bool {
        matches!(self, SslStatus::Valid)
    }
}

impl<'de> Deserialize<'de> for SslStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Other(IgnoredAny),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) if text.trim().eq_ignore_ascii_case("valid") => SslStatus::Valid,
            Raw::Text(text) if text.trim().eq_ignore_ascii_case("invalid") => SslStatus::Invalid,
            Raw::Text(_) | Raw::Other(_) => SslStatus::Unknown,
        })
    }
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Other(IgnoredAny),
    }

    Ok(matches!(Raw::deserialize(deserializer)?, Raw::Flag(true)))
}

fn lenient_table<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Table(T),
        Other(IgnoredAny),
    }

    Ok(match Raw::<T>::deserialize(deserializer)? {
        Raw::Table(table) => table,
        Raw::Other(_) => T::default(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityHeaders {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub hsts: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub x_frame_options: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub content_security_policy: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub xss_protection: bool,
}

impl SecurityHeaders {
    pub fn present_count(&self) -> u8 {
        [
            self.hsts,
            self.x_frame_options,
            self.content_security_policy,
            self.xss_protection,
        ]
        .iter()
        .filter(|present| **present)
        .count() as u8
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySignals {
    #[serde(default)]
    pub ssl_status: SslStatus,
    #[serde(default, deserialize_with = "lenient_table")]
    pub headers: SecurityHeaders,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSignals {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_reviews: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub recent_reviews: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub diverse_reviews: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSignals {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_credentials: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub contact_verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSignals {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_resources: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub recent_content: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub expert_content: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransparencySignals {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_privacy_policy: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_terms: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub clear_pricing: bool,
}

/// One set of signals per scored category, as read from a signals file or
/// produced by the result mapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    #[serde(default, deserialize_with = "lenient_table")]
    pub security: SecuritySignals,
    #[serde(default, deserialize_with = "lenient_table")]
    pub reviews: ReviewSignals,
    #[serde(default, deserialize_with = "lenient_table")]
    pub business: BusinessSignals,
    #[serde(default, deserialize_with = "lenient_table")]
    pub content: ContentSignals,
    #[serde(default, deserialize_with = "lenient_table")]
    pub transparency: TransparencySignals,
}

impl SignalSet {
    /// Reads a signals file; `.json` is parsed as JSON, anything else as TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TrustError::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };
        parsed.map_err(|e| TrustError::SignalsParse(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tables_default_to_negative() {
        let signals: SignalSet = toml::from_str("").expect("empty file should parse");
        assert_eq!(signals, SignalSet::default());
        assert!(!signals.security.ssl_status.is_valid());
    }

    #[test]
    fn wrong_value_types_read_as_absent() {
        let signals: SignalSet = toml::from_str(
            r#"
[security]
ssl_status = 42

[security.headers]
hsts = "yes"
x_frame_options = true

[reviews]
has_reviews = 1
recent_reviews = true
diverse_reviews = ["trustpilot"]
"#,
        )
        .expect("malformed values should still parse");

        assert_eq!(signals.security.ssl_status, SslStatus::Unknown);
        assert!(!signals.security.headers.hsts);
        assert!(signals.security.headers.x_frame_options);
        assert!(!signals.reviews.has_reviews);
        assert!(signals.reviews.recent_reviews);
        assert!(!signals.reviews.diverse_reviews);
    }

    #[test]
    fn misshapen_tables_read_as_absent() {
        let signals: SignalSet = serde_json::from_str(
            r#"{
                "security": {"ssl_status": "valid", "headers": "yes"},
                "reviews": null,
                "business": [true, true],
                "content": {"has_resources": true}
            }"#,
        )
        .expect("misshapen tables should still parse");

        assert!(signals.security.ssl_status.is_valid());
        assert_eq!(signals.security.headers, SecurityHeaders::default());
        assert_eq!(signals.reviews, ReviewSignals::default());
        assert_eq!(signals.business, BusinessSignals::default());
        assert!(signals.content.has_resources);

        let signals: SignalSet = toml::from_str(
            r#"
security = 5

[transparency]
has_terms = true
"#,
        )
        .expect("scalar category should still parse");
        assert_eq!(signals.security, SecuritySignals::default());
        assert!(signals.transparency.has_terms);
    }

    #[test]
    fn ssl_status_parses_case_insensitively_from_json() {
        let signals: SignalSet =
            serde_json::from_str(r#"{"security": {"ssl_status": "VALID"}}"#).expect("json parse");
        assert!(signals.security.ssl_status.is_valid());

        let signals: SignalSet =
            serde_json::from_str(r#"{"security": {"ssl_status": null}}"#).expect("json parse");
        assert_eq!(signals.security.ssl_status, SslStatus::Unknown);
    }

    #[test]
    fn from_file_picks_format_by_extension() {
        let dir = tempfile::TempDir::new().expect("temp dir should be created");
        let json_path = dir.path().join("signals.json");
        std::fs::write(&json_path, r#"{"business": {"has_credentials": true}}"#)
            .expect("json should write");
        let toml_path = dir.path().join("signals.toml");
        std::fs::write(&toml_path, "[content]\nexpert_content = true\n").expect("toml should write");

        let from_json = SignalSet::from_file(&json_path).expect("json should load");
        assert!(from_json.business.has_credentials);
        let from_toml = SignalSet::from_file(&toml_path).expect("toml should load");
        assert!(from_toml.content.expert_content);
    }

    #[test]
    fn from_file_reports_syntax_errors() {
        let dir = tempfile::TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[security").expect("file should write");
        let err = SignalSet::from_file(&path).expect_err("parse should fail");
        assert!(matches!(err, TrustError::SignalsParse(_)));
    }

    #[test]
    fn header_count_tracks_present_headers() {
        let headers = SecurityHeaders {
            hsts: true,
            x_frame_options: false,
            content_security_policy: true,
            xss_protection: false,
        };
        assert_eq!(headers.present_count(), 2);
    }
}
