use super::rubric::{Check, Rubric};
use crate::types::scoring::{Category, Score, ScoreComponent};
use crate::types::signals::SecuritySignals;

pub const SSL_POINTS: Score = 5.0;
/// Flat allowance until domain age and registration checks exist.
pub const DOMAIN_FACTOR_POINTS: Score = 5.0;
pub const HEADER_COUNT: u8 = 4;

pub fn technical_score(signals: &SecuritySignals) -> ScoreComponent {
    let mut rubric = Rubric::new(Category::TechnicalSecurity);

    rubric.check(
        signals.ssl_status.is_valid(),
        Check {
            key: "ssl",
            points: SSL_POINTS,
            pass_detail: "Valid SSL certificate",
            fail_detail: "Missing or invalid SSL certificate",
            recommendation: "Implement HTTPS with a valid SSL certificate",
        },
    );

    let headers = signals.headers.present_count();
    rubric.award(Score::from(headers)).detail(
        "security_headers",
        format!("Implemented {headers}/{HEADER_COUNT} security headers"),
    );
    if headers < HEADER_COUNT {
        rubric.recommend("Implement missing security headers");
    }

    rubric
        .award(DOMAIN_FACTOR_POINTS)
        .detail("domain_factors", "Domain factors not yet evaluated");

    rubric.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::signals::{SecurityHeaders, SslStatus};

    #[test]
    fn full_marks_with_valid_ssl_and_all_headers() {
        let signals = SecuritySignals {
            ssl_status: SslStatus::Valid,
            headers: SecurityHeaders {
                hsts: true,
                x_frame_options: true,
                content_security_policy: true,
                xss_protection: true,
            },
        };
        let component = technical_score(&signals);
        assert_eq!(component.score, 15.0);
        assert_eq!(component.max_score, 15.0);
        assert!(component.recommendations.is_empty());
        assert_eq!(component.details["security_headers"], "Implemented 4/4 security headers");
    }

    #[test]
    fn domain_factor_is_awarded_without_any_signals() {
        let component = technical_score(&SecuritySignals::default());
        assert_eq!(component.score, 5.0);
        assert_eq!(
            component.recommendations,
            vec![
                "Implement HTTPS with a valid SSL certificate".to_string(),
                "Implement missing security headers".to_string(),
            ]
        );
        assert_eq!(component.details["ssl"], "Missing or invalid SSL certificate");
    }

    #[test]
    fn partial_headers_add_one_point_each() {
        let signals = SecuritySignals {
            ssl_status: SslStatus::Invalid,
            headers: SecurityHeaders {
                hsts: true,
                xss_protection: true,
                ..SecurityHeaders::default()
            },
        };
        let component = technical_score(&signals);
        assert_eq!(component.score, 7.0);
        assert_eq!(component.recommendations.len(), 2);
    }
}
