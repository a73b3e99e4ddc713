//! Adapts collector observations into the per-category signal records.

use crate::scan::content::ContentFreshness;
use crate::scan::SiteObservations;
use crate::types::signals::{
    BusinessSignals, ContentSignals, ReviewSignals, SecurityHeaders, SecuritySignals, SignalSet,
    TransparencySignals,
};

pub fn map_signals(observations: &SiteObservations) -> SignalSet {
    SignalSet {
        security: map_security(observations),
        reviews: map_reviews(observations),
        business: map_business(observations),
        content: map_content(observations),
        transparency: map_transparency(observations),
    }
}

fn map_security(observations: &SiteObservations) -> SecuritySignals {
    let headers = &observations.security.headers;
    SecuritySignals {
        ssl_status: observations.security.ssl.status,
        headers: SecurityHeaders {
            hsts: headers.has_hsts,
            x_frame_options: headers.has_xframe,
            content_security_policy: headers.has_content_security,
            xss_protection: headers.has_xss_protection,
        },
    }
}

fn map_reviews(observations: &SiteObservations) -> ReviewSignals {
    let testimonials = &observations.social.testimonials;
    let diversity = &observations.review_diversity;
    ReviewSignals {
        has_reviews: testimonials.found() || diversity.total_sources > 0,
        recent_reviews: testimonials.found(),
        diverse_reviews: diversity.distinct_platforms() > 1,
    }
}

fn map_business(observations: &SiteObservations) -> BusinessSignals {
    BusinessSignals {
        has_credentials: observations.social.team.found(),
        contact_verified: observations.security.contact.found(),
    }
}

fn map_content(observations: &SiteObservations) -> ContentSignals {
    let content = &observations.content;
    ContentSignals {
        has_resources: content.documentation.found(),
        recent_content: content.freshness == ContentFreshness::Recent,
        expert_content: content.expertise.found(),
    }
}

fn map_transparency(observations: &SiteObservations) -> TransparencySignals {
    TransparencySignals {
        has_privacy_policy: observations.security.privacy_policy.found(),
        has_terms: observations.security.terms.found(),
        // No pricing collector yet.
        clear_pricing: false,
    }
}
