use once_cell::sync::Lazy;
use regex::Regex;

pub const PRIMARY_WEIGHT: u8 = 4;

#[derive(Debug)]
pub struct ReviewPlatform {
    pub name: &'static str,
    pub domain: &'static str,
    pub weight: u8,
    pub patterns: Vec<Regex>,
}

impl ReviewPlatform {
    pub fn is_primary(&self) -> bool {
        self.weight >= PRIMARY_WEIGHT
    }

    pub fn matches(&self, href: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(href))
    }
}

// (name, domain, weight, patterns)
const PLATFORMS: &[(&str, &str, u8, &[&str])] = &[
    (
        "trustpilot",
        "trustpilot.com",
        5,
        &[r"trustpilot\.com/review/", r"trustpilot\.com"],
    ),
    (
        "google",
        "google.com/maps",
        5,
        &[
            r"google\.com/maps/place/",
            r"g\.page/",
            r"search\.google\.com/local/",
            r"google\.com/.*reviews",
        ],
    ),
    ("yelp", "yelp.com", 4, &[r"yelp\.[a-z.]+/biz/"]),
    ("bbb", "bbb.org", 4, &[r"bbb\.org/.*/business-reviews/", r"bbb\.org"]),
    ("g2", "g2.com", 4, &[r"g2\.com/products/.*/reviews", r"g2\.com/products/"]),
    ("capterra", "capterra.com", 4, &[r"capterra\.[a-z.]+/p/", r"capterra\.[a-z.]+/reviews/"]),
    ("tripadvisor", "tripadvisor.com", 4, &[r"tripadvisor\.[a-z.]+/.*review"]),
    ("glassdoor", "glassdoor.com", 3, &[r"glassdoor\.[a-z.]+/reviews/"]),
    ("facebook_reviews", "facebook.com", 3, &[r"facebook\.com/.*/reviews"]),
    ("sitejabber", "sitejabber.com", 3, &[r"sitejabber\.com/reviews/"]),
    ("reviews_io", "reviews.io", 3, &[r"reviews\.io/company-reviews/"]),
    ("feefo", "feefo.com", 3, &[r"feefo\.com/.*reviews"]),
    ("yotpo", "yotpo.com", 2, &[r"yotpo\.com"]),
    ("judgeme", "judge.me", 2, &[r"judge\.me/reviews"]),
];

/// Process-wide review platform table, compiled on first use.
pub static REVIEW_PLATFORMS: Lazy<Vec<ReviewPlatform>> = Lazy::new(|| {
    PLATFORMS
        .iter()
        .map(|&(name, domain, weight, patterns)| ReviewPlatform {
            name,
            domain,
            weight,
            patterns: patterns
                .iter()
                .map(|pattern| {
                    Regex::new(&format!("(?i){pattern}")).expect("review platform pattern")
                })
                .collect(),
        })
        .collect()
});
