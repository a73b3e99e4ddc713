//! Regex-based extraction of links, script sources and dates from raw HTML.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a\b[^>]*?\bhref\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("href regex")
});
static RE_SCRIPT_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<script\b[^>]*?\bsrc\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("script src regex")
});
static RE_ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})").expect("iso date regex"));
static RE_LONG_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{1,2}),?\s+(\d{4})\b",
    )
    .expect("long date regex")
});

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub hrefs: Vec<String>,
    pub script_srcs: Vec<String>,
}

pub fn extract_links(html: &str) -> PageLinks {
    PageLinks {
        hrefs: capture_attr(&RE_HREF, html),
        script_srcs: capture_attr(&RE_SCRIPT_SRC, html),
    }
}

fn capture_attr(re: &Regex, html: &str) -> Vec<String> {
    re.captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|value| value.as_str().trim().replace("&amp;", "&"))
        .filter(|value| !value.is_empty())
        .collect()
}

/// All calendar dates mentioned in the page, in document order per format.
pub fn extract_dates(html: &str) -> Vec<NaiveDate> {
    let iso = RE_ISO_DATE.captures_iter(html).filter_map(|caps| {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    });

    let long = RE_LONG_DATE.captures_iter(html).filter_map(|caps| {
        let prefix = caps[1].to_lowercase();
        let month = MONTHS.iter().position(|name| *name == prefix)? as u32 + 1;
        let day = caps[2].parse().ok()?;
        let year = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    });

    iso.chain(long).collect()
}
