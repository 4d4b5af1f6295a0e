use chrono::{Local, NaiveDate};
use url::Url;

/// Date format used for `<lastmod>` defaults
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Trim whitespace and slashes from both ends of a link path
pub fn normalize_loc(loc: &str) -> &str {
    loc.trim_matches(|c: char| c == '/' || c.is_whitespace())
}

/// Strip every trailing slash from a domain
pub fn trim_domain(domain: &str) -> &str {
    domain.trim_end_matches('/')
}

/// Check whether a domain parses as an absolute http(s) URL
pub fn is_valid_domain(domain: &str) -> bool {
    match Url::parse(domain) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}
