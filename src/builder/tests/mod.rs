mod scenario_tests;

use crate::SitemapBuilder;
use chrono::NaiveDate;

/// Builder pinned to 2024-05-17 so lastmod defaults are predictable
fn fixed_builder(domain: Option<&str>) -> SitemapBuilder {
    SitemapBuilder::new_at(domain, NaiveDate::from_ymd_opt(2024, 5, 17).unwrap())
}
