use serde::{Deserialize, Serialize};
use std::fmt;

/// How frequently the page at a location is likely to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// All recognised values, in protocol order
    pub const ALL: [ChangeFreq; 7] = [
        ChangeFreq::Always,
        ChangeFreq::Hourly,
        ChangeFreq::Daily,
        ChangeFreq::Weekly,
        ChangeFreq::Monthly,
        ChangeFreq::Yearly,
        ChangeFreq::Never,
    ];

    /// Parse an exact protocol value (`"weekly"`, not `"Weekly"`)
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|freq| freq.as_str() == value)
    }

    /// Parse a protocol value, falling back to [`ChangeFreq::Daily`] for anything unrecognised
    pub fn parse_or_default(value: &str) -> Self {
        match Self::parse(value) {
            Some(freq) => freq,
            None => {
                ::log::warn!("Unknown change frequency {:?}, using daily", value);
                Self::default()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl AsRef<str> for ChangeFreq {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority hint, kept as the text that ends up in the document.
///
/// Values are not range-checked. Numbers are formatted with at least one
/// fractional digit so `1` and `1.0` both render as `1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PriorityRepr", into = "String")]
pub struct Priority(String);

impl Priority {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self("1.0".to_string())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<f64> for Priority {
    fn from(value: f64) -> Self {
        if value.fract() == 0.0 {
            Self(format!("{value:.1}"))
        } else {
            Self(value.to_string())
        }
    }
}

impl From<f32> for Priority {
    fn from(value: f32) -> Self {
        if value.fract() == 0.0 {
            Self(format!("{value:.1}"))
        } else {
            Self(value.to_string())
        }
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.0
    }
}

/// Manifests may write priorities as `0.5` or `"0.5"`
#[derive(Deserialize)]
#[serde(untagged)]
enum PriorityRepr {
    Text(String),
    Number(f64),
}

impl From<PriorityRepr> for Priority {
    fn from(repr: PriorityRepr) -> Self {
        match repr {
            PriorityRepr::Text(text) => Priority(text),
            PriorityRepr::Number(number) => Priority::from(number),
        }
    }
}

/// Per-link overrides for the builder defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Free text; unrecognised values fall back to daily when the link is added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
}

impl LinkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_changefreq(mut self, changefreq: impl AsRef<str>) -> Self {
        self.changefreq = Some(changefreq.as_ref().to_string());
        self
    }

    pub fn with_lastmod(mut self, lastmod: impl Into<String>) -> Self {
        self.lastmod = Some(lastmod.into());
        self
    }
}

/// One `<url>` of the sitemap, fixed at the moment it was added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Path relative to the domain, without surrounding slashes
    pub loc: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<ChangeFreq>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
}

impl LinkEntry {
    /// Create an entry carrying only a location
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            priority: None,
            changefreq: None,
            lastmod: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changefreq_parse() {
        assert_eq!(ChangeFreq::parse("weekly"), Some(ChangeFreq::Weekly));
        assert_eq!(ChangeFreq::parse("never"), Some(ChangeFreq::Never));
        assert_eq!(ChangeFreq::parse("Weekly"), None);
        assert_eq!(ChangeFreq::parse(""), None);
    }

    #[test]
    fn test_changefreq_fallback() {
        assert_eq!(ChangeFreq::parse_or_default("sometimes"), ChangeFreq::Daily);
        assert_eq!(ChangeFreq::parse_or_default("yearly"), ChangeFreq::Yearly);
    }

    #[test]
    fn test_changefreq_names_match_serde() {
        for freq in ChangeFreq::ALL {
            let json = serde_json::to_string(&freq).unwrap();
            assert_eq!(json, format!("\"{}\"", freq.as_str()));
        }
    }

    #[test]
    fn test_priority_from_numbers() {
        assert_eq!(Priority::from(1.0).as_str(), "1.0");
        assert_eq!(Priority::from(0.8).as_str(), "0.8");
        assert_eq!(Priority::from(0.25f64).as_str(), "0.25");
        assert_eq!(Priority::from(0.5f32).as_str(), "0.5");
        // Out of range values are kept as they are
        assert_eq!(Priority::from(7.0).as_str(), "7.0");
    }

    #[test]
    fn test_priority_deserialize_number_or_string() {
        let from_number: Priority = serde_json::from_str("0.5").unwrap();
        let from_text: Priority = serde_json::from_str("\"0.50\"").unwrap();
        assert_eq!(from_number.as_str(), "0.5");
        assert_eq!(from_text.as_str(), "0.50");
    }

    #[test]
    fn test_link_options_builder() {
        let options = LinkOptions::new()
            .with_priority("0.3")
            .with_changefreq(ChangeFreq::Monthly)
            .with_lastmod("2024-02-29");

        assert_eq!(options.priority, Some(Priority::from("0.3")));
        assert_eq!(options.changefreq.as_deref(), Some("monthly"));
        assert_eq!(options.lastmod.as_deref(), Some("2024-02-29"));
    }
}
