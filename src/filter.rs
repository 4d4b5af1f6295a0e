use crate::utils;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Patterns deciding which link paths make it into a sitemap
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkFilterConfig {
    /// Regex patterns for paths to include (if empty, all paths are included unless excluded)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns for paths to exclude (these take precedence over include patterns)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Compiled include/exclude rules matched against normalized link paths
#[derive(Debug, Default)]
pub struct LinkFilter {
    include_regexes: Vec<Regex>,
    exclude_regexes: Vec<Regex>,
}

impl LinkFilter {
    /// Compile a filter from configuration
    pub fn new(config: LinkFilterConfig) -> Result<Self, regex::Error> {
        let include_regexes = config
            .include_patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        let exclude_regexes = config
            .exclude_patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            include_regexes,
            exclude_regexes,
        })
    }

    /// Decide whether a link path belongs in the sitemap.
    ///
    /// Paths are matched after trimming surrounding slashes and whitespace,
    /// the same form they are stored in.
    pub fn accepts(&self, loc: &str) -> bool {
        let loc = utils::normalize_loc(loc);

        if self.exclude_regexes.iter().any(|regex| regex.is_match(loc)) {
            return false;
        }

        self.include_regexes.is_empty()
            || self.include_regexes.iter().any(|regex| regex.is_match(loc))
    }
}
