use crate::builder::SitemapBuilder;
use crate::entry::{LinkOptions, Priority};
use crate::filter::{LinkFilter, LinkFilterConfig};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Default values for links added after they are applied
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Optional tags that can be left out of every `<url>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Priority,
    Changefreq,
    Lastmod,
}

/// A link in a manifest: either a bare path or a path with overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkSpec {
    Path(String),
    Detailed {
        loc: String,
        #[serde(flatten)]
        options: LinkOptions,
    },
}

impl LinkSpec {
    pub fn loc(&self) -> &str {
        match self {
            LinkSpec::Path(loc) => loc,
            LinkSpec::Detailed { loc, .. } => loc,
        }
    }
}

/// JSON description of a whole sitemap
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitemapManifest {
    /// Site root; setting it also lists the root URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Tags to leave out of every link
    #[serde(default)]
    pub ignore: Vec<Tag>,

    /// Regex patterns a link path must match (if empty, all paths match)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns that drop a link path
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    #[serde(default)]
    pub links: Vec<LinkSpec>,

    /// Where the rendered sitemap should be written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl SitemapManifest {
    /// Load a manifest from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Parse a manifest from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let manifest: Self = serde_json::from_str(json)?;
        Ok(manifest)
    }

    /// Filter built from the include and exclude patterns
    pub fn link_filter(&self) -> Result<LinkFilter, regex::Error> {
        LinkFilter::new(LinkFilterConfig {
            include_patterns: self.include_patterns.clone(),
            exclude_patterns: self.exclude_patterns.clone(),
        })
    }

    /// Turn the manifest into a builder holding all of its links.
    ///
    /// Defaults and ignored tags are applied first, then the domain (which
    /// adds the root link), then every link the filter accepts, in order.
    pub fn into_builder(self, today: NaiveDate) -> Result<SitemapBuilder, Box<dyn Error>> {
        let filter = self.link_filter()?;

        let mut builder = SitemapBuilder::new_at(None, today).set_defaults(self.defaults);
        for tag in &self.ignore {
            builder = match tag {
                Tag::Priority => builder.ignore_priority(),
                Tag::Changefreq => builder.ignore_changefreq(),
                Tag::Lastmod => builder.ignore_lastmod(),
            };
        }

        if let Some(domain) = &self.domain {
            builder = builder.set_domain(domain);
        }

        let mut skipped = 0;
        for link in self.links {
            if !filter.accepts(link.loc()) {
                ::log::debug!("Skipping filtered link {:?}", link.loc());
                skipped += 1;
                continue;
            }
            builder = match link {
                LinkSpec::Path(loc) => builder.add_link(loc),
                LinkSpec::Detailed { loc, options } => builder.add_link_with(loc, options),
            };
        }

        ::log::info!(
            "Loaded {} links from manifest ({} filtered out)",
            builder.len(),
            skipped
        );
        Ok(builder)
    }
}
