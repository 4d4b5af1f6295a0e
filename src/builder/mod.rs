use crate::config::Defaults;
use crate::entry::{ChangeFreq, LinkEntry, LinkOptions, Priority};
use crate::render;
use crate::storage::{FileStorage, Storage};
use crate::utils;
use chrono::NaiveDate;
use std::path::Path;

#[cfg(test)]
mod tests;

/// Domain used until one is supplied
pub const DEFAULT_DOMAIN: &str = "https://example.com/";

/// Returned by [`SitemapBuilder::get`] before a document has been built
pub const NOT_BUILT: &str = "Sitemap not built yet.";

/// Builder that collects links and renders them into a sitemap document
#[derive(Debug, Clone)]
pub struct SitemapBuilder {
    domain: String,

    // Defaults applied to links added from now on
    priority_default: Priority,
    changefreq_default: ChangeFreq,
    lastmod_default: String,

    // Which optional tags new links receive
    include_priority: bool,
    include_changefreq: bool,
    include_lastmod: bool,

    links: Vec<LinkEntry>,
    document: Option<String>,
    saved: bool,
}

impl Default for SitemapBuilder {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SitemapBuilder {
    /// Create a builder whose default lastmod is today's local date
    pub fn new(domain: Option<&str>) -> Self {
        Self::new_at(domain, utils::today())
    }

    /// Create a builder whose default lastmod is `today`
    pub fn new_at(domain: Option<&str>, today: NaiveDate) -> Self {
        Self {
            domain: domain.unwrap_or(DEFAULT_DOMAIN).to_string(),
            priority_default: Priority::default(),
            changefreq_default: ChangeFreq::default(),
            lastmod_default: utils::format_date(today),
            include_priority: true,
            include_changefreq: true,
            include_lastmod: true,
            links: Vec::new(),
            document: None,
            saved: false,
        }
    }

    /// Replace the domain and add a link for its root.
    ///
    /// Trailing slashes are stripped. The root link takes the defaults and
    /// tag settings in effect at this call.
    pub fn set_domain(mut self, domain: impl AsRef<str>) -> Self {
        let domain = utils::trim_domain(domain.as_ref());
        if !utils::is_valid_domain(domain) {
            ::log::warn!("Domain {:?} is not an absolute http(s) URL", domain);
        }
        self.domain = domain.to_string();
        self.add_link("")
    }

    /// Stop adding `<lastmod>` to links added from now on
    pub fn ignore_lastmod(mut self) -> Self {
        self.include_lastmod = false;
        self
    }

    /// Stop adding `<priority>` to links added from now on
    pub fn ignore_priority(mut self) -> Self {
        self.include_priority = false;
        self
    }

    /// Stop adding `<changefreq>` to links added from now on
    pub fn ignore_changefreq(mut self) -> Self {
        self.include_changefreq = false;
        self
    }

    /// Set the default priority. The value is not range-checked.
    pub fn set_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority_default = priority.into();
        self
    }

    /// Set the default change frequency; unrecognised values become daily
    pub fn set_changefreq(mut self, changefreq: impl AsRef<str>) -> Self {
        self.changefreq_default = ChangeFreq::parse_or_default(changefreq.as_ref());
        self
    }

    /// Set the default last modification date. The value is not validated.
    pub fn set_lastmod(mut self, lastmod: impl Into<String>) -> Self {
        self.lastmod_default = lastmod.into();
        self
    }

    /// Apply every default present in `defaults`
    pub fn set_defaults(mut self, defaults: Defaults) -> Self {
        if let Some(changefreq) = defaults.changefreq {
            self = self.set_changefreq(changefreq);
        }
        if let Some(lastmod) = defaults.lastmod {
            self = self.set_lastmod(lastmod);
        }
        if let Some(priority) = defaults.priority {
            self = self.set_priority(priority);
        }
        self
    }

    /// Add a link using the current defaults
    pub fn add_link(self, loc: impl AsRef<str>) -> Self {
        self.add_link_with(loc, LinkOptions::default())
    }

    /// Add a link, overriding defaults with whatever `options` carries.
    ///
    /// Tags switched off with an `ignore_*` call are left out even when an
    /// override is given.
    pub fn add_link_with(mut self, loc: impl AsRef<str>, options: LinkOptions) -> Self {
        let loc = utils::normalize_loc(loc.as_ref());

        let mut entry = LinkEntry::new(loc);
        if self.include_priority {
            entry.priority = Some(
                options
                    .priority
                    .unwrap_or_else(|| self.priority_default.clone()),
            );
        }
        if self.include_changefreq {
            entry.changefreq = Some(match options.changefreq {
                Some(changefreq) => ChangeFreq::parse_or_default(&changefreq),
                None => self.changefreq_default,
            });
        }
        if self.include_lastmod {
            entry.lastmod = Some(
                options
                    .lastmod
                    .unwrap_or_else(|| self.lastmod_default.clone()),
            );
        }

        ::log::debug!("Adding link {:?}", entry.loc);
        self.links.push(entry);
        self
    }

    /// Render all links into a document, replacing any earlier one.
    ///
    /// Without links nothing is rendered and the builder stays unbuilt.
    pub fn build(mut self) -> Self {
        if self.links.is_empty() {
            ::log::debug!("No links added, skipping sitemap build");
            return self;
        }

        let document = render::render(&self.domain, &self.links);
        ::log::info!(
            "Built sitemap for {} with {} urls ({} bytes)",
            self.domain,
            self.links.len(),
            document.len()
        );
        self.document = Some(document);
        self
    }

    /// The rendered document, or [`NOT_BUILT`]
    pub fn get(&self) -> &str {
        self.document.as_deref().unwrap_or(NOT_BUILT)
    }

    /// Write the document to `path` on the local filesystem
    pub fn save(&mut self, path: impl AsRef<Path>) -> bool {
        self.save_to(&FileStorage, path)
    }

    /// Write the document to `path` through `storage`.
    ///
    /// Returns `false` without touching storage when nothing has been built.
    pub fn save_to<S: Storage + ?Sized>(&mut self, storage: &S, path: impl AsRef<Path>) -> bool {
        let Some(document) = &self.document else {
            ::log::warn!("Sitemap not built, nothing to save");
            return false;
        };

        let path = path.as_ref();
        self.saved = match storage.write_all(path, document.as_bytes()) {
            Ok(written) => {
                ::log::info!("Saved sitemap to {} ({} bytes)", path.display(), written);
                written > 0
            }
            Err(e) => {
                ::log::error!("Failed to save sitemap to {}: {}", path.display(), e);
                false
            }
        };
        self.saved
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Links in the order they were added
    pub fn entries(&self) -> &[LinkEntry] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn is_built(&self) -> bool {
        self.document.is_some()
    }

    /// Outcome of the most recent save
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn priority_default(&self) -> &Priority {
        &self.priority_default
    }

    pub fn changefreq_default(&self) -> ChangeFreq {
        self.changefreq_default
    }

    pub fn lastmod_default(&self) -> &str {
        &self.lastmod_default
    }
}
