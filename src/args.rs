use clap::Parser;
use sitemap_builder::SitemapManifest;
use sitemap_builder::config::{LinkSpec, Tag};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitemap-builder")]
#[command(about = "Build an XML sitemap from a JSON manifest and command-line links")]
#[command(version)]
pub struct Args {
    /// JSON manifest describing the sitemap
    pub manifest: Option<PathBuf>,

    /// Site domain (also lists the root URL)
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Link path to add; may be repeated
    #[arg(short, long = "link")]
    pub links: Vec<String>,

    /// Default priority
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Default change frequency (always, hourly, daily, weekly, monthly, yearly, never)
    #[arg(short, long)]
    pub changefreq: Option<String>,

    /// Default last modification date (YYYY-MM-DD)
    #[arg(long)]
    pub lastmod: Option<String>,

    /// Leave out <priority>
    #[arg(long)]
    pub no_priority: bool,

    /// Leave out <changefreq>
    #[arg(long)]
    pub no_changefreq: bool,

    /// Leave out <lastmod>
    #[arg(long)]
    pub no_lastmod: bool,

    /// Output file (prints to stdout if neither this nor the manifest sets one)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Apply command-line values on top of a manifest
    pub fn apply(self, manifest: &mut SitemapManifest) {
        if let Some(domain) = self.domain {
            manifest.domain = Some(domain);
        }
        if let Some(priority) = self.priority {
            manifest.defaults.priority = Some(priority.into());
        }
        if let Some(changefreq) = self.changefreq {
            manifest.defaults.changefreq = Some(changefreq);
        }
        if let Some(lastmod) = self.lastmod {
            manifest.defaults.lastmod = Some(lastmod);
        }

        let flags = [
            (self.no_priority, Tag::Priority),
            (self.no_changefreq, Tag::Changefreq),
            (self.no_lastmod, Tag::Lastmod),
        ];
        for (set, tag) in flags {
            if set && !manifest.ignore.contains(&tag) {
                manifest.ignore.push(tag);
            }
        }

        manifest
            .links
            .extend(self.links.into_iter().map(LinkSpec::Path));

        if let Some(output) = self.output {
            manifest.output = Some(output);
        }
    }
}
