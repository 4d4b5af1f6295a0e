use clap::Parser;
use sitemap_builder::{SitemapManifest, utils};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON manifest string
    #[arg(short, long)]
    manifest: Option<String>,

    /// Path to JSON manifest file
    #[arg(short = 'f', long)]
    manifest_file: Option<String>,
}

const SAMPLE: &str = r#"{
    "domain": "https://example.com",
    "defaults": { "priority": 0.7, "changefreq": "monthly" },
    "exclude_patterns": ["^drafts/"],
    "links": ["about", "drafts/wip", { "loc": "news", "changefreq": "hourly", "priority": 0.9 }]
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    let args = Args::parse();

    // A file takes precedence over an inline manifest
    let manifest = if let Some(path) = args.manifest_file {
        println!("Loading manifest from file: {}", path);
        SitemapManifest::from_file(path)?
    } else {
        SitemapManifest::from_json(args.manifest.as_deref().unwrap_or(SAMPLE))?
    };

    let sitemap = manifest.into_builder(utils::today())?.build();
    println!("{}", sitemap.get());

    Ok(())
}
