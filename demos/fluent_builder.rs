use sitemap_builder::{LinkOptions, SitemapBuilder};

fn main() {
    // Initialize logger
    env_logger::init();

    let mut sitemap = SitemapBuilder::new(None)
        .set_priority(0.8)
        .set_domain("https://example.com/")
        .set_changefreq("weekly")
        .add_link("about")
        .add_link("/contact/")
        .add_link_with(
            "blog",
            LinkOptions::new().with_priority("0.5").with_changefreq("hourly"),
        )
        .ignore_lastmod()
        .add_link("legal")
        .build();

    println!("{}", sitemap.get());

    let path = std::env::temp_dir().join("sitemap.xml");
    if sitemap.save(&path) {
        println!("Saved {} urls to {}", sitemap.len(), path.display());
    } else {
        eprintln!("Could not save sitemap to {}", path.display());
    }
}
