use super::fixed_builder;
use crate::SitemapBuilder;

/// Collect the text of every `<loc>` element in document order
fn locs(xml: &str) -> Vec<&str> {
    xml.split("<loc>")
        .skip(1)
        .filter_map(|rest| rest.split("</loc>").next())
        .collect()
}

#[cfg(test)]
mod document_tests {
    use super::*;

    #[test]
    fn test_two_pages_weekly() {
        let builder = fixed_builder(Some("https://example.com"))
            .set_changefreq("weekly")
            .add_link("about")
            .add_link("contact")
            .build();
        let xml = builder.get();

        assert_eq!(xml.matches("<url>").count(), 2);
        assert_eq!(
            locs(xml),
            ["https://example.com/about", "https://example.com/contact"]
        );
        assert_eq!(xml.matches("<changefreq>weekly</changefreq>").count(), 2);
        assert_eq!(xml.matches("<priority>1.0</priority>").count(), 2);
        assert_eq!(xml.matches("<lastmod>2024-05-17</lastmod>").count(), 2);
    }

    #[test]
    fn test_exact_document() {
        let builder = fixed_builder(Some("https://example.com"))
            .ignore_lastmod()
            .add_link("/docs/")
            .build();

        assert_eq!(
            builder.get(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\
             <url><loc>https://example.com/docs</loc>\
             <priority>1.0</priority><changefreq>daily</changefreq></url>\
             </urlset>"
        );
    }

    #[test]
    fn test_invalid_changefreq_renders_daily() {
        let builder = fixed_builder(Some("https://example.com"))
            .set_changefreq("sometimes")
            .add_link("x")
            .build();
        assert!(builder.get().contains("<changefreq>daily</changefreq>"));
    }

    #[test]
    fn test_url_count_matches_links() {
        for count in [1usize, 2, 7, 30] {
            let mut builder = fixed_builder(Some("https://example.com"));
            for i in 0..count {
                builder = builder.add_link(format!("page-{i}"));
            }
            let builder = builder.build();
            assert_eq!(builder.get().matches("<url>").count(), count);
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let paths = ["zeta", "alpha", "mid/level", "alpha", ""];
        let mut builder = fixed_builder(Some("https://example.com"));
        for path in paths {
            builder = builder.add_link(path);
        }
        let builder = builder.build();

        let expected: Vec<String> = paths
            .iter()
            .map(|p| format!("https://example.com/{p}"))
            .collect();
        assert_eq!(locs(builder.get()), expected);
    }

    #[test]
    fn test_default_domain_is_concatenated_verbatim() {
        let builder = fixed_builder(None).add_link("about").build();
        assert_eq!(locs(builder.get()), ["https://example.com//about"]);
    }

    #[test]
    fn test_special_characters_escaped() {
        let builder = fixed_builder(Some("https://example.com"))
            .add_link("search?a=1&b=<2>")
            .build();
        assert!(
            builder
                .get()
                .contains("<loc>https://example.com/search?a=1&amp;b=&lt;2&gt;</loc>")
        );
    }
}

#[cfg(test)]
mod domain_tests {
    use super::*;

    #[test]
    fn test_no_set_domain_no_root_entry() {
        let builder = fixed_builder(Some("https://example.com")).add_link("a");
        assert_eq!(builder.len(), 1);
        assert_eq!(builder.entries()[0].loc, "a");
    }

    #[test]
    fn test_set_domain_injects_root_entry() {
        let builder = fixed_builder(None)
            .set_domain("https://example.net//")
            .add_link("a")
            .build();

        assert_eq!(builder.domain(), "https://example.net");
        assert_eq!(builder.len(), 2);
        assert_eq!(builder.entries()[0].loc, "");
        assert_eq!(
            locs(builder.get()),
            ["https://example.net/", "https://example.net/a"]
        );
    }

    #[test]
    fn test_set_domain_twice_injects_two_roots() {
        let builder = fixed_builder(None)
            .set_domain("https://one.example")
            .set_domain("https://two.example")
            .build();

        assert_eq!(builder.len(), 2);
        // Every loc uses the domain in effect at build time
        assert_eq!(
            locs(builder.get()),
            ["https://two.example/", "https://two.example/"]
        );
    }

    #[test]
    fn test_root_entry_uses_current_settings() {
        let builder = fixed_builder(None)
            .ignore_priority()
            .set_changefreq("monthly")
            .set_domain("https://example.com");
        let root = &builder.entries()[0];

        assert_eq!(root.priority, None);
        assert_eq!(root.changefreq.map(|f| f.as_str()), Some("monthly"));
    }

    #[test]
    fn test_invalid_domain_is_still_used() {
        let builder = fixed_builder(None).set_domain("not a url/").build();
        assert_eq!(locs(builder.get()), ["not a url/"]);
    }
}

#[cfg(test)]
mod clock_tests {
    use super::*;

    #[test]
    fn test_new_uses_today() {
        let builder = SitemapBuilder::new(None);
        assert_eq!(
            builder.lastmod_default(),
            crate::utils::format_date(crate::utils::today())
        );
    }
}
