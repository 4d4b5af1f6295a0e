//! Compact XML serialization of sitemap entries.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"><url><loc>https://example.com/about</loc><priority>1.0</priority><changefreq>daily</changefreq><lastmod>2025-01-01</lastmod></url></urlset>
//! ```

use crate::entry::LinkEntry;
use std::borrow::Cow;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render every entry under `domain` into one sitemap document.
///
/// Each `<loc>` is `domain + "/" + entry.loc` with no further normalization.
/// Child elements come in the order loc, priority, changefreq, lastmod and
/// are omitted when the entry has no value for them.
pub fn render(domain: &str, entries: &[LinkEntry]) -> String {
    let mut xml = String::with_capacity(128 + entries.len() * 160);

    xml.push_str(XML_DECLARATION);
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">");

    for entry in entries {
        xml.push_str("<url><loc>");
        xml.push_str(&escape_text(domain));
        xml.push('/');
        xml.push_str(&escape_text(&entry.loc));
        xml.push_str("</loc>");
        if let Some(priority) = &entry.priority {
            push_element(&mut xml, "priority", priority.as_str());
        }
        if let Some(changefreq) = &entry.changefreq {
            push_element(&mut xml, "changefreq", changefreq.as_str());
        }
        if let Some(lastmod) = &entry.lastmod {
            push_element(&mut xml, "lastmod", lastmod);
        }
        xml.push_str("</url>");
    }

    xml.push_str("</urlset>");
    xml
}

fn push_element(xml: &mut String, name: &str, text: &str) {
    xml.push('<');
    xml.push_str(name);
    xml.push('>');
    xml.push_str(&escape_text(text));
    xml.push_str("</");
    xml.push_str(name);
    xml.push('>');
}

/// Escape the characters that would break element text content.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    )
}
