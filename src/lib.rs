//! Build sitemaps.org 0.9 XML sitemaps from a list of links.
//!
//! ```no_run
//! use sitemap_builder::SitemapBuilder;
//!
//! let mut sitemap = SitemapBuilder::new(None)
//!     .set_domain("https://example.com")
//!     .set_changefreq("weekly")
//!     .add_link("about")
//!     .add_link("contact")
//!     .build();
//!
//! println!("{}", sitemap.get());
//! sitemap.save("sitemap.xml");
//! ```

pub mod builder;
pub mod config;
pub mod entry;
pub mod filter;
pub mod render;
pub mod storage;
pub mod utils;

// Re-export commonly used types for convenience
pub use builder::{NOT_BUILT, SitemapBuilder};
pub use config::{Defaults, SitemapManifest};
pub use entry::{ChangeFreq, LinkEntry, LinkOptions, Priority};
pub use storage::{FileStorage, MemoryStorage, Storage};
