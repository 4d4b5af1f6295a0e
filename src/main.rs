use clap::Parser;
use sitemap_builder::SitemapManifest;
use sitemap_builder::utils;

mod args;
use args::Args;

fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let mut manifest = match &args.manifest {
        Some(path) => {
            ::log::info!("Loading manifest from {}", path.display());
            match SitemapManifest::from_file(path) {
                Ok(manifest) => manifest,
                Err(e) => {
                    ::log::error!("Failed to load manifest {}: {}", path.display(), e);
                    std::process::exit(1);
                }
            }
        }
        None => SitemapManifest::default(),
    };
    args.apply(&mut manifest);

    let output = manifest.output.clone();
    let builder = match manifest.into_builder(utils::today()) {
        Ok(builder) => builder,
        Err(e) => {
            ::log::error!("Invalid manifest: {}", e);
            std::process::exit(1);
        }
    };

    let mut sitemap = builder.build();
    if !sitemap.is_built() {
        ::log::warn!("No links given, nothing to build");
    }

    match output {
        Some(path) => {
            if !sitemap.save(&path) {
                ::log::error!("Could not write sitemap to {}", path.display());
                std::process::exit(1);
            }
            ::log::info!("Wrote {} urls to {}", sitemap.len(), path.display());
        }
        None => println!("{}", sitemap.get()),
    }
}
