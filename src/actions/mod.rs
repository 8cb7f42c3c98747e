use crate::{
    debug, error, info,
    pool::{self, InstalledPool},
    success, warn,
    types::config::{Opts, Paths, Wishlist},
};

use anyhow::{bail, Context, Result};
use console::style;
use std::io::{self, Write};

/// Print installed packages that are neither wanted nor required by a wanted package
pub fn list_unwanted(opts: &Opts) -> Result<()> {
    let config = opts.load_config()?;
    let paths = opts.resolve_paths(&config);

    let pool = find_unwanted(&paths)?;

    let stdout = io::stdout();
    let count = write_unwanted(&pool, &mut stdout.lock())?;
    if count == 0 {
        success!("Every installed package is wanted!");
    } else {
        info!(
            "{} of {} installed package(s) can be removed.",
            count,
            pool.len()
        );
    }

    Ok(())
}

/// Load the database and mark everything reachable from the wishlist
pub fn find_unwanted(paths: &Paths) -> Result<InstalledPool> {
    debug!("Local database: {}", paths.db.display());
    debug!("Wishlist: {}", paths.wishlist.display());

    info!("Reading local package database...");
    let mut pool = pool::source::create_pool(&paths.db)
        .context("Failed to load local package database")?;
    if pool.is_empty() {
        warn!("No package found in {}", paths.db.display());
    }
    let wishlist = Wishlist::from_file(&paths.wishlist)?;

    info!("Resolving dependencies...");
    mark_wishlist(&mut pool, &wishlist)?;

    Ok(pool)
}

/// Every wishlist entry must be installed, either by name or as a provide
pub fn mark_wishlist(pool: &mut InstalledPool, wishlist: &Wishlist) -> Result<()> {
    let mut missing = 0;
    for name in wishlist.get_pkg_requests() {
        let found = pool
            .mark_wanted_by_name(name)
            .context("Installed packages are inconsistent")?;
        if !found {
            missing += 1;
            error!("{} is not installed", style(name).bold());
        } else if pool.get_pkg_by_name(name).is_none() {
            let providers: Vec<&str> = pool
                .get_providers(name)
                .into_iter()
                .map(|p| p.name())
                .collect();
            debug!("{} is provided by {}", name, providers.join(", "));
        }
    }

    if missing > 0 {
        bail!("{missing} package(s) in wishlist not installed");
    }
    Ok(())
}

/// Write one `name - description` line per unwanted package, return how many
pub fn write_unwanted(pool: &InstalledPool, out: &mut impl Write) -> Result<usize> {
    let unwanted = pool.get_unwanted();
    for pkg in &unwanted {
        writeln!(out, "{} - {}", pkg.name(), pkg.description())?;
    }
    Ok(unwanted.len())
}
