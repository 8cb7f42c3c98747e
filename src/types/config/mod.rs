mod wishlist;
pub use wishlist::Wishlist;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Settings that can live in a config file. Command line options win.
#[derive(Deserialize, Serialize, Default, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub db_path: Option<PathBuf>,
    pub wishlist: Option<PathBuf>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let config = toml::from_str(&data).context("Failed to parse config file")?;
        Ok(config)
    }
}

#[derive(Parser, Debug)]
#[clap(about, version)]
pub struct Opts {
    #[clap(long, default_value = "/", help = "Root directory for operation")]
    pub root: PathBuf,
    #[clap(
        long,
        help = "Position of the local package database, relative to root [default: var/lib/pacman/local]"
    )]
    pub db_path: Option<PathBuf>,
    #[clap(long, help = "File listing the packages you want [default: wanted.txt]")]
    pub wishlist: Option<PathBuf>,
    #[clap(long, help = "Read database and wishlist locations from a TOML file")]
    pub config: Option<PathBuf>,
    #[clap(short, long, help = "Print additional debug information")]
    pub verbose: bool,
}

/// Where to find the inputs of this run
#[derive(Debug, PartialEq, Eq)]
pub struct Paths {
    pub db: PathBuf,
    pub wishlist: PathBuf,
}

impl Opts {
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::from_file(path),
            None => Ok(Config::default()),
        }
    }

    pub fn resolve_paths(&self, config: &Config) -> Paths {
        let db = self
            .db_path
            .as_ref()
            .or(config.db_path.as_ref())
            .cloned()
            .unwrap_or_else(|| PathBuf::from(crate::DB_PATH));
        let wishlist = self
            .wishlist
            .as_ref()
            .or(config.wishlist.as_ref())
            .cloned()
            .unwrap_or_else(|| PathBuf::from(crate::WISHLIST_PATH));

        Paths {
            // An absolute db_path replaces root altogether
            db: self.root.join(db),
            wishlist,
        }
    }
}
