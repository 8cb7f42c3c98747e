mod actions;
mod cli;
mod pool;
mod types;
mod utils;

use clap::Parser;
use lazy_static::lazy_static;
use types::config::Opts;

// Relative to root
pub const DB_PATH: &str = "var/lib/pacman/local";
// Relative to the current directory
pub const WISHLIST_PATH: &str = "wanted.txt";

// Initialize writer
lazy_static! {
    static ref WRITER: cli::Writer = cli::Writer::new();
}

/// Exit codes:
/// 1 => something is wrong with the inputs, see the error chain
fn main() {
    let opts = Opts::parse();
    cli::set_verbose(opts.verbose);

    if let Err(err) = actions::list_unwanted(&opts) {
        error!("{}", err.to_string());
        err.chain().skip(1).for_each(|cause| {
            due_to!("{}", cause);
        });
        std::process::exit(1);
    }
}
