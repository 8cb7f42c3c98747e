pub mod config;
mod package;

pub use package::{Package, PkgRecord};
