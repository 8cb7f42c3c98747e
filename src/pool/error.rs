use thiserror::Error;

/// Inconsistencies in the installed package set. None of them can be worked around.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PoolError {
    #[error("Package name {name} is duplicated: {existing} and {duplicate}")]
    DuplicateName {
        name: String,
        existing: String,
        duplicate: String,
    },
    #[error("{dependency} required by {required_by} is neither installed nor provided by any package")]
    UnresolvedDependency {
        dependency: String,
        required_by: String,
    },
}
