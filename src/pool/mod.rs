mod error;
pub mod source;
pub use error::PoolError;

use crate::{debug, types::Package};

use std::collections::HashMap;

/// All installed packages, indexed by name and by what they provide
///
/// Packages live in `pkgs` and are referred to by their position in it.
#[derive(Default, Debug)]
pub struct InstalledPool {
    pkgs: Vec<Package>,
    name_to_id: HashMap<String, usize>,
    // Providers of each virtual name, in insertion order
    provide_to_ids: HashMap<String, Vec<usize>>,
}

impl InstalledPool {
    pub fn new() -> Self {
        InstalledPool::default()
    }

    /// Add a package to the pool
    pub fn add(&mut self, pkg: Package) -> Result<(), PoolError> {
        if let Some(&existing) = self.name_to_id.get(pkg.name()) {
            return Err(PoolError::DuplicateName {
                name: pkg.name().to_owned(),
                existing: self.pkgs[existing].to_string(),
                duplicate: pkg.to_string(),
            });
        }

        let id = self.pkgs.len();
        self.name_to_id.insert(pkg.name().to_owned(), id);
        for provide in pkg.provides() {
            self.provide_to_ids
                .entry(provide.clone())
                .or_default()
                .push(id);
        }
        self.pkgs.push(pkg);

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pkgs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pkgs.is_empty()
    }

    pub fn get_pkg_by_name(&self, name: &str) -> Option<&Package> {
        self.name_to_id.get(name).map(|id| &self.pkgs[*id])
    }

    /// Get all packages that provide the given name
    pub fn get_providers(&self, name: &str) -> Vec<&Package> {
        match self.provide_to_ids.get(name) {
            Some(ids) => ids.iter().map(|id| &self.pkgs[*id]).collect(),
            None => Vec::new(),
        }
    }

    /// Iterate over all packages in insertion order
    pub fn pkg_iter(&self) -> impl Iterator<Item = &Package> + '_ {
        self.pkgs.iter()
    }

    /// Mark a package and everything it depends on as wanted
    ///
    /// `name` can be either a package name or a name provided by some packages,
    /// in which case all the providers are marked. Returns `Ok(false)` if
    /// nothing installed answers to `name`.
    pub fn mark_wanted_by_name(&mut self, name: &str) -> Result<bool, PoolError> {
        let mut stack: Vec<Step> = match self.resolve(name) {
            Some(ids) => ids.iter().rev().map(|&id| Step::Visit(id)).collect(),
            None => return Ok(false),
        };

        // Walk with our own stack, dependency chains can get deep. A dependency
        // is walked to the end before the next one of the same package is looked at.
        while let Some(step) = stack.pop() {
            match step {
                Step::Visit(id) => {
                    if self.pkgs[id].is_wanted() {
                        // Already visited, this is what breaks cycles
                        continue;
                    }
                    self.pkgs[id].mark_wanted();
                    stack.push(Step::Depends { id, next: 0 });
                }
                Step::Depends { id, next } => {
                    let pkg = &self.pkgs[id];
                    let dep = match pkg.depends().get(next) {
                        Some(dep) => dep,
                        None => continue,
                    };
                    let ids = self.resolve(dep).ok_or_else(|| {
                        PoolError::UnresolvedDependency {
                            dependency: dep.clone(),
                            required_by: pkg.name().to_owned(),
                        }
                    })?;

                    stack.push(Step::Depends { id, next: next + 1 });
                    // Reversed, so providers are visited in insertion order
                    stack.extend(ids.iter().rev().map(|&id| Step::Visit(id)));
                }
            }
        }

        Ok(true)
    }

    /// Get every package that hasn't been marked as wanted, in insertion order
    pub fn get_unwanted(&self) -> Vec<&Package> {
        self.pkgs.iter().filter(|pkg| !pkg.is_wanted()).collect()
    }

    /// Find the packages answering to a name: the package with this exact
    /// name if installed, all providers of it otherwise
    fn resolve(&self, name: &str) -> Option<&[usize]> {
        if let Some(id) = self.name_to_id.get(name) {
            return Some(std::slice::from_ref(id));
        }

        match self.provide_to_ids.get(name) {
            Some(ids) if !ids.is_empty() => {
                debug!("{name} is provided by {} package(s)", ids.len());
                Some(ids.as_slice())
            }
            _ => None,
        }
    }
}

/// Pending work of `mark_wanted_by_name`
enum Step {
    // Mark a package and start on its dependencies
    Visit(usize),
    // Resolve dependency number `next` of a wanted package
    Depends { id: usize, next: usize },
}
