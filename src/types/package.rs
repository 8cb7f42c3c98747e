use lazy_static::lazy_static;
use regex::Regex;
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Package metadata as read from the local database, before any normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PkgRecord {
    pub name: String,
    pub version: String,
    pub description: String,
    pub depends: Vec<String>,
    pub provides: Vec<String>,
    // Where this record comes from, for diagnostics
    pub desc_path: Option<PathBuf>,
}

/// An installed package
///
/// Everything but the `wanted` flag is fixed at construction. `depends` and
/// `provides` hold bare names: version requirements are dropped, since we
/// only care about whether something is installed at all.
#[derive(Debug, Clone)]
pub struct Package {
    name: String,
    version: String,
    description: String,
    depends: Vec<String>,
    provides: Vec<String>,
    desc_path: Option<PathBuf>,
    wanted: bool,
}

impl Package {
    pub fn new(record: PkgRecord) -> Self {
        Package {
            name: record.name,
            version: record.version,
            description: record.description,
            depends: strip_versions(record.depends),
            provides: strip_versions(record.provides),
            desc_path: record.desc_path,
            wanted: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn depends(&self) -> &[String] {
        &self.depends
    }

    pub fn provides(&self) -> &[String] {
        &self.provides
    }

    pub fn desc_path(&self) -> Option<&Path> {
        self.desc_path.as_deref()
    }

    pub fn is_wanted(&self) -> bool {
        self.wanted
    }

    /// Flip the wanted flag. There's no way back.
    pub fn mark_wanted(&mut self) {
        self.wanted = true;
    }
}

impl From<PkgRecord> for Package {
    fn from(record: PkgRecord) -> Self {
        Package::new(record)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.version())?;
        if let Some(path) = self.desc_path() {
            write!(f, " ({})", path.display())?;
        }
        Ok(())
    }
}

/// Cut a dependency or provide entry at its version requirement
///
/// `foo>=1.2` and `foo=1.2-1` both become `foo`. A comparator only counts
/// when something follows it, so a trailing `=` is kept as is.
pub fn strip_version(s: &str) -> &str {
    lazy_static! {
        static ref VERSION_SUFFIX: Regex = Regex::new("[<>=]{1,2}.+$").unwrap();
    }

    match VERSION_SUFFIX.find(s) {
        Some(m) => &s[..m.start()],
        None => s,
    }
}

fn strip_versions(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| strip_version(&item).to_owned())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_strip_version() {
        let t = vec![
            ("foo", "foo"),
            ("foo>=1.2.3", "foo"),
            ("foo=1.0", "foo"),
            ("foo<2", "foo"),
            ("foo>2", "foo"),
            ("foo<=2:1.0-3", "foo"),
            ("libfoo.so=1-64", "libfoo.so"),
            ("a=b=c", "a"),
            // Nothing after the comparator, nothing to strip
            ("foo=", "foo="),
            ("foo>=", "foo"),
            ("", ""),
        ];

        for (input, expected) in t {
            assert_eq!(strip_version(input), expected, "stripping {input}");
        }
    }

    #[test]
    fn construction_strips_versions() {
        let pkg = Package::new(PkgRecord {
            name: "python-requests".to_string(),
            version: "2.31.0-1".to_string(),
            description: "Python HTTP for Humans".to_string(),
            depends: vec![
                "python-urllib3>=1.21.1".to_string(),
                "python-idna".to_string(),
                "python-idna".to_string(),
            ],
            provides: vec!["python-requests-compat=2".to_string()],
            desc_path: None,
        });

        assert_eq!(pkg.name(), "python-requests");
        assert_eq!(pkg.version(), "2.31.0-1");
        assert_eq!(pkg.description(), "Python HTTP for Humans");
        // Order and duplicates are kept
        assert_eq!(
            pkg.depends(),
            &["python-urllib3", "python-idna", "python-idna"]
        );
        assert_eq!(pkg.provides(), &["python-requests-compat"]);
        assert!(!pkg.is_wanted());
    }

    #[test]
    fn wanted_is_one_way() {
        let mut pkg = Package::from(PkgRecord {
            name: "a".to_string(),
            ..Default::default()
        });
        pkg.mark_wanted();
        pkg.mark_wanted();
        assert!(pkg.is_wanted());
    }

    #[test]
    fn display() {
        let mut record = PkgRecord {
            name: "bash".to_string(),
            version: "5.2.026-2".to_string(),
            ..Default::default()
        };
        assert_eq!(Package::new(record.clone()).to_string(), "bash 5.2.026-2");

        record.desc_path = Some(PathBuf::from("/var/lib/pacman/local/bash-5.2.026-2/desc"));
        assert_eq!(
            Package::new(record).to_string(),
            "bash 5.2.026-2 (/var/lib/pacman/local/bash-5.2.026-2/desc)"
        );
    }
}
