pub mod pacdb;

use super::InstalledPool;
use crate::{debug, types::Package};

use anyhow::{bail, Context, Result};
use std::{fs, path::Path};

/// Load every package recorded in a pacman local database directory
pub fn create_pool(db_root: &Path) -> Result<InstalledPool> {
    if !db_root.is_dir() {
        bail!(
            "Invalid local database: {} is not a dir",
            db_root.display()
        );
    }

    let mut desc_paths = Vec::new();
    for entry in fs::read_dir(db_root)
        .with_context(|| format!("Failed to list {}", db_root.display()))?
    {
        let path = entry?.path();
        let desc_path = path.join("desc");
        if path.is_dir() && desc_path.is_file() {
            desc_paths.push(desc_path);
        } else {
            // ALPM_DB_VERSION and friends
            debug!("Skipping {}", path.display());
        }
    }
    // read_dir gives no ordering guarantee
    desc_paths.sort();

    let mut pool = InstalledPool::new();
    for desc_path in desc_paths {
        let record = pacdb::read_desc(&desc_path)?;
        pool.add(Package::from(record))?;
    }
    debug!(
        "Loaded {} package(s) from {}",
        pool.len(),
        db_root.display()
    );

    Ok(pool)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pool::PoolError;

    fn write_pkg(db: &Path, dir: &str, desc: &str) {
        let pkg_dir = db.join(dir);
        fs::create_dir_all(&pkg_dir).unwrap();
        fs::write(pkg_dir.join("desc"), desc).unwrap();
        fs::write(pkg_dir.join("files"), "%FILES%\nusr/\n").unwrap();
    }

    #[test]
    fn load_db() {
        let tmp = tempfile::tempdir().unwrap();
        let db = tmp.path();
        fs::write(db.join("ALPM_DB_VERSION"), "9\n").unwrap();
        fs::create_dir(db.join("leftover")).unwrap();
        write_pkg(
            db,
            "zsh-5.9-5",
            "%NAME%\nzsh\n\n%VERSION%\n5.9-5\n\n%DESC%\nA very advanced shell\n\n%DEPENDS%\npcre2\n",
        );
        write_pkg(
            db,
            "pcre2-10.43-1",
            "%NAME%\npcre2\n\n%VERSION%\n10.43-1\n\n%DESC%\nPerl compatible regexes\n\n%PROVIDES%\nlibpcre2-8.so=0-64\n",
        );

        let pool = create_pool(db).unwrap();
        let names: Vec<&str> = pool.pkg_iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["pcre2", "zsh"]);

        let pcre2 = pool.get_pkg_by_name("pcre2").unwrap();
        assert_eq!(pcre2.provides(), &["libpcre2-8.so"]);
        assert_eq!(pcre2.desc_path(), Some(db.join("pcre2-10.43-1/desc").as_path()));
        assert_eq!(pool.get_pkg_by_name("zsh").unwrap().depends(), &["pcre2"]);
    }

    #[test]
    fn duplicate_package() {
        let tmp = tempfile::tempdir().unwrap();
        let db = tmp.path();
        let desc = "%NAME%\nfoo\n\n%VERSION%\n1-1\n\n%DESC%\nfoo\n";
        write_pkg(db, "foo-1-1", desc);
        write_pkg(db, "foo-1-2", desc);

        let err = create_pool(db).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PoolError>(),
            Some(PoolError::DuplicateName { name, .. }) if name == "foo"
        ));
    }

    #[test]
    fn broken_desc() {
        let tmp = tempfile::tempdir().unwrap();
        write_pkg(tmp.path(), "foo-1-1", "%NAME%\nfoo\n\n%NAME%\nbar\n");

        let err = create_pool(tmp.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }

    #[test]
    fn missing_db() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(create_pool(&tmp.path().join("nope")).is_err());
    }
}
