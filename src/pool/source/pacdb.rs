//! The pacman local db reader
use crate::{types::PkgRecord, utils::pacparse};

use anyhow::{bail, format_err, Context, Result};
use std::{collections::HashMap, fs, path::Path};

/// Read a `desc` file of an installed package
pub fn read_desc(path: &Path) -> Result<PkgRecord> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let fields = pacparse::parse_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    fields_to_record(fields, path)
}

fn fields_to_record(mut f: HashMap<String, Vec<String>>, path: &Path) -> Result<PkgRecord> {
    // Get name first, for error reporting
    let name = get_first_or_complain("NAME", &mut f).map_err(|e| {
        format_err!("bad metadata in {}: NAME missing ({e})", path.display())
    })?;
    let version = get_first_or_complain("VERSION", &mut f)
        .map_err(|e| format_err!("bad metadata for {name}: {e}"))?;
    // Some packages ship with an empty description
    let description = match f.remove("DESC") {
        Some(lines) => lines.into_iter().next().unwrap_or_default(),
        None => bail!("bad metadata for {name}: field DESC not found"),
    };

    Ok(PkgRecord {
        name,
        version,
        description,
        // It's fine to have nothing
        depends: f.remove("DEPENDS").unwrap_or_default(),
        provides: f.remove("PROVIDES").unwrap_or_default(),
        desc_path: Some(path.to_owned()),
    })
}

fn get_first_or_complain(name: &str, f: &mut HashMap<String, Vec<String>>) -> Result<String> {
    if let Some(mut values) = f.remove(name) {
        if values.len() == 1 {
            Ok(values.remove(0))
        } else {
            bail!("expect 1 value for {name}, found {}", values.len())
        }
    } else {
        bail!("field {name} not found")
    }
}
