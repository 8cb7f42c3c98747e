use crate::{error, warn};

use anyhow::{bail, Context, Result};
use console::style;
use nom::{
    branch::alt,
    character::complete::{char, space0},
    combinator::eof,
    error::ErrorKind,
    IResult, InputTakeAtPosition,
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// The list of packages the user explicitly wants to keep
#[derive(Default, Debug)]
pub struct Wishlist {
    lines: Vec<WishlistLine>,
}

impl Wishlist {
    pub fn from_file(path: &Path) -> Result<Self> {
        let f = File::open(path)
            .with_context(|| format!("Failed to open wishlist at {}", path.display()))?;
        Wishlist::from_reader(BufReader::new(f))
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut res = Wishlist::default();
        for line in parse_wishlist_lines(reader)? {
            if let WishlistLine::PkgRequest(name) = &line {
                if res.contains(name) {
                    // Harmless, but probably not what the user meant
                    warn!("{} is listed more than once in wishlist", style(name).bold());
                }
            }
            res.lines.push(line);
        }

        Ok(res)
    }

    /// Get requested package names, in the order they are written
    pub fn get_pkg_requests(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                WishlistLine::PkgRequest(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn contains(&self, pkgname: &str) -> bool {
        self.get_pkg_requests().contains(&pkgname)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
enum WishlistLine {
    PkgRequest(String),
    Comment(String),
    EmptyLine,
}

fn parse_wishlist_lines(reader: impl BufRead) -> Result<Vec<WishlistLine>> {
    let mut res = Vec::new();
    let mut errors = 0;
    for (no, line) in reader.lines().enumerate() {
        let i = line?;
        match alt((empty_line, comment_line, package_line))(i.as_str()) {
            Ok((_, content)) => {
                res.push(content);
            }
            Err(e) => {
                errors += 1;
                error!("Failed to parse wishlist at line {}: {}", no + 1, e);
            }
        };
    }

    if errors == 0 {
        Ok(res)
    } else {
        bail!("Failed to parse wishlist due to {} error(s)", errors)
    }
}

fn empty_line(i: &str) -> IResult<&str, WishlistLine> {
    let (i, _) = space0(i)?;
    let (i, _) = eof(i)?;
    Ok((i, WishlistLine::EmptyLine))
}

fn comment_line(i: &str) -> IResult<&str, WishlistLine> {
    let (i, _) = space0(i)?;
    let (_, _) = char('#')(i)?;
    Ok(("", WishlistLine::Comment(i[1..].to_string())))
}

fn is_pkgname_char(c: char) -> bool {
    c.is_alphanumeric() || c == '@' || c == '.' || c == '+' || c == '-' || c == '_'
}

fn package_name(i: &str) -> IResult<&str, &str> {
    i.split_at_position1_complete(|item| !is_pkgname_char(item), ErrorKind::Char)
}

fn package_line(i: &str) -> IResult<&str, WishlistLine> {
    let (i, _) = space0(i)?;
    let (i, name) = package_name(i)?;
    let (i, _) = space0(i)?;
    let (i, _) = eof(i)?;

    Ok((i, WishlistLine::PkgRequest(name.to_string())))
}
