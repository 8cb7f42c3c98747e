//! Parse pacman style package database files
use anyhow::{bail, Result};
use nom::{
    branch::alt,
    character::complete::{alphanumeric1, char, line_ending, not_line_ending},
    combinator::eof,
    IResult,
};
use std::collections::HashMap;

/// Parse the key part of a paragraph, like `%NAME%`
fn parse_key(i: &str) -> IResult<&str, &str> {
    let (i, _) = char('%')(i)?;
    let (i, key) = alphanumeric1(i)?;
    let (i, _) = char('%')(i)?;
    // There should be a newline after the key line, unless the file ends here
    let (i, _) = alt((line_ending, eof))(i)?;

    Ok((i, key))
}

/// Parse the value part of a paragraph that ends with an empty line or EOF
fn parse_value(mut i: &str) -> IResult<&str, Vec<String>> {
    let mut lines = Vec::new();
    while !i.is_empty() {
        let (x, content) = not_line_ending(i)?;
        let (x, _) = alt((line_ending, eof))(x)?;
        i = x;
        if content.is_empty() {
            break;
        }
        lines.push(content.to_owned());
    }
    Ok((i, lines))
}

/// Parse a key-value pair in pacman's package description syntax
fn parse_pair(i: &str) -> IResult<&str, (String, Vec<String>)> {
    let (i, key) = parse_key(i)?;
    let (i, lines) = parse_value(i)?;

    Ok((i, (key.to_owned(), lines)))
}

/// Parse a whole `desc` file into a map of section name to lines
pub fn parse_str(mut i: &str) -> Result<HashMap<String, Vec<String>>> {
    let mut res = HashMap::new();
    let mut counter = 0;
    loop {
        // Paragraphs may be separated by more than one empty line
        i = i.trim_start_matches(&['\n', '\r'][..]);
        if i.is_empty() {
            break;
        }
        match parse_pair(i) {
            Ok((x, (key, lines))) => {
                if res.contains_key(&key) {
                    bail!("duplicate section %{key}% on paragraph {counter}");
                }
                res.insert(key, lines);
                counter += 1;
                i = x;
            }
            Err(e) => {
                bail!("bad pacman database on paragraph {counter}: {e}");
            }
        }
    }
    Ok(res)
}
