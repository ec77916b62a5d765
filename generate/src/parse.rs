use crate::error::GenerateError;
use std::fs;
use std::path::{Path, PathBuf};

pub const UNICODE_DATA: &str = "UnicodeData.txt";
pub const EAST_ASIAN_WIDTH: &str = "EastAsianWidth.txt";
pub const EMOJI_DATA: &str = "emoji-data.txt";

/// Contents of the three UCD files the tables are derived from.
pub struct Ucd {
    pub unicode_data: String,
    pub east_asian_width: String,
    pub emoji_data: String,
}

/// One data line of a UCD property file: `lo..hi ; value # comment`.
#[derive(Debug, PartialEq)]
pub struct Line<'a> {
    pub lo: u32,
    pub hi: u32,
    pub value: &'a str,
    pub comment: &'a str,
}

pub fn read_ucd(ucd_dir: &Path) -> Result<Ucd, GenerateError> {
    let emoji_dir = ucd_dir.join("emoji");
    let emoji_path = if emoji_dir.join(EMOJI_DATA).is_file() {
        emoji_dir.join(EMOJI_DATA)
    } else {
        ucd_dir.join(EMOJI_DATA)
    };
    Ok(Ucd {
        unicode_data: read(ucd_dir.join(UNICODE_DATA))?,
        east_asian_width: read(ucd_dir.join(EAST_ASIAN_WIDTH))?,
        emoji_data: read(emoji_path)?,
    })
}

fn read(path: PathBuf) -> Result<String, GenerateError> {
    log::debug!("reading {}", path.display());
    fs::read_to_string(&path).map_err(|source| GenerateError::Read { path, source })
}

/// General category of every range listed in UnicodeData.txt. The
/// `<..., First>` and `<..., Last>` rows of large blocks are joined into a
/// single range.
pub fn general_categories(contents: &str) -> Result<Vec<(u32, u32, &str)>, GenerateError> {
    let mut categories = Vec::new();
    let mut first = None;
    for (i, line) in contents.lines().enumerate() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let unexpected = || GenerateError::Parse {
            file: UNICODE_DATA,
            line: i + 1,
            text: line.to_owned(),
        };
        let mut fields = line.split(';');
        let (codepoint, name, category) = match (fields.next(), fields.next(), fields.next()) {
            (Some(codepoint), Some(name), Some(category)) => (codepoint, name, category.trim()),
            _ => return Err(unexpected()),
        };
        let codepoint = parse_codepoint(codepoint.trim()).ok_or_else(unexpected)?;
        if name.ends_with(", First>") {
            first = Some(codepoint);
        } else if name.ends_with(", Last>") {
            let lo = first.take().ok_or_else(unexpected)?;
            categories.push((lo, codepoint, category));
        } else {
            categories.push((codepoint, codepoint, category));
        }
    }
    Ok(categories)
}

/// Data lines of a `;`-separated property file such as EastAsianWidth.txt
/// or emoji-data.txt.
pub fn property_lines<'a>(
    filename: &'static str,
    contents: &'a str,
) -> Result<Vec<Line<'a>>, GenerateError> {
    let mut lines = Vec::new();
    for (i, line) in contents.lines().enumerate() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let parsed = parse_line(line).ok_or_else(|| GenerateError::Parse {
            file: filename,
            line: i + 1,
            text: line.to_owned(),
        })?;
        lines.push(parsed);
    }
    Ok(lines)
}

fn parse_line(line: &str) -> Option<Line> {
    let (mut codepoint, rest) = line.split_once(';')?;

    let (lo, hi);
    codepoint = codepoint.trim();
    if let Some((a, b)) = codepoint.split_once("..") {
        lo = parse_codepoint(a)?;
        hi = parse_codepoint(b)?;
    } else {
        lo = parse_codepoint(codepoint)?;
        hi = lo;
    }

    let (value, comment) = rest.split_once('#').unwrap_or((rest, ""));
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(Line {
        lo,
        hi,
        value,
        comment: comment.trim(),
    })
}

fn parse_codepoint(s: &str) -> Option<u32> {
    u32::from_str_radix(s, 16).ok()
}

/// Emoji version from an emoji-data.txt comment such as `E0.6 [1] (⌚)`.
/// Reserved codepoints carry no version and report `(0, 0)`.
pub fn emoji_version(comment: &str) -> (u32, u32) {
    let version = comment
        .strip_prefix('E')
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|version| version.split_once('.'));
    match version {
        Some((major, minor)) => match (major.parse(), minor.parse()) {
            (Ok(major), Ok(minor)) => (major, minor),
            _ => (0, 0),
        },
        None => (0, 0),
    }
}
