use crate::build::BuildError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const UCD_ZIP: &str = "https://www.unicode.org/Public/zipped/15.1.0/UCD.zip";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("{}: {source}\nDownload from {url} and unzip.", .path.display(), url = UCD_ZIP)]
    Read { path: PathBuf, source: io::Error },

    #[error("{file} line {line} is unexpected:\n{text}")]
    Parse {
        file: &'static str,
        line: usize,
        text: String,
    },

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}
