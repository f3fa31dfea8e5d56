//! Where a metadata table is read from.

use std::{convert::Infallible, fmt, fs::read, path::PathBuf, str::FromStr};

use fontdecl_metadata::FontTable;
use log::info;
use reqwest::blocking::get;

use crate::error::{Error, Result};

/// A local metadata file or an `http(s)` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    File(PathBuf),
    Url(String),
}

impl TableSource {
    /// Read the raw table bytes. URLs are fetched once, blocking.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::File(path) => {
                read(path).map_err(|source| Error::ReadTable { path: path.clone(), source })
            }
            Self::Url(url) => fetch_bytes(url),
        }
    }

    /// Read and parse the table.
    pub fn load(&self) -> Result<FontTable> {
        let data = self.read()?;
        let table = FontTable::from_slice(&data)?;
        info!("Loaded {} families from {self}", table.len());
        Ok(table)
    }
}

impl FromStr for TableSource {
    type Err = Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(Self::Url(value.to_owned()))
        } else {
            Ok(Self::File(PathBuf::from(value)))
        }
    }
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

pub(crate) fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    info!("Fetching {url}");
    let fetch_error = |source: reqwest::Error| Error::Fetch { url: url.to_owned(), source };

    let response = get(url).map_err(fetch_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus { url: url.to_owned(), status: status.as_u16() });
    }

    let bytes = response.bytes().map_err(fetch_error)?;
    let size_kb = bytes.len() as f64 / 1024.0;
    info!("Fetched {url} ({size_kb:.1} KB)");
    Ok(bytes.to_vec())
}
