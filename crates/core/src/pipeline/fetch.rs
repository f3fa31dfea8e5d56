use std::path::Path;

use fontdecl_metadata::FontTable;
use log::info;

use crate::{error::Result, io::OutputFile, source::fetch_bytes};

/// Download a metadata table and store it at `output`.
///
/// Returns the family count.
pub fn fetch(url: &str, output: &Path) -> Result<usize> {
    let data = fetch_bytes(url)?;
    let table = store_table(&data, output)?;

    let size_mb = data.len() as f64 / 1024.0 / 1024.0;
    info!("Saved {} families to {} ({size_mb:.2} MB)", table.len(), output.display());
    Ok(table.len())
}

/// Write `data` to `output` if it parses as a table.
///
/// A body that does not parse never replaces a good local copy.
fn store_table(data: &[u8], output: &Path) -> Result<FontTable> {
    let table = FontTable::from_slice(data)?;
    OutputFile::new(output).write_atomic(data)?;
    Ok(table)
}
