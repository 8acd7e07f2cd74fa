//! CSV output.
//!
//! Files start with a UTF-8 byte order mark and end records with CRLF, which
//! is what spreadsheet applications expect of Hanzi CSV files.

use crate::error::{ErrorKind, Result};
use crate::table::Table;
use exn::ResultExt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::instrument;

const BYTE_ORDER_MARK: &[u8] = "\u{FEFF}".as_bytes();

/// Writes `table` into `dir` under its own name, replacing any existing file.
/// Returns the path written.
#[instrument(skip(table), fields(table = table.name(), rows = table.len()))]
pub fn write_table(table: &Table, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(table.name());
    let raise = || ErrorKind::Write(path.clone());
    fs::create_dir_all(dir).or_raise(|| ErrorKind::Write(dir.to_path_buf()))?;
    let mut file = File::create(&path).or_raise(raise)?;
    file.write_all(BYTE_ORDER_MARK).or_raise(raise)?;
    let mut writer = csv::WriterBuilder::new().terminator(csv::Terminator::CRLF).from_writer(file);
    writer.write_record(table.headers()).or_raise(raise)?;
    for row in table.rows() {
        writer.write_record(row).or_raise(raise)?;
    }
    writer.flush().or_raise(raise)?;
    tracing::debug!(path = %path.display(), "Wrote table");
    Ok(path)
}
