//! Destination file writing for the fetched asset.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `body` to `path`, truncating and replacing any existing content.
///
/// The parent directory must already exist; it belongs to the checked-in
/// asset tree and is not created here. Returns the number of bytes written.
pub fn write_asset(path: &Path, body: &[u8]) -> Result<u64> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to open destination file: {}", path.display()))?;
    file.write_all(body)
        .with_context(|| format!("failed to write {}", path.display()))?;
    file.sync_all()
        .with_context(|| format!("failed to sync {}", path.display()))?;
    Ok(body.len() as u64)
}
