//! Fixed remote URL and destination path for the bundled UCD asset.

use std::path::{Path, PathBuf};

/// Latest published Derived Core Properties data file from the Unicode
/// Consortium.
pub const REMOTE_URL: &str =
    "https://www.unicode.org/Public/UCD/latest/ucd/DerivedCoreProperties.txt";

/// Destination, relative to the crate root. The parent directories are part
/// of the checked-in asset tree.
pub const ASSET_SUBPATH: &str = "assets/unicode/DerivedCoreProperties.txt";

/// Absolute destination path: [`ASSET_SUBPATH`] under the crate root,
/// captured at build time.
pub fn destination() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(ASSET_SUBPATH)
}
