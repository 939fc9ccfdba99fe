//! ucd-update: refreshes the bundled Unicode DerivedCoreProperties.txt asset.
//!
//! One blocking GET against a fixed URL, then a truncate-and-replace write of
//! the response body to a fixed path under the asset tree. No retries, no
//! content validation, no configuration.

pub mod asset;
pub mod fetch;
pub mod logging;
pub mod storage;

use anyhow::Result;
use std::path::Path;

/// Fetches `url` and writes the response body to `dest`, replacing any
/// previous content. The destination is not touched unless a response is
/// obtained. Returns the number of bytes written.
pub fn update(url: &str, dest: &Path) -> Result<u64> {
    tracing::info!("fetching {}", url);
    let fetched = fetch::fetch(url)?;
    if !(200..300).contains(&fetched.status) {
        // Body is still written below; the stored asset may now hold an
        // error page instead of the data file.
        tracing::warn!(
            "GET {} returned HTTP {}, writing body anyway",
            url,
            fetched.status
        );
    }
    let written = storage::write_asset(dest, &fetched.body)?;
    tracing::info!(
        "wrote {} bytes (HTTP {}) to {}",
        written,
        fetched.status,
        dest.display()
    );
    Ok(written)
}
