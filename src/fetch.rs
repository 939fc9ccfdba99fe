//! Single blocking HTTP GET for the remote data file.
//!
//! Uses the curl crate (libcurl) to collect the full response body into
//! memory. Follows redirects. The response code is captured for reporting
//! but not validated; the caller receives whatever body the server sent.

use anyhow::{Context, Result};
use std::time::Duration;

/// Result of one GET: the final HTTP status and the raw body bytes.
#[derive(Debug)]
pub struct Fetched {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Performs a blocking GET and returns the full response body.
///
/// Fails only on transport-level errors (DNS, connect, timeout); a non-2xx
/// response is returned like any other, body intact.
pub fn fetch(url: &str) -> Result<Fetched> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(300))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let status = easy.response_code().context("no response code")?;
    Ok(Fetched { status, body })
}
