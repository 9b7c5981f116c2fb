//! Handing URLs to the user's default external handler.

use studio_common::{PlatformError, EXTERNAL_SCHEMES};
use tracing::info;
use url::Url;

/// Parse and vet a URL before it leaves the process.
pub fn parse_external_url(raw: &str) -> Result<Url, PlatformError> {
    let url = Url::parse(raw.trim()).map_err(|e| PlatformError::InvalidUrl(format!("{raw}: {e}")))?;
    if !EXTERNAL_SCHEMES.contains(&url.scheme()) {
        return Err(PlatformError::InvalidUrl(format!(
            "scheme '{}' is not allowed",
            url.scheme()
        )));
    }
    Ok(url)
}

/// Opens URLs outside the application (default browser, mail client).
pub trait ExternalOpener: Send + Sync {
    fn open(&self, url: &Url) -> Result<(), PlatformError>;
}

/// Opens URLs with the operating system's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, url: &Url) -> Result<(), PlatformError> {
        info!(url = %url, "opening externally");
        open::that(url.as_str()).map_err(|e| PlatformError::ExternalOpen(e.to_string()))
    }
}
