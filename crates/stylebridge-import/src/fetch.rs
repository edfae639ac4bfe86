//! One-shot fetch of the upstream configuration source.

use crate::ImportError;

/// Upstream source of truth for the rule tables.
pub const DEFAULT_CONFIG_URL: &str =
    "https://raw.githubusercontent.com/StyleCI/Config/master/src/Config.php";

/// Download the upstream config source.
///
/// Maintenance-only path: blocking, no retry, any failure is fatal to the
/// update command.
pub fn fetch_config_source(url: &str) -> Result<String, ImportError> {
    let client = reqwest::blocking::Client::new();
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(ImportError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.text()?)
}
