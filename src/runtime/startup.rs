use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::client::{HttpShortenerApi, ShortenerApi};
use crate::config::ApiConfig;

/// Build the HTTP backend client
///
/// `base_url_override` comes from `--base-url` and wins over the configuration.
pub fn prepare_api(
    config: &ApiConfig,
    base_url_override: Option<&str>,
) -> Result<Arc<dyn ShortenerApi>> {
    let base_url = base_url_override.unwrap_or(&config.base_url);
    debug!(
        "Preparing backend client (base_url={}, timeout={:?})",
        base_url,
        config.timeout()
    );

    let api = HttpShortenerApi::new(base_url, config.timeout())
        .with_context(|| format!("Invalid backend base URL: {}", base_url))?;
    info!("Using backend: {}", api.base_url());
    Ok(Arc::new(api))
}
