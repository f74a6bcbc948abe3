use once_cell::sync::OnceCell;

use crate::error::*;
use crate::site_model::{SiteConfig, ValidationErrors};

static SITE: OnceCell<SiteConfig> = OnceCell::new();

/// The process-wide site config.
///
/// Built from the baked-in portfolio values on first use unless
/// [`init_site_config`] installed one earlier. Later calls return the same
/// instance, so the credits year is the one from the first call.
pub fn site_config() -> Result<&'static SiteConfig, ValidationErrors> {
    SITE.get_or_try_init(|| {
        log::debug!("Building site config from built-in defaults");
        SiteConfig::from_config(folio_config::Config::default())
    })
}

/// Install `site` as the process-wide site config.
///
/// Fails if a site config was already built or installed.
pub fn init_site_config(site: SiteConfig) -> Result<&'static SiteConfig> {
    SITE.try_insert(site)
        .map_err(|_| anyhow::format_err!("Site config was already initialized"))
}
