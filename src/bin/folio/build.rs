use std::path;

use crate::args;
use crate::error::*;

/// Write the validated config as the front-end's app config
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct BuildArgs {
    /// Destination folder [default: _site]
    #[arg(short, long, value_name = "DIR")]
    pub(crate) destination: Option<path::PathBuf>,

    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl BuildArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let (config, site) = self.config.load_site()?;
        let dest = self
            .destination
            .clone()
            .unwrap_or_else(|| config.destination_path());

        let file = folio::write_app_config(site, &dest)?;
        log::info!("Wrote {}", file.display());

        Ok(())
    }
}

/// Validate the config, reporting every problem found
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        match folio::SiteConfig::from_config(config) {
            Ok(_) => {
                log::info!("Site config is valid");
                Ok(())
            }
            Err(errors) => {
                for error in errors.iter() {
                    log::error!("{error}");
                }
                anyhow::bail!("Site config has {} problem(s)", errors.len());
            }
        }
    }
}
