use std::path;

use crate::error::*;

/// Create a `_folio.yml` holding the built-in portfolio values
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Target directory
    #[arg(default_value = "./")]
    directory: path::PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let file = folio::create_new_project(&self.directory)?;
        log::info!("Created new project at {}", self.directory.display());
        log::debug!("Wrote {}", file.display());

        Ok(())
    }
}
