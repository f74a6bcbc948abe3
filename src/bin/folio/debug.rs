use crate::args;
use crate::error::*;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the validated config
    Config {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints the app config handed to the front-end
    AppConfig {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints the accepted theme color names
    Colors {
        /// Only list colors accepted for `theme.neutral`
        #[arg(long)]
        neutral: bool,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let (_, site) = config.load_site()?;
                print!("{site}");
            }
            Self::AppConfig { config } => {
                let (_, site) = config.load_site()?;
                let app_config = folio::app_config(site);
                println!("{}", serde_json::to_string_pretty(&app_config)?);
            }
            Self::Colors { neutral } => {
                let names = if *neutral {
                    folio::site_model::NeutralColor::variants()
                } else {
                    folio::site_model::ThemeColor::variants()
                };
                for name in names {
                    println!("{name}");
                }
            }
        }

        Ok(())
    }
}
