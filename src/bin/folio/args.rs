use std::env;
use std::io::Write;
use std::path;

use anyhow::Context as _;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _folio.yml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<folio_config::Config> {
        let config = if let Some(config_path) = self.config.as_deref() {
            folio_config::Config::from_file(config_path)
                .with_context(|| format!("Error reading config file {}", config_path.display()))?
        } else {
            let cwd = env::current_dir().unwrap_or_default();
            folio_config::Config::from_cwd(cwd)?
        };

        Ok(config)
    }

    /// Load, validate, and install the process-wide site config.
    pub(crate) fn load_site(&self) -> Result<(folio_config::Config, &'static folio::SiteConfig)> {
        let config = self.load_config()?;
        let site = folio::SiteConfig::from_config(config.clone())?;
        let site = folio::init_site_config(site)?;
        Ok((config, site))
    }
}

pub(crate) fn init_logging(level: log::LevelFilter, colored: bool) {
    let mut builder = env_logger::Builder::new();
    builder.write_style(if colored {
        env_logger::WriteStyle::Always
    } else {
        env_logger::WriteStyle::Never
    });
    builder.filter_level(level);

    if level == log::LevelFilter::Trace {
        builder.format_timestamp_secs();
    } else {
        builder.format(move |f, record| {
            let style = if colored {
                get_logging_style(record.level())
            } else {
                anstyle::Style::new()
            };
            writeln!(
                f,
                "{}[{}]{} {}",
                style.render(),
                record.level().as_str().to_lowercase(),
                style.render_reset(),
                record.args()
            )
        });
    }

    builder.init();
}

fn get_logging_style(level: log::Level) -> anstyle::Style {
    match level {
        log::Level::Error => anstyle::AnsiColor::Red.on_default() | anstyle::Effects::BOLD,
        log::Level::Warn => anstyle::AnsiColor::Yellow.on_default(),
        log::Level::Info => anstyle::AnsiColor::Green.on_default(),
        log::Level::Debug => anstyle::AnsiColor::Blue.on_default(),
        log::Level::Trace => anstyle::AnsiColor::Cyan.on_default(),
    }
}
