//! Typed, validated configuration for a personal portfolio site.
//!
//! [`folio_config::Config`] is the raw `_folio.yml` shape. [`SiteConfig`] is
//! the validated, read-only record built from it, and [`site_config`] hands
//! out the single process-wide instance.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod error;
pub mod export;
pub mod site_model;

mod new;
mod provider;

pub use crate::error::Error;
pub use crate::export::{app_config, write_app_config};
pub use crate::new::create_new_project;
pub use crate::provider::{init_site_config, site_config};
pub use crate::site_model::{SiteConfig, ValidationError, ValidationErrors};
