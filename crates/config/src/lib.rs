//! On-disk schema of a portfolio site's `_folio.yml`.
//!
//! Every section is optional; anything left out falls back to the literal
//! portfolio values baked into the `Default` impls.

mod config;
mod footer;
mod global;
mod hero;
mod theme;

pub use self::config::*;
pub use self::footer::*;
pub use self::global::*;
pub use self::hero::*;
pub use self::theme::*;

pub type Status = status::Status;
pub type Result<T, E = Status> = std::result::Result<T, E>;
