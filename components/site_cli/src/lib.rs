//! Site shell library
//!
//! Provides the Session struct and supporting modules for the site CLI:
//! theme initialization at startup, the interactive shell, and the wiring
//! that triggers shootout runs against the shared page.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod session;
pub mod shell;

pub use cli::Cli;
pub use error::{SiteError, SiteResult};
pub use session::Session;
