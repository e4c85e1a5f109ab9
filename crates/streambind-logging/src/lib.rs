//! streambind-logging - Tracing setup for streambind tools
//!
//! This crate provides:
//! - [`init_logging`] installing a stderr formatter with a reloadable level
//! - [`ReloadHandle`] for changing the level after startup
//! - [`WarningCaptureLayer`] and [`WarningLog`] collecting warnings raised
//!   during resolution, such as ignored bindings

mod capture;
mod layer;
mod reload;

pub use capture::{CapturedEvent, WarningLog};
pub use layer::{LOG_ENV_VAR, WarningCaptureLayer, init_logging};
pub use reload::{ReloadHandle, level_filter};
pub use streambind_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, WarningCaptureLayer, WarningLog, init_logging};
}
