//! Core library for Iconforge, a placeholder launcher-icon generator.
//!
//! This crate provides everything behind the `iconforge` binary:
//!
//! - **error**: Error handling for encoding and filesystem failures
//! - **png**: Minimal solid-color PNG encoder
//! - **icons**: The fixed launcher icon set (sizes, paths, fill color)
//! - **generate**: Generation orchestrator
//! - **logging**: Structured logging setup

pub mod error;
pub mod generate;
pub mod icons;
pub mod logging;
pub mod png;

pub use error::IconforgeError;
pub use generate::{generate_launcher_icons, GeneratorConfig};
pub use icons::{IconSpec, ICON_COLOR, LAUNCHER_ICONS};
pub use png::Rgb;
