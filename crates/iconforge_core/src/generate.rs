//! Drives the PNG encoder over the launcher icon set.
//!
//! A single linear pass: each icon is encoded fully in memory, its parent
//! directories are created, and the buffer is written in one call. The
//! first failure aborts the remaining icons; a rerun overwrites everything
//! from the start.

use std::path::{Path, PathBuf};

use crate::error::IconforgeError;
use crate::icons::{IconSpec, ICON_COLOR, LAUNCHER_ICONS};
use crate::png;

/// Where generated icons land.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Project root the icon paths are resolved against.
    pub project_root: PathBuf,
}

impl GeneratorConfig {
    /// Resolve the project root from the running executable's location.
    ///
    /// The binary is expected to live one directory below the project root
    /// (for example `<root>/tools/iconforge`), so the root is the parent of
    /// the executable's directory. Output lands in the same place no matter
    /// which working directory the tool is invoked from.
    pub fn from_install_location() -> Result<Self, IconforgeError> {
        let exe = std::env::current_exe().map_err(|e| {
            IconforgeError::io_with_source("Failed to locate the running executable", e)
        })?;
        let root = exe.parent().and_then(Path::parent).ok_or_else(|| {
            IconforgeError::io("Executable path has no parent directory", None)
        })?;
        Ok(Self { project_root: root.to_path_buf() })
    }

    /// Use an explicit project root.
    pub fn with_root(project_root: impl Into<PathBuf>) -> Self {
        Self { project_root: project_root.into() }
    }
}

/// Generate all five placeholder launcher icons under the configured root.
pub fn generate_launcher_icons(config: &GeneratorConfig) -> Result<(), IconforgeError> {
    tracing::info!("Generating launcher icons...");

    for spec in &LAUNCHER_ICONS {
        write_icon(&config.project_root, spec)?;
        tracing::info!("  Created {} ({}x{})", spec.relative_path, spec.size, spec.size);
    }

    tracing::info!("All {} icons created successfully!", LAUNCHER_ICONS.len());
    tracing::info!(
        "Note: these are placeholder icons (solid teal squares); \
         replace them with designed icons before shipping"
    );
    Ok(())
}

/// Encode one icon fully in memory, then write it in a single call.
///
/// Encoding before the file is opened means a failed encode leaves no
/// partial file behind.
fn write_icon(root: &Path, spec: &IconSpec) -> Result<(), IconforgeError> {
    let bytes = png::encode(spec.size, spec.size, ICON_COLOR)?;

    let dest = root.join(spec.relative_path);
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            IconforgeError::io_with_source(
                format!("Failed to create directory '{}'", parent.display()),
                e,
            )
        })?;
    }

    std::fs::write(&dest, &bytes).map_err(|e| {
        IconforgeError::io_with_source(format!("Failed to write '{}'", dest.display()), e)
    })?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
