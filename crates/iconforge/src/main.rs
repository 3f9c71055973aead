//! Iconforge - writes placeholder launcher icons into the Android resource
//! tree of the surrounding project.
//!
//! Zero-argument invocation; run it whenever the `ic_launcher.png` files
//! are missing. Exit code 0 on full success, 1 on any failure.

use iconforge_core::generate::{generate_launcher_icons, GeneratorConfig};
use iconforge_core::logging::init_logging;
use iconforge_core::IconforgeError;

fn main() {
    init_logging();

    let config = match GeneratorConfig::from_install_location() {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    tracing::debug!(root = %config.project_root.display(), "Resolved project root");

    if let Err(e) = generate_launcher_icons(&config) {
        fail(e);
    }
}

/// Report the error and exit non-zero.
fn fail(error: IconforgeError) -> ! {
    tracing::error!(error = %error, "Icon generation failed");
    if let Some(hint) = error.hint() {
        tracing::error!("Hint: {hint}");
    }
    std::process::exit(1);
}
