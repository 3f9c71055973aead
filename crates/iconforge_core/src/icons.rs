//! The fixed launcher icon set.

use crate::png::Rgb;

/// One launcher icon slot: pixel size and destination inside the project
/// resource tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// Icon edge length in pixels (launcher icons are square).
    pub size: u32,
    /// Destination path relative to the project root.
    pub relative_path: &'static str,
}

/// Placeholder fill color, matching the app theme teal (#009688).
pub const ICON_COLOR: Rgb = Rgb(0, 150, 136);

/// The five Android density buckets, smallest first.
pub const LAUNCHER_ICONS: [IconSpec; 5] = [
    IconSpec { size: 48, relative_path: "android/app/src/main/res/mipmap-mdpi/ic_launcher.png" },
    IconSpec { size: 72, relative_path: "android/app/src/main/res/mipmap-hdpi/ic_launcher.png" },
    IconSpec { size: 96, relative_path: "android/app/src/main/res/mipmap-xhdpi/ic_launcher.png" },
    IconSpec {
        size: 144,
        relative_path: "android/app/src/main/res/mipmap-xxhdpi/ic_launcher.png",
    },
    IconSpec {
        size: 192,
        relative_path: "android/app/src/main/res/mipmap-xxxhdpi/ic_launcher.png",
    },
];
