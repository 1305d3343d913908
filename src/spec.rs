use image::Rgba;

/// One required output image: pixel size and file name inside the iconset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub filename: &'static str,
}

/// The ten entries Xcode expects in an AppIcon.appiconset, in order.
/// The `@2x` names carry double the pixels of their logical size.
pub const ICONSET: [IconSpec; 10] = [
    IconSpec { size: 16, filename: "icon_16x16.png" },
    IconSpec { size: 32, filename: "icon_16x16@2x.png" },
    IconSpec { size: 32, filename: "icon_32x32.png" },
    IconSpec { size: 64, filename: "icon_32x32@2x.png" },
    IconSpec { size: 128, filename: "icon_128x128.png" },
    IconSpec { size: 256, filename: "icon_128x128@2x.png" },
    IconSpec { size: 256, filename: "icon_256x256.png" },
    IconSpec { size: 512, filename: "icon_256x256@2x.png" },
    IconSpec { size: 512, filename: "icon_512x512.png" },
    IconSpec { size: 1024, filename: "icon_512x512@2x.png" },
];

/// Where the iconset lives, relative to the repository root.
pub const OUTPUT_DIR: &str = "Pomodorogo/Assets.xcassets/AppIcon.appiconset";

/// The glyph drawn on every icon.
pub const GLYPH: &str = "🍅";

pub const GLYPH_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const FALLBACK_COLOR: Rgba<u8> = Rgba([255, 99, 71, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
