use crate::draw::{draw_arc, draw_ellipse, vertical_gradient, BoundingBox};
use crate::manifest::ManifestIcons;
use anyhow::{Context, Result};
#[cfg(feature = "png")]
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder,
};
use image::{Rgb, RgbImage};
use std::{
    fs::create_dir_all,
    io::Write,
    path::Path,
    str::FromStr,
};

/// Directory the icons are written to, relative to the working directory
pub const ICONS_DIR: &str = "icons";

/// Sizes and file names referenced by the extension manifest
pub const EXTENSION_ICONS: [(u32, &str); 3] = [
    (16, "icon16.png"),
    (48, "icon48.png"),
    (128, "icon128.png"),
];

/// Shown when the crate was built without PNG encoding
pub const MISSING_PNG_SUPPORT: &str =
    "Error: PNG support is not available. Rebuild with the \"png\" feature enabled.";

/// Exit status when PNG encoding is unavailable
pub const MISSING_PNG_EXIT_CODE: i32 = 1;

/// Colors of the robot icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub gradient_top: Rgb<u8>,
    pub gradient_bottom: Rgb<u8>,
    pub face: Rgb<u8>,
    pub features: Rgb<u8>,
}

impl Palette {
    /// The purple-blue extension palette
    pub fn extension() -> Result<Self> {
        Ok(Self {
            gradient_top: parse_color("#667eea")?,
            gradient_bottom: parse_color("#764ba2")?,
            face: parse_color("#ffffff")?,
            features: parse_color("#667eea")?,
        })
    }
}

/// Parse a CSS color literal into an 8-bit RGB triple
pub fn parse_color(literal: &str) -> Result<Rgb<u8>> {
    let color = css_color::Srgb::from_str(literal)
        .map_err(|_| anyhow::anyhow!("Invalid color literal: {}", literal))?;
    let channel = |value: f32| (value * 255.).round().clamp(0., 255.) as u8;
    Ok(Rgb([
        channel(color.red),
        channel(color.green),
        channel(color.blue),
    ]))
}

/// Shape parameters derived from the icon size
///
/// Every value is an integer division of `size`, so small icons collapse
/// shapes to a pixel or nothing instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub size: u32,
    pub head_margin: u32,
    pub eye_radius: u32,
    pub eye_y: u32,
    pub left_eye_x: u32,
    pub right_eye_x: u32,
    pub mouth_y: u32,
    pub mouth_width: u32,
    pub stroke_width: u32,
}

impl Layout {
    pub fn for_size(size: u32) -> Self {
        Self {
            size,
            head_margin: size / 6,
            eye_radius: size / 10,
            eye_y: size / 3,
            left_eye_x: size / 3,
            right_eye_x: 2 * size / 3,
            mouth_y: 2 * size / 3,
            mouth_width: size / 3,
            stroke_width: size / 20,
        }
    }

    fn head(&self) -> BoundingBox {
        let (margin, size) = (self.head_margin as i64, self.size as i64);
        BoundingBox::new(margin, margin, size - margin, size - margin)
    }

    fn eyes(&self) -> [BoundingBox; 2] {
        let (y, r) = (self.eye_y as i64, self.eye_radius as i64);
        [
            BoundingBox::around(self.left_eye_x as i64, y, r),
            BoundingBox::around(self.right_eye_x as i64, y, r),
        ]
    }

    fn mouth(&self) -> BoundingBox {
        let center_x = (self.size / 2) as i64;
        let center_y = self.mouth_y as i64;
        let half_width = self.mouth_width as i64;
        let half_height = (self.mouth_width / 2) as i64;
        BoundingBox::new(
            center_x - half_width,
            center_y - half_height,
            center_x + half_width,
            center_y + half_height,
        )
    }
}

/// Render the robot face on its gradient background
pub fn render_icon(size: u32) -> Result<RgbImage> {
    anyhow::ensure!(size > 0, "Icon size must be positive");

    let palette = Palette::extension()?;
    let layout = Layout::for_size(size);

    let mut canvas = RgbImage::from_pixel(size, size, palette.face);
    vertical_gradient(&mut canvas, palette.gradient_top, palette.gradient_bottom);

    // Head
    draw_ellipse(
        &mut canvas,
        layout.head(),
        Some(palette.face),
        Some((palette.face, 2)),
    );

    // Eyes
    for eye in layout.eyes() {
        draw_ellipse(&mut canvas, eye, Some(palette.features), None);
    }

    // Smile: 0..180 degrees is the lower half of the mouth ellipse
    draw_arc(
        &mut canvas,
        layout.mouth(),
        0.0,
        180.0,
        palette.features,
        layout.stroke_width,
    );

    Ok(canvas)
}

/// Encode an RGB canvas as PNG with compression
pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_png(canvas, &mut buf)?;
    Ok(buf)
}

#[cfg(feature = "png")]
fn write_png<W: Write>(canvas: &RgbImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ColorType::Rgb8,
        )
        .context("Failed to encode PNG")?;
    Ok(())
}

#[cfg(not(feature = "png"))]
fn write_png<W: Write>(_canvas: &RgbImage, _w: W) -> Result<()> {
    anyhow::bail!(MISSING_PNG_SUPPORT)
}

/// Whether this build can encode PNG
pub fn png_support_available() -> bool {
    cfg!(feature = "png")
}

/// Startup check: the message and exit status to fail with, if any
pub fn missing_png_support(available: bool) -> Option<(&'static str, i32)> {
    if available {
        None
    } else {
        Some((MISSING_PNG_SUPPORT, MISSING_PNG_EXIT_CODE))
    }
}

/// Create `icons/<filename>` with the given edge length
pub fn create_icon(size: u32, filename: &str) -> Result<()> {
    create_icon_in(Path::new(ICONS_DIR), size, filename)
}

/// Create `<out_dir>/<filename>` with the given edge length
pub fn create_icon_in(out_dir: &Path, size: u32, filename: &str) -> Result<()> {
    let png = encode_png(&render_icon(size)?)?;

    create_dir_all(out_dir).context("Can't create output directory")?;

    let output_path = out_dir.join(filename);
    std::fs::write(&output_path, png)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("✓ Created {} ({size}x{size})", output_path.display());
    Ok(())
}

/// Manifest snippet for the icons written to `out_dir`
pub fn manifest_icons(out_dir: &Path) -> ManifestIcons {
    let mut manifest = ManifestIcons::new();
    for (size, filename) in EXTENSION_ICONS {
        let path = out_dir.join(filename);
        manifest.add_icon(size, path.to_string_lossy().replace('\\', "/"));
    }
    manifest
}

/// Generate every icon the extension manifest references under `icons/`
pub fn generate_extension_icons() -> Result<()> {
    println!("Creating Browser-Use Chrome Extension Icons...");
    println!("{}", "-".repeat(50));

    for (size, filename) in EXTENSION_ICONS {
        create_icon(size, filename)?;
    }

    println!("{}", "-".repeat(50));
    println!("✓ All icons created successfully!");

    println!("\nAdd this to manifest.json:");
    println!("{}", manifest_icons(Path::new(ICONS_DIR)).to_pretty_json()?);

    println!("\nYou can now load the extension in Chrome:");
    println!("1. Go to chrome://extensions/");
    println!("2. Enable 'Developer mode'");
    println!("3. Click 'Load unpacked'");
    println!("4. Select the chrome-plugin folder");

    Ok(())
}
