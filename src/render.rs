use image::{ImageBuffer, Rgb, RgbImage};
use qrcode::{Color, QrCode};
use std::path::Path;
use thiserror::Error;

use crate::options::HexColor;

/*---- Output formats ----*/

/// File format of the rendered QR Code, chosen from the output path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
    /// UTF-8 block drawing, two characters per module.
    Text,
}

impl OutputFormat {
    /// `.svg` gives [`OutputFormat::Svg`], `.txt` gives [`OutputFormat::Text`],
    /// anything else (including no extension) gives [`OutputFormat::Png`].
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("svg") => OutputFormat::Svg,
            Some("txt") => OutputFormat::Text,
            _ => OutputFormat::Png,
        }
    }
}

/// Foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dark: HexColor,
    pub light: HexColor,
}

impl Default for Palette {
    fn default() -> Self {
        Palette { dark: HexColor::BLACK, light: HexColor::WHITE }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The image is narrower than one pixel per module, quiet zone included.
    #[error("Image width of {width}px is too small for a {modules}-module QR code")]
    WidthTooSmall { width: u32, modules: u32 },
}

/*---- Utilities ----*/

// Whether the module at (x, y) is dark. Coordinates outside the
// symbol, i.e. inside the quiet zone, are light.
fn is_dark(qr: &QrCode, x: i64, y: i64) -> bool {
    let width = qr.width() as i64;
    if x < 0 || y < 0 || x >= width || y >= width {
        return false;
    }
    qr[(x as usize, y as usize)] == Color::Dark
}

// Symbol width plus the quiet zone on both sides, in modules.
fn total_modules(qr: &QrCode, margin: u32) -> u32 {
    qr.width() as u32 + 2 * margin
}

/// Renders the QR Code into a `width` × `width` RGB image.
///
/// The symbol and its `margin`-module quiet zone are scaled onto the image, so every module
/// covers `width / (modules + 2 * margin)` pixels, rounded down or up per column and row.
///
/// # Errors
///
/// Returns [`RenderError::WidthTooSmall`] when `width` is less than the number of modules
/// across, quiet zone included.
pub fn to_image(
    qr: &QrCode,
    width: u32,
    margin: u32,
    palette: Palette,
) -> Result<RgbImage, RenderError> {
    let total = total_modules(qr, margin);
    if width < total {
        return Err(RenderError::WidthTooSmall { width, modules: total });
    }

    let dark = Rgb(palette.dark.rgb());
    let light = Rgb(palette.light.rgb());
    let mut img = ImageBuffer::new(width, width);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let qr_x = (x as u64 * total as u64 / width as u64) as i64 - margin as i64;
        let qr_y = (y as u64 * total as u64 / width as u64) as i64 - margin as i64;
        *pixel = if is_dark(qr, qr_x, qr_y) { dark } else { light };
    }

    Ok(img)
}

// Returns a string of SVG code for an image depicting the given QR Code,
// with the given number of border modules, drawn at `width` × `width`.
// The string always uses Unix newlines (\n), regardless of the platform.
pub fn to_svg_string(qr: &QrCode, width: u32, margin: u32, palette: Palette) -> String {
    let dimension = total_modules(qr, margin);
    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" ";
    result += "\"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" \
         width=\"{width}\" height=\"{width}\" viewBox=\"0 0 {dimension} {dimension}\" \
         shape-rendering=\"crispEdges\" stroke=\"none\">\n"
    );
    result += &format!("\t<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n", palette.light);
    result += "\t<path d=\"";
    let mut first = true;
    let size = qr.width() as i64;
    for y in 0..size {
        for x in 0..size {
            if is_dark(qr, x, y) {
                if !first {
                    result += " ";
                }
                first = false;
                result += &format!("M{},{}h1v1h-1z", x + margin as i64, y + margin as i64);
            }
        }
    }
    result += &format!("\" fill=\"{}\"/>\n", palette.dark);
    result += "</svg>\n";
    result
}

/// Draws the QR Code with full-block characters, two per module so the output stays square in
/// most terminal fonts. Dark modules are drawn, light ones are spaces.
pub fn to_text(qr: &QrCode, margin: u32) -> String {
    let border = margin as i64;
    let size = qr.width() as i64;
    let mut result = String::new();
    for y in -border..size + border {
        for x in -border..size + border {
            let c: char = if is_dark(qr, x, y) { '█' } else { ' ' };
            result.push(c);
            result.push(c);
        }
        result.push('\n');
    }
    result
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use qrcode::EcLevel;

    fn sample() -> QrCode {
        // Version 1: 21 modules across.
        QrCode::with_error_correction_level("HELLO WORLD", EcLevel::M).unwrap()
    }

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("qr-output.png")), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("out/code.SVG")), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_path(Path::new("code.txt")), OutputFormat::Text);
        assert_eq!(OutputFormat::from_path(Path::new("code")), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("code.jpg")), OutputFormat::Png);
    }

    #[test]
    fn test_image_has_requested_width() {
        let qr = sample();
        let img = to_image(&qr, 256, 4, Palette::default()).unwrap();
        assert_eq!(img.dimensions(), (256, 256));
    }

    #[test]
    fn test_image_uses_palette() {
        let qr = sample();
        let palette = Palette {
            dark: HexColor::new(0x11, 0x22, 0x33),
            light: HexColor::new(0xEE, 0xDD, 0xCC),
        };
        let img = to_image(&qr, 290, 4, palette).unwrap();
        // The quiet zone is light; the finder pattern's corner is dark.
        assert_eq!(img.get_pixel(0, 0), &Rgb([0xEE, 0xDD, 0xCC]));
        assert_eq!(img.get_pixel(45, 45), &Rgb([0x11, 0x22, 0x33]));
    }

    #[test]
    fn test_zero_margin_starts_with_dark_module() {
        let qr = sample();
        let img = to_image(&qr, 210, 0, Palette::default()).unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_image_too_small() {
        let qr = sample();
        // 21 modules + 2 * 10 margin = 41 modules.
        let err = to_image(&qr, 40, 10, Palette::default()).unwrap_err();
        assert_eq!(err, RenderError::WidthTooSmall { width: 40, modules: 41 });
        assert!(err.to_string().contains("width"));
        assert!(to_image(&qr, 41, 10, Palette::default()).is_ok());
    }

    #[test]
    fn test_to_svg_string() {
        let qr = sample();
        let palette = Palette {
            dark: HexColor::new(0x12, 0x34, 0x56),
            light: HexColor::WHITE,
        };
        let svg = to_svg_string(&qr, 300, 2, palette);

        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.contains("width=\"300\""));
        assert!(svg.contains("viewBox=\"0 0 25 25\""));
        assert!(svg.contains("fill=\"#123456\""));
        assert!(svg.contains("fill=\"#FFFFFF\""));
        // Top-left finder pattern corner, shifted by the margin.
        assert!(svg.contains("d=\"M2,2h1v1h-1z"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_to_text() {
        let qr = sample();
        let text = to_text(&qr, 1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 23);
        assert!(lines.iter().all(|line| line.chars().count() == 46));
        assert!(lines[0].chars().all(|c| c == ' '));
        assert!(lines[1].starts_with("  ██"));
    }
}
