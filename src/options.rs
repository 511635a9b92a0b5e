//! Generation options and the validation shared by the parser and the generator.

use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{QrGeneratorError, Result};

/// Accepted image widths, in pixels.
pub const SIZE_RANGE: RangeInclusive<i64> = 128..=1024;
/// Accepted quiet-zone widths, in modules.
pub const MARGIN_RANGE: RangeInclusive<i64> = 0..=10;

pub const SIZE_HINT: &str = "サイズは128から1024の間で指定してください";
pub const LEVEL_HINT: &str =
    "エラー訂正レベルはL, M, Q, Hのいずれかを指定してください";
pub const MARGIN_HINT: &str = "マージンは0から10の間で指定してください";
pub const COLOR_HINT: &str = "色は#RRGGBB形式で指定してください";

/// The error correction level of a QR Code symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Tolerates ~7% erroneous codewords.
    L,
    /// Tolerates ~15% erroneous codewords.
    M,
    /// Tolerates ~25% erroneous codewords.
    Q,
    /// Tolerates ~30% erroneous codewords.
    H,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::L => "L",
            Level::M => "M",
            Level::Q => "Q",
            Level::H => "H",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `"q"` and `"Q"` both parse to [`Level::Q`].
impl FromStr for Level {
    type Err = QrGeneratorError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_uppercase().as_str() {
            "L" => Ok(Level::L),
            "M" => Ok(Level::M),
            "Q" => Ok(Level::Q),
            "H" => Ok(Level::H),
            _ => Err(QrGeneratorError::invalid_option("error", value, LEVEL_HINT)),
        }
    }
}

impl From<Level> for qrcode::EcLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::L => qrcode::EcLevel::L,
            Level::M => qrcode::EcLevel::M,
            Level::Q => qrcode::EcLevel::Q,
            Level::H => qrcode::EcLevel::H,
        }
    }
}

/// An opaque RGB color written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 3]);

impl HexColor {
    pub const BLACK: HexColor = HexColor([0x00, 0x00, 0x00]);
    pub const WHITE: HexColor = HexColor([0xFF, 0xFF, 0xFF]);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        HexColor([r, g, b])
    }

    pub fn rgb(self) -> [u8; 3] {
        self.0
    }
}

/// Displays in the normalized, uppercase form.
impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

/// Accepts exactly `^#[0-9A-Fa-f]{6}$`.
impl FromStr for HexColor {
    type Err = QrGeneratorError;

    fn from_str(value: &str) -> Result<Self> {
        let invalid = || QrGeneratorError::invalid_color(value);
        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(HexColor([channel(0)?, channel(2)?, channel(4)?]))
    }
}

/// Values used for every option the command line leaves out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub input: PathBuf,
    pub size: u32,
    pub level: Level,
    pub margin: u32,
    pub output: PathBuf,
    pub dark: HexColor,
    pub light: HexColor,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            input: PathBuf::from("qr-text.txt"),
            size: 256,
            level: Level::M,
            margin: 4,
            output: PathBuf::from("qr-output.png"),
            dark: HexColor::BLACK,
            light: HexColor::WHITE,
        }
    }
}

/// Fully resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Width and height of the raster output, in pixels.
    pub size: u32,
    pub level: Level,
    /// Quiet zone around the symbol, in modules.
    pub margin: u32,
    pub output: PathBuf,
    pub dark: HexColor,
    pub light: HexColor,
    pub input: PathBuf,
}

impl Options {
    /// Options made entirely of `defaults`.
    pub fn from_defaults(defaults: &Defaults) -> Self {
        Options {
            size: defaults.size,
            level: defaults.level,
            margin: defaults.margin,
            output: defaults.output.clone(),
            dark: defaults.dark,
            light: defaults.light,
            input: defaults.input.clone(),
        }
    }

    /// Checks the range-bound fields. Level and colors are typed and cannot hold invalid values.
    pub fn validate(&self) -> Result<()> {
        check_size(self.size.into())?;
        check_margin(self.margin.into())?;
        Ok(())
    }
}

pub fn check_size(size: i64) -> Result<u32> {
    check_range("size", size, &SIZE_RANGE, SIZE_HINT)
}

pub fn check_margin(margin: i64) -> Result<u32> {
    check_range("margin", margin, &MARGIN_RANGE, MARGIN_HINT)
}

fn check_range(option: &str, value: i64, range: &RangeInclusive<i64>, hint: &str) -> Result<u32> {
    if !range.contains(&value) {
        return Err(QrGeneratorError::invalid_option(option, value, hint));
    }
    u32::try_from(value).map_err(|_| QrGeneratorError::invalid_option(option, value, hint))
}
