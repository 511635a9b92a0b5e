//! Turns text into a QR Code file.
//!
//! Encoding is done by the [`qrcode`] crate; [`crate::render`] draws the resulting module matrix.

use std::fs;
use std::path::Path;

use image::ImageFormat;
use log::debug;
use qrcode::QrCode;

use crate::error::{QrGeneratorError, Result};
use crate::options::{Options, SIZE_HINT};
use crate::render::{self, OutputFormat, Palette, RenderError};

/// Writes QR Codes with a fixed set of [`Options`].
///
/// # Example
///
/// ```no_run
/// use qrfile::generator::Generator;
/// use qrfile::options::{Defaults, Options};
///
/// let generator = Generator::new(Options::from_defaults(&Defaults::default()));
/// generator.generate("Hello, World!").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    options: Options,
}

impl Generator {
    pub fn new(options: Options) -> Self {
        Generator { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Encodes `text` and writes it to the configured output path.
    pub fn generate(&self, text: &str) -> Result<()> {
        self.generate_to(text, &self.options.output)
    }

    /// Encodes `text` and writes it to `output`, in the format its extension selects.
    ///
    /// # Errors
    ///
    /// * `INVALID_OPTION` if the size or margin is out of range, or the size is too small to fit
    ///   the symbol and its quiet zone at one pixel per module.
    /// * `WRITE_ERROR` if the text does not fit in any QR Code version, or the file cannot be
    ///   encoded or written.
    pub fn generate_to(&self, text: &str, output: &Path) -> Result<()> {
        let options = &self.options;
        options.validate()?;

        let code = QrCode::with_error_correction_level(text, options.level.into())
            .map_err(|err| QrGeneratorError::write(output, err.to_string()))?;
        let format = OutputFormat::from_path(output);
        debug!(
            "encoded {} bytes as {:?} ({} modules), writing {:?} to {}",
            text.len(),
            code.version(),
            code.width(),
            format,
            output.display()
        );

        let palette = Palette { dark: options.dark, light: options.light };
        match format {
            OutputFormat::Png => {
                let img = render::to_image(&code, options.size, options.margin, palette)
                    .map_err(|err| match err {
                        RenderError::WidthTooSmall { .. } => {
                            debug!("{err}");
                            QrGeneratorError::invalid_option("size", options.size, SIZE_HINT)
                        }
                    })?;
                img.save_with_format(output, ImageFormat::Png)
                    .map_err(|err| QrGeneratorError::write(output, err.to_string()))
            }
            OutputFormat::Svg => {
                let svg = render::to_svg_string(&code, options.size, options.margin, palette);
                fs::write(output, svg)
                    .map_err(|err| QrGeneratorError::write(output, err.to_string()))
            }
            OutputFormat::Text => {
                let text = render::to_text(&code, options.margin);
                fs::write(output, text)
                    .map_err(|err| QrGeneratorError::write(output, err.to_string()))
            }
        }
    }
}
