//! Loads the text to encode.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{QrGeneratorError, Result};

/// Reads the file at `path` and returns its contents with surrounding whitespace and byte-order
/// marks removed.
///
/// A relative `path` is resolved against the current working directory. Errors name `path` as
/// given, not the resolved form.
///
/// # Errors
///
/// * `FILE_NOT_FOUND` if the file does not exist or cannot be opened for reading.
/// * `FILE_READ_ERROR` if the file is empty after trimming, is not valid UTF-8, or reading fails.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let resolved = std::path::absolute(path)
        .map_err(|err| QrGeneratorError::file_read(path, err.to_string()))?;
    debug!("reading {}", resolved.display());

    let mut file = File::open(&resolved).map_err(|_| {
        QrGeneratorError::file_not_found(
            path,
            format!(
                "ファイルが存在しないか、読み取り権限がありません。\n確認したパス: {}",
                resolved.display()
            ),
        )
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|err| QrGeneratorError::file_read(path, err.to_string()))?;

    let text = content.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if text.is_empty() {
        return Err(QrGeneratorError::file_read(path, "ファイルが空です"));
    }
    Ok(text.to_owned())
}
