//! Command-line parsing.
//!
//! `clap` only splits the command line into raw strings; every value is then checked with the
//! validators in [`crate::options`], and anything left out is taken from a [`Defaults`].

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind as ClapErrorKind};
use clap::Parser;
use log::debug;

use crate::error::{QrGeneratorError, Result};
use crate::options::{
    check_margin, check_size, Defaults, HexColor, Level, Options, COLOR_HINT, MARGIN_HINT,
    SIZE_HINT,
};

#[derive(Parser, Debug)]
#[command(name = "qrfile", version)]
#[command(about = "テキストファイルの内容からQRコードを生成するツール")]
struct Cli {
    /// 入力ファイル
    input: Option<PathBuf>,

    /// QRコードのサイズ（ピクセル、128から1024）
    #[arg(short, long, value_name = "NUMBER", allow_negative_numbers = true)]
    size: Option<String>,

    /// エラー訂正レベル（L, M, Q, H）
    #[arg(short, long, value_name = "LEVEL")]
    error: Option<String>,

    /// マージン（セル単位、0から10）
    #[arg(short, long, value_name = "NUMBER", allow_negative_numbers = true)]
    margin: Option<String>,

    /// 出力ファイル名（.svg と .txt 以外はPNG）
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// 前景色（#RRGGBB）
    #[arg(short, long, value_name = "COLOR")]
    dark: Option<String>,

    /// 背景色（#RRGGBB）
    #[arg(short, long, value_name = "COLOR")]
    light: Option<String>,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Generate a QR code with these options.
    Generate(Options),
    /// Print this text (help or version) to standard output and exit successfully.
    Print(String),
}

/// Parses `args`, whose first item is the program name.
///
/// # Errors
///
/// Returns an `INVALID_OPTION` error naming the offending flag when a value is out of range or
/// malformed, or when the command line itself cannot be parsed.
pub fn parse_from<I, T>(args: I, defaults: &Defaults) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            return match err.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                    Ok(Invocation::Print(err.render().to_string()))
                }
                _ => Err(from_clap(&err)),
            };
        }
    };
    let options = cli.resolve(defaults)?;
    debug!("parsed options: {options:?}");
    Ok(Invocation::Generate(options))
}

impl Cli {
    fn resolve(self, defaults: &Defaults) -> Result<Options> {
        let mut options = Options::from_defaults(defaults);
        if let Some(size) = self.size {
            options.size = parse_number("size", &size, SIZE_HINT).and_then(check_size)?;
        }
        if let Some(level) = self.error {
            options.level = level.parse::<Level>()?;
        }
        if let Some(margin) = self.margin {
            options.margin =
                parse_number("margin", &margin, MARGIN_HINT).and_then(check_margin)?;
        }
        if let Some(output) = self.output {
            options.output = output;
        }
        if let Some(dark) = self.dark {
            options.dark = parse_color("dark", &dark)?;
        }
        if let Some(light) = self.light {
            options.light = parse_color("light", &light)?;
        }
        if let Some(input) = self.input {
            options.input = input;
        }
        Ok(options)
    }
}

fn parse_number(option: &str, value: &str, hint: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| QrGeneratorError::invalid_option(option, value, hint))
}

fn parse_color(option: &str, value: &str) -> Result<HexColor> {
    value
        .parse::<HexColor>()
        .map_err(|_| QrGeneratorError::invalid_option(option, value, COLOR_HINT))
}

fn from_clap(err: &clap::Error) -> QrGeneratorError {
    let context = |kind| match err.get(kind) {
        Some(ContextValue::String(s)) => Some(s.clone()),
        _ => None,
    };
    let arg = context(ContextKind::InvalidArg);
    let value = context(ContextKind::InvalidValue).filter(|value| !value.is_empty());
    // Without a usable value (unexpected argument, missing value) the argument itself is the value.
    let (option, value) = match (arg, value) {
        (Some(arg), Some(value)) => (arg, value),
        (Some(arg), None) => ("argument".to_owned(), arg),
        (None, value) => ("argument".to_owned(), value.unwrap_or_default()),
    };
    let details = err.kind().as_str().unwrap_or("invalid command line");
    QrGeneratorError::invalid_option(option, value, details)
}
