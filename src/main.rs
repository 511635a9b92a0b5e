use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use log::debug;
use qrfile::args::{self, Invocation};
use qrfile::error::QrGeneratorError;
use qrfile::generator::Generator;
use qrfile::options::Defaults;
use qrfile::reader;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<QrGeneratorError>() {
                Some(err) => {
                    debug!("failed with {}", err.kind());
                    eprintln!("{}", err.report());
                }
                None => eprintln!("予期せぬエラーが発生しました: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let options = match args::parse_from(std::env::args_os(), &Defaults::default())? {
        Invocation::Generate(options) => options,
        Invocation::Print(text) => {
            write!(io::stdout(), "{text}")?;
            return Ok(());
        }
    };

    let text = reader::read_text(&options.input)?;
    debug!("read {} characters from {}", text.chars().count(), options.input.display());

    let generator = Generator::new(options);
    generator.generate(&text)?;

    let output = generator.options().output.display();
    writeln!(io::stdout(), "QRコードを生成しました: {output}")?;
    Ok(())
}
