//! pixfilter - apply one filter to a plain-text pixel map
//!
//! `pixfilter <in-file> <out-file> <grayscale|invert|emboss|motionblur> {motion-blur-length}`
//!
//! Arguments are validated before any file is touched. The output is written only after
//! the whole image has been read and filtered.

mod cli;

pub use cli::{Args, USAGE};

use anyhow::{Context, Result};
use clap::{Parser, error::ErrorKind};
use image_effect::Effect;
use std::{ffi::OsString, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The filtered image was written to this path.
    Written(PathBuf),
    /// Usage or help was printed; nothing was written.
    Usage,
}

/// Initializes the logger.
///
/// Sets up a custom logger format with timestamp, log level, file name, line number,
/// and log message. Defaults to `info`, overridable through `RUST_LOG`.
pub fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = cutil::time::local_now("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

/// Parse `args` (program name first), then read, filter and write.
///
/// Usage errors print the usage line and return `Ok(Outcome::Usage)`. I/O and parse
/// errors are returned with the file involved as context.
pub fn run<I, T>(args: I) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(Outcome::Usage);
        }
        Err(e) => {
            log::warn!(
                "{}",
                e.kind().as_str().unwrap_or("invalid arguments")
            );
            cli::usage();
            return Ok(Outcome::Usage);
        }
    };

    let effect = match args.effect() {
        Ok(effect) => effect,
        Err(e) => {
            log::warn!("{e}");
            cli::usage();
            return Ok(Outcome::Usage);
        }
    };

    let mut image = pixmap::codec::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    effect.apply(&mut image);
    log::info!("applied {effect}");

    pixmap::codec::write(&image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(Outcome::Written(args.output))
}
