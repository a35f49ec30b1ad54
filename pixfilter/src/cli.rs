use clap::Parser;
use image_effect::{ImageEffect, ImageEffectResult};
use std::path::PathBuf;

pub const USAGE: &str =
    "USAGE: pixfilter <in-file> <out-file> <grayscale|invert|emboss|motionblur> {motion-blur-length}";

#[derive(Parser, Debug)]
#[command(name = "pixfilter", version, about = "Apply a filter to a plain-text pixel map")]
pub struct Args {
    /// Input pixel map
    pub input: PathBuf,

    /// Output pixel map, written only after the filter succeeds
    pub output: PathBuf,

    /// grayscale (or greyscale), invert, emboss or motionblur
    pub filter: String,

    /// Motion blur length, required by motionblur only
    #[arg(allow_hyphen_values = true)]
    pub length: Option<String>,
}

impl Args {
    pub fn effect(&self) -> ImageEffectResult<ImageEffect> {
        ImageEffect::from_args(&self.filter, self.length.as_deref())
    }
}

pub fn usage() {
    println!("{USAGE}");
}
