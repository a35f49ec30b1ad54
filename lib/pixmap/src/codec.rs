//! Plain-text pixel map ("P3") codec.
//!
//! - `decode` / `encode`: convert between text and an in-memory [`Image`].
//! - `read` / `write`: the same, going through the file system.
//!
//! Input parsing is positional and whitespace-agnostic: format tag, width, height,
//! max value, then `width * height` red/green/blue triples in row-major order.

use crate::{Color, Image, PixmapError, PixmapResult, color::MAX_CHANNEL};
use std::{fs, path::Path};

pub const FORMAT_TAG: &str = "P3";

const CHANNEL_NAMES: [&str; 3] = ["red", "green", "blue"];

/// Parse a pixel map. The format tag and max value are skipped, not checked.
pub fn decode(input: &str) -> PixmapResult<Image> {
    let mut tokens = input.split_whitespace();

    tokens
        .next()
        .ok_or(PixmapError::MissingToken("format tag"))?;
    let width = parse_dimension(tokens.next(), "width")?;
    let height = parse_dimension(tokens.next(), "height")?;
    let _max_value = tokens.next();

    let expected = width.saturating_mul(height).saturating_mul(3);
    let channels: Vec<&str> = tokens.take(expected).collect();
    if channels.len() < expected {
        return Err(PixmapError::Truncated {
            expected,
            found: channels.len(),
        });
    }

    let pixels = channels
        .chunks_exact(3)
        .map(|triple| parse_triple(triple).map(Color::from))
        .collect::<PixmapResult<Vec<_>>>()?;

    log::debug!("decoded {width}x{height} pixel map");
    Ok(Image::from_pixels(width, height, pixels))
}

/// Serialize an image. Channels are clamped to `[0, 255]`.
pub fn encode(image: &Image) -> String {
    let (width, height) = (image.width(), image.height());
    let mut out = format!("{FORMAT_TAG}\n{width} {height}\n{MAX_CHANNEL}\n");

    // An empty image has no pixel rows to emit.
    if !image.is_empty() {
        out.reserve(width * height * 12 + height);
        for y in 0..height {
            for color in image.row(y) {
                out.push_str(&format!("{} ", color.clamped()));
            }
            out.push('\n');
        }
    }

    log::debug!("encoded {width}x{height} pixel map ({} bytes)", out.len());
    out
}

pub fn read(path: impl AsRef<Path>) -> PixmapResult<Image> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)?;
    let image = decode(&input)?;

    log::info!(
        "read {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Encode fully in memory, then replace `path` atomically.
pub fn write(image: &Image, path: impl AsRef<Path>) -> PixmapResult<()> {
    let path = path.as_ref();
    cutil::fs::write_atomic(path, encode(image))?;

    log::info!(
        "wrote {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}

fn parse_dimension(token: Option<&str>, field: &'static str) -> PixmapResult<usize> {
    let token = token.ok_or(PixmapError::MissingToken(field))?;
    token.parse().map_err(|_| PixmapError::InvalidNumber {
        field,
        token: token.to_string(),
    })
}

fn parse_triple(triple: &[&str]) -> PixmapResult<[i32; 3]> {
    let mut values = [0; 3];
    for (i, token) in triple.iter().enumerate() {
        values[i] = token.parse().map_err(|_| PixmapError::InvalidNumber {
            field: CHANNEL_NAMES[i],
            token: token.to_string(),
        })?;
    }
    Ok(values)
}

impl Image {
    /// Shorthand for [`decode`].
    pub fn from_pixmap(input: &str) -> PixmapResult<Self> {
        decode(input)
    }

    /// Shorthand for [`encode`].
    pub fn to_pixmap(&self) -> String {
        encode(self)
    }
}
