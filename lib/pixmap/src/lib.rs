pub mod codec;
pub mod color;
pub mod image;

pub use color::Color;
pub use image::Image;

pub type PixmapResult<T> = Result<T, PixmapError>;

#[derive(thiserror::Error, Debug)]
pub enum PixmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Missing {0}")]
    MissingToken(&'static str),
    #[error("Invalid {field}: `{token}` is not a number")]
    InvalidNumber { field: &'static str, token: String },
    #[error("Truncated pixel data: expected {expected} channel values, found {found}")]
    Truncated { expected: usize, found: usize },
}
