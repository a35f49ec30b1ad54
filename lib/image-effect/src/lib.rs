pub mod base_effect;
pub mod blur_effect;
pub mod stylized_effect;

use pixmap::Image;
use std::fmt;

pub type ImageEffectResult<T> = Result<T, ImageEffectError>;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageEffectError {
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
    #[error("Missing motion blur length")]
    MissingLength,
    #[error("Filter {0} takes no length argument")]
    UnexpectedLength(String),
    #[error("Invalid motion blur length: {0}")]
    InvalidLength(String),
}

pub trait Effect {
    fn apply(&self, image: &mut Image);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageEffect {
    // Base effects
    Grayscale,
    Invert,

    // Stylized effects
    Emboss,

    // Blur effects
    MotionBlur(blur_effect::MotionBlurConfig),
}

impl ImageEffect {
    /// Build an effect from a filter name and an optional motion blur length.
    ///
    /// `grayscale` and `greyscale` are synonyms. Only `motionblur` takes a length,
    /// which must be a non-negative integer.
    pub fn from_args(name: &str, length: Option<&str>) -> ImageEffectResult<Self> {
        let effect = match name {
            "grayscale" | "greyscale" => ImageEffect::Grayscale,
            "invert" => ImageEffect::Invert,
            "emboss" => ImageEffect::Emboss,
            "motionblur" => {
                let length = length.ok_or(ImageEffectError::MissingLength)?;
                let value = length
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| ImageEffectError::InvalidLength(length.to_string()))?;
                return Ok(ImageEffect::MotionBlur(
                    blur_effect::MotionBlurConfig::new().with_length(value),
                ));
            }
            _ => return Err(ImageEffectError::UnknownFilter(name.to_string())),
        };

        match length {
            Some(_) => Err(ImageEffectError::UnexpectedLength(name.to_string())),
            None => Ok(effect),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImageEffect::Grayscale => "grayscale",
            ImageEffect::Invert => "invert",
            ImageEffect::Emboss => "emboss",
            ImageEffect::MotionBlur(_) => "motionblur",
        }
    }
}

impl fmt::Display for ImageEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageEffect::MotionBlur(config) => {
                write!(f, "{}(length={})", self.name(), config.length())
            }
            _ => f.write_str(self.name()),
        }
    }
}

impl Effect for ImageEffect {
    fn apply(&self, image: &mut Image) {
        log::debug!(
            "applying {} to {}x{} image",
            self,
            image.width(),
            image.height()
        );

        match self {
            ImageEffect::Grayscale => base_effect::grayscale(image),
            ImageEffect::Invert => base_effect::invert(image),
            ImageEffect::Emboss => stylized_effect::emboss(image),
            ImageEffect::MotionBlur(config) => config.apply(image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blur_effect::MotionBlurConfig;

    #[test]
    fn test_from_args_names() {
        assert_eq!(
            ImageEffect::from_args("grayscale", None),
            Ok(ImageEffect::Grayscale)
        );
        assert_eq!(
            ImageEffect::from_args("greyscale", None),
            Ok(ImageEffect::Grayscale)
        );
        assert_eq!(ImageEffect::from_args("invert", None), Ok(ImageEffect::Invert));
        assert_eq!(ImageEffect::from_args("emboss", None), Ok(ImageEffect::Emboss));
        assert_eq!(
            ImageEffect::from_args("motionblur", Some("3")),
            Ok(ImageEffect::MotionBlur(MotionBlurConfig::new().with_length(3)))
        );
    }

    #[test]
    fn test_from_args_unknown() {
        assert_eq!(
            ImageEffect::from_args("sepia", None),
            Err(ImageEffectError::UnknownFilter("sepia".to_string()))
        );
        // names are case sensitive
        assert!(ImageEffect::from_args("Invert", None).is_err());
    }

    #[test]
    fn test_from_args_length_count() {
        assert_eq!(
            ImageEffect::from_args("motionblur", None),
            Err(ImageEffectError::MissingLength)
        );
        assert_eq!(
            ImageEffect::from_args("emboss", Some("2")),
            Err(ImageEffectError::UnexpectedLength("emboss".to_string()))
        );
    }

    #[test]
    fn test_from_args_invalid_length() {
        for bad in ["-1", "abc", "2.5", ""] {
            assert_eq!(
                ImageEffect::from_args("motionblur", Some(bad)),
                Err(ImageEffectError::InvalidLength(bad.to_string()))
            );
        }

        assert_eq!(
            ImageEffect::from_args("motionblur", Some("0")),
            Ok(ImageEffect::MotionBlur(MotionBlurConfig::new().with_length(0)))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ImageEffect::Emboss.to_string(), "emboss");
        let blur = ImageEffect::from_args("motionblur", Some("4")).unwrap();
        assert_eq!(blur.to_string(), "motionblur(length=4)");
    }

    #[test]
    fn test_dispatch_matches_filters() {
        let mut image = Image::new(2, 1);
        image.set(0, 0, 100, 150, 200);
        image.set(1, 0, 0, 0, 0);

        let mut dispatched = image.clone();
        ImageEffect::Invert.apply(&mut dispatched);
        base_effect::invert(&mut image);
        assert_eq!(dispatched, image);
    }
}
