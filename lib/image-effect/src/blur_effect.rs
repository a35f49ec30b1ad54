use crate::Effect;
use derivative::Derivative;
use derive_setters::Setters;
use pixmap::{Color, Image};

/// Horizontal motion blur configuration
///
/// Each pixel becomes the floored average of itself and up to `length - 1` pixels to its
/// right, cut off at the right edge. A length of 0 leaves the image untouched.
#[derive(Debug, Clone, PartialEq, Eq, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct MotionBlurConfig {
    #[derivative(Default(value = "1"))]
    length: usize,
}

impl MotionBlurConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Effect for MotionBlurConfig {
    fn apply(&self, image: &mut Image) {
        if self.length < 1 || image.is_empty() {
            return;
        }

        // prefix[i] holds the channel sums of original pixels 0..i of the row
        let mut prefix = Vec::new();
        for y in 0..image.height() {
            prefix.clear();
            prefix.push([0i64; 3]);
            for color in image.row(y) {
                let [r, g, b] = color.channels().map(i64::from);
                let [sr, sg, sb] = prefix[prefix.len() - 1];
                prefix.push([sr + r, sg + g, sb + b]);
            }

            let width = image.width();
            for (x, pixel) in image.row_mut(y).iter_mut().enumerate() {
                let end = width.min(x.saturating_add(self.length));
                let count = (end - x) as i64;
                let (hi, lo) = (prefix[end], prefix[x]);
                let [r, g, b] = [0usize, 1, 2].map(|c| (hi[c] - lo[c]).div_euclid(count) as i32);
                *pixel = Color::new(r, g, b);
            }
        }
    }
}
