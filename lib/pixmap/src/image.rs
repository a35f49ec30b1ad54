use crate::Color;

/// A fixed-size grid of [`Color`] cells stored row-major.
///
/// Pixel `(x, y)` lives at index `y * width + x`. Out-of-range coordinates are a
/// programming error and panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Image {
    /// Create an all-black image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::default(); width * height],
        }
    }

    /// Build an image from row-major pixels.
    ///
    /// # Panics
    /// Panics if `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must equal width * height ({})",
            pixels.len(),
            width * height,
        );

        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the image has no pixels to process.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// # Panics
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Overwrite a pixel with raw, unclamped channel values.
    ///
    /// # Panics
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, red: i32, green: i32, blue: i32) {
        self.set_color(x, y, Color::new(red, green, blue));
    }

    #[inline]
    pub fn set_color(&mut self, x: usize, y: usize, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Borrow row `y` as a slice of `width` pixels.
    pub fn row(&self, y: usize) -> &[Color] {
        assert!(y < self.height, "row {y} out of bounds (height {})", self.height);
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [Color] {
        assert!(y < self.height, "row {y} out of bounds (height {})", self.height);
        let start = y * self.width;
        &mut self.pixels[start..start + self.width]
    }

    /// Iterate pixels row by row, left to right.
    pub fn pixels(&self) -> impl Iterator<Item = &Color> {
        self.pixels.iter()
    }

    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Color> {
        self.pixels.iter_mut()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height,
        );
        y * self.width + x
    }
}
