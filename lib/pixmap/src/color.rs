use std::fmt;

/// Largest channel value a pixel map can carry on output.
pub const MAX_CHANNEL: i32 = 255;

/// An RGB triple.
///
/// Channels are plain integers so filters can compute out-of-range intermediates;
/// call [`Color::clamped`] before treating a value as a valid output pixel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// A gray pixel with every channel set to `level`.
    pub const fn gray(level: i32) -> Self {
        Self::new(level, level, level)
    }

    /// Channels in red, green, blue order.
    pub const fn channels(&self) -> [i32; 3] {
        [self.red, self.green, self.blue]
    }

    pub fn clamped(&self) -> Self {
        Self::new(
            clamp_channel(self.red),
            clamp_channel(self.green),
            clamp_channel(self.blue),
        )
    }
}

impl From<[i32; 3]> for Color {
    fn from([red, green, blue]: [i32; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.red, self.green, self.blue)
    }
}

#[inline]
pub fn clamp_channel(value: i32) -> i32 {
    value.clamp(0, MAX_CHANNEL)
}
