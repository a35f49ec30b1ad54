use pixmap::{Color, Image, color::clamp_channel};

/// Invert the colors of an image
pub fn invert(image: &mut Image) {
    for pixel in image.pixels_mut() {
        pixel.red = 255 - pixel.red;
        pixel.green = 255 - pixel.green;
        pixel.blue = 255 - pixel.blue;
    }
}

/// Replace every pixel with the floored average of its channels
pub fn grayscale(image: &mut Image) {
    for pixel in image.pixels_mut() {
        let sum = pixel.red + pixel.green + pixel.blue;
        *pixel = Color::gray(clamp_channel(sum.div_euclid(3)));
    }
}
