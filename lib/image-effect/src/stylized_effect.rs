use pixmap::{Color, Image, color::clamp_channel};

/// Gray level of a pixel with no edge.
const EMBOSS_BASE: i32 = 128;

/// Emboss relief based on the difference to the up-left neighbour.
///
/// The image is processed in place from `(width - 1, height - 1)` down to `(0, 0)`, bottom
/// row first, so the neighbour at `(x - 1, y - 1)` still holds its original value when
/// `(x, y)` reads it.
pub fn emboss(image: &mut Image) {
    if image.is_empty() {
        return;
    }

    for y in (0..image.height()).rev() {
        for x in (0..image.width()).rev() {
            let diff = if x > 0 && y > 0 {
                dominant_diff(image.get(x, y), image.get(x - 1, y - 1))
            } else {
                0
            };

            image.set_color(x, y, Color::gray(clamp_channel(EMBOSS_BASE + diff)));
        }
    }
}

/// Signed channel difference with the largest magnitude.
///
/// Channels are checked red, green, blue; a later channel wins only if strictly larger.
fn dominant_diff(current: Color, up_left: Color) -> i32 {
    current
        .channels()
        .into_iter()
        .zip(up_left.channels())
        .map(|(c, u)| c - u)
        .fold(0, |diff, d| if d.abs() > diff.abs() { d } else { diff })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel() {
        let mut image = Image::new(1, 1);
        image.set(0, 0, 10, 200, 30);
        emboss(&mut image);
        assert_eq!(image.get(0, 0), Color::gray(128));
    }

    #[test]
    fn test_border_pixels_are_flat() {
        let mut image = Image::new(3, 3);
        for (i, pixel) in image.pixels_mut().enumerate() {
            *pixel = Color::gray(i as i32 * 20);
        }
        emboss(&mut image);

        for i in 0..3 {
            assert_eq!(image.get(i, 0), Color::gray(128));
            assert_eq!(image.get(0, i), Color::gray(128));
        }
    }

    #[test]
    fn test_uses_original_neighbour_values() {
        // gray ramp: value(x, y) = 10 * (x + 3 * y), up-left diff is always 40
        let mut image = Image::new(3, 3);
        for (i, pixel) in image.pixels_mut().enumerate() {
            *pixel = Color::gray(i as i32 * 10);
        }
        emboss(&mut image);

        assert_eq!(image.get(1, 1), Color::gray(168));
        assert_eq!(image.get(2, 1), Color::gray(168));
        assert_eq!(image.get(1, 2), Color::gray(168));
        assert_eq!(image.get(2, 2), Color::gray(168));
    }

    #[test]
    fn test_dominant_diff_sign_and_ties() {
        let base = Color::new(100, 100, 100);
        assert_eq!(dominant_diff(Color::new(110, 80, 100), base), -20);
        assert_eq!(dominant_diff(Color::new(130, 100, 70), base), 30);
        assert_eq!(dominant_diff(Color::new(70, 130, 100), base), -30);
        assert_eq!(dominant_diff(base, base), 0);
    }

    #[test]
    fn test_clamps_result() {
        let mut image = Image::new(2, 2);
        image.set(0, 0, 0, 0, 0);
        image.set(1, 1, 255, 0, 0);
        emboss(&mut image);
        assert_eq!(image.get(1, 1), Color::gray(255));

        let mut image = Image::new(2, 2);
        image.set(0, 0, 0, 255, 0);
        image.set(1, 1, 0, 0, 0);
        emboss(&mut image);
        assert_eq!(image.get(1, 1), Color::gray(0));
    }

    #[test]
    fn test_empty_image() {
        let mut image = Image::new(4, 0);
        emboss(&mut image);
        assert!(image.is_empty());
    }

    #[test]
    fn test_huge_empty_dimensions() {
        for input in ["P3 100000000000000 0 255", "P3 0 100000000000000 255"] {
            let mut image = pixmap::codec::decode(input).unwrap();
            emboss(&mut image);
            assert!(image.is_empty());
        }
    }

    #[test]
    fn test_non_square_uses_original_values() {
        // value(x, y) = 10 * (x + 4 * y), up-left diff is always 50
        let mut image = Image::new(4, 2);
        for (i, pixel) in image.pixels_mut().enumerate() {
            *pixel = Color::gray(i as i32 * 10);
        }
        emboss(&mut image);

        for x in 1..4 {
            assert_eq!(image.get(x, 1), Color::gray(178));
        }
    }
}
