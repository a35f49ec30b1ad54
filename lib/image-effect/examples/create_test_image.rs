use pixmap::{Image, codec};

fn main() -> anyhow::Result<()> {
    // Create a 320x240 test image with colorful gradients
    let (width, height) = (320, 240);
    let mut img = Image::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width) as i32;
            let g = (y * 255 / height) as i32;
            let b = ((x + y) * 255 / (width + height)) as i32;
            img.set(x, y, r, g, b);
        }
    }

    std::fs::create_dir_all("data")?;
    codec::write(&img, "data/test.ppm")?;
    println!("Created data/test.ppm");

    Ok(())
}
