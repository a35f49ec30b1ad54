use image_effect::{Effect, ImageEffect};
use pixmap::codec;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // Run `cargo run --example create_test_image` first
    let mut img = codec::read("data/test.ppm")?;

    ImageEffect::Grayscale.apply(&mut img);
    codec::write(&img, output_dir.join("grayscale_effect.ppm"))?;

    println!("✓ Grayscale effect applied successfully!");
    println!("  Effect:   tmp/grayscale_effect.ppm");

    Ok(())
}
