// Emboss effect example
// Demonstrates emboss relief effect
use image_effect::{Effect, ImageEffect};
use pixmap::codec;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let mut img = codec::read("data/test.ppm")?;

    ImageEffect::Emboss.apply(&mut img);
    codec::write(&img, output_dir.join("emboss_effect.ppm"))?;

    println!("✓ Emboss effect applied successfully!");
    println!("  Effect:   tmp/emboss_effect.ppm");

    Ok(())
}
