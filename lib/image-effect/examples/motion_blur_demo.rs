use image_effect::{Effect, blur_effect::MotionBlurConfig};
use pixmap::codec;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img = codec::read("data/test.ppm")?;

    for length in [1, 5, 15, 40] {
        let mut test_img = img.clone();
        MotionBlurConfig::new()
            .with_length(length)
            .apply(&mut test_img);

        let filename = format!("motion_blur_{length}.ppm");
        codec::write(&test_img, output_dir.join(&filename))?;

        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All motion blur effects applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
