use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cgmath::Vector2;
use clap::Parser;
use log::info;

use sprig::{
    Color, Drawable, Image, ImageManager, Rect, RenderTarget, Renderer, SoftwareRenderer, Sprite,
};

#[derive(Parser)]
#[command(about = "Render a sample sprite scene to a PNG")]
struct Args {
    /// Where to write the rendered frame.
    #[arg(long, default_value = "frame.png")]
    output: PathBuf,

    /// Frame width in pixels.
    #[arg(long, default_value_t = 128)]
    width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 128)]
    height: u32,
}

fn checkerboard(size: u32, cell: u32) -> Image {
    let mut image = Image::solid(size, size, Color::rgb(230, 230, 230));
    for y in 0..size {
        for x in 0..size {
            if ((x / cell) + (y / cell)) % 2 == 1 {
                image.set_pixel(x, y, Color::rgb(60, 60, 90));
            }
        }
    }
    image
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut images = ImageManager::new();
    images.insert("checker", checkerboard(32, 4));
    let checker = images
        .image(Path::new("checker"))
        .context("checker image is registered above")?;

    let mut target = RenderTarget::new(args.width, args.height);
    target.clear_color = "#202030".parse()?;

    let mut plain = Sprite::with_image(checker);
    plain.transform_mut().position = Vector2::new(8.0, 8.0);
    plain.draw(&mut target);

    let mut flipped = Sprite::with_image(checker);
    flipped.set_flip_x(true);
    flipped.transform_mut().position = Vector2::new(56.0, 8.0);
    flipped.transform_mut().color = Color::rgb(255, 160, 160);
    flipped.draw(&mut target);

    let mut scaled = Sprite::with_image(checker);
    scaled.resize(64.0, 32.0);
    scaled.transform_mut().position = Vector2::new(8.0, 56.0);
    scaled.transform_mut().rotation = 15.0;
    scaled.draw(&mut target);

    let mut flat = Sprite::new();
    flat.set_sub_rect(Rect::new(0, 0, 24, 24));
    flat.transform_mut().position = Vector2::new(88.0, 88.0);
    flat.transform_mut().color = Color::rgba(80, 200, 120, 200);
    flat.draw(&mut target);

    let frame = SoftwareRenderer::new().present(&target)?;
    frame.save(&args.output)?;
    info!("wrote {:?}", args.output);

    Ok(())
}
