mod drawable;
mod geometry;
mod image;
mod imagemanager;
mod rendercontext;
mod renderer;
mod sprite;
mod transform;
mod utils;

pub use crate::image::{Image, ImageError};
pub use drawable::Drawable;
pub use geometry::{Point, Rect};
pub use imagemanager::ImageManager;
pub use rendercontext::{DrawCommand, RenderTarget, Vertex};
pub use renderer::{Renderer, SoftwareRenderer};
pub use sprite::Sprite;
pub use transform::Transform;
pub use utils::Color;
