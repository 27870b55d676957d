use anyhow::{bail, Result};
use log::debug;

use crate::image::Image;
use crate::rendercontext::{DrawCommand, RenderTarget, Vertex};
use crate::utils::Color;

/// A backend that turns a render target's command list into a frame.
pub trait Renderer {
    fn present(&mut self, target: &RenderTarget) -> Result<Image>;
}

/// CPU rasterizer. Fills each quad as two triangles with nearest-neighbor
/// sampling and source-over blending.
pub struct SoftwareRenderer;

impl SoftwareRenderer {
    pub fn new() -> SoftwareRenderer {
        SoftwareRenderer
    }
}

impl Renderer for SoftwareRenderer {
    fn present(&mut self, target: &RenderTarget) -> Result<Image> {
        if target.width() == 0 || target.height() == 0 {
            bail!(
                "render target has zero size: {}x{}",
                target.width(),
                target.height()
            );
        }

        let mut frame = Image::solid(target.width(), target.height(), target.clear_color);
        for command in target.commands() {
            match command {
                DrawCommand::TexturedQuad { image, vertices } => {
                    fill_quad(&mut frame, vertices, Some(*image));
                }
                DrawCommand::FlatQuad { vertices } => {
                    fill_quad(&mut frame, vertices, None);
                }
            }
        }
        debug!("presented {} commands", target.commands().len());
        Ok(frame)
    }
}

fn fill_quad(frame: &mut Image, vertices: &[Vertex; 4], image: Option<&Image>) {
    // The quad arrives as top-left, bottom-left, bottom-right, top-right.
    fill_triangle(frame, [&vertices[0], &vertices[1], &vertices[2]], image);
    fill_triangle(frame, [&vertices[0], &vertices[2], &vertices[3]], image);
}

fn edge(a: [f32; 2], b: [f32; 2], x: f32, y: f32) -> f32 {
    (b[0] - a[0]) * (y - a[1]) - (b[1] - a[1]) * (x - a[0])
}

fn fill_triangle(frame: &mut Image, v: [&Vertex; 3], image: Option<&Image>) {
    let area = edge(v[0].position, v[1].position, v[2].position[0], v[2].position[1]);
    if area == 0.0 {
        return;
    }

    let min_x = v.iter().map(|v| v.position[0]).fold(f32::INFINITY, f32::min);
    let max_x = v
        .iter()
        .map(|v| v.position[0])
        .fold(f32::NEG_INFINITY, f32::max);
    let min_y = v.iter().map(|v| v.position[1]).fold(f32::INFINITY, f32::min);
    let max_y = v
        .iter()
        .map(|v| v.position[1])
        .fold(f32::NEG_INFINITY, f32::max);

    let x0 = (min_x.floor() as i64).max(0) as u32;
    let y0 = (min_y.floor() as i64).max(0) as u32;
    let x1 = (max_x.ceil() as i64).clamp(0, frame.width() as i64) as u32;
    let y1 = (max_y.ceil() as i64).clamp(0, frame.height() as i64) as u32;

    for y in y0..y1.min(frame.height()) {
        for x in x0..x1.min(frame.width()) {
            // Coverage is decided at the pixel center.
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let w0 = edge(v[1].position, v[2].position, px, py) / area;
            let w1 = edge(v[2].position, v[0].position, px, py) / area;
            let w2 = edge(v[0].position, v[1].position, px, py) / area;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            let lerp = |f: fn(&Vertex) -> f32| w0 * f(v[0]) + w1 * f(v[1]) + w2 * f(v[2]);
            let mut source = [
                lerp(|v| v.color[0]),
                lerp(|v| v.color[1]),
                lerp(|v| v.color[2]),
                lerp(|v| v.color[3]),
            ];

            if let Some(image) = image {
                let u = lerp(|v| v.tex_coords[0]);
                let t = lerp(|v| v.tex_coords[1]);
                let texel: [f32; 4] = sample(image, u, t).into();
                for (channel, tex_channel) in source.iter_mut().zip(texel) {
                    *channel *= tex_channel;
                }
            }

            let blended = blend(frame.pixel(x, y), source);
            frame.set_pixel(x, y, blended);
        }
    }
}

fn sample(image: &Image, u: f32, t: f32) -> Color {
    let x = ((u * image.width() as f32).floor() as i64).max(0) as u32;
    let y = ((t * image.height() as f32).floor() as i64).max(0) as u32;
    // Image::pixel clamps the far edges.
    image.pixel(x, y)
}

fn blend(dst: Color, src: [f32; 4]) -> Color {
    let sa = src[3].clamp(0.0, 1.0);
    let channel = |s: f32, d: u8| {
        let d = d as f32 / 255.0;
        let out = s.clamp(0.0, 1.0) * sa + d * (1.0 - sa);
        (out * 255.0).round() as u8
    };
    let da = dst.a as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    Color {
        r: channel(src[0], dst.r),
        g: channel(src[1], dst.g),
        b: channel(src[2], dst.b),
        a: (out_a * 255.0).round() as u8,
    }
}
