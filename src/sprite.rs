use cgmath::Vector2;

use crate::drawable::Drawable;
use crate::geometry::Rect;
use crate::image::Image;
use crate::rendercontext::RenderTarget;
use crate::transform::Transform;
use crate::utils::Color;

// Half-pixel translation applied to textured quads so texel centers line up
// with pixel centers in the rasterizer. See
// http://www.opengl.org/resources/faq/technical/transformations.htm#tran0030
const TEXEL_ALIGNMENT: f32 = 0.375;

/// A textured (or flat-colored) rectangular drawable.
///
/// The sprite borrows its image; the sub-rectangle selects the pixel region
/// of the image to display. With no image set, the sprite renders as a flat
/// quad in its tint color.
pub struct Sprite<'i> {
    image: Option<&'i Image>,
    sub_rect: Rect<i32>,
    flip_x: bool,
    flip_y: bool,
    transform: Transform,
}

impl<'i> Sprite<'i> {
    pub fn new() -> Sprite<'i> {
        Sprite {
            image: None,
            sub_rect: Rect::new(0, 0, 1, 1),
            flip_x: false,
            flip_y: false,
            transform: Transform::default(),
        }
    }

    pub fn with_image(image: &'i Image) -> Sprite<'i> {
        let mut sprite = Sprite::new();
        sprite.set_image(image, false);
        sprite
    }

    /// Assign the source image. The sub-rectangle is reset to cover the whole
    /// image when this is the first image assigned, or when
    /// `adjust_to_new_size` is set; zero-sized images keep the previous
    /// sub-rectangle.
    pub fn set_image(&mut self, image: &'i Image, adjust_to_new_size: bool) {
        let adjust = adjust_to_new_size || self.image.is_none();
        if adjust && image.width() > 0 && image.height() > 0 {
            self.set_sub_rect(Rect::new(0, 0, image.width() as i32, image.height() as i32));
        }
        self.image = Some(image);
    }

    pub fn image(&self) -> Option<&'i Image> {
        self.image
    }

    /// Replace the sub-rectangle. No validation against the image bounds;
    /// out-of-range regions clamp at sampling time.
    pub fn set_sub_rect(&mut self, sub_rect: Rect<i32>) {
        self.sub_rect = sub_rect;
    }

    pub fn sub_rect(&self) -> Rect<i32> {
        self.sub_rect
    }

    /// Pick scale factors so the rendered size matches `width` x `height`.
    /// Does nothing if the sub-rectangle has no extent.
    pub fn resize(&mut self, width: f32, height: f32) {
        let local_width = self.sub_rect.w;
        let local_height = self.sub_rect.h;
        if local_width > 0 && local_height > 0 {
            self.transform.scale = Vector2::new(
                width / local_width as f32,
                height / local_height as f32,
            );
        }
    }

    pub fn set_flip_x(&mut self, flipped: bool) {
        self.flip_x = flipped;
    }

    pub fn set_flip_y(&mut self, flipped: bool) {
        self.flip_y = flipped;
    }

    pub fn flip_x(&self) -> bool {
        self.flip_x
    }

    pub fn flip_y(&self) -> bool {
        self.flip_y
    }

    /// Rendered footprint before rotation: sub-rectangle extent times scale.
    pub fn size(&self) -> Vector2<f32> {
        Vector2::new(
            self.sub_rect.w as f32 * self.transform.scale.x,
            self.sub_rect.h as f32 * self.transform.scale.y,
        )
    }

    /// Sample the sprite color at local pixel (x, y): sub-rectangle offset,
    /// flip mirroring, image fetch, tint. Without an image this is just the
    /// tint color.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let Some(image) = self.image else {
            return self.transform.color;
        };

        let mut image_x = self.sub_rect.x + x as i32;
        let mut image_y = self.sub_rect.y + y as i32;

        if self.flip_x {
            image_x = self.sub_rect.w - image_x - 1;
        }
        if self.flip_y {
            image_y = self.sub_rect.h - image_y - 1;
        }

        image
            .pixel(image_x.max(0) as u32, image_y.max(0) as u32)
            .modulate(self.transform.color)
    }
}

impl<'i> Drawable<'i> for Sprite<'i> {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn render(&self, target: &mut RenderTarget<'i>) {
        let width = self.sub_rect.w as f32;
        let height = self.sub_rect.h as f32;

        let image = self
            .image
            .filter(|image| image.width() > 0 && image.height() > 0);

        match image {
            Some(image) => {
                let corners = [
                    Vector2::new(TEXEL_ALIGNMENT, TEXEL_ALIGNMENT),
                    Vector2::new(TEXEL_ALIGNMENT, height + TEXEL_ALIGNMENT),
                    Vector2::new(width + TEXEL_ALIGNMENT, height + TEXEL_ALIGNMENT),
                    Vector2::new(width + TEXEL_ALIGNMENT, TEXEL_ALIGNMENT),
                ];

                let tex = image.tex_coords(self.sub_rect);
                let (left, right) = if self.flip_x {
                    (tex.right(), tex.left())
                } else {
                    (tex.left(), tex.right())
                };
                let (top, bottom) = if self.flip_y {
                    (tex.bottom(), tex.top())
                } else {
                    (tex.top(), tex.bottom())
                };
                let tex_coords = [
                    Vector2::new(left, top),
                    Vector2::new(left, bottom),
                    Vector2::new(right, bottom),
                    Vector2::new(right, top),
                ];

                target.draw_textured_quad(image, corners, tex_coords);
            }
            None => {
                // Untextured: a flat quad in the current draw color.
                let corners = [
                    Vector2::new(0.0, 0.0),
                    Vector2::new(0.0, height),
                    Vector2::new(width, height),
                    Vector2::new(width, 0.0),
                ];
                target.draw_flat_quad(corners);
            }
        }
    }
}
