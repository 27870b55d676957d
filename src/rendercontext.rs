use bytemuck::{Pod, Zeroable};
use cgmath::{Matrix3, SquareMatrix, Vector2, Vector3};

use crate::image::Image;
use crate::utils::Color;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
    pub color: [f32; 4],
}

/// One submitted quad. Vertices are already in target space, ordered
/// top-left, bottom-left, bottom-right, top-right.
pub enum DrawCommand<'i> {
    TexturedQuad {
        image: &'i Image,
        vertices: [Vertex; 4],
    },
    FlatQuad {
        vertices: [Vertex; 4],
    },
}

/// Collects draw commands for one frame. Drawables emit local-space quads;
/// the target applies its current transform and draw color as they land.
pub struct RenderTarget<'i> {
    width: u32,
    height: u32,
    pub clear_color: Color,
    transform: Matrix3<f32>,
    draw_color: Color,
    commands: Vec<DrawCommand<'i>>,
}

impl<'i> RenderTarget<'i> {
    pub fn new(width: u32, height: u32) -> RenderTarget<'i> {
        RenderTarget {
            width,
            height,
            clear_color: Color::BLACK,
            transform: Matrix3::identity(),
            draw_color: Color::WHITE,
            commands: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn commands(&self) -> &[DrawCommand<'i>] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.clear_color = Color::BLACK;
    }

    pub fn set_transform(&mut self, transform: Matrix3<f32>) {
        self.transform = transform;
    }

    pub fn replace_transform(&mut self, transform: Matrix3<f32>) -> Matrix3<f32> {
        std::mem::replace(&mut self.transform, transform)
    }

    #[inline]
    pub fn draw_color(&self) -> Color {
        self.draw_color
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    pub fn replace_draw_color(&mut self, color: Color) -> Color {
        std::mem::replace(&mut self.draw_color, color)
    }

    fn vertex(&self, position: Vector2<f32>, tex_coords: Vector2<f32>) -> Vertex {
        let p = self.transform * Vector3::new(position.x, position.y, 1.0);
        Vertex {
            position: [p.x, p.y],
            tex_coords: [tex_coords.x, tex_coords.y],
            color: self.draw_color.into(),
        }
    }

    pub fn draw_textured_quad(
        &mut self,
        image: &'i Image,
        corners: [Vector2<f32>; 4],
        tex_coords: [Vector2<f32>; 4],
    ) {
        let vertices = [
            self.vertex(corners[0], tex_coords[0]),
            self.vertex(corners[1], tex_coords[1]),
            self.vertex(corners[2], tex_coords[2]),
            self.vertex(corners[3], tex_coords[3]),
        ];
        self.commands.push(DrawCommand::TexturedQuad { image, vertices });
    }

    pub fn draw_flat_quad(&mut self, corners: [Vector2<f32>; 4]) {
        let zero = Vector2::new(0.0, 0.0);
        let vertices = [
            self.vertex(corners[0], zero),
            self.vertex(corners[1], zero),
            self.vertex(corners[2], zero),
            self.vertex(corners[3], zero),
        ];
        self.commands.push(DrawCommand::FlatQuad { vertices });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(w: f32, h: f32) -> [Vector2<f32>; 4] {
        [
            Vector2::new(0.0, 0.0),
            Vector2::new(0.0, h),
            Vector2::new(w, h),
            Vector2::new(w, 0.0),
        ]
    }

    #[test]
    fn flat_quad_captures_vertices() {
        let mut target = RenderTarget::new(16, 16);
        target.draw_flat_quad(quad(4.0, 2.0));

        assert_eq!(target.commands().len(), 1);
        let DrawCommand::FlatQuad { vertices } = &target.commands()[0] else {
            panic!("expected a flat quad");
        };
        assert_eq!(vertices[0].position, [0.0, 0.0]);
        assert_eq!(vertices[1].position, [0.0, 2.0]);
        assert_eq!(vertices[2].position, [4.0, 2.0]);
        assert_eq!(vertices[3].position, [4.0, 0.0]);
    }

    #[test]
    fn transform_applies_to_emitted_vertices() {
        let mut target = RenderTarget::new(16, 16);
        target.set_transform(Matrix3::from_translation(Vector2::new(10.0, 20.0)));
        target.draw_flat_quad(quad(1.0, 1.0));

        let DrawCommand::FlatQuad { vertices } = &target.commands()[0] else {
            panic!("expected a flat quad");
        };
        assert_eq!(vertices[0].position, [10.0, 20.0]);
        assert_eq!(vertices[2].position, [11.0, 21.0]);
    }

    #[test]
    fn draw_color_is_stamped_on_vertices() {
        let mut target = RenderTarget::new(16, 16);
        target.set_draw_color(Color::rgb(255, 0, 0));
        target.draw_flat_quad(quad(1.0, 1.0));

        let DrawCommand::FlatQuad { vertices } = &target.commands()[0] else {
            panic!("expected a flat quad");
        };
        assert_eq!(vertices[0].color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn textured_quad_keeps_tex_coords() {
        let image = Image::solid(2, 2, Color::WHITE);
        let mut target = RenderTarget::new(16, 16);
        let tex_coords = [
            Vector2::new(0.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 0.0),
        ];
        target.draw_textured_quad(&image, quad(2.0, 2.0), tex_coords);

        let DrawCommand::TexturedQuad { vertices, .. } = &target.commands()[0] else {
            panic!("expected a textured quad");
        };
        assert_eq!(vertices[1].tex_coords, [0.0, 1.0]);
        assert_eq!(vertices[3].tex_coords, [1.0, 0.0]);
    }

    #[test]
    fn replace_and_restore_state() {
        let mut target = RenderTarget::new(16, 16);
        let previous = target.replace_draw_color(Color::rgb(1, 2, 3));
        assert_eq!(previous, Color::WHITE);
        assert_eq!(target.draw_color(), Color::rgb(1, 2, 3));

        let previous = target.replace_transform(Matrix3::from_scale(2.0));
        assert_eq!(previous, Matrix3::identity());
        target.set_transform(previous);

        target.draw_flat_quad(quad(1.0, 1.0));
        target.clear();
        assert!(target.commands().is_empty());
    }
}
