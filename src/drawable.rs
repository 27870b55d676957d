use crate::rendercontext::RenderTarget;
use crate::transform::Transform;

/// Anything that can be drawn into a render target.
pub trait Drawable<'i> {
    fn transform(&self) -> &Transform;

    fn transform_mut(&mut self) -> &mut Transform;

    /// Emit geometry in local space. The target's transform and draw color
    /// are assumed current.
    fn render(&self, target: &mut RenderTarget<'i>);

    /// Install this drawable's world matrix and tint on the target, render,
    /// then restore the previous state.
    fn draw(&self, target: &mut RenderTarget<'i>) {
        let previous_transform = target.replace_transform(self.transform().matrix());
        let previous_color = target.replace_draw_color(self.transform().color);
        self.render(target);
        target.set_transform(previous_transform);
        target.set_draw_color(previous_color);
    }
}
