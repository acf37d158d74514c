//! The receiver of decoded drawing directives.
//!
//! The decoder does not render anything itself. It drives a `Destination`
//! with one call per decoded instruction, so implementations can rasterize,
//! extract geometry, or re-emit the graphic in another format.

use crate::types::Metadata;

/// A sink for the directives decoded from an IconVG graphic.
///
/// When passed to the decoder, the first method called (if any) is
/// [`Destination::reset`]. No method is called at all if the metadata is
/// malformed, and no directive is delivered before all of its operands have
/// been decoded.
///
/// # Example
///
/// ```ignore
/// use iconvg::{Destination, Metadata};
///
/// struct CountPaths(usize);
///
/// impl Destination for CountPaths {
///     fn reset(&mut self, _metadata: &Metadata) {
///         self.0 = 0;
///     }
///
///     fn start_path(&mut self, _adj: usize, _x: f32, _y: f32) {
///         self.0 += 1;
///     }
///
///     // ...
/// }
/// ```
pub trait Destination {
    /// Called once with the fully decoded metadata, before any drawing call.
    fn reset(&mut self, metadata: &Metadata);

    /// Starts a path at the absolute point (`x`, `y`), filled with the color
    /// register `adj` slots below the current color selector.
    fn start_path(&mut self, adj: usize, x: f32, y: f32);
    /// Closes the current path and ends it. The decoder returns to styling mode.
    fn close_path_end_path(&mut self);
    /// Closes the current path and starts a new sub-path at an absolute point.
    fn close_path_abs_move_to(&mut self, x: f32, y: f32);
    /// Closes the current path and starts a new sub-path at a relative point.
    fn close_path_rel_move_to(&mut self, x: f32, y: f32);

    fn abs_h_line_to(&mut self, x: f32);
    fn rel_h_line_to(&mut self, x: f32);
    fn abs_v_line_to(&mut self, y: f32);
    fn rel_v_line_to(&mut self, y: f32);

    fn abs_line_to(&mut self, x: f32, y: f32);
    fn rel_line_to(&mut self, x: f32, y: f32);
    fn abs_smooth_quad_to(&mut self, x: f32, y: f32);
    fn rel_smooth_quad_to(&mut self, x: f32, y: f32);
    fn abs_quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32);
    fn rel_quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32);
    fn abs_smooth_cube_to(&mut self, x2: f32, y2: f32, x: f32, y: f32);
    fn rel_smooth_cube_to(&mut self, x2: f32, y2: f32, x: f32, y: f32);
    fn abs_cube_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32);
    fn rel_cube_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32);

    /// Draws an elliptical arc to the absolute point (`x`, `y`).
    #[allow(clippy::too_many_arguments)]
    fn abs_arc_to(
        &mut self,
        rx: f32,
        ry: f32,
        x_axis_rotation: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    );
    /// Draws an elliptical arc to the relative point (`x`, `y`).
    #[allow(clippy::too_many_arguments)]
    fn rel_arc_to(
        &mut self,
        rx: f32,
        ry: f32,
        x_axis_rotation: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    );
}
