//! Drawing-surface contract.
//!
//! The field never talks to a canvas directly. Hosts implement [`Surface`]
//! over whatever immediate-mode 2D API they have (the browser bridge wraps
//! `CanvasRenderingContext2d`; tests use [`RecordingSurface`](super::RecordingSurface)).

use glam::Vec2;

use crate::theme::Rgba;

/// A resizable 2D immediate-mode drawing target.
pub trait Surface {
    /// Current width in pixels.
    fn width(&self) -> f32;

    /// Current height in pixels.
    fn height(&self) -> f32;

    /// Resize the backing store. Contents are discarded.
    fn set_size(&mut self, width: f32, height: f32);

    /// Clear the whole surface.
    fn clear(&mut self);

    /// Fill a disc.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a straight line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
}
