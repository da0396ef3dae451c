/// A transient link between two particles closer than the connection distance.
///
/// Recomputed every frame; indices refer to the field's particle order and
/// `a < b` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    /// Stroke alpha: `(1 - distance / connection_distance) * connection_opacity`.
    pub opacity: f32,
}

/// Field dimensions in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}
