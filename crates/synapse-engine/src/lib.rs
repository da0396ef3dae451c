pub mod api;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod theme;

// Re-export key types at crate root for convenience
pub use api::config::{FieldConfig, PointerResponse};
pub use api::types::{Bounds, Connection};
pub use core::cursor::CursorFollower;
pub use core::field::{Field, FrameStats};
pub use core::frame_loop::{FrameLoop, FrameScheduler};
pub use core::particle::Particle;
pub use core::rng::Rng;
pub use error::{ColorParseError, ConfigError};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::recording::{DrawCommand, RecordingSurface};
pub use renderer::traits::Surface;
pub use theme::{ColorScheme, Rgba, Theme};
