//! A spinning triangle rasterized into a text grid.
//!
//! The base triangle rotates a little every frame; a scaled, stretched and
//! recentred copy of it is rasterized into a fixed-size grid of `@` and `-`
//! characters and written to the console at a steady frame rate.
//!
//! # Quick Start
//!
//! ```ignore
//! use trispin::prelude::*;
//!
//! let config = AnimationConfig::default();
//! let mut render_loop = RenderLoop::new(&config, Console::stdout(), FrameLimiter::default());
//! render_loop.run(FrameLimit::Frames(60))?;
//! ```

// Public API - exposed to library consumers
pub mod config;
pub mod console;
pub mod engine;
pub mod math;
pub mod render;
pub mod triangle;

// Re-export commonly needed types at crate root for convenience
pub use config::AnimationConfig;
pub use engine::{Animator, FrameLimit, RenderLoop};
pub use triangle::Triangle;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use trispin::prelude::*;
/// ```
pub mod prelude {
    // Configuration
    pub use crate::config::AnimationConfig;

    // Engine
    pub use crate::engine::{Animator, FrameLimit, RenderLoop};

    // Math
    pub use crate::math::mat2::Mat2;
    pub use crate::math::vec2::Vec2;

    // Geometry
    pub use crate::triangle::Triangle;

    // Rendering
    pub use crate::render::{FrameBuffer, Glyph, Rasterizer, RasterizerType};

    // Console
    pub use crate::console::{Console, FrameLimiter, FramePacer};
}
