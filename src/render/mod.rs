pub mod framebuffer;
pub mod rasterizer;

pub use framebuffer::{FrameBuffer, Glyph};
pub use rasterizer::{
    BoundingBoxRasterizer, GridRasterizer, Rasterizer, RasterizerDispatcher, RasterizerType,
};
