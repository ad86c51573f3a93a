pub mod mat2;
pub mod vec2;
