pub mod color_space;
pub mod glsl;
pub mod matrix;

pub use color_space::{ColorRange, LumaCoefficients};
pub use matrix::RgbToYuvMatrix;
