pub mod color;
pub mod invocation;

pub use color::{ColorRange, LumaCoefficients, RgbToYuvMatrix};
pub use invocation::{Invocation, USAGE};
