mod error;

pub use error::MatrixError;
