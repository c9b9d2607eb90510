use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Expected 4 arguments (Kr Kg Kb full|limited), got {0}")]
    ArgumentCount(usize),

    #[error("Invalid {name} coefficient {value:?}")]
    InvalidCoefficient {
        name: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}
