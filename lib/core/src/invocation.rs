use crate::color::{ColorRange, LumaCoefficients, RgbToYuvMatrix};
use create_matrix_common::MatrixError;
use std::borrow::Cow;

pub const USAGE: &str = "\
usage: Kr Kg Kb full|limited
examples:
  create_matrix.py 0.2126 0.7152 0.0722 full
  create_matrix.py 0.2126 0.7152 0.0722 limited";

/// Positional arguments of `create_matrix <Kr> <Kg> <Kb> <full|limited>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Invocation {
    pub coefficients: LumaCoefficients,
    pub range: ColorRange,
}

impl Invocation {
    /// Parses the arguments following the program name.
    ///
    /// The count is checked before anything is parsed.
    pub fn from_args<I, S>(args: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let [kr, kg, kb, range] = args.as_slice() else {
            return Err(MatrixError::ArgumentCount(args.len()));
        };

        let coefficients = LumaCoefficients::new(
            parse_coefficient("Kr", kr.as_ref())?,
            parse_coefficient("Kg", kg.as_ref())?,
            parse_coefficient("Kb", kb.as_ref())?,
        );
        let range = ColorRange::from(range.as_ref());

        tracing::debug!(?coefficients, ?range, "parsed invocation");

        Ok(Self {
            coefficients,
            range,
        })
    }

    pub fn matrix(&self) -> RgbToYuvMatrix {
        RgbToYuvMatrix::builder()
            .coefficients(self.coefficients)
            .range(self.range)
            .build()
    }
}

fn parse_coefficient(name: &'static str, value: &str) -> Result<f64, MatrixError> {
    strip_digit_separators(value.trim())
        .parse::<f64>()
        .map_err(|source| MatrixError::InvalidCoefficient {
            name,
            value: value.to_string(),
            source,
        })
}

// "1_000.5" is accepted. An underscore must sit between two digits, otherwise
// the literal is left alone and fails to parse.
fn strip_digit_separators(value: &str) -> Cow<'_, str> {
    if !value.contains('_') {
        return Cow::Borrowed(value);
    }

    let bytes = value.as_bytes();
    let between_digits = bytes
        .iter()
        .enumerate()
        .filter(|(_, byte)| **byte == b'_')
        .all(|(i, _)| {
            i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        });

    if between_digits {
        Cow::Owned(value.replace('_', ""))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_arguments() {
        let invocation = Invocation::from_args(["0.2126", "0.7152", "0.0722", "limited"]).unwrap();

        assert_eq!(invocation.coefficients, LumaCoefficients::BT709);
        assert_eq!(invocation.range, ColorRange::Limited);
    }

    #[test]
    fn wrong_count_is_rejected_before_parsing() {
        let err = Invocation::from_args(["abc", "0.7152", "0.0722"]).unwrap_err();
        assert!(matches!(err, MatrixError::ArgumentCount(3)));

        let err =
            Invocation::from_args(["0.2126", "0.7152", "0.0722", "full", "extra"]).unwrap_err();
        assert!(matches!(err, MatrixError::ArgumentCount(5)));

        let err = Invocation::from_args(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, MatrixError::ArgumentCount(0)));
    }

    #[test]
    fn bad_coefficient_names_the_argument() {
        let err = Invocation::from_args(["0.2126", "green", "0.0722", "full"]).unwrap_err();

        match err {
            MatrixError::InvalidCoefficient { name, value, .. } => {
                assert_eq!(name, "Kg");
                assert_eq!(value, "green");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_range_falls_back_to_full() {
        let invocation = Invocation::from_args(["0.299", "0.587", "0.114", "foo"]).unwrap();
        assert_eq!(invocation.range, ColorRange::Full);
    }

    #[test]
    fn accepts_padding_and_non_finite_literals() {
        let invocation = Invocation::from_args([" 0.5 ", "inf", "nan", "full"]).unwrap();

        assert_eq!(invocation.coefficients.kr, 0.5);
        assert_eq!(invocation.coefficients.kg, f64::INFINITY);
        assert!(invocation.coefficients.kb.is_nan());
    }

    #[test]
    fn digit_group_underscores_are_accepted() {
        let invocation = Invocation::from_args(["1e300", "1_0", "0.0_722", "full"]).unwrap();

        assert_eq!(invocation.coefficients.kg, 10.0);
        assert_eq!(invocation.coefficients.kb, 0.0722);
    }

    #[test]
    fn misplaced_underscores_are_rejected() {
        for kr in ["_1", "1_", "1__0", "1_.5", "1._5", "1_e5"] {
            let err = Invocation::from_args([kr, "0.7152", "0.0722", "full"]).unwrap_err();
            assert!(
                matches!(err, MatrixError::InvalidCoefficient { name: "Kr", .. }),
                "{kr:?} should not parse"
            );
        }
    }

    #[test]
    fn matrix_uses_parsed_range() {
        let invocation = Invocation::from_args(["0.2126", "0.7152", "0.0722", "limited"]).unwrap();
        let matrix = invocation.matrix();

        assert_eq!(matrix.range(), ColorRange::Limited);
        assert_eq!(matrix.offset()[0], 16.0 / 255.0);
    }
}
