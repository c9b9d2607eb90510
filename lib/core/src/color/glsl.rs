use super::matrix::RgbToYuvMatrix;
use std::fmt;

const DECLARATION: &str = "const mat4 RGBtoYUV = mat4(";

/// Renders the matrix as a column-major GLSL `mat4` constant.
///
/// Each of the first three lines is one input channel (R, G, B), the last
/// line is the offset column. Lines are joined with `\n`, without a
/// trailing newline.
pub fn render_declaration(matrix: &RgbToYuvMatrix) -> String {
    let rows = matrix.rows();
    let indent = " ".repeat(DECLARATION.len());

    let mut lines = Vec::with_capacity(4);
    for column in 0..3 {
        let prefix = if column == 0 { DECLARATION } else { indent.as_str() };
        lines.push(format!(
            "{}{}, {}, {}, {},",
            prefix,
            plain(rows[0][column]),
            aligned(rows[1][column]),
            aligned(rows[2][column]),
            plain(0.0),
        ));
    }

    let [y, u, v] = *matrix.offset();
    lines.push(format!(
        "{}{}, {}, {}, {});",
        indent,
        plain(y),
        aligned(u),
        aligned(v),
        plain(1.0),
    ));

    lines.join("\n")
}

impl fmt::Display for RgbToYuvMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_declaration(self))
    }
}

// printf-style %f: six decimals, lowercase inf/nan.
fn plain(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.6}", value)
    }
}

// Leading space for v >= 0 so columns line up with negative values.
fn aligned(value: f64) -> String {
    if value >= 0.0 {
        format!(" {}", plain(value))
    } else {
        plain(value)
    }
}
