use super::color_space::{ColorRange, LumaCoefficients};
use bon::bon;

/// Affine RGB to YUV transform.
///
/// Rows 0-2 are the linear part producing Y, U and V. Row 3 is the offset
/// added to each of them. For limited range the linear rows are already
/// scaled and the luma offset already applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbToYuvMatrix {
    rows: [[f64; 3]; 4],
    coefficients: LumaCoefficients,
    range: ColorRange,
}

#[bon]
impl RgbToYuvMatrix {
    #[builder]
    pub fn new(coefficients: LumaCoefficients, #[builder(default)] range: ColorRange) -> Self {
        let LumaCoefficients { kr, kg, kb } = coefficients;
        let transform_range = range.transform_range();
        let luma_offset = range.luma_offset();

        // Kb == 1 or Kr == 1 yields inf/NaN here, which is passed through.
        let linear = [
            [kr, kg, kb],
            [-0.5 * (kr / (1.0 - kb)), -0.5 * (kg / (1.0 - kb)), 0.5],
            [0.5, -0.5 * (kg / (1.0 - kr)), -0.5 * (kb / (1.0 - kr))],
        ];
        let offset = [0.0, 0.5, 0.5];

        let mut rows = [[0.0; 3]; 4];
        for (row, values) in rows.iter_mut().zip(linear.iter()) {
            for (out, value) in row.iter_mut().zip(values.iter()) {
                *out = value * transform_range;
            }
        }
        rows[3] = [offset[0] + luma_offset, offset[1], offset[2]];

        tracing::trace!(?coefficients, ?range, ?rows, "built RGB to YUV matrix");

        Self {
            rows,
            coefficients,
            range,
        }
    }
}

impl RgbToYuvMatrix {
    pub fn rows(&self) -> &[[f64; 3]; 4] {
        &self.rows
    }

    pub fn linear(&self) -> &[[f64; 3]] {
        &self.rows[..3]
    }

    pub fn offset(&self) -> &[f64; 3] {
        &self.rows[3]
    }

    pub fn coefficients(&self) -> LumaCoefficients {
        self.coefficients
    }

    pub fn range(&self) -> ColorRange {
        self.range
    }

    /// Same as `RGBtoYUV * vec4(rgb, 1.0)` in the shader.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        let mut yuv = *self.offset();
        for (out, row) in yuv.iter_mut().zip(self.linear()) {
            *out += row.iter().zip(rgb.iter()).map(|(m, c)| m * c).sum::<f64>();
        }
        yuv
    }

    /// Column-major 4x4 matrix in the layout of the GLSL `mat4` constant.
    /// `mat4[c]` holds column `c`: one input channel for c < 3, the offset for c == 3.
    pub fn to_mat4(&self) -> [[f32; 4]; 4] {
        let mut mat4 = [[0.0f32; 4]; 4];
        for (column, out) in mat4.iter_mut().take(3).enumerate() {
            for (row, value) in out.iter_mut().take(3).enumerate() {
                *value = self.rows[row][column] as f32;
            }
        }
        let [y, u, v] = self.rows[3];
        mat4[3] = [y as f32, u as f32, v as f32, 1.0];
        mat4
    }

    /// `to_mat4` as raw bytes for a uniform buffer.
    pub fn as_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_mat4()).to_vec()
    }
}
