/// Luma weights of an RGB color standard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LumaCoefficients {
    pub kr: f64,
    pub kg: f64,
    pub kb: f64,
}

impl LumaCoefficients {
    /// ITU-R BT.601
    pub const BT601: Self = Self::new(0.299, 0.587, 0.114);
    /// ITU-R BT.709
    /// Reference: <https://www.itu.int/dms_pubrec/itu-r/rec/bt/R-REC-BT.709-6-201506-I!!PDF-E.pdf>
    pub const BT709: Self = Self::new(0.2126, 0.7152, 0.0722);
    /// ITU-R BT.2020
    /// Reference: <https://www.itu.int/dms_pubrec/itu-r/rec/bt/R-REC-BT.2020-2-201510-I!!PDF-E.pdf>
    pub const BT2020: Self = Self::new(0.2627, 0.678, 0.0593);

    pub const fn new(kr: f64, kg: f64, kb: f64) -> Self {
        Self { kr, kg, kb }
    }

    /// Derives Kg so that the three weights sum to one.
    pub fn from_kr_kb(kr: f64, kb: f64) -> Self {
        Self::new(kr, 1.0 - kr - kb, kb)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorRange {
    #[default]
    Full,
    /// Luma in [16, 235] of 255.
    Limited,
}

impl ColorRange {
    /// Scale applied to the linear rows of the matrix.
    pub fn transform_range(self) -> f64 {
        match self {
            ColorRange::Full => 1.0,
            ColorRange::Limited => (235.0 - 16.0) / 255.0,
        }
    }

    /// Added to the luma component of the offset row.
    pub fn luma_offset(self) -> f64 {
        match self {
            ColorRange::Full => 0.0,
            ColorRange::Limited => 16.0 / 255.0,
        }
    }
}

// Only the exact string "limited" selects limited range, anything else is full.
impl From<&str> for ColorRange {
    fn from(value: &str) -> Self {
        match value {
            "limited" => ColorRange::Limited,
            other => {
                if other != "full" {
                    tracing::debug!("unrecognized color range {:?}, using full", other);
                }
                ColorRange::Full
            }
        }
    }
}
