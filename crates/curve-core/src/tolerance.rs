/// Tolerance used when comparing control points and evaluated points.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for coordinate comparisons
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
        }
    }

    /// Single-precision friendly tolerance, good for comparing curve samples.
    pub fn loose() -> Self {
        Self { linear: 1e-3 }
    }

    pub fn tight() -> Self {
        Self { linear: 1e-10 }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
