use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CurveError {
    /// A curve parameter fell outside the interval it is checked against.
    #[error("{t} is not a valid value for t, must be between {lower} and {upper}")]
    InvalidParameter { t: f64, lower: f64, upper: f64 },

    /// A time window that is empty or has a non-finite bound cannot be
    /// normalized.
    #[error("time window [{start}, {end}] is degenerate")]
    DegenerateWindow { start: f64, end: f64 },
}

impl CurveError {
    pub fn invalid_parameter(t: f64, lower: f64, upper: f64) -> Self {
        Self::InvalidParameter { t, lower, upper }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    pub fn is_degenerate_window(&self) -> bool {
        matches!(self, Self::DegenerateWindow { .. })
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;
