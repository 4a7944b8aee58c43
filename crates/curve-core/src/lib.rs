pub mod error;
pub mod param;
pub mod time;
pub mod tolerance;
pub mod traits;

pub use error::{CurveError, Result};
pub use param::{check_parameter, check_unit};
pub use time::{normalize, TimeWindow};
pub use tolerance::Tolerance;
