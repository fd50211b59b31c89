//! Input-boundary error types.

use thiserror::Error;

/// A numeric parameter was NaN or infinite.
///
/// Raised before any state is touched: a rejected animation start leaves the
/// animator exactly as it was, and a rejected vector never comes into
/// existence. Degenerate floating-point results (zero-magnitude divisions)
/// are NOT errors; they propagate as NaN/Infinity values per IEEE-754.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid parameter `{name}`: {value} is not finite")]
pub struct InvalidParameter {
    /// Which parameter was rejected (e.g. `"acceleration.x"`).
    pub name: &'static str,
    /// The offending value.
    pub value: f64,
}

impl InvalidParameter {
    /// Check a single scalar, naming it for the error message.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if `value` is NaN or infinite.
    pub fn check(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self { name, value })
        }
    }
}
