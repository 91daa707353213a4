use crate::FkError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, FkError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FkError::NonFinite { what, value: v })
    }
}
