use thiserror::Error;

/// Error raised by the arithmetic helpers for non-numeric input.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("Input must be a finite number, got {0}")]
    NotANumber(f64),
}

/// Squares a finite number.
pub fn square(value: f64) -> Result<f64, MathError> {
    if !value.is_finite() {
        return Err(MathError::NotANumber(value));
    }
    Ok(value * value)
}

/// Returns true iff the value is an even number.
///
/// Negative and fractional inputs follow native float remainder semantics:
/// `5.5 % 2.0` is `1.5`, so only exact multiples of two are even.
pub fn is_even(value: f64) -> Result<bool, MathError> {
    if !value.is_finite() {
        return Err(MathError::NotANumber(value));
    }
    Ok(value % 2.0 == 0.0)
}
