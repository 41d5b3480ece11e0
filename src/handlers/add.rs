use anyhow::{Result, bail};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddParams {
    /// First number
    pub a: f64,
    /// Second number
    pub b: f64,
}

/// Sum of `a` and `b` as a decimal string.
///
/// Integral sums print without a fractional part, negative zero prints as
/// `0` and exponent notation is never used. A sum that overflows to infinity
/// is an error.
pub fn add(params: AddParams) -> Result<String> {
    let sum = params.a + params.b;
    if !sum.is_finite() {
        bail!("sum of {} and {} is not a finite number", params.a, params.b);
    }
    if sum == 0.0 {
        return Ok("0".to_string());
    }
    Ok(sum.to_string())
}
