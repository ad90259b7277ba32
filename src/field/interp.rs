use crate::field::line::ControlLine;
use crate::foundation::error::{MorphError, MorphResult};

/// Interpolate two control-line fields endpoint-wise at parameter `t`.
///
/// The fields must pair up one-to-one; line `i` of the result is the lerp of
/// `source[i]` and `dest[i]`. `t` is not clamped.
pub fn interpolate_fields(
    source: &[ControlLine],
    dest: &[ControlLine],
    t: f64,
) -> MorphResult<Vec<ControlLine>> {
    if source.len() != dest.len() {
        return Err(MorphError::validation(format!(
            "control-line count mismatch: source has {}, destination has {}",
            source.len(),
            dest.len()
        )));
    }
    Ok(source
        .iter()
        .zip(dest.iter())
        .map(|(s, d)| s.lerp(d, t))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/field/interp.rs"]
mod tests;
