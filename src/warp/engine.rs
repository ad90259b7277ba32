use crate::field::line::ControlLine;
use crate::foundation::core::{FrameRgba, Point, Vec2};
use crate::foundation::error::{MorphError, MorphResult};

/// Weight falloff parameters for the field warp.
///
/// Each line's influence on a pixel is `(length / (dist + a)).powf(b)` where
/// `dist` is the pixel's distance to the line. Larger `a` smooths the field
/// near lines; larger `b` sharpens the dominance of the closest line.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WarpParams {
    /// Distance offset, must be finite and > 0.
    pub a: f64,
    /// Falloff exponent, must be finite and >= 0.
    pub b: f64,
}

impl Default for WarpParams {
    fn default() -> Self {
        Self { a: 0.5, b: 0.5 }
    }
}

impl WarpParams {
    /// Check parameter ranges.
    pub fn validate(&self) -> MorphResult<()> {
        if !self.a.is_finite() || self.a <= 0.0 {
            return Err(MorphError::validation(
                "warp parameter 'a' must be finite and > 0",
            ));
        }
        if !self.b.is_finite() || self.b < 0.0 {
            return Err(MorphError::validation(
                "warp parameter 'b' must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Warp `src` into `out` by reverse mapping through two control-line fields.
///
/// For every output pixel, each (`src_lines[i]`, `target_lines[i]`) pair
/// proposes a source position: the pixel's line-local coordinates relative to
/// the target line, mapped back through the source line. Proposals are blended
/// by distance-weighted average and the source is point-sampled there. Pixels
/// whose blended sample falls outside `src` keep whatever `out` already holds.
pub fn warp_field(
    src: &FrameRgba,
    src_lines: &[ControlLine],
    target_lines: &[ControlLine],
    params: &WarpParams,
    out: &mut FrameRgba,
) -> MorphResult<()> {
    validate_fields(src_lines, target_lines)?;
    params.validate()?;

    for y in 0..out.height() {
        for x in 0..out.width() {
            let p = Point::new(f64::from(x), f64::from(y));

            let mut dsum = Vec2::ZERO;
            let mut weight_sum = 0.0f64;

            for (src_line, target_line) in src_lines.iter().zip(target_lines.iter()) {
                let u = target_line.projection(p);
                let v = target_line.signed_distance(p);
                let xp = src_line.point_at(u, v);
                let d = p - xp;

                let dist = if (0.0..=1.0).contains(&u) {
                    v.abs()
                } else if u < 0.0 {
                    (p - target_line.start).hypot()
                } else {
                    (p - target_line.end).hypot()
                };

                let weight = falloff_weight(target_line.length(), dist, params);
                dsum += d * weight;
                weight_sum += weight;
            }

            let sample = p + dsum / weight_sum;
            let sx = sample.x as i64;
            let sy = sample.y as i64;
            if src.in_bounds(sx, sy) {
                out.put(x, y, src.get(sx as u32, sy as u32));
            }
        }
    }

    Ok(())
}

pub(crate) fn falloff_weight(length: f64, dist: f64, params: &WarpParams) -> f64 {
    (length / (dist + params.a)).powf(params.b)
}

fn validate_fields(src_lines: &[ControlLine], target_lines: &[ControlLine]) -> MorphResult<()> {
    if src_lines.len() != target_lines.len() {
        return Err(MorphError::validation(format!(
            "control-line count mismatch: source has {}, target has {}",
            src_lines.len(),
            target_lines.len()
        )));
    }
    if src_lines.is_empty() {
        return Err(MorphError::validation(
            "at least one control-line pair is required",
        ));
    }
    for (i, line) in src_lines.iter().enumerate() {
        if line.is_degenerate() {
            return Err(MorphError::validation(format!(
                "source line {i} is degenerate (length below minimum)"
            )));
        }
    }
    for (i, line) in target_lines.iter().enumerate() {
        if line.is_degenerate() {
            return Err(MorphError::validation(format!(
                "target line {i} is degenerate (length below minimum)"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/warp/engine.rs"]
mod tests;
