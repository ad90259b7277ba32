use crate::foundation::core::{FrameRgba, Rgba8};
use crate::foundation::error::{MorphError, MorphResult};
use crate::foundation::math::mul_div255_u8;

/// Blend two pixels at parameter `t` (0 yields `a` exactly, 1 yields `b`
/// exactly).
///
/// Uses rounded u8 fixed-point so `crossfade(p, p, t) == p` for any `t`.
pub fn crossfade(a: Rgba8, b: Rgba8, t: f64) -> Rgba8 {
    let t = t.clamp(0.0, 1.0);
    let tt = ((t * 255.0).round() as i32).clamp(0, 255) as u16;
    let it = 255u16 - tt;

    let mut out = [0u8; 4];
    for i in 0..4 {
        let av = mul_div255(u16::from(a[i]), it);
        let bv = mul_div255(u16::from(b[i]), tt);
        out[i] = add_sat_u8(av, bv);
    }
    out
}

/// Cross-dissolve two equally sized frames at parameter `t`.
pub fn dissolve(a: &FrameRgba, b: &FrameRgba, t: f64) -> MorphResult<FrameRgba> {
    if a.width() != b.width() || a.height() != b.height() {
        return Err(MorphError::validation(format!(
            "dissolve size mismatch: {}x{} vs {}x{}",
            a.width(),
            a.height(),
            b.width(),
            b.height()
        )));
    }

    let mut data = Vec::with_capacity(a.data().len());
    for (pa, pb) in a.data().chunks_exact(4).zip(b.data().chunks_exact(4)) {
        let px = crossfade([pa[0], pa[1], pa[2], pa[3]], [pb[0], pb[1], pb[2], pb[3]], t);
        data.extend_from_slice(&px);
    }
    FrameRgba::from_raw(a.width(), a.height(), data)
}

fn mul_div255(x: u16, y: u16) -> u8 {
    mul_div255_u8(x, y)
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/dissolve.rs"]
mod tests;
