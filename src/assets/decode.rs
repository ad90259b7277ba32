use anyhow::Context as _;

use crate::foundation::core::FrameRgba;
use crate::foundation::error::MorphResult;

/// Decode encoded image bytes into a straight RGBA8 frame.
pub fn decode_image(bytes: &[u8]) -> MorphResult<FrameRgba> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    FrameRgba::from_raw(width, height, rgba.into_raw())
}
