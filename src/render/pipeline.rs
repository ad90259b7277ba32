use rayon::prelude::*;

use crate::assets::store::PreparedMorph;
use crate::composition::model::MorphSpec;
use crate::effects::dissolve::dissolve;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::field::interp::interpolate_fields;
use crate::foundation::core::{FrameRgba, Rgba8};
use crate::foundation::error::{MorphError, MorphResult};
use crate::warp::engine::warp_field;

/// Threading controls for multi-frame rendering.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
        }
    }
}

/// Options for [`render_sequence`].
#[derive(Clone, Debug)]
pub struct RenderOpts {
    /// Background color for pixels no warped sample lands on (RGBA8).
    pub bg_rgba: Rgba8,
    /// Render threading configuration.
    pub threading: RenderThreading,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            bg_rgba: [0, 0, 0, 255],
            threading: RenderThreading::default(),
        }
    }
}

/// Render one morph frame.
///
/// This is the primary one-shot API for producing pixels from a
/// [`MorphSpec`].
///
/// Pipeline:
/// 1. [`interpolate_fields`] to place the intermediate control lines
/// 2. [`warp_field`] on each endpoint image towards the intermediate field
/// 3. [`dissolve`] the two warped images at `t = frame / spec.frames`
///
/// The output canvas takes the source image's dimensions.
#[tracing::instrument(skip(spec, assets))]
pub fn render_frame(
    spec: &MorphSpec,
    assets: &PreparedMorph,
    frame: u32,
    bg_rgba: Rgba8,
) -> MorphResult<FrameRgba> {
    spec.validate()?;
    render_frame_unchecked(spec, assets, frame, bg_rgba)
}

fn render_frame_unchecked(
    spec: &MorphSpec,
    assets: &PreparedMorph,
    frame: u32,
    bg_rgba: Rgba8,
) -> MorphResult<FrameRgba> {
    if frame > spec.frames {
        return Err(MorphError::validation(format!(
            "frame index {} out of range 0..={}",
            frame, spec.frames
        )));
    }
    let t = f64::from(frame) / f64::from(spec.frames);

    let field = interpolate_fields(&spec.source.lines, &spec.dest.lines, t)?;

    let width = assets.source.width();
    let height = assets.source.height();
    let mut warped_src = FrameRgba::new(width, height, bg_rgba)?;
    let mut warped_dest = FrameRgba::new(width, height, bg_rgba)?;
    warp_field(
        &assets.source,
        &spec.source.lines,
        &field,
        &spec.falloff,
        &mut warped_src,
    )?;
    warp_field(
        &assets.dest,
        &spec.dest.lines,
        &field,
        &spec.falloff,
        &mut warped_dest,
    )?;

    dissolve(&warped_src, &warped_dest, t)
}

/// Render the full morph sequence into `sink`, frames `0..=spec.frames` in
/// order.
#[tracing::instrument(skip(spec, assets, opts, sink))]
pub fn render_sequence(
    spec: &MorphSpec,
    assets: &PreparedMorph,
    opts: &RenderOpts,
    sink: &mut dyn FrameSink,
) -> MorphResult<()> {
    spec.validate()?;

    sink.begin(SinkConfig {
        width: assets.source.width(),
        height: assets.source.height(),
        delay_ms: spec.delay_ms,
    })?;

    if !opts.threading.parallel {
        for f in 0..=spec.frames {
            let frame = render_frame_unchecked(spec, assets, f, opts.bg_rgba)?;
            sink.push_frame(f, &frame)?;
        }
    } else {
        let pool = build_thread_pool(opts.threading.threads)?;
        let rendered = pool.install(|| {
            (0..=spec.frames)
                .into_par_iter()
                .map(|f| render_frame_unchecked(spec, assets, f, opts.bg_rgba))
                .collect::<Vec<_>>()
        });
        for (f, frame) in rendered.into_iter().enumerate() {
            sink.push_frame(f as u32, &frame?)?;
        }
    }

    sink.end()
}

fn build_thread_pool(threads: Option<usize>) -> MorphResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MorphError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MorphError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
