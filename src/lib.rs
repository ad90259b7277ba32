//! Fieldmorph is a feature-based image morphing engine.
//!
//! A morph is described by two images and a set of paired control lines. The
//! public API is pipeline-oriented:
//!
//! - Load and validate a [`MorphSpec`]
//! - Decode the endpoint images into a [`PreparedMorph`]
//! - Render single frames with [`render_frame`] or stream the whole sequence
//!   into a [`FrameSink`] with [`render_sequence`]
#![forbid(unsafe_code)]

mod assets;
mod composition;
mod effects;
mod encode;
mod field;
mod foundation;
mod render;
mod warp;

pub use crate::foundation::core::{FrameRgba, Point, Rgba8, Vec2};
pub use crate::foundation::error::{MorphError, MorphResult};

pub use crate::assets::decode::decode_image;
pub use crate::assets::store::PreparedMorph;
pub use crate::composition::model::{ImageSpec, MorphSpec};
pub use crate::effects::dissolve::{crossfade, dissolve};
pub use crate::encode::ensure_parent_dir;
pub use crate::encode::gif::{GifSink, GifSinkOpts};
pub use crate::encode::png::PngDirSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::field::interp::interpolate_fields;
pub use crate::field::line::{ControlLine, MIN_LINE_LENGTH};
pub use crate::render::pipeline::{RenderOpts, RenderThreading, render_frame, render_sequence};
pub use crate::warp::engine::{WarpParams, warp_field};
