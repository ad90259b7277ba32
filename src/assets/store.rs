use std::path::Path;

use anyhow::Context as _;

use crate::assets::decode::decode_image;
use crate::composition::model::MorphSpec;
use crate::foundation::core::FrameRgba;
use crate::foundation::error::MorphResult;

/// Decoded endpoint images of a morph, loaded up front so rendering never
/// touches the filesystem.
#[derive(Clone, Debug)]
pub struct PreparedMorph {
    /// Decoded source image.
    pub source: FrameRgba,
    /// Decoded destination image.
    pub dest: FrameRgba,
}

impl PreparedMorph {
    /// Load and decode both images named by `spec`, resolving relative paths
    /// against `root`.
    pub fn prepare_from_dir(spec: &MorphSpec, root: impl AsRef<Path>) -> MorphResult<Self> {
        let root = root.as_ref();
        Ok(Self {
            source: load_frame(root, &spec.source.path)?,
            dest: load_frame(root, &spec.dest.path)?,
        })
    }
}

fn load_frame(root: &Path, rel: &str) -> MorphResult<FrameRgba> {
    let path = root.join(rel);
    let bytes =
        std::fs::read(&path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_image(&bytes)
}
