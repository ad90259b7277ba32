use std::path::PathBuf;

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameRgba;
use crate::foundation::error::{MorphError, MorphResult};

/// Sink that writes each frame as `frame{index}.png` into a directory.
pub struct PngDirSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
    last_idx: Option<u32>,
}

impl PngDirSink {
    /// Create a sink writing into `dir` (created on `begin` if missing).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
            last_idx: None,
        }
    }
}

impl FrameSink for PngDirSink {
    fn begin(&mut self, cfg: SinkConfig) -> MorphResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(MorphError::validation(
                "png sink width/height must be non-zero",
            ));
        }
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create output directory '{}'", self.dir.display()))?;
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, index: u32, frame: &FrameRgba) -> MorphResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| MorphError::evaluation("png sink not started"))?;
        if let Some(last) = self.last_idx
            && index <= last
        {
            return Err(MorphError::evaluation(
                "png sink received out-of-order frame index",
            ));
        }
        self.last_idx = Some(index);

        if frame.width() != cfg.width || frame.height() != cfg.height {
            return Err(MorphError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width(),
                frame.height(),
                cfg.width,
                cfg.height
            )));
        }

        let path = self.dir.join(format!("frame{index}.png"));
        image::save_buffer_with_format(
            &path,
            frame.data(),
            frame.width(),
            frame.height(),
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    fn end(&mut self) -> MorphResult<()> {
        self.cfg = None;
        Ok(())
    }
}
