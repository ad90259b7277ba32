use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};

use crate::encode::ensure_parent_dir;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameRgba;
use crate::foundation::error::{MorphError, MorphResult};

/// Options for [`GifSink`] animated GIF output.
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
}

impl GifSinkOpts {
    /// Create options for outputting a GIF to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
        }
    }
}

/// Sink that streams frames into an animated GIF file, looping forever.
pub struct GifSink {
    opts: GifSinkOpts,

    encoder: Option<GifEncoder<BufWriter<File>>>,
    cfg: Option<SinkConfig>,
    last_idx: Option<u32>,
}

impl GifSink {
    /// Create a new GIF sink.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            cfg: None,
            last_idx: None,
        }
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> MorphResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(MorphError::validation(
                "gif sink width/height must be non-zero",
            ));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(MorphError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        let file = File::create(&self.opts.out_path)
            .with_context(|| format!("create gif '{}'", self.opts.out_path.display()))?;
        let mut encoder = GifEncoder::new(BufWriter::new(file));
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| MorphError::evaluation(format!("failed to set gif repeat mode: {e}")))?;

        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, index: u32, frame: &FrameRgba) -> MorphResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| MorphError::evaluation("gif sink not started"))?;
        if let Some(last) = self.last_idx
            && index <= last
        {
            return Err(MorphError::evaluation(
                "gif sink received out-of-order frame index",
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

        let Some(encoder) = self.encoder.as_mut() else {
            return Err(MorphError::evaluation("gif sink is already finalized"));
        };

        let buf = image::RgbaImage::from_raw(cfg.width, cfg.height, frame.data().to_vec())
            .ok_or_else(|| MorphError::evaluation("frame.data size mismatch with width*height*4"))?;
        let delay = image::Delay::from_numer_denom_ms(cfg.delay_ms, 1);
        encoder
            .encode_frame(image::Frame::from_parts(buf, 0, 0, delay))
            .map_err(|e| MorphError::evaluation(format!("failed to encode gif frame: {e}")))?;
        Ok(())
    }

    fn end(&mut self) -> MorphResult<()> {
        // Dropping the encoder flushes the trailer.
        self.encoder
            .take()
            .ok_or_else(|| MorphError::evaluation("gif sink not started"))?;
        self.cfg = None;
        Ok(())
    }
}
