use std::path::Path;

use anyhow::Context as _;

use crate::field::line::ControlLine;
use crate::foundation::error::{MorphError, MorphResult};
use crate::warp::engine::WarpParams;

/// One endpoint image of a morph: where to load it from and its feature lines.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageSpec {
    /// Image path, resolved relative to the spec file's directory.
    pub path: String,
    /// Feature lines in this image's pixel coordinates.
    pub lines: Vec<ControlLine>,
}

/// Declarative description of a morph between two images.
///
/// `lines[i]` of the source corresponds to `lines[i]` of the destination; the
/// two fields must have the same length. A render produces `frames + 1`
/// output frames, at `t = f / frames` for `f` in `0..=frames`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphSpec {
    /// Morph start image.
    pub source: ImageSpec,
    /// Morph end image.
    pub dest: ImageSpec,
    /// Number of inter-frame steps (output has `frames + 1` frames).
    pub frames: u32,
    /// Warp weight falloff parameters.
    #[serde(default)]
    pub falloff: WarpParams,
    /// Per-frame delay for animated output, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u32,
}

fn default_delay_ms() -> u32 {
    80
}

impl MorphSpec {
    /// Parse a spec from a JSON string.
    pub fn from_json_str(json: &str) -> MorphResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| MorphError::serde(format!("failed to parse morph spec JSON: {e}")))
    }

    /// Read and parse a spec from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> MorphResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read morph spec '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Serialize the spec to pretty JSON.
    pub fn to_json_string(&self) -> MorphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MorphError::serde(format!("failed to serialize morph spec: {e}")))
    }

    /// Validate the spec, failing fast on the first problem found.
    pub fn validate(&self) -> MorphResult<()> {
        if self.frames == 0 {
            return Err(MorphError::validation("frames must be >= 1"));
        }

        if self.source.lines.len() != self.dest.lines.len() {
            return Err(MorphError::validation(format!(
                "control-line count mismatch: source has {}, destination has {}",
                self.source.lines.len(),
                self.dest.lines.len()
            )));
        }
        if self.source.lines.is_empty() {
            return Err(MorphError::validation(
                "at least one control-line pair is required",
            ));
        }

        validate_lines("source", &self.source.lines)?;
        validate_lines("destination", &self.dest.lines)?;

        self.falloff.validate()?;
        Ok(())
    }
}

fn validate_lines(which: &str, lines: &[ControlLine]) -> MorphResult<()> {
    for (i, line) in lines.iter().enumerate() {
        for (p, name) in [(line.start, "start"), (line.end, "end")] {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(MorphError::validation(format!(
                    "{which} line {i} has non-finite {name} coordinates"
                )));
            }
        }
        if line.is_degenerate() {
            return Err(MorphError::validation(format!(
                "{which} line {i} is degenerate (length below minimum)"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
