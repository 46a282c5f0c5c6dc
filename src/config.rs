use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{LayerModeError, LayerModeResult};
use crate::kernel::parallel::{KernelThreading, ParallelKernel};
use crate::modes::LayerMode;
use crate::operation::PointLayerModeOp;

/// JSON-facing description of one layer-mode operation.
///
/// ```json
/// { "mode": "gimp:hue-mode", "opacity": 0.8, "threading": { "parallel": true } }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModeConfig {
    /// Mode by short name (`"hue"`) or operation name (`"gimp:hue-mode"`).
    pub mode: LayerMode,
    /// Layer opacity; finite values are used unclamped.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Kernel threading controls.
    #[serde(default)]
    pub threading: KernelThreading,
}

fn default_opacity() -> f64 {
    1.0
}

impl ModeConfig {
    /// Config for `mode` at full opacity, sequential.
    pub fn new(mode: LayerMode) -> Self {
        Self {
            mode,
            opacity: default_opacity(),
            threading: KernelThreading::default(),
        }
    }

    /// Parse and validate a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> LayerModeResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| LayerModeError::serde(format!("parse mode config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(s: &str) -> LayerModeResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LayerModeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LayerModeError::validation(format!("open mode config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> LayerModeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LayerModeError::serde(format!("serialize mode config: {e}")))
    }

    /// Check the values a JSON document can carry but the kernel cannot use.
    pub fn validate(&self) -> LayerModeResult<()> {
        if !self.opacity.is_finite() {
            return Err(LayerModeError::validation(format!(
                "opacity must be finite, got {}",
                self.opacity
            )));
        }
        if self.threading.threads == Some(0) {
            return Err(LayerModeError::validation(
                "threading.threads must be >= 1 when set",
            ));
        }
        Ok(())
    }

    /// Build the operation, with a dedicated pool when `threading.parallel` is set.
    pub fn into_operation(self) -> LayerModeResult<PointLayerModeOp> {
        self.validate()?;
        let op = PointLayerModeOp::new(self.mode, self.opacity);
        if !self.threading.parallel {
            return Ok(op);
        }
        let kernel = ParallelKernel::new(&self.threading)?;
        Ok(op.with_parallel(Arc::new(kernel)))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
