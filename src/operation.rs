use std::sync::Arc;

use crate::foundation::core::Region;
use crate::foundation::error::LayerModeResult;
use crate::kernel::{self, parallel::ParallelKernel};
use crate::modes::LayerMode;

/// A layer mode bound to an opacity, as registered in a point-composer graph.
///
/// The graph hands it `in` (base), `aux` (layer) and optionally `aux2` (mask) for a tile and
/// expects `out` filled. Region and pyramid level are forwarded for tracing only.
#[derive(Clone, Debug)]
pub struct PointLayerModeOp {
    mode: LayerMode,
    opacity: f64,
    parallel: Option<Arc<ParallelKernel>>,
}

impl PointLayerModeOp {
    /// Operation for `mode` at the given opacity.
    pub fn new(mode: LayerMode, opacity: f64) -> Self {
        Self {
            mode,
            opacity,
            parallel: None,
        }
    }

    /// Resolve an operation name such as `"gimp:hue-mode"` (short names work too).
    ///
    /// Opacity starts at 1.0.
    pub fn from_name(name: &str) -> LayerModeResult<Self> {
        Ok(Self::new(LayerMode::from_name(name)?, 1.0))
    }

    /// Route `process` calls through a shared thread pool.
    pub fn with_parallel(mut self, kernel: Arc<ParallelKernel>) -> Self {
        self.parallel = Some(kernel);
        self
    }

    /// The mode this operation applies.
    pub fn mode(&self) -> LayerMode {
        self.mode
    }

    /// Registered operation name.
    pub fn name(&self) -> &'static str {
        self.mode.operation_name()
    }

    /// Registered description.
    pub fn description(&self) -> &'static str {
        self.mode.description()
    }

    /// Current opacity.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Replace the opacity; the value is stored as given.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }

    /// Composite `samples` pixels of `aux` over `input` into `out`.
    #[allow(clippy::too_many_arguments)]
    #[tracing::instrument(
        level = "debug",
        skip(self, input, aux, aux2, out),
        fields(op = self.name(), masked = aux2.is_some())
    )]
    pub fn process(
        &self,
        input: &[f32],
        aux: &[f32],
        aux2: Option<&[f32]>,
        out: &mut [f32],
        samples: usize,
        roi: &Region,
        level: i32,
    ) -> LayerModeResult<()> {
        match &self.parallel {
            Some(k) => k.process(self.mode, input, aux, aux2, out, self.opacity, samples),
            None => kernel::process(self.mode, input, aux, aux2, out, self.opacity, samples),
        }
    }

    /// [`PointLayerModeOp::process`] for graphs that hand the same buffer as `in` and `out`.
    #[tracing::instrument(
        level = "debug",
        skip(self, input_out, aux, aux2),
        fields(op = self.name(), masked = aux2.is_some())
    )]
    pub fn process_in_place(
        &self,
        input_out: &mut [f32],
        aux: &[f32],
        aux2: Option<&[f32]>,
        samples: usize,
        roi: &Region,
        level: i32,
    ) -> LayerModeResult<()> {
        match &self.parallel {
            Some(k) => k.process_in_place(self.mode, input_out, aux, aux2, self.opacity, samples),
            None => kernel::process_in_place(self.mode, input_out, aux, aux2, self.opacity, samples),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/operation.rs"]
mod tests;
