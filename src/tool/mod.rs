//! The non-UI half of the generic operation tool.
//!
//! A tool session picks one graph operation by name, owns a parameter bag for it, and turns
//! on-canvas picks into parameter edits. Widgets, dialogs and preset files live elsewhere.

use crate::foundation::core::Region;
use crate::foundation::error::{LayerModeError, LayerModeResult};
use crate::modes::LayerMode;

/// Picked-coordinate normalization.
pub mod coords;
/// Parameter declarations and the per-operation value bag.
pub mod params;

pub use coords::normalize_coord;
pub use params::{OperationConfig, ParamKind, ParamSpec, ParamValue};

/// Where a pick landed, relative to the image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PickGeometry {
    /// Drawable offset inside the image.
    pub offset_x: i32,
    /// Drawable offset inside the image.
    pub offset_y: i32,
    /// Selection bounds in drawable coordinates, if the selection intersects the drawable.
    pub selection: Option<Region>,
}

impl PickGeometry {
    /// Image coordinates to selection-local ones, plus the selection extent.
    ///
    /// Without a usable selection the extent is `1 x 1`.
    fn localize(&self, x: f64, y: f64) -> (f64, f64, f64, f64) {
        let x = x - f64::from(self.offset_x);
        let y = y - f64::from(self.offset_y);
        match self.selection.filter(|r| r.width > 0 && r.height > 0) {
            Some(r) => (
                x - f64::from(r.x),
                y - f64::from(r.y),
                f64::from(r.width),
                f64::from(r.height),
            ),
            None => (x, y, 1.0, 1.0),
        }
    }
}

/// State of one operation-tool session.
#[derive(Clone, Debug, Default)]
pub struct OperationTool {
    operation: Option<String>,
    undo_desc: Option<String>,
    config: Option<OperationConfig>,
}

impl OperationTool {
    /// A session with no operation selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `operation`, replacing the previous one and its parameters.
    pub fn set_operation(
        &mut self,
        operation: &str,
        undo_desc: Option<&str>,
        specs: Vec<ParamSpec>,
    ) -> LayerModeResult<()> {
        if operation.trim().is_empty() {
            return Err(LayerModeError::param("operation name must be non-empty"));
        }
        let config = OperationConfig::new(specs)?;
        tracing::debug!(operation, params = config.len(), "operation selected");

        self.operation = Some(operation.to_owned());
        self.undo_desc = undo_desc.map(str::to_owned);
        self.config = Some(config);
        Ok(())
    }

    /// Selected operation name.
    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    /// Undo label for edits made through this session.
    pub fn undo_desc(&self) -> Option<&str> {
        self.undo_desc.as_deref()
    }

    /// Named presets are only offered for operations selected with an undo label.
    pub fn has_settings(&self) -> bool {
        self.undo_desc.is_some()
    }

    /// The selected operation as a layer mode, when it names one.
    pub fn layer_mode(&self) -> Option<LayerMode> {
        self.operation
            .as_deref()
            .and_then(|op| LayerMode::from_name(op).ok())
    }

    /// Parameter bag of the selected operation.
    pub fn config(&self) -> Option<&OperationConfig> {
        self.config.as_ref()
    }

    /// Mutable parameter bag of the selected operation.
    pub fn config_mut(&mut self) -> Option<&mut OperationConfig> {
        self.config.as_mut()
    }

    /// Restore every parameter to its default; no-op without an operation.
    pub fn reset(&mut self) {
        if let Some(cfg) = &mut self.config {
            cfg.reset();
        }
    }

    /// Apply a canvas pick to the parameter named by `identifier`.
    ///
    /// `"x:y"` names a coordinate pair that receives the picked position; any other identifier
    /// names a color parameter that receives `color`. Returns `Ok(false)` when a pair cannot be
    /// applied (missing or mismatched parameters).
    #[tracing::instrument(level = "debug", skip(self, geometry, color))]
    pub fn color_picked(
        &mut self,
        identifier: &str,
        x: f64,
        y: f64,
        geometry: &PickGeometry,
        color: [f32; 4],
    ) -> LayerModeResult<bool> {
        let config = self
            .config
            .as_mut()
            .ok_or_else(|| LayerModeError::param("no operation selected"))?;

        let Some((name_x, name_y)) = identifier.split_once(':') else {
            config.set(identifier, ParamValue::Color(color))?;
            return Ok(true);
        };

        let (Some(spec_x), Some(spec_y)) = (config.spec(name_x), config.spec(name_y)) else {
            tracing::warn!(name_x, name_y, "picked coordinate names an unknown parameter");
            return Ok(false);
        };

        let (lx, ly, width, height) = geometry.localize(x, y);
        let (vx, vy) = match (spec_x.kind, spec_y.kind) {
            (ParamKind::Int { .. }, ParamKind::Int { .. }) => (
                ParamValue::Int(lx.trunc() as i64),
                ParamValue::Int(ly.trunc() as i64),
            ),
            (
                ParamKind::Double {
                    min: min_x,
                    max: max_x,
                    ..
                },
                ParamKind::Double {
                    min: min_y,
                    max: max_y,
                    ..
                },
            ) => {
                // Well-known extents only apply when both axes agree on the range.
                if (min_x, max_x) == (min_y, max_y) {
                    (
                        ParamValue::Double(normalize_coord(min_x, max_x, lx, width)),
                        ParamValue::Double(normalize_coord(min_y, max_y, ly, height)),
                    )
                } else {
                    (ParamValue::Double(lx), ParamValue::Double(ly))
                }
            }
            (kind_x, kind_y) => {
                tracing::warn!(
                    ?kind_x,
                    ?kind_y,
                    "unhandled parameter kinds for a picked coordinate"
                );
                return Ok(false);
            }
        };

        let vx = spec_x.validate_value(vx)?;
        let vy = spec_y.validate_value(vy)?;
        config.set(name_x, vx)?;
        config.set(name_y, vy)?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tool/operation_tool.rs"]
mod tests;
