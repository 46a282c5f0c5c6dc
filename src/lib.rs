//! Point layer-mode compositing kernels over straight-alpha float RGBA buffers.
//!
//! Each [`LayerMode`] (hue, hard-light, multiply, ...) contributes a pure color law; the kernel
//! wraps every law in the same alpha skeleton so modes differ only in the blended color:
//!
//! - [`process`] / [`process_in_place`] for one call over a span of pixels
//! - [`ParallelKernel`] to split large spans over a rayon pool with identical output
//! - [`PointLayerModeOp`] as the graph-facing node, usually built from a [`ModeConfig`]
//! - [`tool`] for the parameter bag and pick handling of a generic operation tool
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod modes;
mod operation;

pub mod color;
pub mod kernel;
pub mod tool;

pub use crate::color::{Hsl, Hsv, Rgb};
pub use crate::config::ModeConfig;
pub use crate::foundation::core::{ALPHA, CHANNELS, Pixel, Region};
pub use crate::foundation::error::{LayerModeError, LayerModeResult};
pub use crate::kernel::parallel::{KernelThreading, ParallelKernel};
pub use crate::kernel::{composite_pixel, process, process_in_place};
pub use crate::modes::LayerMode;
pub use crate::operation::PointLayerModeOp;
pub use crate::tool::{
    OperationConfig, OperationTool, ParamKind, ParamSpec, ParamValue, PickGeometry,
    normalize_coord,
};
