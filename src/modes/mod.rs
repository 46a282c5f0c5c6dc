//! The closed set of point layer modes and their color laws.
//!
//! Every mode shares the alpha skeleton in [`crate::kernel`]; a mode only contributes
//! `law(base_rgb, layer_rgb) -> blended_rgb`. Dispatch happens once per kernel call through
//! `with_law!`, which binds the mode's law as a zero-sized fn item so each arm monomorphizes
//! its own inner loop.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::foundation::error::{LayerModeError, LayerModeResult};

pub(crate) mod channel;
pub(crate) mod component;

/// Bind `$law` to the color law of `$mode` and evaluate `$body` with it.
///
/// Each arm binds a distinct fn item, so generic code called from `$body` is instantiated per
/// mode rather than going through a function pointer.
macro_rules! with_law {
    ($mode:expr, $law:ident => $body:expr) => {{
        use $crate::modes::{LayerMode, channel, component};
        match $mode {
            LayerMode::Multiply => {
                let $law = channel::multiply;
                $body
            }
            LayerMode::Screen => {
                let $law = channel::screen;
                $body
            }
            LayerMode::Overlay => {
                let $law = channel::overlay;
                $body
            }
            LayerMode::Difference => {
                let $law = channel::difference;
                $body
            }
            LayerMode::Addition => {
                let $law = channel::addition;
                $body
            }
            LayerMode::Subtract => {
                let $law = channel::subtract;
                $body
            }
            LayerMode::DarkenOnly => {
                let $law = channel::darken_only;
                $body
            }
            LayerMode::LightenOnly => {
                let $law = channel::lighten_only;
                $body
            }
            LayerMode::Hue => {
                let $law = component::hue;
                $body
            }
            LayerMode::Saturation => {
                let $law = component::saturation;
                $body
            }
            LayerMode::Color => {
                let $law = component::color;
                $body
            }
            LayerMode::Value => {
                let $law = component::value;
                $body
            }
            LayerMode::Divide => {
                let $law = channel::divide;
                $body
            }
            LayerMode::Dodge => {
                let $law = channel::dodge;
                $body
            }
            LayerMode::Burn => {
                let $law = channel::burn;
                $body
            }
            LayerMode::HardLight => {
                let $law = channel::hardlight;
                $body
            }
            LayerMode::SoftLight => {
                let $law = channel::softlight;
                $body
            }
            LayerMode::GrainExtract => {
                let $law = channel::grain_extract;
                $body
            }
            LayerMode::GrainMerge => {
                let $law = channel::grain_merge;
                $body
            }
        }
    }};
}
pub(crate) use with_law;

/// A per-pixel color-combination law between a base and an overlay layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerMode {
    /// `base * layer`.
    Multiply,
    /// Inverted multiply of the inverses.
    Screen,
    /// Legacy overlay, `b * (b + 2l(1 - b))`.
    Overlay,
    /// `|base - layer|`.
    Difference,
    /// `base + layer`, capped at 1.
    Addition,
    /// `base - layer`, floored at 0.
    Subtract,
    /// Channel-wise minimum.
    DarkenOnly,
    /// Channel-wise maximum.
    LightenOnly,
    /// Layer hue over base saturation and value (HSV).
    Hue,
    /// Layer saturation over base hue and value (HSV).
    Saturation,
    /// Layer hue and saturation over base lightness (HSL).
    Color,
    /// Layer value over base hue and saturation (HSV).
    Value,
    /// `base / layer`, capped at 1.
    Divide,
    /// Color dodge.
    Dodge,
    /// Color burn.
    Burn,
    /// Multiply or screen, chosen by the layer channel.
    HardLight,
    /// Legacy soft light, a base-weighted mix of multiply and screen.
    SoftLight,
    /// `base - layer + 0.5`, clamped.
    GrainExtract,
    /// `base + layer - 0.5`, clamped.
    GrainMerge,
}

impl LayerMode {
    /// Every mode, in registration order.
    pub const ALL: [LayerMode; 19] = [
        LayerMode::Multiply,
        LayerMode::Screen,
        LayerMode::Overlay,
        LayerMode::Difference,
        LayerMode::Addition,
        LayerMode::Subtract,
        LayerMode::DarkenOnly,
        LayerMode::LightenOnly,
        LayerMode::Hue,
        LayerMode::Saturation,
        LayerMode::Color,
        LayerMode::Value,
        LayerMode::Divide,
        LayerMode::Dodge,
        LayerMode::Burn,
        LayerMode::HardLight,
        LayerMode::SoftLight,
        LayerMode::GrainExtract,
        LayerMode::GrainMerge,
    ];

    fn names(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Multiply => (
                "multiply",
                "gimp:multiply-mode",
                "GIMP multiply mode operation",
            ),
            Self::Screen => ("screen", "gimp:screen-mode", "GIMP screen mode operation"),
            Self::Overlay => ("overlay", "gimp:overlay-mode", "GIMP overlay mode operation"),
            Self::Difference => (
                "difference",
                "gimp:difference-mode",
                "GIMP difference mode operation",
            ),
            Self::Addition => (
                "addition",
                "gimp:addition-mode",
                "GIMP addition mode operation",
            ),
            Self::Subtract => (
                "subtract",
                "gimp:subtract-mode",
                "GIMP subtract mode operation",
            ),
            Self::DarkenOnly => (
                "darken-only",
                "gimp:darken-only-mode",
                "GIMP darken only mode operation",
            ),
            Self::LightenOnly => (
                "lighten-only",
                "gimp:lighten-only-mode",
                "GIMP lighten only mode operation",
            ),
            Self::Hue => ("hue", "gimp:hue-mode", "GIMP hue mode operation"),
            Self::Saturation => (
                "saturation",
                "gimp:saturation-mode",
                "GIMP saturation mode operation",
            ),
            Self::Color => ("color", "gimp:color-mode", "GIMP color mode operation"),
            Self::Value => ("value", "gimp:value-mode", "GIMP value mode operation"),
            Self::Divide => ("divide", "gimp:divide-mode", "GIMP divide mode operation"),
            Self::Dodge => ("dodge", "gimp:dodge-mode", "GIMP dodge mode operation"),
            Self::Burn => ("burn", "gimp:burn-mode", "GIMP burn mode operation"),
            Self::HardLight => (
                "hard-light",
                "gimp:hardlight-mode",
                "GIMP hardlight mode operation",
            ),
            Self::SoftLight => (
                "soft-light",
                "gimp:softlight-mode",
                "GIMP softlight mode operation",
            ),
            Self::GrainExtract => (
                "grain-extract",
                "gimp:grain-extract-mode",
                "GIMP grain extract mode operation",
            ),
            Self::GrainMerge => (
                "grain-merge",
                "gimp:grain-merge-mode",
                "GIMP grain merge mode operation",
            ),
        }
    }

    /// Short, config-facing name (`"hue"`, `"hard-light"`).
    pub fn short_name(self) -> &'static str {
        self.names().0
    }

    /// Stable graph operation name (`"gimp:hue-mode"`).
    pub fn operation_name(self) -> &'static str {
        self.names().1
    }

    /// Human-readable description registered alongside the operation name.
    pub fn description(self) -> &'static str {
        self.names().2
    }

    /// `true` for the HSV/HSL modes that replace whole color components.
    pub fn is_component(self) -> bool {
        matches!(
            self,
            Self::Hue | Self::Saturation | Self::Color | Self::Value
        )
    }

    /// Resolve a short name or an operation name.
    ///
    /// Matching ignores case, a `gimp:` prefix, a `-mode` suffix, and `-`/`_` separators, so
    /// `"Hard_Light"`, `"hardlight"` and `"gimp:hardlight-mode"` all name [`LayerMode::HardLight`].
    pub fn from_name(name: &str) -> LayerModeResult<Self> {
        let key = squash(name);
        if key.is_empty() {
            return Err(LayerModeError::unknown_mode(format!("'{name}' (empty)")));
        }
        Self::ALL
            .into_iter()
            .find(|m| squash(m.short_name()) == key)
            .ok_or_else(|| LayerModeError::unknown_mode(format!("'{name}'")))
    }

    /// Apply this mode's color law to one base/layer color pair.
    ///
    /// Kernels do not call this per pixel; they dispatch once per buffer.
    pub fn blend(self, base: [f32; 3], layer: [f32; 3]) -> [f32; 3] {
        with_law!(self, law => law(base, layer))
    }
}

fn squash(name: &str) -> String {
    let lower = name.trim().to_ascii_lowercase();
    let s = lower.strip_prefix("gimp:").unwrap_or(&lower);
    let s = s.strip_suffix("-mode").unwrap_or(s);
    s.chars().filter(|c| *c != '-' && *c != '_').collect()
}

impl fmt::Display for LayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for LayerMode {
    type Err = LayerModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Serialize for LayerMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.short_name())
    }
}

impl<'de> Deserialize<'de> for LayerMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_name(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/modes/mode.rs"]
mod tests;
