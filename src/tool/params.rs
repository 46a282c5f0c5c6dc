use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{LayerModeError, LayerModeResult};

/// Type and range of one operation parameter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParamKind {
    /// Integer in `[min, max]`.
    Int {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
        /// Value after reset.
        default: i64,
    },
    /// Float in `[min, max]`.
    Double {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// Value after reset.
        default: f64,
    },
    /// Straight-alpha RGBA color.
    Color {
        /// Value after reset.
        default: [f32; 4],
    },
}

impl ParamKind {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Int { .. } => "int",
            Self::Double { .. } => "double",
            Self::Color { .. } => "color",
        }
    }
}

/// A parameter value as stored in an [`OperationConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamValue {
    /// Integer value.
    Int(i64),
    /// Float value.
    Double(f64),
    /// RGBA color.
    Color([f32; 4]),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "int {v}"),
            Self::Double(v) => write!(f, "double {v}"),
            Self::Color([r, g, b, a]) => write!(f, "color ({r}, {g}, {b}, {a})"),
        }
    }
}

/// Declaration of one named, user-editable operation parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Property name, unique within a config.
    pub name: String,
    /// Short display label.
    pub nick: String,
    /// Value type and range.
    pub kind: ParamKind,
}

impl ParamSpec {
    /// Integer parameter.
    pub fn int(
        name: impl Into<String>,
        nick: impl Into<String>,
        min: i64,
        max: i64,
        default: i64,
    ) -> Self {
        Self {
            name: name.into(),
            nick: nick.into(),
            kind: ParamKind::Int { min, max, default },
        }
    }

    /// Float parameter.
    pub fn double(
        name: impl Into<String>,
        nick: impl Into<String>,
        min: f64,
        max: f64,
        default: f64,
    ) -> Self {
        Self {
            name: name.into(),
            nick: nick.into(),
            kind: ParamKind::Double { min, max, default },
        }
    }

    /// Color parameter.
    pub fn color(name: impl Into<String>, nick: impl Into<String>, default: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            nick: nick.into(),
            kind: ParamKind::Color { default },
        }
    }

    /// The value a reset restores.
    pub fn default_value(&self) -> ParamValue {
        match self.kind {
            ParamKind::Int { default, .. } => ParamValue::Int(default),
            ParamKind::Double { default, .. } => ParamValue::Double(default),
            ParamKind::Color { default } => ParamValue::Color(default),
        }
    }

    /// Coerce `value` into this parameter's type and range.
    ///
    /// Numbers are clamped; a double given to an int parameter is rounded first. Colors are
    /// stored as given. NaN and mismatched types are errors.
    pub fn validate_value(&self, value: ParamValue) -> LayerModeResult<ParamValue> {
        match (self.kind, value) {
            (ParamKind::Int { min, max, .. }, ParamValue::Int(v)) => {
                Ok(ParamValue::Int(v.clamp(min, max)))
            }
            (ParamKind::Int { min, max, .. }, ParamValue::Double(v)) => {
                if v.is_nan() {
                    return Err(self.nan_error());
                }
                let v = v.round().clamp(min as f64, max as f64) as i64;
                Ok(ParamValue::Int(v))
            }
            (ParamKind::Double { min, max, .. }, ParamValue::Double(v)) => {
                if v.is_nan() {
                    return Err(self.nan_error());
                }
                Ok(ParamValue::Double(v.clamp(min, max)))
            }
            (ParamKind::Double { min, max, .. }, ParamValue::Int(v)) => {
                Ok(ParamValue::Double((v as f64).clamp(min, max)))
            }
            (ParamKind::Color { .. }, ParamValue::Color(c)) => Ok(ParamValue::Color(c)),
            (kind, value) => Err(LayerModeError::param(format!(
                "parameter '{}' expects {}, got {value}",
                self.name,
                kind.type_name()
            ))),
        }
    }

    fn nan_error(&self) -> LayerModeError {
        LayerModeError::param(format!("parameter '{}' cannot be NaN", self.name))
    }

    fn check(&self) -> LayerModeResult<()> {
        if self.name.is_empty() {
            return Err(LayerModeError::param("parameter name must be non-empty"));
        }
        let ok = match self.kind {
            ParamKind::Int { min, max, default } => min <= max && (min..=max).contains(&default),
            ParamKind::Double { min, max, default } => {
                min <= max && (min..=max).contains(&default)
            }
            ParamKind::Color { .. } => true,
        };
        if !ok {
            return Err(LayerModeError::param(format!(
                "parameter '{}' has an empty range or a default outside it",
                self.name
            )));
        }
        Ok(())
    }
}

/// Named parameter bag for one operation, in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationConfig {
    specs: Vec<ParamSpec>,
    values: Vec<ParamValue>,
}

impl OperationConfig {
    /// Build a config holding every parameter at its default.
    pub fn new(specs: Vec<ParamSpec>) -> LayerModeResult<Self> {
        for (i, spec) in specs.iter().enumerate() {
            spec.check()?;
            if specs[..i].iter().any(|s| s.name == spec.name) {
                return Err(LayerModeError::param(format!(
                    "duplicate parameter '{}'",
                    spec.name
                )));
            }
        }
        let values = specs.iter().map(ParamSpec::default_value).collect();
        Ok(Self { specs, values })
    }

    fn index(&self, name: &str) -> Option<usize> {
        self.specs.iter().position(|s| s.name == name)
    }

    /// Declaration of `name`.
    pub fn spec(&self, name: &str) -> Option<&ParamSpec> {
        self.index(name).map(|i| &self.specs[i])
    }

    /// Current value of `name`.
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.index(name).map(|i| self.values[i])
    }

    /// Validate and store `value`, returning what was stored.
    pub fn set(&mut self, name: &str, value: ParamValue) -> LayerModeResult<ParamValue> {
        let i = self
            .index(name)
            .ok_or_else(|| LayerModeError::param(format!("unknown parameter '{name}'")))?;
        let stored = self.specs[i].validate_value(value)?;
        self.values[i] = stored;
        Ok(stored)
    }

    /// Restore every parameter to its default.
    pub fn reset(&mut self) {
        for (v, spec) in self.values.iter_mut().zip(&self.specs) {
            *v = spec.default_value();
        }
    }

    /// Parameters with their current values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParamSpec, ParamValue)> + '_ {
        self.specs.iter().zip(self.values.iter().copied())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// `true` when the operation has no parameters.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tool/params.rs"]
mod tests;
