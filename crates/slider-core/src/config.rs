//! Slider range configuration and the options an embedding page supplies.

use crate::constants::MAX_STEPS;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("slider range is empty: max ({max}) must be greater than min ({min})")]
    EmptyRange { min: f64, max: f64 },
    #[error("slider step must be positive, got {0}")]
    InvalidStep(f64),
    #[error("slider range holds {steps} steps; at most {max} are supported")]
    TooManySteps { steps: f64, max: f64 },
    #[error("slider {name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("slider {name} attribute {raw:?} is not a number")]
    InvalidAttribute { name: &'static str, raw: String },
}

/// Validated value range. `max > min`, `step > 0` and
/// `(max - min) / step <= MAX_STEPS` always hold.
///
/// Domain values are `f64` so they round-trip exactly through JS numbers;
/// only track geometry is `f32`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderConfig {
    min: f64,
    max: f64,
    step: f64,
}

impl SliderConfig {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        for (name, value) in [("min", min), ("max", max), ("step", step)] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        if max <= min {
            return Err(ConfigError::EmptyRange { min, max });
        }
        if step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        let steps = (max - min) / step;
        if steps > MAX_STEPS {
            return Err(ConfigError::TooManySteps {
                steps,
                max: MAX_STEPS,
            });
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Number of steps around the track. May be fractional when the range is
    /// not a multiple of the step.
    pub fn steps(&self) -> f64 {
        self.range() / self.step
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value > self.max {
            self.max
        } else if value < self.min {
            self.min
        } else {
            value
        }
    }

    /// Whole-number share of the range covered by `value`, 0..=100.
    pub fn portion_percentage(&self, value: f64) -> f64 {
        round_half_up((value - self.min) / self.range() * 100.0)
    }
}

/// Rounds halves towards positive infinity (`-2.5` becomes `-2`).
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Everything the embedding page configures on one slider instance.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderOptions {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
    /// Display label only; never used in geometry.
    pub units: Option<String>,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            value: 0.0,
            units: None,
        }
    }
}

impl SliderOptions {
    /// Reads `min`, `max`, `step`, `value` and `units` through `lookup`
    /// (usually element attributes). Missing numbers keep their defaults.
    pub fn from_attributes(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut opts = Self::default();
        let fields: [(&'static str, &mut f64); 4] = [
            ("min", &mut opts.min),
            ("max", &mut opts.max),
            ("step", &mut opts.step),
            ("value", &mut opts.value),
        ];
        for (name, slot) in fields {
            if let Some(raw) = lookup(name) {
                let parsed = raw.trim().parse::<f64>();
                *slot = parsed.map_err(|_| ConfigError::InvalidAttribute { name, raw })?;
            }
        }
        opts.units = lookup("units").filter(|u| !u.is_empty());
        Ok(opts)
    }

    pub fn config(&self) -> Result<SliderConfig, ConfigError> {
        SliderConfig::new(self.min, self.max, self.step)
    }
}
