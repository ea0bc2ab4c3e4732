//! Safe operating thresholds for the monitored battery parameters
//!
//! Thresholds are fixed when the validator is constructed and never change
//! afterwards. The standard set is compiled in; custom sets go through
//! [`Threshold::new`], which rejects bounds that could never classify a
//! measurement sensibly.

use crate::error::{BatteryError, Result};
use serde::Serialize;
use std::fmt;

/// A monitored battery parameter, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Parameter {
    Temperature,
    StateOfCharge,
    ChargeRate,
}

impl Parameter {
    /// Every parameter in the order breaches are reported
    pub const ALL: [Parameter; 3] = [
        Parameter::Temperature,
        Parameter::StateOfCharge,
        Parameter::ChargeRate,
    ];

    /// Name used in diagnostic messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Parameter::Temperature => "Temperature",
            Parameter::StateOfCharge => "State of Charge",
            Parameter::ChargeRate => "Charge Rate",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Classification of a single measurement against its threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MeasureStatus {
    Ok,
    TooLow,
    TooHigh,
    NotANumber,
}

impl MeasureStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, MeasureStatus::Ok)
    }
}

/// Inclusive `[min, max]` bounds for one parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Threshold {
    min: f64,
    max: f64,
}

impl Threshold {
    /// Build a threshold from caller-supplied bounds
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(BatteryError::invalid_threshold(
                min,
                max,
                "bounds must be finite numbers",
            ));
        }

        if min > max {
            return Err(BatteryError::invalid_threshold(
                min,
                max,
                "minimum exceeds maximum",
            ));
        }

        Ok(Self { min, max })
    }

    /// Unchecked constructor for compiled-in bounds; see the `const` asserts below
    const fn fixed(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether `value` lies within the bounds, boundaries included
    pub fn contains(&self, value: f64) -> bool {
        self.classify(value).is_ok()
    }

    pub fn classify(&self, value: f64) -> MeasureStatus {
        if value.is_nan() {
            MeasureStatus::NotANumber
        } else if value < self.min {
            MeasureStatus::TooLow
        } else if value > self.max {
            MeasureStatus::TooHigh
        } else {
            MeasureStatus::Ok
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

pub const MIN_TEMPERATURE: f64 = 0.0;
pub const MAX_TEMPERATURE: f64 = 45.0;
pub const MIN_STATE_OF_CHARGE: f64 = 20.0;
pub const MAX_STATE_OF_CHARGE: f64 = 80.0;
pub const MIN_CHARGE_RATE: f64 = 0.0;
pub const MAX_CHARGE_RATE: f64 = 0.8;

const _: () = assert!(MIN_TEMPERATURE < MAX_TEMPERATURE);
const _: () = assert!(MIN_STATE_OF_CHARGE < MAX_STATE_OF_CHARGE);
const _: () = assert!(MIN_CHARGE_RATE < MAX_CHARGE_RATE);

/// One threshold per monitored parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdSet {
    pub temperature: Threshold,
    pub state_of_charge: Threshold,
    pub charge_rate: Threshold,
}

impl ThresholdSet {
    /// Compiled-in safe operating window
    pub const STANDARD: ThresholdSet = ThresholdSet {
        temperature: Threshold::fixed(MIN_TEMPERATURE, MAX_TEMPERATURE),
        state_of_charge: Threshold::fixed(MIN_STATE_OF_CHARGE, MAX_STATE_OF_CHARGE),
        charge_rate: Threshold::fixed(MIN_CHARGE_RATE, MAX_CHARGE_RATE),
    };

    pub fn new(
        temperature: Threshold,
        state_of_charge: Threshold,
        charge_rate: Threshold,
    ) -> Self {
        Self {
            temperature,
            state_of_charge,
            charge_rate,
        }
    }

    pub fn get(&self, parameter: Parameter) -> &Threshold {
        match parameter {
            Parameter::Temperature => &self.temperature,
            Parameter::StateOfCharge => &self.state_of_charge,
            Parameter::ChargeRate => &self.charge_rate,
        }
    }

    /// Thresholds paired with their parameter, in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &Threshold)> + '_ {
        Parameter::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self::STANDARD
    }
}
