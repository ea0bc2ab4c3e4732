//! Pure validation of battery measurements against their thresholds
//!
//! Evaluation never fails and has no side effects: every real number,
//! including NaN and the infinities, is classified and reported.

use crate::core::threshold::{MeasureStatus, Parameter, ThresholdSet};
use serde::Serialize;
use std::fmt;

pub const OK_MESSAGE: &str = "Battery is OK.\n";

/// One measurement that fell outside its threshold
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Breach {
    pub parameter: Parameter,
    pub value: f64,
    pub status: MeasureStatus,
}

// Bitwise on `value` so a NaN breach equals itself
impl PartialEq for Breach {
    fn eq(&self, other: &Self) -> bool {
        self.parameter == other.parameter
            && self.status == other.status
            && self.value.to_bits() == other.value.to_bits()
    }
}

/// Outcome of a single evaluation
///
/// `ok` is true exactly when `breaches` is empty; both are fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    ok: bool,
    breaches: Vec<Breach>,
    message: String,
}

impl ValidationResult {
    fn from_breaches(breaches: Vec<Breach>) -> Self {
        let message = build_message(&breaches);
        Self {
            ok: breaches.is_empty(),
            breaches,
            message,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn breaches(&self) -> &[Breach] {
        &self.breaches
    }

    pub fn breached_names(&self) -> Vec<&'static str> {
        self.breaches
            .iter()
            .map(|b| b.parameter.display_name())
            .collect()
    }

    /// Human-readable report, newline-terminated
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

fn build_message(breaches: &[Breach]) -> String {
    if breaches.is_empty() {
        return OK_MESSAGE.to_string();
    }

    let mut message = String::from("Battery is NOT OK due to ");
    for breach in breaches {
        message.push_str(breach.parameter.display_name());
        message.push(' ');
    }
    message.push_str("being out of range.\n");
    message
}

/// Classifies measurements against a fixed [`ThresholdSet`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParameterValidator {
    thresholds: ThresholdSet,
}

impl ParameterValidator {
    pub fn new(thresholds: ThresholdSet) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ThresholdSet {
        &self.thresholds
    }

    pub fn classify(&self, parameter: Parameter, value: f64) -> MeasureStatus {
        self.thresholds.get(parameter).classify(value)
    }

    /// Evaluate one set of measurements
    pub fn evaluate(
        &self,
        temperature: f64,
        state_of_charge: f64,
        charge_rate: f64,
    ) -> ValidationResult {
        let measurements = [temperature, state_of_charge, charge_rate];

        let breaches = Parameter::ALL
            .into_iter()
            .zip(measurements)
            .filter_map(|(parameter, value)| {
                let status = self.classify(parameter, value);
                (!status.is_ok()).then_some(Breach {
                    parameter,
                    value,
                    status,
                })
            })
            .collect();

        ValidationResult::from_breaches(breaches)
    }
}

/// Evaluate measurements against the standard thresholds
pub fn evaluate(temperature: f64, state_of_charge: f64, charge_rate: f64) -> ValidationResult {
    ParameterValidator::default().evaluate(temperature, state_of_charge, charge_rate)
}
