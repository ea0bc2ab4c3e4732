//! Demonstration scenarios and the reference self-test table

use crate::core::validation::{ParameterValidator, ValidationResult};
use crate::error::{BatteryError, Result};

/// A named set of measurements with the verdict it must produce
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub temperature: f64,
    pub state_of_charge: f64,
    pub charge_rate: f64,
    pub expect_ok: bool,
}

impl Scenario {
    const fn new(
        name: &'static str,
        temperature: f64,
        state_of_charge: f64,
        charge_rate: f64,
        expect_ok: bool,
    ) -> Self {
        Self {
            name,
            temperature,
            state_of_charge,
            charge_rate,
            expect_ok,
        }
    }

    pub fn evaluate(&self, validator: &ParameterValidator) -> ValidationResult {
        validator.evaluate(self.temperature, self.state_of_charge, self.charge_rate)
    }
}

/// Scenarios printed by the demo command
pub const DEMO_SCENARIOS: &[Scenario] = &[
    Scenario::new("normal condition", 25.0, 70.0, 0.7, true),
    Scenario::new("temperature too high", 50.0, 70.0, 0.7, false),
    Scenario::new(
        "state of charge and charge rate too high",
        25.0,
        90.0,
        0.9,
        false,
    ),
];

pub const REFERENCE_SCENARIOS: &[Scenario] = &[
    Scenario::new("normal condition", 25.0, 70.0, 0.7, true),
    Scenario::new("temperature too high", 50.0, 70.0, 0.7, false),
    Scenario::new("temperature too low", -5.0, 70.0, 0.7, false),
    Scenario::new("state of charge too high", 25.0, 90.0, 0.7, false),
    Scenario::new("state of charge too low", 25.0, 10.0, 0.7, false),
    Scenario::new("charge rate too high", 25.0, 70.0, 1.0, false),
    Scenario::new("lower boundary", 0.0, 20.0, 0.0, true),
    Scenario::new("upper boundary", 45.0, 80.0, 0.8, true),
];

#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub result: ValidationResult,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok() == self.scenario.expect_ok
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl ScenarioReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn into_result(self) -> Result<Self> {
        if self.all_passed() {
            Ok(self)
        } else {
            Err(BatteryError::self_test_failed(self.failed(), self.total()))
        }
    }
}

pub fn run_scenarios(validator: &ParameterValidator, scenarios: &[Scenario]) -> ScenarioReport {
    let outcomes = scenarios
        .iter()
        .map(|scenario| ScenarioOutcome {
            scenario: *scenario,
            result: scenario.evaluate(validator),
        })
        .collect();

    ScenarioReport { outcomes }
}

/// Check a validator against [`REFERENCE_SCENARIOS`]
pub fn run_self_test(validator: &ParameterValidator) -> ScenarioReport {
    run_scenarios(validator, REFERENCE_SCENARIOS)
}
