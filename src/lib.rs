pub mod core;
pub mod error;
pub mod logging;

pub use crate::core::scenarios::{run_self_test, Scenario, ScenarioReport};
pub use crate::core::threshold::{MeasureStatus, Parameter, Threshold, ThresholdSet};
pub use crate::core::validation::{evaluate, Breach, ParameterValidator, ValidationResult};
pub use crate::error::BatteryError;
