//! Property-based tests for measurement validation
//!
//! These cover the whole real-number domain, not just the hand-picked
//! scenarios in the unit tests.

#[cfg(test)]
mod tests {
    use crate::core::threshold::*;
    use crate::core::validation::*;
    use proptest::prelude::*;

    fn in_range_temperature() -> impl Strategy<Value = f64> {
        MIN_TEMPERATURE..=MAX_TEMPERATURE
    }

    fn in_range_state_of_charge() -> impl Strategy<Value = f64> {
        MIN_STATE_OF_CHARGE..=MAX_STATE_OF_CHARGE
    }

    fn in_range_charge_rate() -> impl Strategy<Value = f64> {
        MIN_CHARGE_RATE..=MAX_CHARGE_RATE
    }

    // Values strictly outside [min, max], on either side
    fn out_of_range(min: f64, max: f64) -> impl Strategy<Value = f64> {
        prop_oneof![
            (-1.0e6..min).prop_filter("strictly below", move |v| *v < min),
            (max..1.0e6).prop_filter("strictly above", move |v| *v > max),
        ]
    }

    fn any_measurement() -> impl Strategy<Value = f64> {
        prop_oneof![
            8 => -1.0e3..1.0e3f64,
            1 => prop::num::f64::ANY,
        ]
    }

    proptest! {
        #[test]
        fn test_in_range_inputs_are_ok(
            t in in_range_temperature(),
            soc in in_range_state_of_charge(),
            rate in in_range_charge_rate(),
        ) {
            let result = evaluate(t, soc, rate);
            prop_assert!(result.is_ok());
            prop_assert_eq!(result.message(), OK_MESSAGE);
        }

        #[test]
        fn test_temperature_breach_reported(
            t in out_of_range(MIN_TEMPERATURE, MAX_TEMPERATURE),
            soc in in_range_state_of_charge(),
            rate in in_range_charge_rate(),
        ) {
            let result = evaluate(t, soc, rate);
            prop_assert!(!result.is_ok());
            prop_assert!(result.message().contains("Temperature"));
            prop_assert_eq!(result.breached_names(), vec!["Temperature"]);
        }

        #[test]
        fn test_state_of_charge_breach_reported(
            t in in_range_temperature(),
            soc in out_of_range(MIN_STATE_OF_CHARGE, MAX_STATE_OF_CHARGE),
            rate in in_range_charge_rate(),
        ) {
            let result = evaluate(t, soc, rate);
            prop_assert!(!result.is_ok());
            prop_assert!(result.message().contains("State of Charge"));
            prop_assert_eq!(result.breached_names(), vec!["State of Charge"]);
        }

        #[test]
        fn test_charge_rate_breach_reported(
            t in in_range_temperature(),
            soc in in_range_state_of_charge(),
            rate in out_of_range(MIN_CHARGE_RATE, MAX_CHARGE_RATE),
        ) {
            let result = evaluate(t, soc, rate);
            prop_assert!(!result.is_ok());
            prop_assert!(result.message().contains("Charge Rate"));
            prop_assert_eq!(result.breached_names(), vec!["Charge Rate"]);
        }

        #[test]
        fn test_verdict_matches_breaches(
            t in any_measurement(),
            soc in any_measurement(),
            rate in any_measurement(),
        ) {
            let result = evaluate(t, soc, rate);
            prop_assert_eq!(result.is_ok(), result.breaches().is_empty());

            // Breach order follows parameter order, each at most once
            let names = result.breached_names();
            let expected: Vec<&str> = Parameter::ALL
                .iter()
                .map(|p| p.display_name())
                .filter(|name| names.contains(name))
                .collect();
            prop_assert_eq!(names, expected);
        }

        #[test]
        fn test_message_shape(
            t in any_measurement(),
            soc in any_measurement(),
            rate in any_measurement(),
        ) {
            let result = evaluate(t, soc, rate);
            if result.is_ok() {
                prop_assert_eq!(result.message(), "Battery is OK.\n");
            } else {
                let mut expected = String::from("Battery is NOT OK due to ");
                for name in result.breached_names() {
                    expected.push_str(name);
                    expected.push(' ');
                }
                expected.push_str("being out of range.\n");
                prop_assert_eq!(result.message(), expected.as_str());
            }
        }

        #[test]
        fn test_evaluate_idempotent(
            t in any_measurement(),
            soc in any_measurement(),
            rate in any_measurement(),
        ) {
            let first = evaluate(t, soc, rate);
            let second = evaluate(t, soc, rate);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_threshold_new_rejects_inverted(
            min in -1.0e6..1.0e6f64,
            gap in 1.0e-3..1.0e3f64,
        ) {
            prop_assert!(Threshold::new(min, min - gap).is_err());
            prop_assert!(Threshold::new(min - gap, min).is_ok());
        }
    }
}
