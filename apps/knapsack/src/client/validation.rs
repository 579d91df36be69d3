//! Client-side form validation.
//!
//! Each field is checked on its own and reports to its own alert region. The
//! length check across values and weights only runs once both lists parse.

use crate::client::{CAPACITY_ALERTS, GENERAL_ALERTS, VALUES_ALERTS, WEIGHTS_ALERTS};
use crate::input::{
    ensure_same_length, parse_positive_number, parse_positive_numbers, InputError,
};

pub const WEIGHTS_MESSAGE: &str =
    "Please enter valid weights. Use numbers greater than 0 separated by ','.";
pub const VALUES_MESSAGE: &str =
    "Please enter valid values. Use numbers greater than 0 separated by ','.";
pub const CAPACITY_MESSAGE: &str = "Please enter a valid capacity. Use a number greater than 0.";
pub const LENGTH_MESSAGE: &str = "Weights and values must have same length!";

/// Raw text of the three form fields. `weights` holds the item volumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInputs {
    pub weights: String,
    pub values: String,
    pub capacity: String,
}

/// A failed check and where to report it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    pub region: &'static str,
    pub message: &'static str,
    pub error: InputError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm {
    pub values: Vec<f64>,
    pub volumes: Vec<f64>,
    pub capacity: f64,
}

pub fn validate_weights(text: &str) -> Result<Vec<f64>, ValidationFailure> {
    parse_positive_numbers(text).map_err(|error| ValidationFailure {
        region: WEIGHTS_ALERTS,
        message: WEIGHTS_MESSAGE,
        error,
    })
}

pub fn validate_values(text: &str) -> Result<Vec<f64>, ValidationFailure> {
    parse_positive_numbers(text).map_err(|error| ValidationFailure {
        region: VALUES_ALERTS,
        message: VALUES_MESSAGE,
        error,
    })
}

pub fn validate_capacity(text: &str) -> Result<f64, ValidationFailure> {
    parse_positive_number(text).map_err(|error| ValidationFailure {
        region: CAPACITY_ALERTS,
        message: CAPACITY_MESSAGE,
        error,
    })
}

/// Runs all three field checks, then the length check. Returns every failure
/// found so each region can show its own message.
pub fn validate_form(inputs: &FormInputs) -> Result<ValidatedForm, Vec<ValidationFailure>> {
    let weights = validate_weights(&inputs.weights);
    let values = validate_values(&inputs.values);
    let capacity = validate_capacity(&inputs.capacity);

    match (weights, values, capacity) {
        (Ok(volumes), Ok(values), Ok(capacity)) => {
            ensure_same_length(&values, &volumes).map_err(|error| {
                vec![ValidationFailure {
                    region: GENERAL_ALERTS,
                    message: LENGTH_MESSAGE,
                    error,
                }]
            })?;
            Ok(ValidatedForm {
                values,
                volumes,
                capacity,
            })
        }
        (weights, values, capacity) => Err([weights.err(), values.err(), capacity.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}
