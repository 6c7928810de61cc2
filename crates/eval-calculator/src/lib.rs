#![deny(warnings)]
//! Calculator registry for the evaluation engine.
//!
//! This crate resolves external rule codes to live calculator instances.
//! The pieces are deliberately small: the [`Calculator`] trait is the
//! capability every concrete calculator implements, [`CalculatorRegistry`]
//! is the explicit name-to-instance map built once at startup, and
//! [`CalculatorFactory`] translates a rule code into a registered instance
//! via the [`rule_code`] mapping.

use anyhow::{Result, anyhow};
use std::collections::HashMap;

pub use eval_types::FactValue;

pub mod built_in;
pub mod error;
pub mod factory;
pub mod registry;
pub mod rule_code;

pub use error::EvaluationError;
pub use factory::CalculatorFactory;
pub use registry::CalculatorRegistry;
pub use rule_code::EvaluationRuleCode;

/// A trait for all calculators.
/// Calculators are stateless and thread-safe; one shared instance serves
/// every lookup for its name.
pub trait Calculator: Send + Sync + std::fmt::Debug {
    /// The name this calculator is registered under.
    fn name(&self) -> &'static str;

    /// Calculates a result based on the provided inputs.
    fn calculate(&self, inputs: &CalculatorInputs) -> Result<FactValue>;
}

/// Provides a safe interface for calculators to access input variables.
#[derive(Debug)]
pub struct CalculatorInputs<'a> {
    variables: &'a HashMap<String, FactValue>,
}

impl<'a> CalculatorInputs<'a> {
    /// Creates a new `CalculatorInputs`.
    pub fn new(variables: &'a HashMap<String, FactValue>) -> Self {
        Self { variables }
    }

    /// Gets an array value from the inputs.
    pub fn get_array(&self, name: &str) -> Result<&'a Vec<FactValue>> {
        match self.variables.get(name) {
            Some(FactValue::Array(arr)) => Ok(arr),
            Some(_) => Err(anyhow!("Input '{}' was found, but it is not an array.", name)),
            None => Err(anyhow!("Required input array '{}' was not found.", name)),
        }
    }

    /// Gets a string value from the inputs.
    pub fn get_string(&self, name: &str) -> Result<String> {
        match self.variables.get(name) {
            Some(FactValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(anyhow!("Input '{}' was found, but it is not a string.", name)),
            None => Err(anyhow!("Required input string '{}' was not found.", name)),
        }
    }

    /// Gets a floating-point number value from the inputs.
    pub fn get_f64(&self, name: &str) -> Result<f64> {
        match self.variables.get(name) {
            Some(FactValue::Float(f)) => Ok(*f),
            Some(FactValue::Integer(i)) => Ok(*i as f64),
            Some(_) => Err(anyhow!("Input '{}' was found, but it is not a number.", name)),
            None => Err(anyhow!("Required input number '{}' was not found.", name)),
        }
    }

    /// Gets a boolean value from the inputs.
    pub fn get_bool(&self, name: &str) -> Result<bool> {
        match self.variables.get(name) {
            Some(FactValue::Boolean(b)) => Ok(*b),
            Some(_) => Err(anyhow!("Input '{}' was found, but it is not a boolean.", name)),
            None => Err(anyhow!("Required input boolean '{}' was not found.", name)),
        }
    }
}
