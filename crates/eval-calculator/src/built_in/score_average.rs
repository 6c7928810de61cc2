//! Score Average Calculator
//!
//! Arithmetic mean of the `scores` input array. An empty array averages
//! to 0.0 rather than erroring.

use crate::{Calculator, CalculatorInputs, FactValue};
use anyhow::{Result, anyhow};

#[derive(Debug, Default)]
pub struct ScoreAverageCalculator;

impl Calculator for ScoreAverageCalculator {
    fn name(&self) -> &'static str {
        "score_average"
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<FactValue> {
        let scores = inputs.get_array("scores")?;

        if scores.is_empty() {
            return Ok(FactValue::Float(0.0));
        }

        let mut total = 0.0;
        for score in scores {
            total += score
                .as_f64()
                .ok_or_else(|| anyhow!("'scores' must contain only numbers, got {}", score))?;
        }
        Ok(FactValue::Float(total / scores.len() as f64))
    }
}
