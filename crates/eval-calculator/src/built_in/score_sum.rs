//! Score Sum Calculator
//!
//! Sums the `scores` input array. Non-numeric entries are an error.

use crate::{Calculator, CalculatorInputs, FactValue};
use anyhow::{Result, anyhow};

#[derive(Debug, Default)]
pub struct ScoreSumCalculator;

impl Calculator for ScoreSumCalculator {
    fn name(&self) -> &'static str {
        "score_sum"
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<FactValue> {
        let scores = inputs.get_array("scores")?;

        let mut total = 0.0;
        for score in scores {
            total += score
                .as_f64()
                .ok_or_else(|| anyhow!("'scores' must contain only numbers, got {}", score))?;
        }
        Ok(FactValue::Float(total))
    }
}
