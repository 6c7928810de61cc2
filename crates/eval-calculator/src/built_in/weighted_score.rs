//! A calculator for computing the weighted score of a set of items.

use crate::{Calculator, CalculatorInputs, FactValue};
use anyhow::{Result, anyhow};

/// Calculates the weighted average score for a list of items.
///
/// # Expected Inputs
/// - `items`: An array of objects. Each object must contain:
///   - `value`: A numeric field representing the score.
///   - `weight`: A numeric field representing the weight.
///
/// # Output
/// The weighted average as a `FactValue::Float`. Returns 0.0 when the total
/// weight is zero.
#[derive(Debug, Default)]
pub struct WeightedScoreCalculator;

impl Calculator for WeightedScoreCalculator {
    fn name(&self) -> &'static str {
        "weighted_score"
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<FactValue> {
        let items = inputs.get_array("items")?;

        let mut total_weighted_value = 0.0;
        let mut total_weight = 0.0;

        for item_val in items {
            if let FactValue::Object(item) = item_val {
                let value = item
                    .get("value")
                    .and_then(|v| v.as_f64())
                    .ok_or_else(|| anyhow!("Each item must have a numeric 'value' field."))?;

                let weight = item
                    .get("weight")
                    .and_then(|v| v.as_f64())
                    .ok_or_else(|| anyhow!("Each item must have a numeric 'weight' field."))?;

                total_weighted_value += value * weight;
                total_weight += weight;
            } else {
                return Err(anyhow!("'items' must be an array of objects."));
            }
        }

        let weighted_score =
            if total_weight == 0.0 { 0.0 } else { total_weighted_value / total_weight };
        Ok(FactValue::Float(weighted_score))
    }
}
