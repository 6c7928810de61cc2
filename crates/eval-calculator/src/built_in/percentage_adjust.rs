//! Calculator for adjusting a base amount by a percentage.
//!
//! Adjusting 100 by 0.2 results in 120; by -0.25 results in 75.

use crate::{Calculator, CalculatorInputs, FactValue};
use anyhow::Result;

/// Calculator for percentage adjustment operations.
///
/// # Arguments
/// * `amount` - Base amount to adjust
/// * `percentage` - Signed fraction to adjust by (e.g., 0.2 for +20%)
///
/// # Returns
/// `amount + amount * percentage` as a `FactValue::Float`.
#[derive(Debug, Default)]
pub struct PercentageAdjustCalculator;

impl Calculator for PercentageAdjustCalculator {
    fn name(&self) -> &'static str {
        "percentage_adjust"
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<FactValue> {
        let amount = inputs.get_f64("amount")?;
        let percentage = inputs.get_f64("percentage")?;

        Ok(FactValue::Float(amount + amount * percentage))
    }
}
