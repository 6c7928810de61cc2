use crate::{Calculator, CalculatorInputs, FactValue};
use anyhow::Result;

/// Grades a value against a threshold.
///
/// Returns `FactValue::Boolean(true)` when `value` is strictly greater than
/// `threshold`.
#[derive(Debug, Default)]
pub struct ThresholdGradeCalculator;

impl Calculator for ThresholdGradeCalculator {
    fn name(&self) -> &'static str {
        "threshold_grade"
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<FactValue> {
        let value = inputs.get_f64("value")?;
        let threshold = inputs.get_f64("threshold")?;

        Ok(FactValue::Boolean(value > threshold))
    }
}
