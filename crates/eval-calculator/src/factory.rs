//! Rule-code-to-calculator lookup.

use crate::error::EvaluationError;
use crate::rule_code::resolve_calculator_name;
use crate::{Calculator, CalculatorRegistry};
use std::sync::Arc;

/// Resolves rule codes to registered calculator instances.
///
/// The factory holds a registry reference injected once at construction and
/// never reassigned, so lookups are pure reads and safe to issue from any
/// number of threads.
///
/// An unknown rule code yields `Ok(None)`; a code that resolves to a name
/// with nothing registered under it is a wiring defect and yields
/// [`EvaluationError::CalculatorNotRegistered`].
pub struct CalculatorFactory {
    registry: Arc<CalculatorRegistry>,
}

impl CalculatorFactory {
    /// Creates a factory over an already-populated registry.
    pub fn new(registry: Arc<CalculatorRegistry>) -> Self {
        Self { registry }
    }

    /// Looks up the calculator for `rule_code`.
    ///
    /// The resolver is consulted exactly once and the registry at most once
    /// per call. Repeated calls with the same code return the same shared
    /// instance.
    pub fn get_calculator(
        &self,
        rule_code: &str,
    ) -> Result<Option<Arc<dyn Calculator>>, EvaluationError> {
        // A blank mapping entry is treated the same as an unknown code.
        let name = match resolve_calculator_name(rule_code) {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                tracing::debug!(rule_code, "no calculator mapped for rule code");
                return Ok(None);
            }
        };

        match self.registry.get(name) {
            Some(calculator) => Ok(Some(calculator)),
            None => {
                tracing::error!(rule_code, calculator = name, "resolved calculator is not registered");
                Err(EvaluationError::CalculatorNotRegistered {
                    rule_code: rule_code.to_string(),
                    name: name.to_string(),
                })
            }
        }
    }
}
