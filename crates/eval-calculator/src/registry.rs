//! Explicit name-to-instance calculator registry.
//!
//! Built once during startup wiring and read-only afterwards, so concurrent
//! lookups need no coordination.

use crate::Calculator;
use crate::built_in::{
    percentage_adjust::PercentageAdjustCalculator, score_average::ScoreAverageCalculator,
    score_sum::ScoreSumCalculator, threshold_grade::ThresholdGradeCalculator,
    weighted_score::WeightedScoreCalculator,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Holds one shared instance per calculator name.
pub struct CalculatorRegistry {
    calculators: HashMap<String, Arc<dyn Calculator>>,
}

impl Default for CalculatorRegistry {
    fn default() -> Self {
        Self::with_built_ins()
    }
}

impl CalculatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { calculators: HashMap::new() }
    }

    /// Creates a registry pre-populated with every built-in calculator.
    pub fn with_built_ins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ScoreSumCalculator));
        registry.register(Arc::new(ScoreAverageCalculator));
        registry.register(Arc::new(WeightedScoreCalculator));
        registry.register(Arc::new(ThresholdGradeCalculator));
        registry.register(Arc::new(PercentageAdjustCalculator));
        registry
    }

    /// Registers a calculator under its own name, replacing any previous
    /// registration for that name.
    pub fn register(&mut self, calculator: Arc<dyn Calculator>) {
        tracing::debug!(name = calculator.name(), "registering calculator");
        self.calculators.insert(calculator.name().to_string(), calculator);
    }

    /// Returns the shared instance registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Calculator>> {
        self.calculators.get(name).cloned()
    }

    /// Number of registered calculators.
    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    /// True when no calculator is registered.
    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule_code::EvaluationRuleCode;

    #[test]
    fn built_ins_cover_every_rule_code() {
        let registry = CalculatorRegistry::with_built_ins();
        for code in EvaluationRuleCode::ALL {
            assert!(
                registry.get(code.calculator_name()).is_some(),
                "no calculator registered for {:?}",
                code
            );
        }
    }

    #[test]
    fn get_returns_the_same_shared_instance() {
        let registry = CalculatorRegistry::with_built_ins();
        let first = registry.get("score_sum").unwrap();
        let second = registry.get("score_sum").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn register_replaces_by_name() {
        let mut registry = CalculatorRegistry::new();
        registry.register(Arc::new(ScoreSumCalculator));
        registry.register(Arc::new(ScoreSumCalculator));
        assert_eq!(registry.len(), 1);
    }
}
