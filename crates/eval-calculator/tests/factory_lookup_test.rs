use std::sync::Arc;

use eval_calculator::registry::CalculatorRegistry;
use eval_calculator::rule_code::resolve_calculator_name;
use eval_calculator::{CalculatorFactory, EvaluationError};
use proptest::prelude::*;

fn factory_with_built_ins() -> CalculatorFactory {
    CalculatorFactory::new(Arc::new(CalculatorRegistry::with_built_ins()))
}

#[test]
fn empty_rule_code_yields_no_calculator() {
    let factory = factory_with_built_ins();
    let result = factory.get_calculator("").unwrap();
    assert!(result.is_none());
}

#[test]
fn unrecognized_rule_code_yields_no_calculator() {
    let factory = factory_with_built_ins();
    let result = factory.get_calculator("UNKNOWN_X").unwrap();
    assert!(result.is_none());
}

#[test]
fn recognized_rule_code_yields_registered_calculator() {
    let factory = factory_with_built_ins();
    let calculator = factory.get_calculator("SCORE_SUM").unwrap().unwrap();
    assert_eq!(calculator.name(), "score_sum");
}

#[test]
fn recognized_code_without_registration_is_a_hard_failure() {
    // Empty registry: every resolvable code is a wiring defect.
    let factory = CalculatorFactory::new(Arc::new(CalculatorRegistry::new()));
    let err = factory.get_calculator("SCORE_SUM").unwrap_err();
    match err {
        EvaluationError::CalculatorNotRegistered { rule_code, name } => {
            assert_eq!(rule_code, "SCORE_SUM");
            assert_eq!(name, "score_sum");
        }
    }
}

#[test]
fn repeated_lookups_return_the_same_shared_instance() {
    let factory = factory_with_built_ins();
    let first = factory.get_calculator("WEIGHTED_SCORE").unwrap().unwrap();
    let second = factory.get_calculator("WEIGHTED_SCORE").unwrap().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn factory_lookups_work_across_threads() {
    let factory = Arc::new(factory_with_built_ins());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let factory = Arc::clone(&factory);
            std::thread::spawn(move || {
                let calculator = factory.get_calculator("THRESHOLD_GRADE").unwrap().unwrap();
                assert_eq!(calculator.name(), "threshold_grade");
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

proptest! {
    #[test]
    fn unresolvable_codes_never_fail(code in "[A-Za-z0-9_ ]{0,24}") {
        prop_assume!(resolve_calculator_name(&code).is_none());
        let factory = factory_with_built_ins();
        prop_assert!(matches!(factory.get_calculator(&code), Ok(None)));
    }
}
