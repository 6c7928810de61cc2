use thiserror::Error;

/// Errors surfaced by calculator lookup.
///
/// An unknown rule code is not an error; it resolves to no calculator and
/// the factory returns `None`. A code that does resolve to a name with no
/// registered instance is a wiring defect and fails hard.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// The rule code mapped to a calculator name, but nothing is registered
    /// under that name.
    #[error("calculator '{name}' for rule code '{rule_code}' is not registered")]
    CalculatorNotRegistered {
        /// The rule code the caller supplied.
        rule_code: String,
        /// The calculator name the code resolved to.
        name: String,
    },
}
