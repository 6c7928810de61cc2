//! The closed set of evaluation rule codes and their calculator names.
//!
//! Rule codes are the external identifiers callers use; calculator names are
//! the registry keys. The mapping is a pure function of the code.

/// An evaluation rule code recognised by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationRuleCode {
    /// Sum of a list of scores.
    ScoreSum,
    /// Arithmetic mean of a list of scores.
    ScoreAverage,
    /// Weighted average of value/weight pairs.
    WeightedScore,
    /// Pass/fail check of a value against a threshold.
    ThresholdGrade,
    /// Percentage adjustment of a base amount.
    PercentageAdjust,
}

impl EvaluationRuleCode {
    /// Every recognised rule code.
    pub const ALL: [EvaluationRuleCode; 5] = [
        EvaluationRuleCode::ScoreSum,
        EvaluationRuleCode::ScoreAverage,
        EvaluationRuleCode::WeightedScore,
        EvaluationRuleCode::ThresholdGrade,
        EvaluationRuleCode::PercentageAdjust,
    ];

    /// The external identifier for this rule code.
    pub fn code(&self) -> &'static str {
        match self {
            EvaluationRuleCode::ScoreSum => "SCORE_SUM",
            EvaluationRuleCode::ScoreAverage => "SCORE_AVERAGE",
            EvaluationRuleCode::WeightedScore => "WEIGHTED_SCORE",
            EvaluationRuleCode::ThresholdGrade => "THRESHOLD_GRADE",
            EvaluationRuleCode::PercentageAdjust => "PERCENTAGE_ADJUST",
        }
    }

    /// The registry name of the calculator implementing this rule.
    pub fn calculator_name(&self) -> &'static str {
        match self {
            EvaluationRuleCode::ScoreSum => "score_sum",
            EvaluationRuleCode::ScoreAverage => "score_average",
            EvaluationRuleCode::WeightedScore => "weighted_score",
            EvaluationRuleCode::ThresholdGrade => "threshold_grade",
            EvaluationRuleCode::PercentageAdjust => "percentage_adjust",
        }
    }

    /// Parses an external rule code. Codes are opaque and matched exactly;
    /// unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }
}

/// Maps a rule code to the name of its calculator, or `None` when the code
/// is not recognised.
pub fn resolve_calculator_name(rule_code: &str) -> Option<&'static str> {
    EvaluationRuleCode::from_code(rule_code).map(|c| c.calculator_name())
}
