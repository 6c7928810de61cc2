//! Built-in evaluation calculators.

// Score aggregation
pub mod score_average;
pub mod score_sum;
pub mod weighted_score;

// Grading
pub mod threshold_grade;

// Adjustments
pub mod percentage_adjust;
