//! Diabetes risk questionnaire: branching step flow, heuristic scoring, and the results
//! view rebuilt from the final score.
//!
//! Answers never leave [`AssessmentFlow`]; on submission only the [`RiskScore`] is handed
//! on, and [`RiskResult::from_score`] derives everything the results view displays.

pub mod answers;
pub mod flow;
pub mod results;
pub mod scoring;
pub mod steps;

#[cfg(test)]
mod tests;

pub use answers::{
    ActivityLevel, Answer, AnswerSet, BloodPressure, Branch, Choice, FamilyHistory, Field,
    Gender, GlucoseLevel, NumericAnswer, SleepQuality, SmokingStatus,
};
pub use flow::{Advance, AssessmentFlow, FlowError, FlowStatus};
pub use results::{classify, recommend, RiskResult, RiskScore, RiskTier, ScoreRangeError};
pub use scoring::{score, score_breakdown, RiskFactor, ScoreBreakdown, ScoreComponent};
pub use steps::{is_step_valid, missing_fields, steps_for, total_steps, StepDefinition};
