use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::answers::{Answer, AnswerSet, Branch, Field};
use super::results::RiskScore;
use super::scoring::{score_breakdown, ScoreBreakdown};
use super::steps;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("assessment already submitted with score {0}")]
    AlreadySubmitted(RiskScore),
    #[error("step {step} is incomplete (missing {})", field_list(.missing))]
    Incomplete { step: u8, missing: Vec<Field> },
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FlowStatus {
    InProgress,
    Submitted { score: RiskScore },
}

/// Result of pressing "Next" (or "Get Results" on the last step).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Current step is incomplete; nothing changed.
    Blocked { missing: Vec<Field> },
    Moved { step: u8 },
    /// Final step completed. The score is the only thing that leaves the flow.
    Submitted(RiskScore),
    /// The flow was already submitted.
    Closed,
}

/// Step-by-step questionnaire state for a single assessment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentFlow {
    current_step: u8,
    answers: AnswerSet,
    status: FlowStatus,
}

impl Default for AssessmentFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentFlow {
    pub fn new() -> Self {
        Self {
            current_step: 1,
            answers: AnswerSet::new(),
            status: FlowStatus::InProgress,
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn status(&self) -> FlowStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.status, FlowStatus::Submitted { .. })
    }

    pub fn total_steps(&self) -> u8 {
        steps::total_steps(self.answers.branch())
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step == self.total_steps()
    }

    pub fn progress_percent(&self) -> f32 {
        f32::from(self.current_step) / f32::from(self.total_steps()) * 100.0
    }

    pub fn step_title(&self) -> &'static str {
        steps::step_definition(self.answers.branch(), self.current_step)
            .map(|definition| definition.title)
            .unwrap_or_default()
    }

    /// Questions shown on the current step.
    pub fn current_fields(&self) -> &'static [Field] {
        steps::step_definition(self.answers.branch(), self.current_step)
            .map(|definition| definition.required)
            .unwrap_or_default()
    }

    pub fn is_step_valid(&self, step: u8) -> bool {
        steps::is_step_valid(&self.answers, step)
    }

    pub fn missing_fields(&self, step: u8) -> Vec<Field> {
        steps::missing_fields(&self.answers, step)
    }

    /// Applies one edit to the answer set.
    ///
    /// Switching the branch clears the records-only answers so a later score never
    /// counts questions the respondent was not shown.
    pub fn record(&mut self, answer: Answer) -> Result<(), FlowError> {
        if let FlowStatus::Submitted { score } = self.status {
            return Err(FlowError::AlreadySubmitted(score));
        }

        if let Answer::HasRecords(branch) = answer {
            self.switch_branch(branch);
        }

        debug!(field = %answer.field(), step = self.current_step, "answer recorded");
        self.answers.apply(answer);
        Ok(())
    }

    /// A shorter branch pulls the current step back onto its last step.
    fn switch_branch(&mut self, branch: Branch) {
        match self.answers.branch() {
            Some(previous) if previous != branch => {
                debug!(?previous, ?branch, "branch changed, clearing records-only answers");
                self.answers.clear_records_only();
            }
            _ => {}
        }
        self.current_step = self.current_step.min(steps::total_steps(Some(branch)));
    }

    pub fn advance(&mut self) -> Advance {
        if self.is_submitted() {
            return Advance::Closed;
        }

        let missing = self.missing_fields(self.current_step);
        if !self.is_step_valid(self.current_step) {
            debug!(step = self.current_step, ?missing, "advance blocked");
            return Advance::Blocked { missing };
        }

        if self.current_step < self.total_steps() {
            self.current_step += 1;
            return Advance::Moved {
                step: self.current_step,
            };
        }

        let breakdown = self.submit();
        Advance::Submitted(breakdown.score)
    }

    /// Like [`advance`](Self::advance) but also yields the per-factor breakdown
    /// when the flow submits.
    pub fn advance_with_breakdown(&mut self) -> (Advance, Option<ScoreBreakdown>) {
        if self.is_submitted()
            || !self.is_step_valid(self.current_step)
            || self.current_step < self.total_steps()
        {
            return (self.advance(), None);
        }

        let breakdown = self.submit();
        (Advance::Submitted(breakdown.score), Some(breakdown))
    }

    /// Advances through every remaining step and submits, stopping at the first
    /// incomplete step. Used when all answers are known up front.
    pub fn finish(&mut self) -> Result<ScoreBreakdown, FlowError> {
        loop {
            if let FlowStatus::Submitted { score } = self.status {
                return Err(FlowError::AlreadySubmitted(score));
            }

            match self.advance_with_breakdown() {
                (_, Some(breakdown)) => return Ok(breakdown),
                (Advance::Blocked { missing }, None) => {
                    return Err(FlowError::Incomplete {
                        step: self.current_step,
                        missing,
                    })
                }
                _ => {}
            }
        }
    }

    pub fn retreat(&mut self) -> u8 {
        if !self.is_submitted() && self.current_step > 1 {
            self.current_step -= 1;
        }
        self.current_step
    }

    fn submit(&mut self) -> ScoreBreakdown {
        let breakdown = score_breakdown(&self.answers);
        info!(
            steps = self.total_steps(),
            score = breakdown.score.value(),
            "assessment submitted"
        );
        self.status = FlowStatus::Submitted {
            score: breakdown.score,
        };
        self.answers = AnswerSet::default();
        breakdown
    }
}
