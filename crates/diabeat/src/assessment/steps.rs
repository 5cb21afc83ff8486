use serde::Serialize;

use super::answers::{AnswerSet, Branch, Field};

/// One screen of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDefinition {
    pub number: u8,
    pub title: &'static str,
    pub required: &'static [Field],
}

const MEDICAL_RECORDS: StepDefinition = StepDefinition {
    number: 1,
    title: "Medical Records",
    required: &[Field::HasRecords],
};

const BASIC_INFORMATION: StepDefinition = StepDefinition {
    number: 2,
    title: "Basic Information",
    required: &[Field::Age, Field::Gender],
};

const PHYSICAL_MEASUREMENTS: StepDefinition = StepDefinition {
    number: 3,
    title: "Physical Measurements",
    required: &[Field::Height, Field::Weight],
};

const RECORDS_STEPS: [StepDefinition; 6] = [
    MEDICAL_RECORDS,
    BASIC_INFORMATION,
    PHYSICAL_MEASUREMENTS,
    StepDefinition {
        number: 4,
        title: "Medical Metrics",
        required: &[Field::Glucose, Field::BloodPressure, Field::A1c],
    },
    StepDefinition {
        number: 5,
        title: "Additional Medical Data",
        required: &[Field::Cholesterol, Field::Triglycerides],
    },
    StepDefinition {
        number: 6,
        title: "Lifestyle Habits",
        required: &[
            Field::Smoking,
            Field::Activity,
            Field::Sleep,
            Field::FamilyHistory,
        ],
    },
];

const NO_RECORDS_STEPS: [StepDefinition; 5] = [
    MEDICAL_RECORDS,
    BASIC_INFORMATION,
    PHYSICAL_MEASUREMENTS,
    StepDefinition {
        number: 4,
        title: "Lifestyle Habits",
        required: &[Field::Smoking, Field::Activity],
    },
    StepDefinition {
        number: 5,
        title: "Additional Factors",
        required: &[Field::Sleep, Field::FamilyHistory],
    },
];

/// Ordered steps for a branch. An unanswered branch shows the shorter sequence.
pub fn steps_for(branch: Option<Branch>) -> &'static [StepDefinition] {
    match branch {
        Some(Branch::Records) => &RECORDS_STEPS,
        Some(Branch::NoRecords) | None => &NO_RECORDS_STEPS,
    }
}

pub fn step_definition(branch: Option<Branch>, step: u8) -> Option<&'static StepDefinition> {
    let index = usize::from(step).checked_sub(1)?;
    steps_for(branch).get(index)
}

pub fn total_steps(branch: Option<Branch>) -> u8 {
    steps_for(branch).len() as u8
}

/// Required fields of `step` that `answers` has not filled in yet.
///
/// A step that does not exist on the branch reports nothing missing; callers check
/// existence through [`is_step_valid`].
pub fn missing_fields(answers: &AnswerSet, step: u8) -> Vec<Field> {
    step_definition(answers.branch(), step)
        .map(|definition| {
            definition
                .required
                .iter()
                .copied()
                .filter(|field| !answers.is_answered(*field))
                .collect()
        })
        .unwrap_or_default()
}

pub fn is_step_valid(answers: &AnswerSet, step: u8) -> bool {
    match step_definition(answers.branch(), step) {
        Some(definition) => definition
            .required
            .iter()
            .all(|field| answers.is_answered(*field)),
        None => false,
    }
}
