use serde::{Deserialize, Serialize};

use super::answers::{
    ActivityLevel, AnswerSet, BloodPressure, FamilyHistory, GlucoseLevel, SleepQuality,
    SmokingStatus,
};
use super::results::RiskScore;

/// Risk factors the heuristic weighs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Age,
    Bmi,
    Glucose,
    A1c,
    Cholesterol,
    Triglycerides,
    BloodPressure,
    Smoking,
    Activity,
    Sleep,
    FamilyHistory,
}

/// Discrete contribution to a score, kept for audit output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: RiskFactor,
    pub points: u16,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    /// Sum before the 100 cap.
    pub raw_total: u16,
    pub score: RiskScore,
}

pub fn score(answers: &AnswerSet) -> RiskScore {
    score_breakdown(answers).score
}

/// Adds up every factor that applies. Missing or unreadable numbers contribute nothing.
pub fn score_breakdown(answers: &AnswerSet) -> ScoreBreakdown {
    let mut components = Vec::new();

    if let Some(age) = answers.age.whole() {
        if age >= 45 {
            components.push(component(
                RiskFactor::Age,
                20,
                format!("age {age} is 45 or older"),
            ));
        } else if age >= 35 {
            components.push(component(RiskFactor::Age, 10, format!("age {age} is 35-44")));
        }
    }

    if let Some(bmi) = answers.bmi() {
        if bmi >= 30.0 {
            components.push(component(
                RiskFactor::Bmi,
                25,
                format!("BMI {bmi:.1} is in the obese range"),
            ));
        } else if bmi >= 25.0 {
            components.push(component(
                RiskFactor::Bmi,
                15,
                format!("BMI {bmi:.1} is in the overweight range"),
            ));
        }
    }

    if answers.has_records() {
        score_medical_records(answers, &mut components);
    }

    if answers.blood_pressure == Some(BloodPressure::High) {
        components.push(component(RiskFactor::BloodPressure, 20, "high blood pressure"));
    }
    if answers.smoking == Some(SmokingStatus::Current) {
        components.push(component(RiskFactor::Smoking, 15, "currently smokes"));
    }
    if answers.activity == Some(ActivityLevel::Low) {
        components.push(component(RiskFactor::Activity, 20, "low physical activity"));
    }
    if answers.sleep == Some(SleepQuality::Poor) {
        components.push(component(RiskFactor::Sleep, 10, "poor sleep quality"));
    }
    if answers.family_history == Some(FamilyHistory::Close) {
        components.push(component(
            RiskFactor::FamilyHistory,
            25,
            "diabetes in a parent or sibling",
        ));
    }

    let raw_total = components.iter().map(|component| component.points).sum();

    ScoreBreakdown {
        components,
        raw_total,
        score: RiskScore::saturating(raw_total),
    }
}

fn score_medical_records(answers: &AnswerSet, components: &mut Vec<ScoreComponent>) {
    match answers.glucose {
        Some(GlucoseLevel::Diabetic) => {
            components.push(component(RiskFactor::Glucose, 30, "glucose in the diabetic range"));
        }
        Some(GlucoseLevel::Prediabetic) => {
            components.push(component(
                RiskFactor::Glucose,
                20,
                "glucose in the prediabetic range",
            ));
        }
        Some(GlucoseLevel::Normal) | None => {}
    }

    if let Some(a1c) = answers.a1c.value() {
        if a1c >= 6.5 {
            components.push(component(
                RiskFactor::A1c,
                30,
                format!("HbA1c {a1c}% is 6.5 or higher"),
            ));
        } else if a1c >= 5.7 {
            components.push(component(
                RiskFactor::A1c,
                20,
                format!("HbA1c {a1c}% is 5.7-6.4"),
            ));
        }
    }

    if let Some(cholesterol) = answers.cholesterol.whole() {
        if cholesterol > 240 {
            components.push(component(
                RiskFactor::Cholesterol,
                10,
                format!("total cholesterol {cholesterol} mg/dL above 240"),
            ));
        }
    }

    if let Some(triglycerides) = answers.triglycerides.whole() {
        if triglycerides > 200 {
            components.push(component(
                RiskFactor::Triglycerides,
                10,
                format!("triglycerides {triglycerides} mg/dL above 200"),
            ));
        }
    }
}

fn component(factor: RiskFactor, points: u16, notes: impl Into<String>) -> ScoreComponent {
    ScoreComponent {
        factor,
        points,
        notes: notes.into(),
    }
}
