use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether the respondent has recent medical records; fixes which questions are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "yes")]
    Records,
    #[serde(rename = "no")]
    NoRecords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Fasting glucose range reported from recent blood work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlucoseLevel {
    Normal,
    Prediabetic,
    Diabetic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodPressure {
    Normal,
    Elevated,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingStatus {
    #[serde(rename = "no")]
    Never,
    #[serde(rename = "former")]
    Former,
    #[serde(rename = "yes")]
    Current,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepQuality {
    Good,
    Fair,
    Poor,
}

/// Diabetes among relatives; `Close` covers parents and siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FamilyHistory {
    #[serde(rename = "no")]
    None,
    #[serde(rename = "distant")]
    Distant,
    #[serde(rename = "yes")]
    Close,
}

/// Free-form numeric entry, kept exactly as typed.
///
/// Presence and value are separate questions: `" 7.1 "` is present and parses, `"abc"`
/// is present but has no value, so it satisfies step validation while contributing
/// nothing to the score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericAnswer(String);

impl NumericAnswer {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    pub fn is_present(&self) -> bool {
        !self.0.trim().is_empty()
    }

    /// Real-valued reading; `None` for blank, unparsable or non-finite text.
    pub fn value(&self) -> Option<f64> {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// Whole-number reading; fractional input is truncated toward zero.
    pub fn whole(&self) -> Option<i64> {
        self.value().map(|value| value.trunc() as i64)
    }
}

impl From<&str> for NumericAnswer {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NumericAnswer {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Every question the assessment can ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    HasRecords,
    Age,
    Gender,
    Height,
    Weight,
    Glucose,
    BloodPressure,
    A1c,
    Cholesterol,
    Triglycerides,
    Smoking,
    Activity,
    Sleep,
    FamilyHistory,
}

impl Field {
    /// Questions only asked on the records branch.
    pub const RECORDS_ONLY: [Field; 5] = [
        Field::Glucose,
        Field::BloodPressure,
        Field::A1c,
        Field::Cholesterol,
        Field::Triglycerides,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::HasRecords => "has_records",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Height => "height",
            Field::Weight => "weight",
            Field::Glucose => "glucose",
            Field::BloodPressure => "blood_pressure",
            Field::A1c => "a1c",
            Field::Cholesterol => "cholesterol",
            Field::Triglycerides => "triglycerides",
            Field::Smoking => "smoking",
            Field::Activity => "activity",
            Field::Sleep => "sleep",
            Field::FamilyHistory => "family_history",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Field::HasRecords => "Do you have recent medical records or test results?",
            Field::Age => "What is your age?",
            Field::Gender => "Gender",
            Field::Height => "Height (cm)",
            Field::Weight => "Weight (kg)",
            Field::Glucose => "Fasting Glucose Level (mg/dL)",
            Field::BloodPressure => "Blood Pressure",
            Field::A1c => "HbA1c (%)",
            Field::Cholesterol => "Total Cholesterol (mg/dL)",
            Field::Triglycerides => "Triglycerides (mg/dL)",
            Field::Smoking => "Do you smoke?",
            Field::Activity => "Physical Activity Level",
            Field::Sleep => "Sleep Quality",
            Field::FamilyHistory => "Family History of Diabetes",
        }
    }

    /// Reference ranges shown under the numeric lab inputs.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Field::A1c => {
                Some("Normal: below 5.7%, Prediabetic: 5.7-6.4%, Diabetic: 6.5% or higher")
            }
            Field::Cholesterol => Some(
                "Desirable: Less than 200 mg/dL, Borderline high: 200-239 mg/dL, High: 240 mg/dL and above",
            ),
            Field::Triglycerides => Some(
                "Normal: Less than 150 mg/dL, Borderline high: 150-199 mg/dL, High: 200 mg/dL and above",
            ),
            _ => None,
        }
    }

    /// Selectable options; empty for free-form numeric questions.
    pub fn choices(self) -> &'static [Choice] {
        match self {
            Field::HasRecords => &[
                Choice { value: "yes", label: "Yes, I have my medical records" },
                Choice { value: "no", label: "No, I don't have medical records" },
            ],
            Field::Gender => &[
                Choice { value: "male", label: "Male" },
                Choice { value: "female", label: "Female" },
                Choice { value: "other", label: "Other" },
            ],
            Field::Glucose => &[
                Choice { value: "normal", label: "Normal (70-99 mg/dL)" },
                Choice { value: "prediabetic", label: "Prediabetic (100-125 mg/dL)" },
                Choice { value: "diabetic", label: "Diabetic (126+ mg/dL)" },
            ],
            Field::BloodPressure => &[
                Choice { value: "normal", label: "Normal (less than 120/80)" },
                Choice { value: "elevated", label: "Elevated (120-129/less than 80)" },
                Choice { value: "high", label: "High (130/80 or higher)" },
            ],
            Field::Smoking => &[
                Choice { value: "no", label: "No, never" },
                Choice { value: "former", label: "Former smoker" },
                Choice { value: "yes", label: "Yes, currently" },
            ],
            Field::Activity => &[
                Choice { value: "high", label: "High (5+ times per week)" },
                Choice { value: "moderate", label: "Moderate (2-4 times per week)" },
                Choice { value: "low", label: "Low (less than 2 times per week)" },
            ],
            Field::Sleep => &[
                Choice { value: "good", label: "Good (7-9 hours, restful)" },
                Choice { value: "fair", label: "Fair (6-7 hours or occasional issues)" },
                Choice { value: "poor", label: "Poor (less than 6 hours or frequent issues)" },
            ],
            Field::FamilyHistory => &[
                Choice { value: "no", label: "No family history" },
                Choice {
                    value: "distant",
                    label: "Distant relatives (grandparents, aunts, uncles)",
                },
                Choice { value: "yes", label: "Close relatives (parents, siblings)" },
            ],
            Field::Age
            | Field::Height
            | Field::Weight
            | Field::A1c
            | Field::Cholesterol
            | Field::Triglycerides => &[],
        }
    }

    pub fn is_numeric(self) -> bool {
        self.choices().is_empty()
    }
}

/// One selectable option: the wire value and the label shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One edit applied to the answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum Answer {
    HasRecords(Branch),
    Age(NumericAnswer),
    Gender(Gender),
    Height(NumericAnswer),
    Weight(NumericAnswer),
    Glucose(GlucoseLevel),
    BloodPressure(BloodPressure),
    A1c(NumericAnswer),
    Cholesterol(NumericAnswer),
    Triglycerides(NumericAnswer),
    Smoking(SmokingStatus),
    Activity(ActivityLevel),
    Sleep(SleepQuality),
    FamilyHistory(FamilyHistory),
}

impl Answer {
    /// Builds an answer from a field and its wire value (`"yes"`, `"6.1"`, ...).
    pub fn parse(field: Field, value: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::json!({ "field": field.key(), "value": value }))
    }

    pub fn field(&self) -> Field {
        match self {
            Answer::HasRecords(_) => Field::HasRecords,
            Answer::Age(_) => Field::Age,
            Answer::Gender(_) => Field::Gender,
            Answer::Height(_) => Field::Height,
            Answer::Weight(_) => Field::Weight,
            Answer::Glucose(_) => Field::Glucose,
            Answer::BloodPressure(_) => Field::BloodPressure,
            Answer::A1c(_) => Field::A1c,
            Answer::Cholesterol(_) => Field::Cholesterol,
            Answer::Triglycerides(_) => Field::Triglycerides,
            Answer::Smoking(_) => Field::Smoking,
            Answer::Activity(_) => Field::Activity,
            Answer::Sleep(_) => Field::Sleep,
            Answer::FamilyHistory(_) => Field::FamilyHistory,
        }
    }
}

/// Responses gathered during one run through the assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerSet {
    pub has_records: Option<Branch>,
    pub age: NumericAnswer,
    pub gender: Option<Gender>,
    pub height: NumericAnswer,
    pub weight: NumericAnswer,
    pub glucose: Option<GlucoseLevel>,
    pub blood_pressure: Option<BloodPressure>,
    pub a1c: NumericAnswer,
    pub cholesterol: NumericAnswer,
    pub triglycerides: NumericAnswer,
    pub smoking: Option<SmokingStatus>,
    pub activity: Option<ActivityLevel>,
    pub sleep: Option<SleepQuality>,
    pub family_history: Option<FamilyHistory>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn branch(&self) -> Option<Branch> {
        self.has_records
    }

    pub fn has_records(&self) -> bool {
        self.has_records == Some(Branch::Records)
    }

    pub fn is_answered(&self, field: Field) -> bool {
        match field {
            Field::HasRecords => self.has_records.is_some(),
            Field::Age => self.age.is_present(),
            Field::Gender => self.gender.is_some(),
            Field::Height => self.height.is_present(),
            Field::Weight => self.weight.is_present(),
            Field::Glucose => self.glucose.is_some(),
            Field::BloodPressure => self.blood_pressure.is_some(),
            Field::A1c => self.a1c.is_present(),
            Field::Cholesterol => self.cholesterol.is_present(),
            Field::Triglycerides => self.triglycerides.is_present(),
            Field::Smoking => self.smoking.is_some(),
            Field::Activity => self.activity.is_some(),
            Field::Sleep => self.sleep.is_some(),
            Field::FamilyHistory => self.family_history.is_some(),
        }
    }

    /// Writes a single answer, overwriting any previous value for that field.
    pub fn apply(&mut self, answer: Answer) {
        match answer {
            Answer::HasRecords(branch) => self.has_records = Some(branch),
            Answer::Age(value) => self.age = value,
            Answer::Gender(value) => self.gender = Some(value),
            Answer::Height(value) => self.height = value,
            Answer::Weight(value) => self.weight = value,
            Answer::Glucose(value) => self.glucose = Some(value),
            Answer::BloodPressure(value) => self.blood_pressure = Some(value),
            Answer::A1c(value) => self.a1c = value,
            Answer::Cholesterol(value) => self.cholesterol = value,
            Answer::Triglycerides(value) => self.triglycerides = value,
            Answer::Smoking(value) => self.smoking = Some(value),
            Answer::Activity(value) => self.activity = Some(value),
            Answer::Sleep(value) => self.sleep = Some(value),
            Answer::FamilyHistory(value) => self.family_history = Some(value),
        }
    }

    /// Blanks the questions that only belong to the records branch.
    pub(crate) fn clear_records_only(&mut self) {
        self.glucose = None;
        self.blood_pressure = None;
        self.a1c = NumericAnswer::default();
        self.cholesterol = NumericAnswer::default();
        self.triglycerides = NumericAnswer::default();
    }

    /// Body mass index from height in centimeters and weight in kilograms.
    pub fn bmi(&self) -> Option<f64> {
        let height_m = self.height.value()? / 100.0;
        let weight = self.weight.value()?;
        if height_m <= 0.0 {
            return None;
        }
        Some(weight / (height_m * height_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_answer_separates_presence_from_value() {
        let garbled = NumericAnswer::from("abc");
        assert!(garbled.is_present());
        assert_eq!(garbled.value(), None);

        let blank = NumericAnswer::from("   ");
        assert!(!blank.is_present());

        let padded = NumericAnswer::from(" 6.8 ");
        assert_eq!(padded.value(), Some(6.8));
    }

    #[test]
    fn whole_truncates_fractional_input() {
        assert_eq!(NumericAnswer::from("240.9").whole(), Some(240));
        assert_eq!(NumericAnswer::from("44.99").whole(), Some(44));
        assert_eq!(NumericAnswer::from("NaN").whole(), None);
    }

    #[test]
    fn bmi_is_absent_without_a_usable_height() {
        let mut answers = AnswerSet::new();
        answers.apply(Answer::Weight("90".into()));
        answers.apply(Answer::Height("0".into()));
        assert_eq!(answers.bmi(), None);

        answers.apply(Answer::Height("170".into()));
        let bmi = answers.bmi().expect("bmi computed");
        assert!((bmi - 31.14).abs() < 0.01);
    }

    #[test]
    fn every_choice_parses_into_an_answer() {
        for field in [
            Field::HasRecords,
            Field::Gender,
            Field::Glucose,
            Field::BloodPressure,
            Field::Smoking,
            Field::Activity,
            Field::Sleep,
            Field::FamilyHistory,
        ] {
            for choice in field.choices() {
                let answer = Answer::parse(field, choice.value).expect("choice parses");
                assert_eq!(answer.field(), field);
            }
        }
        assert!(Answer::parse(Field::Sleep, "excellent").is_err());
        assert_eq!(
            Answer::parse(Field::A1c, "6.1").expect("numeric parses"),
            Answer::A1c("6.1".into())
        );
    }

    #[test]
    fn answers_use_the_form_wire_names() {
        let answer: Answer =
            serde_json::from_str(r#"{"field":"has_records","value":"yes"}"#).expect("parses");
        assert_eq!(answer, Answer::HasRecords(Branch::Records));

        let answer: Answer =
            serde_json::from_str(r#"{"field":"family_history","value":"yes"}"#).expect("parses");
        assert_eq!(answer, Answer::FamilyHistory(FamilyHistory::Close));

        let answer: Answer =
            serde_json::from_str(r#"{"field":"age","value":"50"}"#).expect("parses");
        assert_eq!(answer.field(), Field::Age);
    }
}
