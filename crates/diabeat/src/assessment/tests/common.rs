use crate::assessment::answers::{
    ActivityLevel, Answer, AnswerSet, BloodPressure, Branch, FamilyHistory, Gender,
    GlucoseLevel, SleepQuality, SmokingStatus,
};
use crate::assessment::flow::AssessmentFlow;

/// Age 50, 170 cm / 90 kg, every lifestyle factor at its worst.
pub(super) fn high_risk_without_records() -> AnswerSet {
    let mut answers = AnswerSet::new();
    for answer in [
        Answer::HasRecords(Branch::NoRecords),
        Answer::Age("50".into()),
        Answer::Gender(Gender::Female),
        Answer::Height("170".into()),
        Answer::Weight("90".into()),
        Answer::BloodPressure(BloodPressure::High),
        Answer::Smoking(SmokingStatus::Current),
        Answer::Activity(ActivityLevel::Low),
        Answer::Sleep(SleepQuality::Poor),
        Answer::FamilyHistory(FamilyHistory::Close),
    ] {
        answers.apply(answer);
    }
    answers
}

/// Age 28, 175 cm / 68 kg, no risk factors.
pub(super) fn healthy_lifestyle() -> Vec<Answer> {
    vec![
        Answer::Age("28".into()),
        Answer::Gender(Gender::Male),
        Answer::Height("175".into()),
        Answer::Weight("68".into()),
        Answer::Smoking(SmokingStatus::Never),
        Answer::Activity(ActivityLevel::High),
        Answer::Sleep(SleepQuality::Good),
        Answer::FamilyHistory(FamilyHistory::None),
    ]
}

pub(super) fn records_answers(glucose: GlucoseLevel, a1c: &str) -> Vec<Answer> {
    vec![
        Answer::Glucose(glucose),
        Answer::BloodPressure(BloodPressure::Normal),
        Answer::A1c(a1c.into()),
        Answer::Cholesterol("180".into()),
        Answer::Triglycerides("120".into()),
    ]
}

pub(super) fn answer_set(branch: Branch, answers: Vec<Answer>) -> AnswerSet {
    let mut set = AnswerSet::new();
    set.apply(Answer::HasRecords(branch));
    for answer in answers {
        set.apply(answer);
    }
    set
}

pub(super) fn flow_with(branch: Branch, answers: Vec<Answer>) -> AssessmentFlow {
    let mut flow = AssessmentFlow::new();
    flow.record(Answer::HasRecords(branch))
        .expect("fresh flow accepts answers");
    for answer in answers {
        flow.record(answer).expect("fresh flow accepts answers");
    }
    flow
}
