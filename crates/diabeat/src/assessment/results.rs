use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_SCORE: u8 = 100;

const MODERATE_THRESHOLD: u8 = 30;
const HIGH_THRESHOLD: u8 = 60;

const HIGH_RISK_ADVICE: [&str; 3] = [
    "Consult with a healthcare provider for professional evaluation",
    "Consider getting blood glucose testing done",
    "Implement immediate lifestyle changes",
];

const MODERATE_RISK_ADVICE: [&str; 3] = [
    "Increase physical activity to at least 150 minutes per week",
    "Focus on a balanced diet with reduced sugar intake",
    "Monitor your weight and aim for a healthy BMI",
];

const BASELINE_ADVICE: [&str; 3] = [
    "Maintain regular sleep schedule (7-9 hours per night)",
    "Stay hydrated and limit processed foods",
    "Consider stress management techniques",
];

pub const DISCLAIMER: &str = "This assessment is for informational purposes only and should not replace professional medical advice. Please consult with a healthcare provider for proper diagnosis and treatment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("risk score {0} is outside 0..=100")]
pub struct ScoreRangeError(pub u16);

/// Final assessment score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u8")]
pub struct RiskScore(u8);

impl RiskScore {
    pub fn new(value: u16) -> Result<Self, ScoreRangeError> {
        if value > u16::from(MAX_SCORE) {
            return Err(ScoreRangeError(value));
        }
        Ok(Self(value as u8))
    }

    /// Caps a raw factor total; anything above 100 is discarded, not rescaled.
    pub fn saturating(raw: u16) -> Self {
        Self(raw.min(u16::from(MAX_SCORE)) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u16> for RiskScore {
    type Error = ScoreRangeError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RiskScore> for u8 {
    fn from(score: RiskScore) -> Self {
        score.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskTier::Low => "Your diabetes risk appears to be low.",
            RiskTier::Moderate => "You may have a moderate risk for diabetes.",
            RiskTier::High => "You may be at higher risk for diabetes.",
        }
    }

    /// Gauge colour used by the results card.
    pub fn color(self) -> &'static str {
        match self {
            RiskTier::Low => "green",
            RiskTier::Moderate => "yellow",
            RiskTier::High => "red",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify(score: RiskScore) -> RiskTier {
    match score.value() {
        value if value < MODERATE_THRESHOLD => RiskTier::Low,
        value if value < HIGH_THRESHOLD => RiskTier::Moderate,
        _ => RiskTier::High,
    }
}

/// Advice for a score: high-risk items, then moderate-risk items, then the baseline.
pub fn recommend(score: RiskScore) -> Vec<&'static str> {
    let mut recommendations = Vec::with_capacity(9);

    if score.value() >= HIGH_THRESHOLD {
        recommendations.extend(HIGH_RISK_ADVICE);
    }

    if score.value() >= MODERATE_THRESHOLD {
        recommendations.extend(MODERATE_RISK_ADVICE);
    }

    recommendations.extend(BASELINE_ADVICE);
    recommendations
}

/// Everything the results view shows, rebuilt from the score alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskResult {
    pub score: RiskScore,
    pub tier: RiskTier,
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub recommendations: Vec<&'static str>,
    pub disclaimer: &'static str,
}

impl RiskResult {
    pub fn from_score(score: RiskScore) -> Self {
        let tier = classify(score);
        Self {
            score,
            tier,
            label: tier.label(),
            description: tier.description(),
            color: tier.color(),
            recommendations: recommend(score),
            disclaimer: DISCLAIMER,
        }
    }
}
