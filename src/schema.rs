//! Schema types shared by the evaluators, the engine, and the renderers.
//!
//! Every enum here carries a stable string token used in YAML/JSON artifacts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Legal-friction tier of a variant, ordered by regulatory overhead.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LegalGate {
    #[default]
    Ok,
    RequireCheck,
    Registration,
    License,
}

impl LegalGate {
    pub const ALL: [LegalGate; 4] = [
        LegalGate::Ok,
        LegalGate::RequireCheck,
        LegalGate::Registration,
        LegalGate::License,
    ];

    /// Return the stable string identifier used in artifacts.
    pub fn as_str(&self) -> &'static str {
        match self {
            LegalGate::Ok => "ok",
            LegalGate::RequireCheck => "require_check",
            LegalGate::Registration => "registration",
            LegalGate::License => "license",
        }
    }

    /// Rank used by the max-friction filter: ok(0) < require_check(1) <
    /// registration(2) < license(3).
    pub fn ordinal(&self) -> u8 {
        match self {
            LegalGate::Ok => 0,
            LegalGate::RequireCheck => 1,
            LegalGate::Registration => 2,
            LegalGate::License => 3,
        }
    }

    /// True when a variant with this gate fits under `max`.
    pub fn allowed_under(&self, max: LegalGate) -> bool {
        self.ordinal() <= max.ordinal()
    }
}

impl fmt::Display for LegalGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegalGate {
    type Err = UnknownToken;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        LegalGate::ALL
            .into_iter()
            .find(|gate| gate.as_str() == value)
            .ok_or_else(|| UnknownToken::new("legal gate", value))
    }
}

/// User-chosen ranking priority.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ObjectivePreset {
    #[default]
    FastestMoney,
    LowestRisk,
    MaxIncome,
    /// Offered to users but has no dedicated ordering; catalog order is kept.
    LowLegalFriction,
}

impl ObjectivePreset {
    pub const ALL: [ObjectivePreset; 4] = [
        ObjectivePreset::FastestMoney,
        ObjectivePreset::LowestRisk,
        ObjectivePreset::MaxIncome,
        ObjectivePreset::LowLegalFriction,
    ];

    /// Return the stable string identifier used in artifacts.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectivePreset::FastestMoney => "fastest_money",
            ObjectivePreset::LowestRisk => "lowest_risk",
            ObjectivePreset::MaxIncome => "max_income",
            ObjectivePreset::LowLegalFriction => "low_legal_friction",
        }
    }
}

impl fmt::Display for ObjectivePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectivePreset {
    type Err = UnknownToken;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ObjectivePreset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == value)
            .ok_or_else(|| UnknownToken::new("objective preset", value))
    }
}

/// CEFR proficiency in the local language.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageLevel {
    #[default]
    Unknown,
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl LanguageLevel {
    pub const ALL: [LanguageLevel; 7] = [
        LanguageLevel::Unknown,
        LanguageLevel::A1,
        LanguageLevel::A2,
        LanguageLevel::B1,
        LanguageLevel::B2,
        LanguageLevel::C1,
        LanguageLevel::C2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageLevel::Unknown => "Unknown",
            LanguageLevel::A1 => "A1",
            LanguageLevel::A2 => "A2",
            LanguageLevel::B1 => "B1",
            LanguageLevel::B2 => "B2",
            LanguageLevel::C1 => "C1",
            LanguageLevel::C2 => "C2",
        }
    }

    /// Beginner tiers count as a feasibility blocker.
    pub fn is_beginner(&self) -> bool {
        matches!(self, LanguageLevel::A1 | LanguageLevel::A2)
    }
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageLevel {
    type Err = UnknownToken;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        LanguageLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == value)
            .ok_or_else(|| UnknownToken::new("language level", value))
    }
}

/// A string token that did not match any known enum value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?}")]
pub struct UnknownToken {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownToken {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Whether a profile currently meets a variant's baseline requirements.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeasibilityStatus {
    Ready,
    Blocked,
}

impl FeasibilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeasibilityStatus::Ready => "ready",
            FeasibilityStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for FeasibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Feasibility {
    pub status: FeasibilityStatus,
    /// At most three reasons, in evaluation order.
    pub blockers: Vec<String>,
    /// Always at least one.
    pub prep_weeks: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Legal {
    pub gate: LegalGate,
    pub checklist: Vec<String>,
    pub compliance_kits: Vec<String>,
    pub stale_warning: Option<String>,
}

/// Earnings snapshot attached to a variant.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct Economics {
    #[serde(default)]
    pub time_to_first_money_range_weeks: Vec<u32>,
    #[serde(default)]
    pub net_range_eur: Vec<i64>,
    #[serde(default)]
    pub confidence: Option<String>,
}

impl Economics {
    pub fn is_empty(&self) -> bool {
        self.time_to_first_money_range_weeks.is_empty()
            && self.net_range_eur.is_empty()
            && self.confidence.is_none()
    }

    /// Upper end of the net range, 0 when the range is empty.
    pub fn net_upper_eur(&self) -> i64 {
        self.net_range_eur.last().copied().unwrap_or(0)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub variant_id: String,
    pub title: String,
    pub feasibility: Feasibility,
    pub legal: Legal,
    pub economics: Option<Economics>,
    pub reasons_for: Vec<String>,
    pub reasons_against: Vec<String>,
}

/// Filter parameters recorded alongside a recommendation run.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AppliedFilters {
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    pub startability_window_weeks: u32,
    pub max_legal_friction: LegalGate,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RecommendationResult {
    pub objective: ObjectivePreset,
    pub filters: AppliedFilters,
    pub recommendations: Vec<Recommendation>,
    pub applied_rules: Vec<String>,
}

impl RecommendationResult {
    /// Ordered variant ids, the comparison key for determinism checks.
    pub fn variant_ids(&self) -> Vec<&str> {
        self.recommendations
            .iter()
            .map(|rec| rec.variant_id.as_str())
            .collect()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PlanStep {
    pub title: String,
    pub details: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PlanResult {
    pub variant_id: String,
    pub title: String,
    pub steps: Vec<PlanStep>,
    /// Keyed by "Week N"; single-digit weeks keep lexical order.
    pub week_view: BTreeMap<String, Vec<String>>,
    pub outputs: Vec<String>,
    pub checkpoints: Vec<String>,
    pub compliance_kits: BTreeMap<String, Vec<String>>,
    pub legal_checklist: Vec<String>,
}

impl PlanResult {
    /// Steps plus every week item.
    pub fn action_count(&self) -> usize {
        self.steps.len() + self.week_view.values().map(Vec::len).sum::<usize>()
    }
}
