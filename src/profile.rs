//! User profile values and explicit edits.
//!
//! A profile is never mutated after construction. Edits such as quick fixes
//! build a new value that the caller hands back through a single update entry
//! point (see [`crate::session::Session::update_profile`]).

use crate::schema::{LanguageLevel, LegalGate, ObjectivePreset};
use crate::util::sha256_hex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_STARTABILITY_WINDOW_WEEKS: u32 = 4;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub hours_per_week: u32,
    pub capital_eur: u32,
    pub language_cefr: LanguageLevel,
    pub assets: Vec<String>,
    pub objective_preset: ObjectivePreset,
    pub startability_window_weeks: u32,
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    pub max_legal_friction: LegalGate,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            hours_per_week: 10,
            capital_eur: 300,
            language_cefr: LanguageLevel::B1,
            assets: vec!["laptop".to_string()],
            objective_preset: ObjectivePreset::FastestMoney,
            startability_window_weeks: DEFAULT_STARTABILITY_WINDOW_WEEKS,
            include_tags: Vec::new(),
            exclude_tags: Vec::new(),
            max_legal_friction: LegalGate::Ok,
        }
    }
}

impl UserProfile {
    pub fn has_asset(&self, asset: &str) -> bool {
        self.assets.iter().any(|owned| owned == asset)
    }

    /// SHA-256 over the canonical JSON form of the profile.
    pub fn fingerprint(&self) -> String {
        // Struct field order is fixed, so serde_json output is canonical.
        let bytes = serde_json::to_vec(self).expect("profile serializes");
        sha256_hex(&bytes)
    }

    /// Return a new profile with one quick fix applied.
    pub fn with_quick_fix(&self, fix: QuickFix) -> UserProfile {
        let mut next = self.clone();
        match fix {
            QuickFix::LowerLegalFriction => next.max_legal_friction = LegalGate::RequireCheck,
            QuickFix::FastestMoney => next.objective_preset = ObjectivePreset::FastestMoney,
            QuickFix::StartableInTwoWeeks => next.startability_window_weeks = 2,
        }
        next
    }

    pub fn with_quick_fixes(&self, fixes: &[QuickFix]) -> UserProfile {
        fixes
            .iter()
            .fold(self.clone(), |profile, fix| profile.with_quick_fix(*fix))
    }
}

/// One-click profile adjustments offered next to the blocker summary.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum QuickFix {
    /// Accept variants that need a legal check.
    LowerLegalFriction,
    /// Rank by time to first money.
    FastestMoney,
    /// Only keep variants startable within two weeks.
    StartableInTwoWeeks,
}

impl QuickFix {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuickFix::LowerLegalFriction => "lower_legal_friction",
            QuickFix::FastestMoney => "fastest_money",
            QuickFix::StartableInTwoWeeks => "startable_in_two_weeks",
        }
    }
}

impl fmt::Display for QuickFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuickFix {
    type Err = crate::schema::UnknownToken;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        [
            QuickFix::LowerLegalFriction,
            QuickFix::FastestMoney,
            QuickFix::StartableInTwoWeeks,
        ]
        .into_iter()
        .find(|fix| fix.as_str() == value)
        .ok_or_else(|| crate::schema::UnknownToken {
            kind: "quick fix",
            value: value.to_string(),
        })
    }
}
