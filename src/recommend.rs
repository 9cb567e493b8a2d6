//! Recommendation engine: filter the catalog by profile constraints, evaluate
//! the survivors, and order them by the profile's objective.
//!
//! # Pipeline
//!
//! ```text
//! catalog variants
//!   -> startability window   (profile window >= variant requirement)
//!   -> include tags          (must intersect when non-empty)
//!   -> exclude tags          (must not intersect when non-empty)
//!   -> legal gate            (variant ordinal <= profile max ordinal)
//!   -> feasibility + legal + economics
//!   -> objective sort        (stable)
//! ```
//!
//! An empty result is a valid outcome, not an error.

use crate::catalog::{CatalogData, Variant};
use crate::evaluate::{evaluate_economics, evaluate_feasibility, evaluate_legal};
use crate::profile::UserProfile;
use crate::schema::{AppliedFilters, ObjectivePreset, Recommendation, RecommendationResult};
use std::cmp::Reverse;

pub const OBJECTIVE_SORT_RULE: &str = "objective_sort";

const REASONS_FOR: &[&str] = &[
    "Clear local demand",
    "Quick setup",
    "Fits offline-first constraints",
];
const REASONS_AGAINST: &[&str] = &["Requires consistent weekly effort"];

/// Why a variant was dropped before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutsideStartabilityWindow,
    MissingIncludedTag,
    HasExcludedTag,
    LegalGateTooHigh,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::OutsideStartabilityWindow => "outside_startability_window",
            Rejection::MissingIncludedTag => "missing_included_tag",
            Rejection::HasExcludedTag => "has_excluded_tag",
            Rejection::LegalGateTooHigh => "legal_gate_too_high",
        }
    }
}

/// Apply the four filter rules in order; the first failing rule wins.
pub fn check_variant(profile: &UserProfile, variant: &Variant) -> Result<(), Rejection> {
    if profile.startability_window_weeks < variant.startable_weeks_or_default() {
        return Err(Rejection::OutsideStartabilityWindow);
    }
    if !profile.include_tags.is_empty()
        && !profile.include_tags.iter().any(|tag| variant.has_tag(tag))
    {
        return Err(Rejection::MissingIncludedTag);
    }
    if !profile.exclude_tags.is_empty()
        && profile.exclude_tags.iter().any(|tag| variant.has_tag(tag))
    {
        return Err(Rejection::HasExcludedTag);
    }
    if !variant
        .legal_gate_or_default()
        .allowed_under(profile.max_legal_friction)
    {
        return Err(Rejection::LegalGateTooHigh);
    }
    Ok(())
}

/// Run one recommendation pass over the catalog.
pub fn recommend(profile: &UserProfile, catalog: &CatalogData) -> RecommendationResult {
    let filters = AppliedFilters {
        include_tags: profile.include_tags.clone(),
        exclude_tags: profile.exclude_tags.clone(),
        startability_window_weeks: profile.startability_window_weeks,
        max_legal_friction: profile.max_legal_friction,
    };
    let mut recommendations = Vec::new();
    for variant in &catalog.variants {
        if let Err(rejection) = check_variant(profile, variant) {
            tracing::debug!(
                variant_id = %variant.variant_id,
                reason = rejection.as_str(),
                "variant filtered out"
            );
            continue;
        }
        recommendations.push(Recommendation {
            variant_id: variant.variant_id.clone(),
            title: variant.title.clone(),
            feasibility: evaluate_feasibility(profile, variant),
            legal: evaluate_legal(profile, variant, catalog),
            economics: evaluate_economics(variant),
            reasons_for: REASONS_FOR.iter().map(|r| r.to_string()).collect(),
            reasons_against: REASONS_AGAINST.iter().map(|r| r.to_string()).collect(),
        });
    }
    sort_recommendations(profile.objective_preset, &mut recommendations);
    tracing::debug!(
        objective = %profile.objective_preset,
        kept = recommendations.len(),
        catalog = catalog.variants.len(),
        "recommendation pass complete"
    );
    RecommendationResult {
        objective: profile.objective_preset,
        filters,
        recommendations,
        applied_rules: vec![OBJECTIVE_SORT_RULE.to_string()],
    }
}

/// Order recommendations for an objective. All sorts are stable.
///
/// `lowest_risk` compares the raw gate tokens as strings, not the gate
/// ordinals, so "license" sorts before "ok". Existing exports depend on this
/// order.
pub fn sort_recommendations(objective: ObjectivePreset, recommendations: &mut [Recommendation]) {
    match objective {
        ObjectivePreset::FastestMoney => {
            recommendations.sort_by_key(|rec| rec.feasibility.prep_weeks);
        }
        ObjectivePreset::LowestRisk => {
            recommendations.sort_by_key(|rec| rec.legal.gate.as_str());
        }
        ObjectivePreset::MaxIncome => {
            recommendations.sort_by_key(|rec| Reverse(net_value(rec)));
        }
        ObjectivePreset::LowLegalFriction => {}
    }
}

fn net_value(recommendation: &Recommendation) -> i64 {
    recommendation
        .economics
        .as_ref()
        .map(|economics| economics.net_upper_eur())
        .unwrap_or(0)
}

/// Most frequent feasibility blockers across the whole catalog.
///
/// Counts every variant, not just those that survive filtering. Ties keep the
/// order in which a blocker was first seen.
pub fn top_blockers(profile: &UserProfile, catalog: &CatalogData, limit: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for variant in &catalog.variants {
        for blocker in evaluate_feasibility(profile, variant).blockers {
            match counts.iter_mut().find(|(seen, _)| *seen == blocker) {
                Some((_, count)) => *count += 1,
                None => counts.push((blocker, 1)),
            }
        }
    }
    counts.sort_by_key(|(_, count)| Reverse(*count));
    counts
        .into_iter()
        .take(limit)
        .map(|(blocker, _)| blocker)
        .collect()
}

#[cfg(test)]
#[path = "recommend_tests.rs"]
mod tests;
