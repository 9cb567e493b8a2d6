use super::*;
use crate::catalog::load_catalog;
use crate::schema::{Economics, FeasibilityStatus, LanguageLevel, LegalGate};

fn profile(objective: ObjectivePreset, max_gate: LegalGate) -> UserProfile {
    UserProfile {
        hours_per_week: 15,
        capital_eur: 200,
        language_cefr: LanguageLevel::B2,
        assets: vec!["laptop".to_string()],
        objective_preset: objective,
        startability_window_weeks: 4,
        include_tags: Vec::new(),
        exclude_tags: Vec::new(),
        max_legal_friction: max_gate,
    }
}

fn catalog() -> CatalogData {
    load_catalog("DE", None).expect("load catalog")
}

#[test]
fn fastest_money_ranks_local_deliveries_first() {
    let result = recommend(
        &profile(ObjectivePreset::FastestMoney, LegalGate::Ok),
        &catalog(),
    );
    assert_eq!(result.variant_ids(), vec!["local_deliveries"]);
    assert_eq!(result.applied_rules, vec!["objective_sort".to_string()]);
}

#[test]
fn max_income_ranks_marketplace_resale_first() {
    let result = recommend(
        &profile(ObjectivePreset::MaxIncome, LegalGate::Registration),
        &catalog(),
    );
    assert_eq!(
        result.variant_ids(),
        vec!["marketplace_resale", "local_deliveries", "weekend_services"]
    );
    assert!(result.recommendations[2].economics.is_none());
}

#[test]
fn fastest_money_sort_is_stable_for_equal_prep_weeks() {
    let result = recommend(
        &profile(ObjectivePreset::FastestMoney, LegalGate::License),
        &catalog(),
    );
    assert_eq!(
        result.variant_ids(),
        vec!["local_deliveries", "weekend_services", "marketplace_resale"]
    );
}

#[test]
fn lowest_risk_sorts_gate_tokens_lexicographically() {
    let result = recommend(
        &profile(ObjectivePreset::LowestRisk, LegalGate::License),
        &catalog(),
    );
    // "ok" < "registration" < "require_check" as strings.
    assert_eq!(
        result.variant_ids(),
        vec!["local_deliveries", "weekend_services", "marketplace_resale"]
    );
}

#[test]
fn low_legal_friction_keeps_catalog_order() {
    let result = recommend(
        &profile(ObjectivePreset::LowLegalFriction, LegalGate::License),
        &catalog(),
    );
    assert_eq!(
        result.variant_ids(),
        vec!["local_deliveries", "marketplace_resale", "weekend_services"]
    );
}

#[test]
fn legal_gate_filter_respects_max() {
    for max_gate in LegalGate::ALL {
        let result = recommend(&profile(ObjectivePreset::FastestMoney, max_gate), &catalog());
        assert!(result
            .recommendations
            .iter()
            .all(|rec| rec.legal.gate.ordinal() <= max_gate.ordinal()));
    }
}

#[test]
fn startability_window_is_inclusive() {
    let mut narrow = profile(ObjectivePreset::FastestMoney, LegalGate::License);
    narrow.startability_window_weeks = 1;
    let result = recommend(&narrow, &catalog());
    assert_eq!(
        result.variant_ids(),
        vec!["local_deliveries", "weekend_services"]
    );
}

#[test]
fn include_and_exclude_tags_filter() {
    let mut include = profile(ObjectivePreset::LowLegalFriction, LegalGate::License);
    include.include_tags = vec!["community".to_string(), "inventory".to_string()];
    assert_eq!(
        recommend(&include, &catalog()).variant_ids(),
        vec!["marketplace_resale", "weekend_services"]
    );

    let mut exclude = profile(ObjectivePreset::LowLegalFriction, LegalGate::License);
    exclude.exclude_tags = vec!["offline".to_string()];
    assert_eq!(
        recommend(&exclude, &catalog()).variant_ids(),
        vec!["weekend_services"]
    );
}

#[test]
fn impossible_filters_yield_empty_result() {
    let mut picky = profile(ObjectivePreset::MaxIncome, LegalGate::License);
    picky.include_tags = vec!["does_not_exist".to_string()];
    let result = recommend(&picky, &catalog());
    assert!(result.recommendations.is_empty());
    assert_eq!(result.filters.include_tags, picky.include_tags);
}

#[test]
fn check_variant_reports_first_failing_rule() {
    let catalog = catalog();
    let weekend = catalog.find_variant("weekend_services").unwrap();
    let mut strict = profile(ObjectivePreset::FastestMoney, LegalGate::Ok);
    strict.exclude_tags = vec!["fast".to_string()];
    assert_eq!(
        check_variant(&strict, weekend),
        Err(Rejection::HasExcludedTag)
    );
    strict.exclude_tags.clear();
    assert_eq!(
        check_variant(&strict, weekend),
        Err(Rejection::LegalGateTooHigh)
    );
}

#[test]
fn recommendations_carry_static_reasons_and_evaluations() {
    let result = recommend(
        &profile(ObjectivePreset::FastestMoney, LegalGate::Ok),
        &catalog(),
    );
    let rec = &result.recommendations[0];
    assert_eq!(rec.reasons_for.len(), 3);
    assert_eq!(rec.reasons_against, vec!["Requires consistent weekly effort"]);
    assert_eq!(rec.feasibility.status, FeasibilityStatus::Ready);
    assert_eq!(rec.legal.gate, LegalGate::Ok);
    assert_eq!(
        rec.economics.as_ref().map(Economics::net_upper_eur),
        Some(450)
    );
}

#[test]
fn recommend_is_deterministic() {
    let profile = profile(ObjectivePreset::MaxIncome, LegalGate::License);
    let catalog = catalog();
    assert_eq!(recommend(&profile, &catalog), recommend(&profile, &catalog));
}

#[test]
fn top_blockers_counts_across_catalog() {
    let blocked = UserProfile {
        hours_per_week: 2,
        capital_eur: 50,
        language_cefr: LanguageLevel::B2,
        assets: Vec::new(),
        ..UserProfile::default()
    };
    let blockers = top_blockers(&blocked, &catalog(), 3);
    assert_eq!(
        blockers,
        vec![
            "Low weekly hours".to_string(),
            "Low starting capital".to_string(),
            "No laptop available".to_string(),
        ]
    );
    assert_eq!(top_blockers(&blocked, &catalog(), 1).len(), 1);
    assert!(top_blockers(&UserProfile::default(), &catalog(), 3).is_empty());
}
