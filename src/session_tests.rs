use super::*;
use crate::catalog::load_catalog;
use crate::error::Error;
use crate::schema::{LegalGate, ObjectivePreset};

fn catalog() -> CatalogData {
    load_catalog("DE", None).expect("load catalog")
}

#[test]
fn new_session_starts_with_draft_profile() {
    let session = Session::new("DE");
    assert_eq!(session.country(), "DE");
    assert!(!session.profile_ready());
    assert!(session.recommendation().is_none());
    assert!(session.cache().is_empty());
}

#[test]
fn session_loads_catalog_for_its_country() {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(dir.path().join("stale.flag"), "").unwrap();
    let session = Session::new("AT");

    assert_eq!(session.load_catalog(None).unwrap(), catalog());
    assert!(session.load_catalog(Some(dir.path())).unwrap().meta.is_stale());
}

#[test]
fn update_profile_clears_derived_state() {
    let catalog = catalog();
    let mut session = Session::new("DE");
    session.update_profile(UserProfile::default());
    session.recommend(&catalog);
    session.plan(&catalog, "local_deliveries").unwrap();
    assert_eq!(session.selected_variant_id(), Some("local_deliveries"));

    let next = UserProfile {
        objective_preset: ObjectivePreset::MaxIncome,
        ..session.profile().clone()
    };
    session.update_profile(next);
    assert!(session.profile_ready());
    assert!(session.selected_variant_id().is_none());
    assert!(session.recommendation().is_none());
    assert!(session.plan_result().is_none());
    assert!(session.cache().is_empty());
}

#[test]
fn repeated_recommend_hits_cache() {
    let catalog = catalog();
    let mut session = Session::new("DE");
    session.update_profile(UserProfile::default());
    let first = session.recommend(&catalog).clone();
    assert_eq!(session.cache().len(), 1);
    let second = session.recommend(&catalog).clone();
    assert_eq!(first, second);
    assert_eq!(session.cache().len(), 1);
}

#[test]
fn quick_fix_replaces_profile_and_changes_results() {
    let catalog = catalog();
    let mut session = Session::new("DE");
    session.update_profile(UserProfile::default());
    assert_eq!(session.recommend(&catalog).recommendations.len(), 1);

    let before = session.profile().clone();
    session.apply_quick_fixes(&[QuickFix::LowerLegalFriction]);
    assert_eq!(before.max_legal_friction, LegalGate::Ok);
    assert_eq!(session.profile().max_legal_friction, LegalGate::RequireCheck);
    assert!(session.recommendation().is_none());
    assert_eq!(session.recommend(&catalog).recommendations.len(), 2);
}

#[test]
fn empty_quick_fix_list_keeps_state() {
    let catalog = catalog();
    let mut session = Session::new("DE");
    session.update_profile(UserProfile::default());
    session.recommend(&catalog);
    session.apply_quick_fixes(&[]);
    assert!(session.recommendation().is_some());
}

#[test]
fn dataset_change_drops_old_entries() {
    let catalog = catalog();
    let mut session = Session::new("DE");
    session.update_profile(UserProfile::default());
    session.recommend(&catalog);
    session.plan(&catalog, "local_deliveries").unwrap();
    assert_eq!(session.cache().len(), 2);

    let mut newer = catalog.clone();
    newer.meta.dataset_version = "2025-06-01".to_string();
    session.recommend(&newer);
    assert_eq!(session.cache().len(), 1);
}

#[test]
fn unknown_plan_keeps_previous_selection() {
    let catalog = catalog();
    let mut session = Session::new("DE");
    session.update_profile(UserProfile::default());
    session.select_variant("local_deliveries");
    let err = session.plan(&catalog, "nope").unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(session.selected_variant_id(), Some("local_deliveries"));
    assert!(session.plan_result().is_none());
}

#[test]
fn cache_key_separates_plans_by_variant() {
    let catalog = catalog();
    let profile = UserProfile::default();
    let run = CacheKey::new(&profile, &catalog, None);
    let plan = CacheKey::new(&profile, &catalog, Some("local_deliveries"));
    assert_ne!(run, plan);
    assert_eq!(run.dataset_version, "2025-01-01");
}
