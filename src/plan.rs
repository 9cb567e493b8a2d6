//! Plan synthesis for a chosen variant.
//!
//! The plan has a fixed shape: three steps, a four-week checklist, outputs and
//! checkpoints. Only the title and the legal checklist come from the variant.
//! The compliance-kit section lists every known kit rather than the kits the
//! variant declares.

use crate::catalog::CatalogData;
use crate::error::{Error, Result};
use crate::profile::UserProfile;
use crate::schema::{PlanResult, PlanStep};
use std::collections::BTreeMap;

const STEPS: &[(&str, &str)] = &[
    ("Prepare", "Confirm assets, time slots, and quick checklist."),
    ("Launch", "Run the first small batch of tasks."),
    ("Optimize", "Review metrics and adjust workflow."),
];

const WEEK_VIEW: &[(&str, &[&str])] = &[
    ("Week 1", &["Collect materials", "Confirm legal checklist"]),
    ("Week 2", &["First execution", "Gather feedback"]),
    ("Week 3", &["Refine pricing", "Increase outreach"]),
    ("Week 4", &["Stabilize routine", "Document outcomes"]),
];

const OUTPUTS: &[&str] = &[
    "Checklist completed",
    "First revenue logged",
    "Weekly summary",
];

const CHECKPOINTS: &[&str] = &["Week 1 review", "Week 2 review", "Week 4 retrospective"];

/// Compliance kit id to the outputs that prove the kit is in place.
pub const COMPLIANCE_KIT_OUTPUTS: &[(&str, &[&str])] = &[
    (
        "basic_safety",
        &["Safety checklist signed", "Emergency contacts saved"],
    ),
    (
        "basic_finance",
        &["Receipt tracker updated", "Tax category verified"],
    ),
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Build the action plan for `variant_id`.
///
/// The profile does not shape the plan body yet; every caller receives the
/// same structure for a given variant.
pub fn build_plan(
    _profile: &UserProfile,
    catalog: &CatalogData,
    variant_id: &str,
) -> Result<PlanResult> {
    let variant = catalog
        .find_variant(variant_id)
        .ok_or_else(|| Error::NotFound {
            variant_id: variant_id.to_string(),
        })?;
    let steps = STEPS
        .iter()
        .map(|(title, details)| PlanStep {
            title: title.to_string(),
            details: details.to_string(),
        })
        .collect();
    let week_view: BTreeMap<String, Vec<String>> = WEEK_VIEW
        .iter()
        .map(|(week, items)| (week.to_string(), owned(items)))
        .collect();
    let compliance_kits: BTreeMap<String, Vec<String>> = COMPLIANCE_KIT_OUTPUTS
        .iter()
        .map(|(kit, outputs)| (kit.to_string(), owned(outputs)))
        .collect();
    tracing::debug!(variant_id, "plan built");
    Ok(PlanResult {
        variant_id: variant.variant_id.clone(),
        title: variant.title.clone(),
        steps,
        week_view,
        outputs: owned(OUTPUTS),
        checkpoints: owned(CHECKPOINTS),
        compliance_kits,
        legal_checklist: variant.checklist.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load_catalog;

    #[test]
    fn plan_meets_actionability_floor_for_every_variant() {
        let catalog = load_catalog("DE", None).unwrap();
        for variant in &catalog.variants {
            let plan = build_plan(&UserProfile::default(), &catalog, &variant.variant_id).unwrap();
            assert_eq!(plan.title, variant.title);
            assert!(plan.action_count() >= 10);
            assert!(plan.outputs.len() >= 3);
            assert_eq!(plan.legal_checklist, variant.checklist);
        }
    }

    #[test]
    fn plan_has_fixed_shape() {
        let catalog = load_catalog("DE", None).unwrap();
        let plan = build_plan(&UserProfile::default(), &catalog, "local_deliveries").unwrap();
        let titles: Vec<&str> = plan.steps.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Prepare", "Launch", "Optimize"]);
        let weeks: Vec<&String> = plan.week_view.keys().collect();
        assert_eq!(weeks, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);
        assert_eq!(plan.checkpoints.len(), 3);
    }

    #[test]
    fn compliance_section_is_not_filtered_by_declared_kits() {
        let catalog = load_catalog("DE", None).unwrap();
        // local_deliveries only declares basic_safety.
        let plan = build_plan(&UserProfile::default(), &catalog, "local_deliveries").unwrap();
        assert!(plan.compliance_kits.contains_key("basic_safety"));
        assert!(plan.compliance_kits.contains_key("basic_finance"));
    }

    #[test]
    fn unknown_variant_is_not_found() {
        let catalog = load_catalog("DE", None).unwrap();
        let err = build_plan(&UserProfile::default(), &catalog, "moon_mining").unwrap_err();
        assert!(matches!(err, Error::NotFound { ref variant_id } if variant_id == "moon_mining"));
        assert_eq!(err.to_string(), "selected variant not found: moon_mining");
    }
}
