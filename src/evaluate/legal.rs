use crate::catalog::{CatalogData, Variant};
use crate::profile::UserProfile;
use crate::schema::Legal;

pub const STALE_DATASET_NOTE: &str = "Dataset may be stale";

/// Derive the legal view of a variant.
///
/// The profile does not influence the result today; it is accepted so the
/// signature stays stable once profile-specific rules exist.
pub fn evaluate_legal(_profile: &UserProfile, variant: &Variant, catalog: &CatalogData) -> Legal {
    Legal {
        gate: variant.legal_gate_or_default(),
        checklist: variant.checklist.clone(),
        compliance_kits: variant.compliance_kits.clone(),
        stale_warning: catalog
            .meta
            .is_stale()
            .then(|| STALE_DATASET_NOTE.to_string()),
    }
}
