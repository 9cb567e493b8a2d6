//! Built-in variant catalog and dataset metadata.
//!
//! The catalog is a fixed table compiled into the binary. The only external
//! input is an optional data directory probed for a `stale.flag` marker.

use crate::error::{Error, Result};
use crate::schema::{Economics, LegalGate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DATASET_VERSION: &str = "2025-01-01";
pub const RULEPACK_REVIEWED_AT: &str = "2025-02-01";
pub const STALE_FLAG_FILE: &str = "stale.flag";
pub const STALE_WARNING: &str = "stale";

/// Weeks assumed when a variant does not declare `startable_weeks`.
pub const DEFAULT_STARTABLE_WEEKS: u32 = 2;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CatalogMeta {
    pub dataset_version: String,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl CatalogMeta {
    pub fn is_stale(&self) -> bool {
        self.warnings.iter().any(|warning| warning == STALE_WARNING)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RulepackMeta {
    pub reviewed_at: String,
}

/// One income-generating activity a user could pursue.
///
/// Optional fields follow an explicit default policy: `startable_weeks`
/// defaults to [`DEFAULT_STARTABLE_WEEKS`], `legal_gate` to `ok`, and the
/// list fields to empty.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Variant {
    pub variant_id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub startable_weeks: Option<u32>,
    #[serde(default)]
    pub legal_gate: Option<LegalGate>,
    #[serde(default)]
    pub compliance_kits: Vec<String>,
    #[serde(default)]
    pub checklist: Vec<String>,
    #[serde(default)]
    pub economics: Option<Economics>,
}

impl Variant {
    pub fn startable_weeks_or_default(&self) -> u32 {
        self.startable_weeks.unwrap_or(DEFAULT_STARTABLE_WEEKS)
    }

    pub fn legal_gate_or_default(&self) -> LegalGate {
        self.legal_gate.unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CatalogData {
    pub meta: CatalogMeta,
    pub rulepack: RulepackMeta,
    pub variants: Vec<Variant>,
}

impl CatalogData {
    pub fn find_variant(&self, variant_id: &str) -> Option<&Variant> {
        self.variants
            .iter()
            .find(|variant| variant.variant_id == variant_id)
    }
}

/// Load the catalog for `country`.
///
/// `country` does not select a different table yet; every country receives
/// the built-in variants.
pub fn load_catalog(country: &str, data_dir: Option<&Path>) -> Result<CatalogData> {
    tracing::debug!(country, "loading built-in catalog");
    let mut warnings = Vec::new();
    if let Some(dir) = data_dir {
        let flag = dir.join(STALE_FLAG_FILE);
        let exists = flag.try_exists().map_err(|source| Error::Filesystem {
            path: flag.clone(),
            source,
        })?;
        if exists {
            tracing::warn!(path = %flag.display(), "dataset marked stale");
            warnings.push(STALE_WARNING.to_string());
        }
    }
    Ok(CatalogData {
        meta: CatalogMeta {
            dataset_version: DATASET_VERSION.to_string(),
            warnings,
        },
        rulepack: RulepackMeta {
            reviewed_at: RULEPACK_REVIEWED_AT.to_string(),
        },
        variants: builtin_variants(),
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// The fixed variant table.
pub fn builtin_variants() -> Vec<Variant> {
    vec![
        Variant {
            variant_id: "local_deliveries".to_string(),
            title: "Local delivery runs".to_string(),
            tags: strings(&["offline", "fast", "logistics"]),
            startable_weeks: Some(1),
            legal_gate: Some(LegalGate::Ok),
            compliance_kits: strings(&["basic_safety"]),
            checklist: strings(&[
                "Insurance verified",
                "Safety gear ready",
                "Local registration confirmed",
            ]),
            economics: Some(Economics {
                time_to_first_money_range_weeks: vec![1, 2],
                net_range_eur: vec![150, 450],
                confidence: Some("medium".to_string()),
            }),
        },
        Variant {
            variant_id: "marketplace_resale".to_string(),
            title: "Marketplace resale".to_string(),
            tags: strings(&["offline", "inventory", "low_risk"]),
            startable_weeks: Some(2),
            legal_gate: Some(LegalGate::RequireCheck),
            compliance_kits: strings(&["basic_finance"]),
            checklist: strings(&[
                "Track inventory",
                "Tax category checked",
                "Receipts organized",
            ]),
            economics: Some(Economics {
                time_to_first_money_range_weeks: vec![2, 4],
                net_range_eur: vec![200, 700],
                confidence: Some("low".to_string()),
            }),
        },
        Variant {
            variant_id: "weekend_services".to_string(),
            title: "Weekend neighborhood services".to_string(),
            tags: strings(&["fast", "community", "low_risk"]),
            startable_weeks: Some(1),
            legal_gate: Some(LegalGate::Registration),
            compliance_kits: strings(&["basic_safety", "basic_finance"]),
            checklist: strings(&[
                "Service scope written",
                "Local permits checked",
                "Pricing sheet ready",
            ]),
            economics: None,
        },
    ]
}
