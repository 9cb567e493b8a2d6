//! Catalog metadata validation.
//!
//! Rules run independently and every triggered rule contributes an issue; the
//! report is data, never an error. Callers decide whether FATAL issues halt.

use crate::catalog::CatalogData;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MISSING_DATASET_VERSION: &str = "MISSING_DATASET_VERSION";
pub const STALE: &str = "STALE";

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Fatal,
    Warn,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Warn => "WARN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationSummary {
    Ok,
    Invalid,
}

impl ValidationSummary {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationSummary::Ok => "OK",
            ValidationSummary::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for ValidationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: String,
    /// Dotted path of the offending metadata field.
    #[serde(rename = "where")]
    pub location: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub summary: ValidationSummary,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn has_fatal(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == Severity::Fatal)
    }

    pub fn has_stale(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == Severity::Warn && issue.code == STALE)
    }
}

/// Overall dataset state: FATAL issues win over staleness.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataStatus {
    Valid,
    Stale,
    Invalid,
}

impl DataStatus {
    pub fn from_report(report: &ValidationReport) -> Self {
        if report.has_fatal() {
            DataStatus::Invalid
        } else if report.has_stale() {
            DataStatus::Stale
        } else {
            DataStatus::Valid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataStatus::Valid => "valid",
            DataStatus::Stale => "stale",
            DataStatus::Invalid => "invalid",
        }
    }
}

impl fmt::Display for DataStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dataset provenance next to its validation report.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CatalogStatus {
    pub state: DataStatus,
    pub dataset_version: String,
    pub reviewed_at: String,
    pub warnings: Vec<String>,
    #[serde(flatten)]
    pub report: ValidationReport,
}

pub fn catalog_status(catalog: &CatalogData) -> CatalogStatus {
    let report = validate_catalog(catalog);
    CatalogStatus {
        state: DataStatus::from_report(&report),
        dataset_version: catalog.meta.dataset_version.clone(),
        reviewed_at: catalog.rulepack.reviewed_at.clone(),
        warnings: catalog.meta.warnings.clone(),
        report,
    }
}

/// Inspect catalog metadata and report every triggered rule.
pub fn validate_catalog(catalog: &CatalogData) -> ValidationReport {
    let mut issues = Vec::new();
    if catalog.meta.dataset_version.is_empty() {
        issues.push(ValidationIssue {
            severity: Severity::Fatal,
            code: MISSING_DATASET_VERSION.to_string(),
            location: "meta.dataset_version".to_string(),
            message: "Dataset version is missing.".to_string(),
        });
    }
    if catalog.meta.is_stale() {
        issues.push(ValidationIssue {
            severity: Severity::Warn,
            code: STALE.to_string(),
            location: "meta.warnings".to_string(),
            message: "Dataset may be out of date.".to_string(),
        });
    }
    let summary = if issues.iter().any(|issue| issue.severity == Severity::Fatal) {
        ValidationSummary::Invalid
    } else {
        ValidationSummary::Ok
    };
    tracing::debug!(summary = %summary, issues = issues.len(), "catalog validated");
    ValidationReport { summary, issues }
}
