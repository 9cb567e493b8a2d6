//! Export artifact writing.
//!
//! Every artifact is rendered in memory first; files are only written once all
//! renders succeeded, so a failed render never leaves a partial export.
use crate::profile::UserProfile;
use crate::profile_io::render_profile_yaml;
use crate::render::{render_plan_markdown, render_result_json};
use crate::schema::{PlanResult, RecommendationResult};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const PROFILE_EXPORT: &str = "profile.yaml";
pub const PLAN_EXPORT: &str = "plan.md";
pub const RESULT_EXPORT: &str = "result.json";

pub fn write_export_text(output_dir: &Path, rel_path: &str, text: &str) -> Result<PathBuf> {
    let path = output_dir.join(rel_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(&path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Render and write `profile.yaml`, `plan.md`, and `result.json`.
pub fn export_all(
    output_dir: &Path,
    profile: &UserProfile,
    result: &RecommendationResult,
    plan: &PlanResult,
) -> Result<Vec<PathBuf>> {
    let artifacts = [
        (PROFILE_EXPORT, render_profile_yaml(profile)?),
        (PLAN_EXPORT, render_plan_markdown(plan)),
        (RESULT_EXPORT, render_result_json(profile, result, plan)?),
    ];
    let mut written = Vec::with_capacity(artifacts.len());
    for (rel_path, text) in &artifacts {
        written.push(write_export_text(output_dir, rel_path, text)?);
    }
    tracing::info!(
        count = written.len(),
        dir = %output_dir.display(),
        "exports written"
    );
    Ok(written)
}
