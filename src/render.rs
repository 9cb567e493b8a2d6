//! Deterministic renderers for plans and recommendation results.

use crate::profile::UserProfile;
use crate::schema::{PlanResult, RecommendationResult};
use anyhow::{Context, Result};
use serde::Serialize;

/// Render a plan as markdown.
pub fn render_plan_markdown(plan: &PlanResult) -> String {
    let mut lines = vec![format!("# Plan: {}", plan.title), String::new()];
    lines.push("## Steps".to_string());
    for step in &plan.steps {
        lines.push(format!("- **{}**: {}", step.title, step.details));
    }
    lines.push(String::new());
    lines.push("## 4-Week View".to_string());
    for (week, items) in &plan.week_view {
        lines.push(format!("### {week}"));
        lines.extend(items.iter().map(|item| format!("- {item}")));
    }
    lines.push(String::new());
    lines.push("## Outputs".to_string());
    lines.extend(plan.outputs.iter().map(|output| format!("- {output}")));
    lines.push(String::new());
    lines.push("## Checkpoints".to_string());
    lines.extend(
        plan.checkpoints
            .iter()
            .map(|checkpoint| format!("- {checkpoint}")),
    );
    lines.push(String::new());
    lines.push("## Compliance".to_string());
    let gate_label = if plan.legal_checklist.is_empty() {
        "ok"
    } else {
        "requires review"
    };
    lines.push(format!("- Legal gate: {gate_label}"));
    if !plan.legal_checklist.is_empty() {
        lines.push("- Legal checklist:".to_string());
        lines.extend(plan.legal_checklist.iter().map(|item| format!("  - {item}")));
    }
    lines.push("- Compliance kits:".to_string());
    for (kit, outputs) in &plan.compliance_kits {
        lines.push(format!("  - {kit}:"));
        lines.extend(outputs.iter().map(|output| format!("    - {output}")));
    }
    lines.join("\n")
}

#[derive(Serialize)]
struct ResultExport<'a> {
    profile: &'a UserProfile,
    recommendations: RecommendationsExport<'a>,
    plan: &'a PlanResult,
}

#[derive(Serialize)]
struct RecommendationsExport<'a> {
    objective: &'a str,
    filters: &'a crate::schema::AppliedFilters,
    applied_rules: &'a [String],
    selected_variant_id: &'a str,
}

/// Render the combined profile + recommendation + plan export as pretty JSON.
pub fn render_result_json(
    profile: &UserProfile,
    result: &RecommendationResult,
    plan: &PlanResult,
) -> Result<String> {
    let export = ResultExport {
        profile,
        recommendations: RecommendationsExport {
            objective: result.objective.as_str(),
            filters: &result.filters,
            applied_rules: &result.applied_rules,
            selected_variant_id: &plan.variant_id,
        },
        plan,
    };
    serde_json::to_string_pretty(&export).context("serialize result JSON")
}

/// One line per recommendation, numbered from 1, capped at `top`.
pub fn recommendation_lines(result: &RecommendationResult, top: usize) -> Vec<String> {
    result
        .recommendations
        .iter()
        .take(top)
        .enumerate()
        .map(|(index, rec)| {
            format!(
                "{}. {}: {} (legal={}, feasibility={})",
                index + 1,
                rec.variant_id,
                rec.title,
                rec.legal.gate,
                rec.feasibility.status
            )
        })
        .collect()
}
