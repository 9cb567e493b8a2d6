use crate::cli::{ExportAllArgs, InitArgs, PlanArgs, RecommendArgs, RootArgs, ValidateArgs};
use anyhow::{anyhow, Context, Result};
use money_map::catalog::{load_catalog, CatalogData};
use money_map::config::{default_config, load_config, write_config, RunConfig, CONFIG_FILE};
use money_map::export::{export_all, write_export_text, PROFILE_EXPORT};
use money_map::plan::build_plan;
use money_map::profile::UserProfile;
use money_map::profile_io::{load_profile, render_profile_yaml};
use money_map::recommend::top_blockers;
use money_map::render::{recommendation_lines, render_plan_markdown};
use money_map::session::Session;
use money_map::validate::catalog_status;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code when a profile yields no recommendations.
pub const NO_RECOMMENDATIONS: u8 = 2;
/// Blockers shown in the reality check line.
const REALITY_CHECK_LIMIT: usize = 3;

/// Settings after merging the config file with command-line flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub country: String,
    pub data_dir: Option<PathBuf>,
    pub top: usize,
    pub output_dir: PathBuf,
}

impl Settings {
    pub fn resolve(root: &RootArgs) -> Result<Self> {
        let config: RunConfig = match &root.config {
            Some(path) => load_config(path)?,
            None => default_config(),
        };
        Ok(Self {
            country: root.country.clone().unwrap_or(config.country),
            data_dir: root.data_dir.clone().or(config.data_dir),
            top: config.top,
            output_dir: config.output_dir,
        })
    }

    fn load_catalog(&self) -> Result<CatalogData> {
        load_catalog(&self.country, self.data_dir.as_deref()).context("load catalog")
    }
}

pub fn run_init(args: InitArgs) -> Result<ExitCode> {
    let config_path = args.dir.join(CONFIG_FILE);
    let profile_path = args.dir.join(PROFILE_EXPORT);
    for path in [&config_path, &profile_path] {
        if path.is_file() && !args.force {
            return Err(anyhow!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ));
        }
    }
    write_config(&config_path, &default_config())?;
    let profile_yaml = render_profile_yaml(&UserProfile::default())?;
    write_export_text(&args.dir, PROFILE_EXPORT, &profile_yaml)?;
    println!("wrote {}", config_path.display());
    println!("wrote {}", profile_path.display());
    Ok(ExitCode::SUCCESS)
}

pub fn run_validate(settings: &Settings, args: ValidateArgs) -> Result<ExitCode> {
    let catalog = settings.load_catalog()?;
    let status = catalog_status(&catalog);
    let report = &status.report;
    if args.json {
        let text = serde_json::to_string_pretty(&status).context("serialize report")?;
        println!("{text}");
    } else {
        println!("State: {}", status.state.as_str().to_uppercase());
        println!("Dataset version: {}", status.dataset_version);
        println!("Reviewed at: {}", status.reviewed_at);
        if !status.warnings.is_empty() {
            println!("Warnings: {}", status.warnings.join(", "));
        }
        println!("Validation summary: {}", report.summary);
        for issue in &report.issues {
            println!(
                "- {} {} @ {}: {}",
                issue.severity, issue.code, issue.location, issue.message
            );
        }
    }
    Ok(if report.has_fatal() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

pub fn run_recommend(settings: &Settings, args: RecommendArgs) -> Result<ExitCode> {
    let mut session = Session::new(&settings.country);
    let catalog = session
        .load_catalog(settings.data_dir.as_deref())
        .context("load catalog")?;
    session.update_profile(load_profile(&args.profile)?);
    session.apply_quick_fixes(&args.quick_fixes);

    let blockers = top_blockers(session.profile(), &catalog, REALITY_CHECK_LIMIT);
    if blockers.is_empty() {
        println!("Top blockers: None");
    } else {
        println!("Top blockers: {}", blockers.join(", "));
    }

    let result = session.recommend(&catalog);
    if result.recommendations.is_empty() {
        println!("No recommendations found.");
        return Ok(ExitCode::from(NO_RECOMMENDATIONS));
    }
    for line in recommendation_lines(result, args.top.unwrap_or(settings.top)) {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

pub fn run_plan(settings: &Settings, args: PlanArgs) -> Result<ExitCode> {
    let catalog = settings.load_catalog()?;
    let profile = load_profile(&args.profile)?;
    let plan = build_plan(&profile, &catalog, &args.variant_id)?;
    println!("{}", render_plan_markdown(&plan));
    Ok(ExitCode::SUCCESS)
}

pub fn run_export_all(settings: &Settings, args: ExportAllArgs) -> Result<ExitCode> {
    let mut session = Session::new(&settings.country);
    let catalog = session
        .load_catalog(settings.data_dir.as_deref())
        .context("load catalog")?;
    session.update_profile(load_profile(&args.profile)?);

    let result = session.recommend(&catalog).clone();
    let Some(top) = result.recommendations.first() else {
        println!("No recommendations found.");
        return Ok(ExitCode::from(NO_RECOMMENDATIONS));
    };
    let variant_id = args.variant_id.as_deref().unwrap_or(&top.variant_id);
    let plan = session.plan(&catalog, variant_id)?.clone();

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| settings.output_dir.clone());
    let written = export_all(&output_dir, session.profile(), &result, &plan)?;
    println!(
        "Exported {} files to {}",
        written.len(),
        output_dir.display()
    );
    for path in &written {
        println!("- {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}
