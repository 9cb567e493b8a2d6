//! CLI argument parsing.
//!
//! The CLI is thin: it loads inputs, calls the library, and prints or writes
//! rendered output.
use clap::{Parser, Subcommand};
use money_map::profile::QuickFix;
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "money-map",
    version,
    about = "Recommend side-income variants and build an action plan",
    after_help = "Examples:\n  money-map init --dir ./mm\n  money-map validate --data-dir ./data\n  money-map recommend --profile profiles/demo_fast_start.yaml --top 3\n  money-map plan --profile profiles/demo_fast_start.yaml --variant-id local_deliveries\n  money-map export all --profile profiles/demo_max_income.yaml --output-dir exports",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Country code used to select the catalog
    #[arg(long, global = true, value_name = "CODE")]
    pub country: Option<String>,

    /// Optional data directory probed for a stale.flag marker
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Optional JSON run config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Init(InitArgs),
    Validate(ValidateArgs),
    Recommend(RecommendArgs),
    Plan(PlanArgs),
    #[command(subcommand)]
    Export(ExportCommand),
}

#[derive(Parser, Debug)]
#[command(about = "Write a default config.json and a starter profile.yaml")]
pub struct InitArgs {
    /// Directory to initialize
    #[arg(long, value_name = "DIR")]
    pub dir: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Validate catalog metadata")]
pub struct ValidateArgs {
    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "List recommended variants for a profile")]
pub struct RecommendArgs {
    /// Path to profile YAML
    #[arg(long, value_name = "PATH")]
    pub profile: PathBuf,

    /// Number of recommendations to show
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Adjust the profile before recommending (repeatable)
    #[arg(long = "quick-fix", value_enum, value_name = "FIX")]
    pub quick_fixes: Vec<QuickFix>,
}

#[derive(Parser, Debug)]
#[command(about = "Print the action plan for one variant")]
pub struct PlanArgs {
    /// Path to profile YAML
    #[arg(long, value_name = "PATH")]
    pub profile: PathBuf,

    /// Variant id to plan
    #[arg(long, value_name = "ID")]
    pub variant_id: String,
}

#[derive(Subcommand, Debug)]
#[command(about = "Export results")]
pub enum ExportCommand {
    /// Export profile.yaml, plan.md, and result.json
    All(ExportAllArgs),
}

#[derive(Parser, Debug)]
pub struct ExportAllArgs {
    /// Path to profile YAML
    #[arg(long, value_name = "PATH")]
    pub profile: PathBuf,

    /// Variant id override (defaults to the top recommendation)
    #[arg(long, value_name = "ID")]
    pub variant_id: Option<String>,

    /// Output directory
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recommend_with_quick_fixes() {
        let args = RootArgs::try_parse_from([
            "money-map",
            "--country",
            "AT",
            "recommend",
            "--profile",
            "p.yaml",
            "--quick-fix",
            "lower-legal-friction",
            "--quick-fix",
            "startable-in-two-weeks",
        ])
        .unwrap();
        assert_eq!(args.country.as_deref(), Some("AT"));
        let Command::Recommend(recommend) = args.command else {
            panic!("expected recommend");
        };
        assert_eq!(
            recommend.quick_fixes,
            vec![QuickFix::LowerLegalFriction, QuickFix::StartableInTwoWeeks]
        );
        assert!(recommend.top.is_none());
    }

    #[test]
    fn parses_nested_export_all() {
        let args = RootArgs::try_parse_from([
            "money-map",
            "export",
            "all",
            "--profile",
            "p.yaml",
            "--data-dir",
            "data",
        ])
        .unwrap();
        assert_eq!(args.data_dir, Some(PathBuf::from("data")));
        assert!(matches!(
            args.command,
            Command::Export(ExportCommand::All(ExportAllArgs { variant_id: None, .. }))
        ));
    }

    #[test]
    fn plan_requires_variant_id() {
        assert!(RootArgs::try_parse_from(["money-map", "plan", "--profile", "p.yaml"]).is_err());
    }
}
