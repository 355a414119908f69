// ==========================================
// Pool Planner - command line entry point
// ==========================================
// Usage: pool-planner --output plan.xlsx roster1.xlsx roster2.xlsx ...
// Exit: 0 on success, 1 on any failure, 2 when no pool could be formed
// ==========================================

use anyhow::{Context, Result};
use clap::Parser;
use pool_planner::api::{PlanSummary, PlanningApi, PlanningOutcome};
use pool_planner::config::ConfigManager;
use pool_planner::{logging, APP_NAME, VERSION};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pool-planner")]
#[command(about = "Validate competition rosters and split entrants into pools and groups")]
#[command(version)]
struct Cli {
    /// Competition config (JSON); defaults to the user config dir, then built-ins
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output language (en, nb)
    #[arg(short, long)]
    locale: Option<String>,

    /// Leave out the competition schedule sheet
    #[arg(long)]
    no_schedule: bool,

    /// Leave out the rejected rows sheet
    #[arg(long)]
    no_rejections: bool,

    /// Print the run summary as JSON instead of text
    #[arg(long)]
    summary_json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Output workbook path
    #[arg(short, long)]
    output: PathBuf,

    /// Roster files (.xlsx, .xls, .ods, .csv)
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn print_summary(summary: &PlanSummary) {
    println!("Files:");
    for file in &summary.files {
        match &file.error {
            Some(error) => println!("  {}: FAILED ({})", file.file_name, error),
            None => println!(
                "  {}: club={}, valid={}, rejected={}, without category={}",
                file.file_name,
                file.club.as_deref().unwrap_or("-"),
                file.valid,
                file.rejected,
                file.dropped_no_category
            ),
        }
    }

    println!("Pools:");
    for pool in &summary.pools {
        println!(
            "  {}: {} entrants, group sizes {:?}",
            pool.pool_name, pool.entrants, pool.groups
        );
    }
    if summary.unplaced > 0 {
        println!("  {} entrant(s) matched no pool", summary.unplaced);
    }
}

fn print_rejections(outcome: &PlanningOutcome) {
    let rejections = outcome.rejections();
    if rejections.is_empty() {
        return;
    }
    println!("Rejected rows:");
    for rejection in &rejections {
        let row = &rejection.row;
        println!(
            "  {} row {} [{}] {}: {}",
            rejection.source,
            row.row_number,
            row.club.as_deref().unwrap_or("-"),
            row.name.as_deref().unwrap_or("-"),
            row.reasons_joined()
        );
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }
    tracing::info!("{} {}", APP_NAME, VERSION);

    let mut manager = ConfigManager::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(locale) = &cli.locale {
        manager.set_locale(locale).context("applying --locale")?;
    }
    if cli.no_schedule {
        manager.set_include_schedule(false);
    }
    if cli.no_rejections {
        manager.set_include_rejections(false);
    }

    let api = PlanningApi::from_manager(&manager)?;
    let outcome = api.plan_from_files(cli.files).await?;

    let summary = outcome.summary();
    if cli.summary_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
        print_rejections(&outcome);
    }

    outcome.check_uploads()?;

    match api.write_workbook(&outcome, &cli.output) {
        Ok(()) => {
            println!("Wrote {}", cli.output.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_empty_plan() => {
            eprintln!("{}", e);
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e).with_context(|| format!("writing {}", cli.output.display())),
    }
}
