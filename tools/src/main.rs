//! duty-runner: headless lunch-duty scheduler.
//!
//! Usage:
//!   duty-runner --calendar calendar.csv --staff staff.csv --seed 42
//!   duty-runner --config run.json --month 2026-01 --out ./out
//!   duty-runner --calendar calendar.csv --staff staff.csv --no-seed --json

use anyhow::{bail, Context, Result};
use clap::Parser;
use duty_core::{
    audit::ScheduleAudit,
    calendar::{load_calendar, DEFAULT_DATE_FORMAT},
    config::RunnerConfig,
    export::{schedule_file_name, summary_file_name, write_schedule_csv, write_summary_csv},
    roster::load_roster,
    DutyEngine, DutyError, RunReport, StaffMember,
};
use std::{
    fs::File,
    path::{Path, PathBuf},
};

/// Fair weekly lunch-duty scheduling (two main room, one quiet room).
#[derive(Parser, Debug)]
#[command(name = "duty-runner", version)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<String>,

    /// Calendar CSV (date, day_of_week, needs_duty)
    #[arg(long)]
    calendar: Option<PathBuf>,

    /// Staff availability CSV (name, Monday, Tuesday, Wednesday)
    #[arg(long)]
    staff: Option<PathBuf>,

    /// Seed for reproducible results
    #[arg(long, conflicts_with = "no_seed")]
    seed: Option<u64>,

    /// Draw a fresh seed from OS entropy
    #[arg(long)]
    no_seed: bool,

    /// Only schedule one month (YYYY-MM)
    #[arg(long)]
    month: Option<String>,

    /// Directory for the CSV exports
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the schedule as JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    seed: u64,
    #[serde(flatten)]
    schedule: &'a duty_core::Schedule,
    audit: &'a ScheduleAudit,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let calendar = config.calendar.clone().context("no calendar CSV given (--calendar)")?;
    let staff = config.staff.clone().context("no staff CSV given (--staff)")?;

    let mut dates = load_calendar(&calendar, &config.date_format)
        .with_context(|| format!("loading {}", calendar.display()))?;
    let roster = load_roster(&staff).with_context(|| format!("loading {}", staff.display()))?;

    if let Some(month) = config.month_filter()? {
        dates = month.apply(&dates);
        if dates.is_empty() {
            log::warn!("no duty days found for {month}");
            println!("No duty days found for {month}");
            return Ok(());
        }
    }

    let engine = match DutyEngine::new(roster.clone(), config.seed) {
        Ok(engine) => engine,
        Err(DutyError::EmptyRoster) => bail!("The staff file lists nobody; add at least one person"),
        Err(e) => return Err(e.into()),
    };
    let report = engine.run(&dates)?;
    let audit = ScheduleAudit::of(&report.schedule, &roster);

    if cli.json {
        let output = JsonOutput { seed: report.seed, schedule: &report.schedule, audit: &audit };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_header(&config, &report, &roster, dates.len());
        print_schedule(&report);
        print_summary(&report, &audit);
    }

    export(&config.output_dir, &report)?;
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<RunnerConfig> {
    let mut config = match &cli.config {
        Some(path) => RunnerConfig::load(path)?,
        None => RunnerConfig::default(),
    };
    if cli.calendar.is_some() {
        config.calendar = cli.calendar.clone();
    }
    if cli.staff.is_some() {
        config.staff = cli.staff.clone();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.no_seed {
        config.seed = None;
    }
    if cli.month.is_some() {
        config.month = cli.month.clone();
    }
    if let Some(out) = &cli.out {
        config.output_dir = out.clone();
    }
    Ok(config)
}

fn print_header(config: &RunnerConfig, report: &RunReport, roster: &[StaffMember], days: usize) {
    let avg = (days * 3) as f64 / roster.len() as f64;
    println!("Lunch Duty Scheduler: duty-runner");
    let source = if config.seed.is_none() { " (entropy)" } else { "" };
    println!("  seed:             {}{source}", report.seed);
    println!("  total duty days:  {days}");
    println!("  total staff:      {}", roster.len());
    println!("  avg duties/person {avg:.1}");
    println!();
}

fn print_schedule(report: &RunReport) {
    println!("=== DUTY SCHEDULE ===");
    println!(
        "  {:<28} {:<10} {:<18} {:<18} {:<18}",
        "Date", "Day", "Main Room 1", "Main Room 2", "Quiet Room"
    );
    for a in &report.schedule.assignments {
        println!(
            "  {:<28} {:<10} {:<18} {:<18} {:<18}",
            a.date.format(DEFAULT_DATE_FORMAT).to_string(),
            a.day.as_str(),
            a.primary_1.to_string(),
            a.primary_2.to_string(),
            a.quiet.to_string()
        );
    }
    println!();
}

fn print_summary(report: &RunReport, audit: &ScheduleAudit) {
    println!("=== DUTY DISTRIBUTION ===");
    println!("  {:<20} {:>6} {:>6} {:>6}", "staff", "total", "quiet", "main");
    for row in &report.schedule.summary {
        println!(
            "  {:<20} {:>6} {:>6} {:>6}",
            row.staff_name, row.total_duties, row.quiet_room_duties, row.main_room_duties
        );
    }

    println!();
    println!("=== DISTRIBUTION CHECK ===");
    println!("  min duties:   {}", audit.min_duties);
    println!("  max duties:   {}", audit.max_duties);
    println!("  difference:   {} (should be <= 1)", audit.spread());
    if audit.is_balanced() {
        println!("  balanced:     yes");
    } else {
        println!("  balanced:     NO, schedule may need adjustment");
    }

    if audit.unfilled_slots > 0 {
        println!();
        println!(
            "  WARNING: {} slot(s) UNASSIGNED on {} date(s)",
            audit.unfilled_slots,
            audit.unfilled_dates.len()
        );
    }
    for conflict in &audit.avoid_pairing_conflicts {
        println!("  WARNING: {} share duty on {}", conflict.staff.join(" and "), conflict.date);
    }
}

fn export(dir: &Path, report: &RunReport) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let today = chrono::Local::now().date_naive();

    let schedule_path = dir.join(schedule_file_name(today));
    write_schedule_csv(File::create(&schedule_path)?, &report.schedule.assignments)?;
    let summary_path = dir.join(summary_file_name(today));
    write_summary_csv(File::create(&summary_path)?, &report.schedule.summary)?;

    log::info!("wrote {} and {}", schedule_path.display(), summary_path.display());
    Ok(())
}
