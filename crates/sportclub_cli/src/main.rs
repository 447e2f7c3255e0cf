//! Read-only club report.
//!
//! # Responsibility
//! - Open a club data directory, load every record file and print load
//!   diagnostics, the weekly schedule, recent attendance and statistics.
//! - Exercise the controller-facing core API without any UI runtime.
//!
//! Usage: `sportclub [DATA_DIR]` (defaults to the current directory).
//! Set `SPORTCLUB_LOG_DIR` to an absolute path to enable file logging.

use sportclub_core::{
    core_version, default_log_level, init_logging, ClubRepository, ClubService, ScheduleFilter,
};
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "SPORTCLUB_LOG_DIR";
const RECENT_ATTENDANCE_LIMIT: usize = 10;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    log::info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    let mut service = ClubService::new(ClubRepository::open_dir(&data_dir));
    let summary = service.load_all();

    println!("sportclub {} data_dir={}", core_version(), data_dir.display());
    for report in &summary.reports {
        println!(
            "loaded {:<10} {:>4} records, {} skipped",
            report.entity.file_name(),
            report.loaded,
            report.skipped.len()
        );
    }
    for failure in summary.parse_failures() {
        println!("  skipped {failure}");
    }
    for err in &summary.failures {
        eprintln!("error: {err}");
    }

    println!();
    println!("Schedule:");
    for item in service.schedule_view(&ScheduleFilter::All) {
        println!(
            "  {:<12} {:<6} {:<20} {} ({})",
            item.day_of_week, item.time, item.group_name, item.coach_name, item.duration
        );
    }

    println!();
    println!("Recent attendance:");
    for record in service
        .attendance_view()
        .into_iter()
        .take(RECENT_ATTENDANCE_LIMIT)
    {
        println!(
            "  {} {:<24} {}",
            record.date, record.member_name, record.status
        );
    }

    println!();
    println!("{}", service.statistics().summary());

    if summary.failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
