//! Subcommand implementations.

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use attn_ingest::{load_csv_workbook, merge, merge_with_context};
use attn_metrics::{AttendancePolicy, MetricsEngine};
use attn_model::MonthContext;
use attn_report::MetricsRow;

use crate::cli::MergeArgs;

/// Everything the merge subcommand hands to the printers.
pub struct MergeOutcome {
    pub context: MonthContext,
    pub rows: Vec<MetricsRow>,
}

pub fn run_merge(args: &MergeArgs) -> Result<MergeOutcome> {
    let span = info_span!("merge", sheet_dir = %args.sheet_dir.display());
    let _guard = span.enter();

    let workbook = load_csv_workbook(&args.sheet_dir).context("load sheet directory")?;
    let result = match explicit_context(args)? {
        Some(context) => merge_with_context(&workbook, context).context("merge workbook")?,
        None => merge(&workbook).context("merge workbook")?,
    };
    info!(
        employees = result.employees.len(),
        year = result.context.year,
        month = result.context.month,
        "merged workbook"
    );

    let holidays: BTreeSet<u32> = args.holidays.iter().copied().collect();
    let engine = MetricsEngine::new(AttendancePolicy::default());
    let rows = result
        .employees
        .iter()
        .map(|employee| {
            let metrics = engine.compute(employee, &result.context, &holidays);
            MetricsRow::build(employee, &metrics)
        })
        .collect();

    Ok(MergeOutcome {
        context: result.context,
        rows,
    })
}

/// Prints the policy thresholds the merge subcommand evaluates with.
pub fn run_policy() {
    let policy = AttendancePolicy::default();
    println!("Shift start:            {}", clock(policy.shift_start));
    println!("Grace period ends:      {}", clock(policy.grace_end));
    println!("Half-day cutoff:        {}", clock(policy.half_day_cutoff));
    println!("Full day:               {} minutes", policy.full_day_minutes);
    println!(
        "Half-day floor:         {} minutes",
        policy.half_day_floor_minutes
    );
    println!(
        "Working OT margin:      {} minutes",
        policy.working_ot_margin_minutes
    );
    println!(
        "Weekend full OT floor:  {} minutes",
        policy.weekend_full_ot_floor_minutes
    );
    println!(
        "Punch-miss OT credit:   {} minutes",
        policy.punch_miss_ot_credit_minutes
    );
    println!(
        "Allowed lates/month:    {}",
        policy.allowed_lates_per_month
    );
}

fn clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Builds the caller-supplied period from `--year`/`--month`/`--day-count`.
fn explicit_context(args: &MergeArgs) -> Result<Option<MonthContext>> {
    match (args.year, args.month) {
        (None, None) => Ok(None),
        (Some(year), Some(month)) => {
            let day_count = args
                .day_count
                .unwrap_or_else(|| MonthContext::days_in(year, month));
            Ok(Some(MonthContext {
                year,
                month,
                day_count,
            }))
        }
        _ => bail!("--year and --month must be given together"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn merge_args(dir: PathBuf) -> MergeArgs {
        MergeArgs {
            sheet_dir: dir,
            holidays: Vec::new(),
            year: Some(2024),
            month: Some(6),
            day_count: None,
            json: false,
        }
    }

    #[test]
    fn explicit_context_requires_both_year_and_month() {
        let mut args = merge_args(PathBuf::from("unused"));
        args.month = None;
        assert!(explicit_context(&args).is_err());

        args.year = None;
        assert_eq!(explicit_context(&args).unwrap(), None);
    }

    #[test]
    fn explicit_context_defaults_day_count_from_the_calendar() {
        let args = merge_args(PathBuf::from("unused"));
        let context = explicit_context(&args).unwrap().unwrap();
        assert_eq!(context.day_count, 30);
    }

    #[test]
    fn merge_command_produces_rows_from_csv_sheets() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("floor_a.csv"),
            "Employee:,17 : R. Iyer\n\
             Status,P,P\n\
             InTime,09:30,09:50\n\
             OutTime,18:00,18:20\n\
             Duration,08:30,08:30\n\
             Shift,GEN,GEN\n",
        )
        .unwrap();

        // July 2024 starts on a Monday, so days 1 and 2 are working days.
        let mut args = merge_args(dir.path().to_path_buf());
        args.month = Some(7);
        let outcome = run_merge(&args).unwrap();
        assert_eq!(outcome.context.month, 7);
        assert_eq!(outcome.rows.len(), 1);
        let row = &outcome.rows[0];
        assert_eq!(row.emp_id, "17");
        assert_eq!(row.full_days, 2);
        assert_eq!(row.lates, 1);
    }

    #[test]
    fn missing_sheet_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let args = merge_args(dir.path().join("nope"));
        assert!(run_merge(&args).is_err());
    }
}
