//! The attendance rule engine.
//!
//! Pure evaluation from `(EmployeeRecord, MonthContext, holidays)` to
//! [`Metrics`]; no I/O, no caching, no state shared across employees. The
//! only stateful rule, the monthly late allowance, lives in a counter local
//! to one `compute` call.

use std::collections::BTreeSet;

use tracing::trace;

use attn_model::{EmployeeRecord, FieldName, Metrics, MonthContext};

use crate::clock::{parse_clock, wrapped_duration};
use crate::policy::AttendancePolicy;

const STATUS_ABSENT: &str = "A";
const STATUS_HOLIDAY: &str = "H";
const STATUS_WEEKLY_OFF: &str = "WO";

/// Rewrites holiday/weekly-off statuses bracketed by two absences into
/// absences. Mutates the local array only, never the source record.
pub fn apply_sandwich_rule(statuses: &mut [String]) {
    let absents: Vec<usize> = statuses
        .iter()
        .enumerate()
        .filter(|(_, status)| *status == STATUS_ABSENT)
        .map(|(idx, _)| idx)
        .collect();
    for pair in absents.windows(2) {
        for idx in pair[0] + 1..pair[1] {
            if statuses[idx] == STATUS_HOLIDAY || statuses[idx] == STATUS_WEEKLY_OFF {
                statuses[idx] = STATUS_ABSENT.to_string();
            }
        }
    }
}

/// Evaluates the attendance rules for single employees.
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine {
    policy: AttendancePolicy,
}

impl MetricsEngine {
    pub fn new(policy: AttendancePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AttendancePolicy {
        &self.policy
    }

    /// Computes the monthly metrics for one employee.
    ///
    /// Holidays are day-of-month values; one falling on a weekend is not
    /// double-counted, weekend status takes precedence.
    pub fn compute(
        &self,
        record: &EmployeeRecord,
        context: &MonthContext,
        holidays: &BTreeSet<u32>,
    ) -> Metrics {
        let day_count = context.day_count;
        let mut statuses: Vec<String> = (0..day_count as usize)
            .map(|idx| {
                record
                    .day_value(FieldName::Status, idx)
                    .trim()
                    .to_uppercase()
            })
            .collect();
        apply_sandwich_rule(&mut statuses);

        let weekend_days = (1..=day_count).filter(|day| context.is_weekend(*day)).count() as u32;
        let weekday_holidays = holidays
            .iter()
            .filter(|day| (1..=day_count).contains(*day) && !context.is_weekend(**day))
            .count() as u32;

        let mut metrics = Metrics {
            total_working_days: day_count - weekend_days - weekday_holidays,
            ..Metrics::default()
        };

        let mut lates_seen = 0u32;
        for day in 1..=day_count {
            let idx = (day - 1) as usize;
            let in_raw = record.day_value(FieldName::InTime, idx).trim();
            let out_raw = record.day_value(FieldName::OutTime, idx).trim();
            let has_in = !in_raw.is_empty();
            let has_out = !out_raw.is_empty();
            let off_day = context.is_weekend(day) || holidays.contains(&day);

            trace!(day, status = %statuses[idx], has_in, has_out, off_day, "classifying day");

            // Absence first, on any calendar day: a sandwiched weekly-off
            // counts as absent too.
            if statuses[idx] == STATUS_ABSENT && !has_in && !has_out {
                metrics.total_absent += 1;
                metrics.remark(day, "absent");
                continue;
            }

            if off_day {
                self.classify_off_day(&mut metrics, day, in_raw, out_raw);
                continue;
            }

            // Working day: a single missing punch short-circuits everything
            // else.
            if has_in != has_out {
                metrics.half_days += 1;
                metrics.half_day_punch_miss += 1;
                metrics.total_punch_missed += 1;
                metrics.remark(day, "half day, single punch recorded");
                continue;
            }

            if let Some(in_time) = parse_clock(in_raw) {
                if in_time > self.policy.half_day_cutoff {
                    metrics.half_days += 1;
                    metrics.half_day_lateness += 1;
                    metrics.remark(day, format!("half day, arrived {in_raw}"));
                    continue;
                }
                if in_time > self.policy.grace_end {
                    lates_seen += 1;
                    if lates_seen > self.policy.allowed_lates_per_month {
                        // Only the day crossing the allowance converts; each
                        // further late is its own half-day event.
                        metrics.half_days += 1;
                        metrics.half_day_lateness += 1;
                        metrics.remark(day, "half day, late allowance exhausted");
                        continue;
                    }
                    metrics.total_lates += 1;
                    metrics.remark(day, format!("late arrival {in_raw}"));
                }
            }

            if let (Some(in_time), Some(out_time)) = (parse_clock(in_raw), parse_clock(out_raw)) {
                let duration = wrapped_duration(in_time, out_time);
                if duration >= self.policy.full_day_minutes {
                    metrics.total_full_days += 1;
                } else if duration >= self.policy.half_day_floor_minutes {
                    metrics.half_days += 1;
                    metrics.half_day_duration += 1;
                    metrics.remark(day, format!("half day, worked {duration} minutes"));
                }
                let worked =
                    wrapped_duration(in_time.max(self.policy.shift_start), out_time);
                if worked >= self.policy.full_day_minutes + self.policy.working_ot_margin_minutes {
                    metrics.working_day_ot_minutes += worked - self.policy.full_day_minutes;
                }
            }
        }
        metrics
    }

    /// Weekend/holiday classification: presence and overtime banding.
    fn classify_off_day(&self, metrics: &mut Metrics, day: u32, in_raw: &str, out_raw: &str) {
        let has_in = !in_raw.is_empty();
        let has_out = !out_raw.is_empty();
        if !has_in && !has_out {
            return;
        }
        metrics.weekend_holiday_present_days += 1;
        if has_in != has_out {
            metrics.total_half_ot_days += 1;
            metrics.weekend_half_ot_minutes += self.policy.punch_miss_ot_credit_minutes;
            metrics.remark(day, "weekend/holiday single punch, half overtime credited");
            return;
        }
        let (Some(in_time), Some(out_time)) = (parse_clock(in_raw), parse_clock(out_raw)) else {
            return;
        };
        let duration = wrapped_duration(in_time, out_time);
        if duration >= self.policy.weekend_full_ot_floor_minutes {
            metrics.total_ot_days += 1;
            metrics.weekend_full_ot_minutes += duration;
            metrics.remark(day, format!("weekend/holiday overtime, {duration} minutes"));
        } else if duration >= self.policy.half_day_floor_minutes {
            metrics.total_half_ot_days += 1;
            metrics.weekend_half_ot_minutes += duration;
            metrics.remark(
                day,
                format!("weekend/holiday half overtime, {duration} minutes"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // June 2024: 30 days, Jun 1 is a Saturday, weekends are
    // 1, 2, 8, 9, 15, 16, 22, 23, 29, 30.
    fn june() -> MonthContext {
        MonthContext::from_calendar(2024, 6)
    }

    fn empty_month() -> Vec<String> {
        vec![String::new(); 30]
    }

    fn record_with(days: &[(u32, &str, &str, &str)]) -> EmployeeRecord {
        let mut statuses = empty_month();
        let mut ins = empty_month();
        let mut outs = empty_month();
        for (day, status, in_time, out_time) in days {
            let idx = (*day - 1) as usize;
            statuses[idx] = (*status).to_string();
            ins[idx] = (*in_time).to_string();
            outs[idx] = (*out_time).to_string();
        }
        let mut record = EmployeeRecord::new("17", "R. Iyer");
        record.set_field(FieldName::Status, statuses);
        record.set_field(FieldName::InTime, ins);
        record.set_field(FieldName::OutTime, outs);
        record.set_field(FieldName::Duration, empty_month());
        record
    }

    fn compute(record: &EmployeeRecord) -> Metrics {
        MetricsEngine::default().compute(record, &june(), &BTreeSet::new())
    }

    fn compute_with_holidays(record: &EmployeeRecord, holidays: &[u32]) -> Metrics {
        let holidays: BTreeSet<u32> = holidays.iter().copied().collect();
        MetricsEngine::default().compute(record, &june(), &holidays)
    }

    #[test]
    fn sandwiched_off_days_become_absences() {
        let mut statuses: Vec<String> = ["A", "WO", "H", "WO", "A", "P"]
            .iter()
            .map(|status| (*status).to_string())
            .collect();
        apply_sandwich_rule(&mut statuses);
        assert_eq!(statuses, ["A", "A", "A", "A", "A", "P"]);
    }

    #[test]
    fn unbracketed_off_days_stay_untouched() {
        let mut statuses: Vec<String> = ["A", "WO", "P"]
            .iter()
            .map(|status| (*status).to_string())
            .collect();
        apply_sandwich_rule(&mut statuses);
        assert_eq!(statuses, ["A", "WO", "P"]);
    }

    #[test]
    fn working_days_subtract_weekends_and_weekday_holidays() {
        let record = record_with(&[]);
        assert_eq!(compute(&record).total_working_days, 20);
        // Jun 5 is a Wednesday; Jun 1 a Saturday, so only one subtracts.
        assert_eq!(
            compute_with_holidays(&record, &[5, 1]).total_working_days,
            19
        );
    }

    #[test]
    fn full_day_at_exactly_eight_and_a_half_hours() {
        let record = record_with(&[(3, "P", "09:30", "18:00")]);
        let metrics = compute(&record);
        assert_eq!(metrics.total_full_days, 1);
        assert_eq!(metrics.half_days, 0);
        assert_eq!(metrics.working_day_ot_minutes, 0);
    }

    #[test]
    fn grace_end_is_an_exclusive_boundary() {
        let on_time = record_with(&[(3, "P", "09:46", "18:16")]);
        let metrics = compute(&on_time);
        assert_eq!(metrics.total_lates, 0);
        assert_eq!(metrics.total_full_days, 1);

        let late = record_with(&[(3, "P", "09:47", "18:17")]);
        let metrics = compute(&late);
        assert_eq!(metrics.total_lates, 1);
        assert_eq!(metrics.total_full_days, 1);
        assert_eq!(metrics.half_days, 0);
    }

    #[test]
    fn each_late_beyond_the_allowance_is_its_own_half_day() {
        // Weekdays Jun 3-7, 10-11: seven lates with full-length days.
        let days: Vec<(u32, &str, &str, &str)> = [3, 4, 5, 6, 7, 10, 11]
            .iter()
            .map(|day| (*day, "P", "09:50", "18:20"))
            .collect();
        let record = record_with(&days);
        let metrics = compute(&record);
        assert_eq!(metrics.total_lates, 5);
        assert_eq!(metrics.half_days, 2);
        assert_eq!(metrics.half_day_lateness, 2);
        assert_eq!(metrics.total_full_days, 5);
    }

    #[test]
    fn arrival_past_the_cutoff_is_a_half_day_not_a_late() {
        let record = record_with(&[(3, "P", "10:16", "19:00")]);
        let metrics = compute(&record);
        assert_eq!(metrics.half_days, 1);
        assert_eq!(metrics.half_day_lateness, 1);
        assert_eq!(metrics.total_lates, 0);
        assert_eq!(metrics.total_full_days, 0);
    }

    #[test]
    fn duration_band_boundaries() {
        let half = record_with(&[(3, "P", "09:00", "13:00")]); // 240 min
        let metrics = compute(&half);
        assert_eq!(metrics.half_days, 1);
        assert_eq!(metrics.half_day_duration, 1);

        let neither = record_with(&[(3, "P", "09:00", "12:59")]); // 239 min
        let metrics = compute(&neither);
        assert_eq!(metrics.half_days, 0);
        assert_eq!(metrics.total_full_days, 0);
        assert!(metrics.remarks.is_empty());
    }

    #[test]
    fn single_punch_on_a_working_day_is_a_half_day() {
        let record = record_with(&[(3, "P", "09:30", "")]);
        let metrics = compute(&record);
        assert_eq!(metrics.half_days, 1);
        assert_eq!(metrics.half_day_punch_miss, 1);
        assert_eq!(metrics.total_punch_missed, 1);
        assert_eq!(metrics.total_full_days, 0);
    }

    #[test]
    fn absent_status_with_no_punches_counts_absent() {
        let record = record_with(&[(3, "A", "", "")]);
        let metrics = compute(&record);
        assert_eq!(metrics.total_absent, 1);
        assert_eq!(metrics.half_days, 0);
    }

    #[test]
    fn sandwiched_weekend_absences_count_as_absent() {
        // Fri Jun 7 and Mon Jun 10 absent bracket the Jun 8-9 weekend.
        let record = record_with(&[
            (7, "A", "", ""),
            (8, "WO", "", ""),
            (9, "WO", "", ""),
            (10, "A", "", ""),
        ]);
        let metrics = compute(&record);
        assert_eq!(metrics.total_absent, 4);
        assert_eq!(metrics.weekend_holiday_present_days, 0);
    }

    #[test]
    fn working_day_overtime_accrues_past_the_margin() {
        // Early arrival clamps to 09:30: 09:00-18:45 is 555 worked minutes.
        let record = record_with(&[(3, "P", "09:00", "18:45")]);
        let metrics = compute(&record);
        assert_eq!(metrics.total_full_days, 1);
        assert_eq!(metrics.working_day_ot_minutes, 45);

        // 540 worked minutes is exactly the margin.
        let record = record_with(&[(4, "P", "09:30", "18:30")]);
        assert_eq!(compute(&record).working_day_ot_minutes, 30);

        // One minute short of the margin accrues nothing.
        let record = record_with(&[(5, "P", "09:30", "18:29")]);
        assert_eq!(compute(&record).working_day_ot_minutes, 0);
    }

    #[test]
    fn night_shift_duration_wraps_midnight() {
        let record = record_with(&[(3, "P", "22:00", "06:30")]);
        let metrics = compute(&record);
        assert_eq!(metrics.total_full_days, 1);
    }

    #[test]
    fn weekend_presence_bands_into_full_and_half_overtime() {
        let metrics = compute(&record_with(&[(1, "WO", "09:00", "18:00")])); // 540 min
        assert_eq!(metrics.weekend_holiday_present_days, 1);
        assert_eq!(metrics.total_ot_days, 1);
        assert_eq!(metrics.weekend_full_ot_minutes, 540);

        let metrics = compute(&record_with(&[(1, "WO", "09:00", "14:00")])); // 300 min
        assert_eq!(metrics.total_half_ot_days, 1);
        assert_eq!(metrics.weekend_half_ot_minutes, 300);

        let metrics = compute(&record_with(&[(1, "WO", "09:00", "12:00")])); // 180 min
        assert_eq!(metrics.weekend_holiday_present_days, 1);
        assert_eq!(metrics.total_ot_days, 0);
        assert_eq!(metrics.total_half_ot_days, 0);
    }

    #[test]
    fn weekend_single_punch_gets_the_flat_credit() {
        let record = record_with(&[(1, "WO", "09:00", "")]);
        let metrics = compute(&record);
        assert_eq!(metrics.weekend_holiday_present_days, 1);
        assert_eq!(metrics.total_half_ot_days, 1);
        assert_eq!(metrics.weekend_half_ot_minutes, 240);
        assert_eq!(metrics.total_punch_missed, 0);
    }

    #[test]
    fn weekday_holiday_presence_uses_the_weekend_path() {
        let record = record_with(&[(5, "H", "09:00", "18:00")]);
        let metrics = compute_with_holidays(&record, &[5]);
        assert_eq!(metrics.total_working_days, 19);
        assert_eq!(metrics.weekend_holiday_present_days, 1);
        assert_eq!(metrics.total_ot_days, 1);
    }

    #[test]
    fn malformed_times_fail_only_their_own_checks() {
        let record = record_with(&[(3, "P", "9:xx", "18:00")]);
        let metrics = compute(&record);
        assert_eq!(metrics.total_full_days, 0);
        assert_eq!(metrics.half_days, 0);
        assert_eq!(metrics.total_lates, 0);
        assert_eq!(metrics.total_absent, 0);
    }

    #[test]
    fn metrics_are_recomputed_fresh_per_call() {
        let record = record_with(&[(3, "P", "09:50", "18:20")]);
        let engine = MetricsEngine::default();
        let first = engine.compute(&record, &june(), &BTreeSet::new());
        let second = engine.compute(&record, &june(), &BTreeSet::new());
        assert_eq!(first, second);
        assert_eq!(first.total_lates, 1);
    }
}
