//! Monthly attendance metrics.

/// Aggregate counters for one employee over one reporting month.
///
/// Computed freshly on every engine call; never cached, so the same record
/// can be re-evaluated with a different holiday set without side effects.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Metrics {
    pub total_working_days: u32,
    pub total_full_days: u32,
    pub half_days: u32,
    /// Half days caused by a worked duration in the half-day band.
    pub half_day_duration: u32,
    /// Half days caused by a single missing punch.
    pub half_day_punch_miss: u32,
    /// Half days caused by a late arrival past the cutoff or past the
    /// monthly allowance.
    pub half_day_lateness: u32,
    pub total_lates: u32,
    pub total_absent: u32,
    pub total_punch_missed: u32,
    pub weekend_holiday_present_days: u32,
    pub working_day_ot_minutes: u32,
    pub weekend_full_ot_minutes: u32,
    pub weekend_half_ot_minutes: u32,
    pub total_ot_days: u32,
    pub total_half_ot_days: u32,
    /// One entry per day with an exceptional classification.
    pub remarks: Vec<String>,
}

impl Metrics {
    pub fn remark(&mut self, day: u32, text: impl AsRef<str>) {
        self.remarks.push(format!("day {day}: {}", text.as_ref()));
    }
}
