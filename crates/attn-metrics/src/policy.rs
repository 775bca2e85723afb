//! Attendance policy thresholds.
//!
//! All clock values are minutes since midnight; all durations are minutes.
//! The engine takes the policy as a value so threshold changes never
//! require code edits.

/// Rule thresholds applied by the metrics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AttendancePolicy {
    /// Nominal shift start; earlier arrivals are clamped to this for
    /// overtime purposes. 09:30.
    pub shift_start: u32,
    /// Last on-time arrival; lateness requires strictly after. 09:46.
    pub grace_end: u32,
    /// Arrivals strictly after this are half days outright. 10:15.
    pub half_day_cutoff: u32,
    /// Worked duration for a full day. 8h30.
    pub full_day_minutes: u32,
    /// Worked duration floor for a half day. 4h.
    pub half_day_floor_minutes: u32,
    /// Extra worked minutes beyond a full day before working-day overtime
    /// starts accruing.
    pub working_ot_margin_minutes: u32,
    /// Worked duration for a full weekend/holiday overtime day. 8h.
    pub weekend_full_ot_floor_minutes: u32,
    /// Flat overtime credit for a weekend/holiday day with one punch.
    pub punch_miss_ot_credit_minutes: u32,
    /// Lates tolerated per month before each further late becomes its own
    /// half day.
    pub allowed_lates_per_month: u32,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            shift_start: 9 * 60 + 30,
            grace_end: 9 * 60 + 46,
            half_day_cutoff: 10 * 60 + 15,
            full_day_minutes: 510,
            half_day_floor_minutes: 240,
            working_ot_margin_minutes: 30,
            weekend_full_ot_floor_minutes: 480,
            punch_miss_ot_credit_minutes: 240,
            allowed_lates_per_month: 5,
        }
    }
}
