//! Overtime hour rounding.
//!
//! The two overtime paths round differently: working-day overtime rounds
//! up to 30-minute blocks, weekend/holiday overtime is reported exactly.

use attn_model::Metrics;

/// Working-day overtime hours: minutes rounded up to the next 30-minute
/// block, half an hour per block.
pub fn working_ot_hours(minutes: u32) -> f64 {
    f64::from(minutes.div_ceil(30)) * 0.5
}

/// Weekend/holiday overtime hours: the exact minute count over 60, to two
/// decimal places.
pub fn weekend_ot_hours(minutes: u32) -> f64 {
    (f64::from(minutes) / 60.0 * 100.0).round() / 100.0
}

/// Combined overtime hours across both rounding policies.
pub fn total_ot_hours(metrics: &Metrics) -> f64 {
    working_ot_hours(metrics.working_day_ot_minutes)
        + weekend_ot_hours(metrics.weekend_full_ot_minutes)
        + weekend_ot_hours(metrics.weekend_half_ot_minutes)
}
