//! Flat per-employee rows for table and JSON rendering.

use attn_model::{EmployeeRecord, Metrics};

use crate::hours::{total_ot_hours, weekend_ot_hours, working_ot_hours};

/// One employee's metrics, flattened for the reporting surface.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MetricsRow {
    pub emp_id: String,
    pub emp_name: String,
    pub working_days: u32,
    pub full_days: u32,
    pub half_days: u32,
    pub half_day_duration: u32,
    pub half_day_punch_miss: u32,
    pub half_day_lateness: u32,
    pub lates: u32,
    pub absent: u32,
    pub punch_missed: u32,
    pub weekend_holiday_present_days: u32,
    pub ot_days: u32,
    pub half_ot_days: u32,
    pub working_ot_hours: f64,
    pub weekend_full_ot_hours: f64,
    pub weekend_half_ot_hours: f64,
    pub total_ot_hours: f64,
    pub remarks: Vec<String>,
}

impl MetricsRow {
    pub fn build(record: &EmployeeRecord, metrics: &Metrics) -> Self {
        Self {
            emp_id: record.emp_id.clone(),
            emp_name: record.emp_name.clone(),
            working_days: metrics.total_working_days,
            full_days: metrics.total_full_days,
            half_days: metrics.half_days,
            half_day_duration: metrics.half_day_duration,
            half_day_punch_miss: metrics.half_day_punch_miss,
            half_day_lateness: metrics.half_day_lateness,
            lates: metrics.total_lates,
            absent: metrics.total_absent,
            punch_missed: metrics.total_punch_missed,
            weekend_holiday_present_days: metrics.weekend_holiday_present_days,
            ot_days: metrics.total_ot_days,
            half_ot_days: metrics.total_half_ot_days,
            working_ot_hours: working_ot_hours(metrics.working_day_ot_minutes),
            weekend_full_ot_hours: weekend_ot_hours(metrics.weekend_full_ot_minutes),
            weekend_half_ot_hours: weekend_ot_hours(metrics.weekend_half_ot_minutes),
            total_ot_hours: total_ot_hours(metrics),
            remarks: metrics.remarks.clone(),
        }
    }
}
