use crate::domain::services::statistics::MonthSummary;
use serde::Serialize;
use std::collections::BTreeMap;

/// Wire shape of the monthly summary. Rounding and sign-splitting of the
/// percent change happen here, at display time; the raw value stays
/// available for consumers that chart it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummaryResponse {
    pub total_bookings: u64,
    pub total_revenue: f64,
    pub paid_bookings: u64,
    pub top_booking_type: String,
    pub daily_bookings: BTreeMap<u32, u64>,
    pub daily_revenue: BTreeMap<u32, f64>,
    pub percent_change: f64,
    pub percent_change_display: u64,
    pub trend: &'static str,
}

impl From<MonthSummary> for MonthlySummaryResponse {
    fn from(summary: MonthSummary) -> Self {
        let trend = if summary.percent_change > 0.0 {
            "increase"
        } else if summary.percent_change < 0.0 {
            "decrease"
        } else {
            "flat"
        };

        Self {
            total_bookings: summary.total_bookings,
            total_revenue: summary.total_revenue,
            paid_bookings: summary.paid_bookings,
            top_booking_type: summary.top_booking_type,
            daily_bookings: summary.daily_bookings,
            daily_revenue: summary.daily_revenue,
            percent_change: summary.percent_change,
            percent_change_display: summary.percent_change.abs().round() as u64,
            trend,
        }
    }
}
