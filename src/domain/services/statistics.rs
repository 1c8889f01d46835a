use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::domain::models::booking::{Booking, STATUS_PAID};

pub const NO_TOP_TYPE: &str = "N/A";

/// Sentinel sent by the dashboard's type dropdown meaning "no filter".
const FILTER_ALL: &str = "All";

/// A calendar month, 1-indexed. Bookings are bucketed by the UTC calendar
/// date of their `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSelection {
    year: i32,
    month: u32,
}

impl MonthSelection {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn previous(&self) -> MonthSelection {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// Actual calendar length of this month, leap years included.
    pub fn day_count(&self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(31)
    }

    /// Bookings without a parseable `created_at` belong to no month.
    fn contains(&self, booking: &Booking) -> bool {
        booking
            .created_at
            .is_some_and(|dt| dt.year() == self.year && dt.month() == self.month)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub total_bookings: u64,
    pub total_revenue: f64,
    pub paid_bookings: u64,
    pub top_booking_type: String,
    pub daily_bookings: BTreeMap<u32, u64>,
    pub daily_revenue: BTreeMap<u32, f64>,
    pub percent_change: f64,
}

/// Projects a booking list into the monthly dashboard summary.
///
/// The daily maps always carry every day of the selected month, zeroed,
/// so charts render a full axis even for an empty month. The previous
/// month baseline for `percent_change` applies the same type filter as
/// the current month.
pub fn monthly_summary(
    bookings: &[Booking],
    selected: MonthSelection,
    type_filter: Option<&str>,
) -> MonthSummary {
    let filter = type_filter.filter(|f| !f.is_empty() && *f != FILTER_ALL);
    let matches_type = |b: &Booking| filter.is_none_or(|f| b.booking_type == f);

    let mut daily_bookings: BTreeMap<u32, u64> =
        (1..=selected.day_count()).map(|d| (d, 0)).collect();
    let mut daily_revenue: BTreeMap<u32, f64> =
        (1..=selected.day_count()).map(|d| (d, 0.0)).collect();

    let mut total_bookings = 0u64;
    let mut total_revenue = 0.0f64;
    let mut paid_bookings = 0u64;
    // Input order decides ties for the top type, so counts keep first-seen order.
    let mut type_counts: Vec<(String, u64)> = Vec::new();

    for booking in bookings.iter().filter(|b| selected.contains(b) && matches_type(b)) {
        total_bookings += 1;
        total_revenue += booking.amount;
        if booking.status == STATUS_PAID {
            paid_bookings += 1;
        }

        if let Some(day) = booking.created_at.map(|dt| dt.day()) {
            *daily_bookings.entry(day).or_insert(0) += 1;
            *daily_revenue.entry(day).or_insert(0.0) += booking.amount;
        }

        match type_counts.iter_mut().find(|(name, _)| *name == booking.booking_type) {
            Some((_, count)) => *count += 1,
            None => type_counts.push((booking.booking_type.clone(), 1)),
        }
    }

    // Strictly-greater comparison: on equal counts the earlier type stays.
    let mut top: Option<(&str, u64)> = None;
    for (name, count) in &type_counts {
        match top {
            Some((_, best)) if *count <= best => {}
            _ => top = Some((name.as_str(), *count)),
        }
    }
    let top_booking_type = top
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| NO_TOP_TYPE.to_string());

    let previous = selected.previous();
    let previous_revenue: f64 = bookings
        .iter()
        .filter(|b| previous.contains(b) && matches_type(b))
        .map(|b| b.amount)
        .sum();

    // A zero baseline reports 0 rather than dividing by zero; "no prior
    // data" and "no change" are indistinguishable here.
    let percent_change = if previous_revenue == 0.0 {
        0.0
    } else {
        (total_revenue - previous_revenue) / previous_revenue * 100.0
    };

    MonthSummary {
        total_bookings,
        total_revenue,
        paid_bookings,
        top_booking_type,
        daily_bookings,
        daily_revenue,
        percent_change,
    }
}
