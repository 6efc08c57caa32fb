use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::channel::MonthBreakdown;
use super::month::MONTHS_PER_YEAR;

/// One channel's line in the consolidated yearly table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRow {
    pub channel_id: Uuid,
    pub name: String,
    pub months: MonthBreakdown,
    /// Sum of `months`
    pub total: f64,
}

/// Combined 12-month-by-channel table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyView {
    /// Column headers, e.g. "JAN 21"
    pub columns: Vec<String>,

    /// One row per channel, same order as the plan
    pub rows: Vec<YearlyRow>,

    /// Per-month sum across all channels
    pub month_totals: MonthBreakdown,

    pub grand_total: f64,
}

impl YearlyView {
    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            month_totals: [0.0; MONTHS_PER_YEAR],
            grand_total: 0.0,
        }
    }
}
