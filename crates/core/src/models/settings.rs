use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::month::MonthIndex;

/// User-configurable display settings for a planning session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Calendar year the twelve months belong to (e.g., 2021 → "Jan 21").
    pub plan_year: i32,

    /// Prefix shown in front of formatted amounts (e.g., "$").
    /// Never part of the formatted number itself.
    pub currency_symbol: String,
}

impl Settings {
    /// Editor caption for a month, e.g. "Jan 21".
    #[must_use]
    pub fn month_label(&self, month: MonthIndex) -> String {
        format!("{} {:02}", month.short_name(), self.plan_year.rem_euclid(100))
    }

    /// Yearly table column header, e.g. "JAN 21".
    #[must_use]
    pub fn column_label(&self, month: MonthIndex) -> String {
        self.month_label(month).to_uppercase()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            plan_year: chrono::Utc::now().year(),
            currency_symbol: "$".to_string(),
        }
    }
}
