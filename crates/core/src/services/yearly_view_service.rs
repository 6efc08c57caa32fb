use crate::models::month::MonthIndex;
use crate::models::settings::Settings;
use crate::models::state::BudgetState;
use crate::models::yearly::{YearlyRow, YearlyView};

/// Builds the consolidated 12-month-by-channel table.
///
/// The core computes all the numbers; the frontend only renders.
pub struct YearlyViewService;

impl YearlyViewService {
    pub fn new() -> Self {
        Self
    }

    /// One row per channel in plan order, plus per-month and grand totals.
    pub fn build(&self, state: &BudgetState, settings: &Settings) -> YearlyView {
        let columns = MonthIndex::all().map(|m| settings.column_label(m)).collect();
        let mut view = YearlyView::empty(columns);

        for channel in state.iter() {
            for (slot, value) in view.month_totals.iter_mut().zip(channel.month_breakdown) {
                *slot += value;
            }
            view.rows.push(YearlyRow {
                channel_id: channel.id,
                name: channel.name.clone(),
                months: channel.month_breakdown,
                total: channel.total(),
            });
        }

        // Footer adds up across the month columns
        view.grand_total = view.month_totals.iter().fold(0.0, |acc, v| acc + v);
        view
    }

    /// Render a yearly view as CSV: `channel,<month headers>,total`.
    ///
    /// Amounts are written unformatted so the output stays machine-readable.
    pub fn to_csv(&self, view: &YearlyView) -> String {
        let mut csv = String::from("channel");
        for column in &view.columns {
            csv.push(',');
            csv.push_str(&escape_csv(column));
        }
        csv.push_str(",total\n");

        for row in &view.rows {
            csv.push_str(&escape_csv(&row.name));
            for value in row.months {
                csv.push_str(&format!(",{value}"));
            }
            csv.push_str(&format!(",{}\n", row.total));
        }
        csv
    }
}

impl Default for YearlyViewService {
    fn default() -> Self {
        Self::new()
    }
}

// Quote fields containing commas, quotes, or line breaks
fn escape_csv(field: &str) -> String {
    if field.contains(|c| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
