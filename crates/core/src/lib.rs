pub mod errors;
pub mod format;
pub mod models;
pub mod services;

use log::debug;
use models::{
    channel::{AllocationType, BudgetChannel, BudgetFrequency},
    month::MonthIndex,
    settings::Settings,
    state::BudgetState,
    yearly::YearlyView,
};
use services::{
    budget_service::{BudgetAction, BudgetService},
    yearly_view_service::YearlyViewService,
};
use uuid::Uuid;

use errors::CoreError;

/// Earliest and latest plan years accepted by `with_settings` and `set_plan_year`.
const PLAN_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=9999;

/// Main entry point for the Budget Planner core library.
/// Holds the channel plan, the display settings, and the services that operate on them.
///
/// Owned by the application entry point and handed to whatever drives the UI.
/// All changes to the plan go through [`BudgetAction`]s; the convenience
/// methods below are thin wrappers around [`BudgetPlanner::dispatch`].
#[must_use]
pub struct BudgetPlanner {
    state: BudgetState,
    settings: Settings,
    budget_service: BudgetService,
    yearly_view_service: YearlyViewService,
}

impl std::fmt::Debug for BudgetPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetPlanner")
            .field("channels", &self.state.len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl Default for BudgetPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetPlanner {
    /// Start an empty plan with default settings.
    pub fn new() -> Self {
        Self::build(Settings::default())
    }

    /// Start an empty plan with the given settings.
    /// The settings go through the same checks as `set_plan_year` and
    /// `set_currency_symbol`.
    pub fn with_settings(settings: Settings) -> Result<Self, CoreError> {
        validate_plan_year(settings.plan_year)?;
        validate_currency_symbol(&settings.currency_symbol)?;
        Ok(Self::build(settings))
    }

    // ── Dispatch ────────────────────────────────────────────────────

    /// Validate and apply a single action, returning the new plan snapshot.
    /// A rejected action leaves the plan untouched.
    pub fn dispatch(&mut self, action: BudgetAction) -> Result<&BudgetState, CoreError> {
        action.validate()?;
        Ok(self.commit(action))
    }

    // ── Channel Management ──────────────────────────────────────────

    /// Append a new channel and return its id.
    pub fn add_channel(&mut self) -> Uuid {
        let state = self.commit(BudgetAction::AddChannel);
        // AddChannel always appends exactly one channel
        state.channels[state.len() - 1].id
    }

    /// Remove a channel. Unknown ids are ignored.
    pub fn remove_channel(&mut self, channel_id: Uuid) -> &BudgetState {
        self.commit(BudgetAction::RemoveChannel { channel_id })
    }

    /// Rename a channel. Call this only once the name prompt has resolved.
    pub fn rename_channel(&mut self, channel_id: Uuid, name: impl Into<String>) -> &BudgetState {
        self.commit(BudgetAction::RenameChannel {
            channel_id,
            name: name.into(),
        })
    }

    pub fn set_allocation_type(
        &mut self,
        channel_id: Uuid,
        allocation_type: AllocationType,
    ) -> &BudgetState {
        self.commit(BudgetAction::SetAllocationType {
            channel_id,
            allocation_type,
        })
    }

    pub fn set_frequency(&mut self, channel_id: Uuid, frequency: BudgetFrequency) -> &BudgetState {
        self.commit(BudgetAction::SetFrequency {
            channel_id,
            frequency,
        })
    }

    /// Set (or clear, with `None`) the baseline of a channel.
    /// Negative, non-finite, or oversized values are rejected.
    pub fn set_baseline(
        &mut self,
        channel_id: Uuid,
        baseline: Option<f64>,
    ) -> Result<&BudgetState, CoreError> {
        self.dispatch(BudgetAction::SetBaseline {
            channel_id,
            baseline,
        })
    }

    /// Set one month of a channel's breakdown.
    /// Fails on a month index outside 0..=11 or a budget that is negative,
    /// non-finite, or above `MAX_AMOUNT`.
    pub fn set_month_budget(
        &mut self,
        channel_id: Uuid,
        month: usize,
        budget: f64,
    ) -> Result<&BudgetState, CoreError> {
        let month = MonthIndex::new(month)?;
        self.dispatch(BudgetAction::SetMonthBudget {
            channel_id,
            month,
            budget,
        })
    }

    /// Save an edited cell of the yearly table: the channel switches to
    /// Manual allocation, then the month is set.
    ///
    /// Both inputs are checked before anything changes, so a rejected edit
    /// does not leave the channel half-switched.
    pub fn edit_yearly_cell(
        &mut self,
        channel_id: Uuid,
        month: usize,
        budget: f64,
    ) -> Result<&BudgetState, CoreError> {
        let set_month = BudgetAction::SetMonthBudget {
            channel_id,
            month: MonthIndex::new(month)?,
            budget,
        };
        set_month.validate()?;

        self.commit(BudgetAction::SetAllocationType {
            channel_id,
            allocation_type: AllocationType::Manual,
        });
        Ok(self.commit(set_month))
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Current plan snapshot. Cheap to clone; channels are shared.
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Owned copy of the current snapshot, e.g. to diff against the next one.
    pub fn snapshot(&self) -> BudgetState {
        self.state.clone()
    }

    /// All channels in creation order.
    #[must_use]
    pub fn channels(&self) -> Vec<&BudgetChannel> {
        self.state.iter().collect()
    }

    #[must_use]
    pub fn get_channel(&self, channel_id: Uuid) -> Option<&BudgetChannel> {
        self.state.find(channel_id).map(|c| c.as_ref())
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.state.len()
    }

    /// Sum of every channel's yearly total.
    #[must_use]
    pub fn total_budget(&self) -> f64 {
        self.state.iter().map(BudgetChannel::total).sum()
    }

    /// Combined 12-month-by-channel table for the current plan.
    pub fn yearly_view(&self) -> YearlyView {
        self.yearly_view_service.build(&self.state, &self.settings)
    }

    /// "Baseline <frequency> Budget" caption for a channel's editor.
    #[must_use]
    pub fn baseline_caption(&self, channel_id: Uuid) -> Option<String> {
        self.get_channel(channel_id)
            .map(|c| format!("Baseline {} Budget", c.frequency.label()))
    }

    /// Editor label for a month, e.g. "Jan 21".
    pub fn month_label(&self, month: usize) -> Result<String, CoreError> {
        Ok(self.settings.month_label(MonthIndex::new(month)?))
    }

    /// Amount with the configured currency symbol, e.g. "$1,200".
    #[must_use]
    pub fn display_amount(&self, value: f64) -> String {
        format::display_amount(&self.settings.currency_symbol, value)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    /// Set the calendar year shown in month labels.
    pub fn set_plan_year(&mut self, year: i32) -> Result<(), CoreError> {
        validate_plan_year(year)?;
        self.settings.plan_year = year;
        Ok(())
    }

    /// Set the symbol prefixed to displayed amounts (e.g., "$", "€", "PLN ").
    pub fn set_currency_symbol(&mut self, symbol: impl Into<String>) -> Result<(), CoreError> {
        let symbol = symbol.into();
        validate_currency_symbol(&symbol)?;
        self.settings.currency_symbol = symbol;
        Ok(())
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Pretty JSON snapshot of all channels (for display and debugging).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.state)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize channels: {e}")))
    }

    /// The yearly table as CSV: `channel,<month headers>,total`.
    #[must_use]
    pub fn export_csv(&self) -> String {
        self.yearly_view_service.to_csv(&self.yearly_view())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: Settings) -> Self {
        Self {
            state: BudgetState::new(),
            settings,
            budget_service: BudgetService::new(),
            yearly_view_service: YearlyViewService::new(),
        }
    }

    fn commit(&mut self, action: BudgetAction) -> &BudgetState {
        debug!("Dispatching {}", action.kind());
        self.state = self.budget_service.reduce(&self.state, action);
        &self.state
    }
}

fn validate_plan_year(year: i32) -> Result<(), CoreError> {
    if !PLAN_YEAR_RANGE.contains(&year) {
        return Err(CoreError::ValidationError(format!(
            "Plan year {year} is outside {}..={}",
            PLAN_YEAR_RANGE.start(),
            PLAN_YEAR_RANGE.end()
        )));
    }
    Ok(())
}

fn validate_currency_symbol(symbol: &str) -> Result<(), CoreError> {
    if symbol.trim().is_empty() {
        return Err(CoreError::ValidationError(
            "Currency symbol must not be blank".into(),
        ));
    }
    Ok(())
}
