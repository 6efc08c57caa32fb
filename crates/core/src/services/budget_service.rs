use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::channel::{
    generate_new_channel, recalc_channel, AllocationType, BudgetChannel, BudgetFrequency,
};
use crate::models::month::MonthIndex;
use crate::models::state::BudgetState;

/// Largest amount accepted for a baseline or a single month.
///
/// Twelve months at this cap still sum to a finite baseline, so derived
/// fields can never overflow to infinity.
pub const MAX_AMOUNT: f64 = 1e12;

/// The closed set of operations that may change a budget plan.
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetAction {
    /// Append a freshly generated channel
    AddChannel,
    RemoveChannel {
        channel_id: Uuid,
    },
    /// Expects an already-resolved name; a cancelled prompt sends nothing
    RenameChannel {
        channel_id: Uuid,
        name: String,
    },
    SetAllocationType {
        channel_id: Uuid,
        allocation_type: AllocationType,
    },
    SetFrequency {
        channel_id: Uuid,
        frequency: BudgetFrequency,
    },
    SetBaseline {
        channel_id: Uuid,
        baseline: Option<f64>,
    },
    SetMonthBudget {
        channel_id: Uuid,
        month: MonthIndex,
        budget: f64,
    },
}

impl BudgetAction {
    /// Short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            BudgetAction::AddChannel => "AddChannel",
            BudgetAction::RemoveChannel { .. } => "RemoveChannel",
            BudgetAction::RenameChannel { .. } => "RenameChannel",
            BudgetAction::SetAllocationType { .. } => "SetAllocationType",
            BudgetAction::SetFrequency { .. } => "SetFrequency",
            BudgetAction::SetBaseline { .. } => "SetBaseline",
            BudgetAction::SetMonthBudget { .. } => "SetMonthBudget",
        }
    }

    /// Reject amounts that are negative, not finite, or above [`MAX_AMOUNT`].
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            BudgetAction::SetBaseline {
                baseline: Some(value),
                ..
            } => validate_amount("Baseline", *value),
            BudgetAction::SetMonthBudget { budget, .. } => validate_amount("Month budget", *budget),
            _ => Ok(()),
        }
    }
}

fn validate_amount(what: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::ValidationError(format!(
            "{what} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(CoreError::ValidationError(format!(
            "{what} must not be negative, got {value}"
        )));
    }
    if value > MAX_AMOUNT {
        return Err(CoreError::ValidationError(format!(
            "{what} must not exceed {MAX_AMOUNT}, got {value}"
        )));
    }
    Ok(())
}

/// Applies budget actions to a plan snapshot.
///
/// Pure business logic: every call builds a new `BudgetState` and leaves the
/// input alone. Channels other than the targeted one are carried over as the
/// same `Arc`, untouched and in place.
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the state that follows `action`.
    ///
    /// Actions aimed at a channel id that is not in the plan are no-ops: the
    /// returned state equals the input. Callers should run
    /// [`BudgetAction::validate`] first; this method trusts the amounts.
    pub fn reduce(&self, state: &BudgetState, action: BudgetAction) -> BudgetState {
        match action {
            BudgetAction::AddChannel => {
                let channel = generate_new_channel();
                info!("Adding channel {}", channel.id);
                let mut channels = state.channels.clone();
                channels.push(Arc::new(channel));
                BudgetState { channels }
            }
            BudgetAction::RemoveChannel { channel_id } => {
                if state.position(channel_id).is_none() {
                    debug!("RemoveChannel: channel {channel_id} not found, ignoring");
                    return state.clone();
                }
                info!("Removing channel {channel_id}");
                BudgetState {
                    channels: state
                        .channels
                        .iter()
                        .filter(|c| c.id != channel_id)
                        .cloned()
                        .collect(),
                }
            }
            BudgetAction::RenameChannel { channel_id, name } => {
                // Name is not part of the allocation invariant; no recalculation.
                Self::update_channel(state, channel_id, "RenameChannel", |c| BudgetChannel {
                    name,
                    ..c.clone()
                })
            }
            BudgetAction::SetAllocationType {
                channel_id,
                allocation_type,
            } => Self::update_channel(state, channel_id, "SetAllocationType", |c| {
                recalc_channel(&BudgetChannel {
                    allocation_type,
                    ..c.clone()
                })
            }),
            BudgetAction::SetFrequency {
                channel_id,
                frequency,
            } => Self::update_channel(state, channel_id, "SetFrequency", |c| {
                recalc_channel(&BudgetChannel {
                    frequency,
                    ..c.clone()
                })
            }),
            BudgetAction::SetBaseline {
                channel_id,
                baseline,
            } => Self::update_channel(state, channel_id, "SetBaseline", |c| {
                recalc_channel(&BudgetChannel {
                    baseline,
                    ..c.clone()
                })
            }),
            BudgetAction::SetMonthBudget {
                channel_id,
                month,
                budget,
            } => Self::update_channel(state, channel_id, "SetMonthBudget", |c| {
                let mut month_breakdown = c.month_breakdown;
                month_breakdown[month.get()] = budget;
                recalc_channel(&BudgetChannel {
                    month_breakdown,
                    ..c.clone()
                })
            }),
        }
    }

    /// Replace the channel with `channel_id` by `apply(channel)`, sharing every
    /// other entry with the input state.
    fn update_channel<F>(state: &BudgetState, channel_id: Uuid, kind: &str, apply: F) -> BudgetState
    where
        F: FnOnce(&BudgetChannel) -> BudgetChannel,
    {
        let Some(idx) = state.position(channel_id) else {
            debug!("{kind}: channel {channel_id} not found, ignoring");
            return state.clone();
        };

        let mut channels = state.channels.clone();
        channels[idx] = Arc::new(apply(&state.channels[idx]));
        BudgetState { channels }
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}
