use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::month::{MonthIndex, MONTHS_PER_YEAR};

/// Placeholder name given to every freshly generated channel.
pub const DEFAULT_CHANNEL_NAME: &str = "New channel";

/// Twelve per-month budget figures, index 0 = first month of the plan year.
pub type MonthBreakdown = [f64; MONTHS_PER_YEAR];

/// Cadence at which the baseline figure is entered under Equal allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetFrequency {
    Annually,
    Quarterly,
    Monthly,
}

impl BudgetFrequency {
    /// Divisor turning a baseline at this frequency into one month's share.
    ///
    /// Quarterly divides by 3, not 4.
    #[must_use]
    pub fn divisor(self) -> f64 {
        match self {
            BudgetFrequency::Annually => 12.0,
            BudgetFrequency::Quarterly => 3.0,
            BudgetFrequency::Monthly => 1.0,
        }
    }

    /// Lower-case adjective used in "Baseline <label> Budget" captions.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BudgetFrequency::Annually => "annual",
            BudgetFrequency::Quarterly => "quarterly",
            BudgetFrequency::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for BudgetFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetFrequency::Annually => write!(f, "Annually"),
            BudgetFrequency::Quarterly => write!(f, "Quarterly"),
            BudgetFrequency::Monthly => write!(f, "Monthly"),
        }
    }
}

/// Which side of a channel is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllocationType {
    /// Baseline + frequency drive the monthly figures
    Equal,
    /// Monthly figures drive the baseline
    Manual,
}

impl std::fmt::Display for AllocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocationType::Equal => write!(f, "Equal"),
            AllocationType::Manual => write!(f, "Manual"),
        }
    }
}

/// A named budget category with its own allocation settings.
///
/// **Consistency**: derived fields are only ever written by [`recalc_channel`].
/// Under `Equal` the breakdown is derived; under `Manual` the baseline is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetChannel {
    /// Unique identifier, fixed at creation
    pub id: Uuid,

    /// Free-text label
    pub name: String,

    /// Inert under Manual allocation but always kept
    pub frequency: BudgetFrequency,

    /// Periodic figure at `frequency`. `None` means nothing entered yet,
    /// which is distinct from an explicit zero.
    pub baseline: Option<f64>,

    pub allocation_type: AllocationType,

    pub month_breakdown: MonthBreakdown,
}

impl BudgetChannel {
    /// Baseline used for arithmetic: a missing baseline counts as zero.
    #[must_use]
    pub fn effective_baseline(&self) -> f64 {
        self.baseline.unwrap_or(0.0)
    }

    /// Yearly total of the breakdown.
    #[must_use]
    pub fn total(&self) -> f64 {
        sum_breakdown(&self.month_breakdown)
    }

    #[must_use]
    pub fn month_budget(&self, month: MonthIndex) -> f64 {
        self.month_breakdown[month.get()]
    }

    /// Check the Equal/Manual invariant and non-negativity of every entry.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.month_breakdown.iter().any(|v| *v < 0.0 || !v.is_finite()) {
            return false;
        }
        match self.allocation_type {
            AllocationType::Equal => {
                let share = equal_share(self);
                self.month_breakdown.iter().all(|v| *v == share)
            }
            AllocationType::Manual => self.baseline == Some(self.total()),
        }
    }
}

/// Produce a fresh channel: new id, placeholder name, zero baseline,
/// Equal allocation at annual frequency, all-zero breakdown.
#[must_use]
pub fn generate_new_channel() -> BudgetChannel {
    BudgetChannel {
        id: Uuid::new_v4(),
        name: DEFAULT_CHANNEL_NAME.to_string(),
        frequency: BudgetFrequency::Annually,
        baseline: Some(0.0),
        allocation_type: AllocationType::Equal,
        month_breakdown: [0.0; MONTHS_PER_YEAR],
    }
}

/// Re-derive the dependent fields of a channel for its current allocation type.
///
/// - Manual: baseline becomes the sum of the breakdown.
/// - Equal: every month becomes `effective_baseline / divisor(frequency)`;
///   the stored baseline is left as is, including `None`.
///
/// Pure and idempotent: the input is not touched, and feeding the output back
/// in yields the same value.
#[must_use]
pub fn recalc_channel(channel: &BudgetChannel) -> BudgetChannel {
    match channel.allocation_type {
        AllocationType::Manual => BudgetChannel {
            baseline: Some(sum_breakdown(&channel.month_breakdown)),
            ..channel.clone()
        },
        AllocationType::Equal => BudgetChannel {
            month_breakdown: [equal_share(channel); MONTHS_PER_YEAR],
            ..channel.clone()
        },
    }
}

fn equal_share(channel: &BudgetChannel) -> f64 {
    channel.effective_baseline() / channel.frequency.divisor()
}

// Left-to-right fold so the derived baseline is reproducible bit for bit.
fn sum_breakdown(breakdown: &MonthBreakdown) -> f64 {
    breakdown.iter().fold(0.0, |acc, v| acc + v)
}
