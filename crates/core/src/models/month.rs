use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Number of months in a plan year.
pub const MONTHS_PER_YEAR: usize = 12;

const CALENDAR: [Month; MONTHS_PER_YEAR] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// A position in the twelve-month breakdown, `0` being the first month of the plan year.
///
/// Construction is the only place an index is checked; once a `MonthIndex`
/// exists it can be used to address a breakdown without bounds failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct MonthIndex(usize);

impl MonthIndex {
    pub fn new(index: usize) -> Result<Self, CoreError> {
        if index < MONTHS_PER_YEAR {
            Ok(Self(index))
        } else {
            Err(CoreError::MonthOutOfRange(index))
        }
    }

    /// All twelve months in plan order.
    pub fn all() -> impl Iterator<Item = MonthIndex> {
        (0..MONTHS_PER_YEAR).map(MonthIndex)
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    #[must_use]
    pub fn month(self) -> Month {
        CALENDAR[self.0]
    }

    /// Three-letter label, e.g. "Jan".
    #[must_use]
    pub fn short_name(self) -> &'static str {
        &self.month().name()[..3]
    }
}

impl TryFrom<usize> for MonthIndex {
    type Error = CoreError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<MonthIndex> for usize {
    fn from(index: MonthIndex) -> Self {
        index.0
    }
}

impl std::fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
