use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::channel::BudgetChannel;

/// Snapshot of every channel in the plan, in creation order.
///
/// Channels are shared behind `Arc`, so cloning a state is cheap and a
/// reducer step can hand unaffected channels over by reference. A UI layer
/// can use `Arc::ptr_eq` to skip re-rendering channels that did not change.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BudgetState {
    pub channels: Vec<Arc<BudgetChannel>>,
}

impl BudgetState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn find(&self, channel_id: Uuid) -> Option<&Arc<BudgetChannel>> {
        self.channels.iter().find(|c| c.id == channel_id)
    }

    #[must_use]
    pub fn position(&self, channel_id: Uuid) -> Option<usize> {
        self.channels.iter().position(|c| c.id == channel_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BudgetChannel> {
        self.channels.iter().map(|c| c.as_ref())
    }
}
