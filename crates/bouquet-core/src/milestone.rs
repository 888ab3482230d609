//! Celebratory day counts

use std::collections::BTreeSet;

/// Default milestones: 100 days, one year, 500 days, two years, and so on
pub const DEFAULT_MILESTONES: [u64; 8] = [100, 365, 500, 730, 1000, 1095, 1460, 1825];

/// Fixed set of elapsed-day values considered celebratory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MilestoneSet {
    days: BTreeSet<u64>,
}

impl MilestoneSet {
    pub fn new(days: impl IntoIterator<Item = u64>) -> Self {
        MilestoneSet {
            days: days.into_iter().collect(),
        }
    }

    /// Pure membership test
    #[inline]
    pub fn contains(&self, elapsed_days: u64) -> bool {
        self.days.contains(&elapsed_days)
    }

    /// First milestone strictly after `elapsed_days`, if any remain
    pub fn next_after(&self, elapsed_days: u64) -> Option<u64> {
        self.days
            .range(elapsed_days.saturating_add(1)..)
            .next()
            .copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Default for MilestoneSet {
    fn default() -> Self {
        Self::new(DEFAULT_MILESTONES)
    }
}
