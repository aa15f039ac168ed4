//! Run reporting.
//!
//! Every executor and shape adapter returns a [`Report`] describing what a
//! successful run applied. The same counters are available before execution
//! via [`Plan::summary`](reconcile_core::Plan::summary).

use reconcile_core::PlanSummary;
use serde::{Deserialize, Serialize};

/// Counts of the operations applied by one reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Report {
    /// Items added to the current collection.
    pub added: usize,
    /// Matched items that were updated (or handed to the update callback).
    pub updated: usize,
    /// Items removed from the current collection.
    pub removed: usize,
    /// Matched items the value comparer declared equal; left untouched.
    pub unchanged: usize,
}

impl Report {
    /// Total number of operations applied.
    pub fn total(&self) -> usize {
        self.added + self.updated + self.removed
    }

    /// True if the run applied nothing (the collections were already
    /// equivalent under the supplied predicates).
    pub fn is_noop(&self) -> bool {
        self.total() == 0
    }
}

impl From<PlanSummary> for Report {
    fn from(summary: PlanSummary) -> Self {
        Self {
            added: summary.additions,
            updated: summary.updates,
            removed: summary.removals,
            unchanged: summary.unchanged,
        }
    }
}
