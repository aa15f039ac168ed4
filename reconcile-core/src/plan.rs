//! Reconciliation plans.
//!
//! A [`Plan`] records the decisions of one planning pass as three ordered,
//! disjoint sets: additions, updates, and removals. Entries are indices into
//! the pre-run desired and current snapshots, so building a plan never clones
//! or moves items.
//!
//! The plan is a list of instructions, not a side effect. Executors interpret
//! it against a real container (or caller callbacks) in a separate step, and
//! the plan is discarded once the call completes - it is never persisted or
//! shared across calls.

/// A matched pair scheduled for update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Update {
    /// Index of the matched item in the pre-run current snapshot.
    pub current: usize,
    /// Index of the desired item driving the update.
    pub desired: usize,
}

/// A single planned operation.
///
/// These are instructions, not side effects: the executor interprets them
/// and performs the actual mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Add a desired item that has no current counterpart.
    Add {
        /// Index into the desired snapshot.
        desired: usize,
    },
    /// Update a matched current item from its desired counterpart.
    Update {
        /// Index into the pre-run current snapshot.
        current: usize,
        /// Index into the desired snapshot.
        desired: usize,
    },
    /// Remove a current item that has no desired counterpart.
    Remove {
        /// Index into the pre-run current snapshot.
        current: usize,
    },
}

/// Counters describing a plan without its item detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanSummary {
    /// Number of planned additions.
    pub additions: usize,
    /// Number of planned updates.
    pub updates: usize,
    /// Number of planned removals.
    pub removals: usize,
    /// Matched pairs the value comparer declared equal; no operation planned.
    pub unchanged: usize,
}

/// The ordered add/update/remove decision sets for one reconciliation call.
///
/// Invariants maintained by the planner:
/// - every desired item appears in exactly one of additions or updates
///   (or is counted as unchanged);
/// - every pre-run current item appears in exactly one of updates or
///   removals (or is counted as unchanged);
/// - additions and updates follow desired order, removals follow pre-run
///   current order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    additions: Vec<usize>,
    updates: Vec<Update>,
    removals: Vec<usize>,
    unchanged: usize,
}

impl Plan {
    pub(crate) fn record_addition(&mut self, desired: usize) {
        self.additions.push(desired);
    }

    pub(crate) fn record_update(&mut self, current: usize, desired: usize) {
        self.updates.push(Update { current, desired });
    }

    pub(crate) fn record_removal(&mut self, current: usize) {
        self.removals.push(current);
    }

    pub(crate) fn record_unchanged(&mut self) {
        self.unchanged += 1;
    }

    /// Desired indices to add, in desired order.
    pub fn additions(&self) -> &[usize] {
        &self.additions
    }

    /// Matched pairs to update, in desired order.
    pub fn updates(&self) -> &[Update] {
        &self.updates
    }

    /// Pre-run current indices to remove, in pre-run current order.
    ///
    /// Always ascending, since the planner visits current items in order.
    pub fn removals(&self) -> &[usize] {
        &self.removals
    }

    /// Matched pairs that need no operation.
    pub fn unchanged(&self) -> usize {
        self.unchanged
    }

    /// Total number of planned operations.
    pub fn len(&self) -> usize {
        self.additions.len() + self.updates.len() + self.removals.len()
    }

    /// True if the plan contains no operations (the collections are already
    /// equivalent under the supplied predicates).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counters for this plan.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            additions: self.additions.len(),
            updates: self.updates.len(),
            removals: self.removals.len(),
            unchanged: self.unchanged,
        }
    }

    /// Iterate the planned operations in apply order: all additions, then
    /// all updates, then all removals.
    ///
    /// Removals come last so that destructive edits happen only after the
    /// rest of the plan has been applied.
    pub fn ops(&self) -> impl Iterator<Item = Op> + '_ {
        let adds = self.additions.iter().map(|&desired| Op::Add { desired });
        let updates = self.updates.iter().map(|u| Op::Update {
            current: u.current,
            desired: u.desired,
        });
        let removes = self.removals.iter().map(|&current| Op::Remove { current });
        adds.chain(updates).chain(removes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> Plan {
        let mut plan = Plan::default();
        plan.record_addition(2);
        plan.record_update(0, 1);
        plan.record_removal(1);
        plan.record_removal(3);
        plan.record_unchanged();
        plan
    }

    #[test]
    fn empty_plan_is_empty() {
        let plan = Plan::default();
        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
        assert_eq!(plan.summary(), PlanSummary::default());
    }

    #[test]
    fn unchanged_does_not_count_as_operation() {
        let mut plan = Plan::default();
        plan.record_unchanged();
        plan.record_unchanged();

        assert!(plan.is_empty());
        assert_eq!(plan.unchanged(), 2);
    }

    #[test]
    fn summary_counts_each_set() {
        let summary = sample_plan().summary();

        assert_eq!(summary.additions, 1);
        assert_eq!(summary.updates, 1);
        assert_eq!(summary.removals, 2);
        assert_eq!(summary.unchanged, 1);
    }

    #[test]
    fn ops_yield_add_update_remove_order() {
        let ops: Vec<Op> = sample_plan().ops().collect();

        assert_eq!(
            ops,
            vec![
                Op::Add { desired: 2 },
                Op::Update {
                    current: 0,
                    desired: 1
                },
                Op::Remove { current: 1 },
                Op::Remove { current: 3 },
            ]
        );
    }

    #[test]
    fn accessors_preserve_recording_order() {
        let plan = sample_plan();

        assert_eq!(plan.additions(), &[2]);
        assert_eq!(
            plan.updates(),
            &[Update {
                current: 0,
                desired: 1
            }]
        );
        assert_eq!(plan.removals(), &[1, 3]);
    }
}
