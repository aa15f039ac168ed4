//! List-shaped reconciliation over `Vec<T>`.
//!
//! Shape defaults: additions append at the tail, removals delete the
//! planned element in place, and a matched item is left as-is unless the
//! caller supplies an update callback. Removal targets are identified by
//! pre-run index (adjusted for earlier removals), which stays well defined
//! even when duplicate values are present.

use reconcile_core::{plan, plan_with, Plan};

use crate::report::Report;

/// Reconcile `current` against `desired`, matching by value equality.
///
/// Items present in both collections are left untouched; items only in
/// `desired` are appended; items only in `current` are removed. Duplicate
/// values pair up one-to-one in order.
pub fn reconcile_vec<T>(current: &mut Vec<T>, desired: &[T]) -> Report
where
    T: Clone + PartialEq,
{
    reconcile_vec_with(current, desired, |d, c| d == c, |d, c| d == c, |_, _| {})
}

/// Reconcile with a caller identity predicate, treating every identity
/// match as an update.
///
/// The list shape has no intrinsic update action, so matched items are
/// left as-is; they are still counted in the report's `updated` field.
pub fn reconcile_vec_by<T, M>(current: &mut Vec<T>, desired: &[T], same_entity: M) -> Report
where
    T: Clone,
    M: FnMut(&T, &T) -> bool,
{
    let plan = plan(desired, current.as_slice(), same_entity);
    apply_vec(current, desired, &plan, T::clone, |_, _| {})
}

/// Reconcile with caller identity and value predicates; matched pairs the
/// comparer says differ are handed to `on_update`.
pub fn reconcile_vec_with<T, M, V, U>(
    current: &mut Vec<T>,
    desired: &[T],
    same_entity: M,
    same_value: V,
    on_update: U,
) -> Report
where
    T: Clone,
    M: FnMut(&T, &T) -> bool,
    V: FnMut(&T, &T) -> bool,
    U: FnMut(&mut T, &T),
{
    let plan = plan_with(desired, current.as_slice(), same_entity, same_value);
    apply_vec(current, desired, &plan, T::clone, on_update)
}

/// Reconcile a `Vec<O>` against desired items of a different type.
///
/// `convert` builds the appended value for each addition. Every identity
/// match is treated as an update and handed to `on_update`; pass a no-op
/// closure to leave matched items as-is.
pub fn reconcile_vec_from<I, O, M, C, U>(
    current: &mut Vec<O>,
    desired: &[I],
    same_entity: M,
    convert: C,
    on_update: U,
) -> Report
where
    M: FnMut(&I, &O) -> bool,
    C: FnMut(&I) -> O,
    U: FnMut(&mut O, &I),
{
    let plan = plan(desired, current.as_slice(), same_entity);
    apply_vec(current, desired, &plan, convert, on_update)
}

fn apply_vec<I, O, C, U>(
    current: &mut Vec<O>,
    desired: &[I],
    plan: &Plan,
    mut convert: C,
    mut on_update: U,
) -> Report
where
    C: FnMut(&I) -> O,
    U: FnMut(&mut O, &I),
{
    let summary = plan.summary();
    tracing::debug!(
        additions = summary.additions,
        updates = summary.updates,
        removals = summary.removals,
        "reconciling vec"
    );

    // Appends do not disturb pre-run indices, so updates and removals can
    // keep addressing the original positions.
    for &di in plan.additions() {
        current.push(convert(&desired[di]));
    }
    for u in plan.updates() {
        on_update(&mut current[u.current], &desired[u.desired]);
    }
    // Removal indices are ascending pre-run positions; each earlier removal
    // shifts the remainder left by one.
    for (done, &ci) in plan.removals().iter().enumerate() {
        current.remove(ci - done);
    }

    summary.into()
}
