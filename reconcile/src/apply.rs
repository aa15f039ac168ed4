//! General-sequence synchronous executor.
//!
//! The engine has no mutation contract for an arbitrary sequence, so the
//! add/update/remove callbacks are all mandatory here: the caller decides
//! how each operation manifests against whatever backs the sequence (an
//! in-memory structure, a database, a UI tree). The executor walks
//! immutable pre-run snapshots, so callback mutation of the backing store
//! cannot invalidate iteration.

use reconcile_core::{try_plan_with, Op, Plan};

use crate::error::ApplyError;
use crate::report::Report;

/// Callbacks applying planned operations to a caller-backed sequence.
pub trait Apply<I, O> {
    /// Error type surfaced by the callbacks.
    type Error;

    /// Add a desired item that has no current counterpart.
    fn add(&mut self, desired: &I) -> Result<(), Self::Error>;

    /// Update a matched current item from its desired counterpart.
    fn update(&mut self, current: &O, desired: &I) -> Result<(), Self::Error>;

    /// Remove a current item that has no desired counterpart.
    fn remove(&mut self, current: &O) -> Result<(), Self::Error>;
}

/// Apply a plan by invoking the callbacks in add → update → remove order.
///
/// Fail-fast: the first callback error aborts the run and the remaining
/// plan items are skipped. Effects already applied are not undone.
pub fn apply<I, O, A>(
    plan: &Plan,
    desired: &[I],
    current: &[O],
    actions: &mut A,
) -> Result<Report, ApplyError<A::Error>>
where
    A: Apply<I, O>,
{
    let summary = plan.summary();
    tracing::debug!(
        additions = summary.additions,
        updates = summary.updates,
        removals = summary.removals,
        "applying plan"
    );

    for op in plan.ops() {
        match op {
            Op::Add { desired: di } => actions.add(&desired[di]),
            Op::Update {
                current: ci,
                desired: di,
            } => actions.update(&current[ci], &desired[di]),
            Op::Remove { current: ci } => actions.remove(&current[ci]),
        }
        .map_err(fail)?;
    }

    Ok(summary.into())
}

/// Plan and apply in one call, updating every identity match.
pub fn reconcile<I, O, M, A>(
    desired: &[I],
    current: &[O],
    same_entity: M,
    actions: &mut A,
) -> Result<Report, ApplyError<A::Error>>
where
    M: FnMut(&I, &O) -> bool,
    A: Apply<I, O>,
{
    let plan = reconcile_core::plan(desired, current, same_entity);
    apply(&plan, desired, current, actions)
}

/// Plan and apply in one call, updating only matched pairs the value
/// comparer says differ.
pub fn reconcile_with<I, O, M, V, A>(
    desired: &[I],
    current: &[O],
    same_entity: M,
    same_value: V,
    actions: &mut A,
) -> Result<Report, ApplyError<A::Error>>
where
    M: FnMut(&I, &O) -> bool,
    V: FnMut(&I, &O) -> bool,
    A: Apply<I, O>,
{
    let plan = reconcile_core::plan_with(desired, current, same_entity, same_value);
    apply(&plan, desired, current, actions)
}

/// Like [`reconcile_with`], but the predicates themselves may fail.
///
/// A predicate error aborts before any side effect runs; it surfaces as
/// [`ApplyError::Callback`] exactly like an execution failure.
pub fn try_reconcile_with<I, O, M, V, A>(
    desired: &[I],
    current: &[O],
    same_entity: M,
    same_value: V,
    actions: &mut A,
) -> Result<Report, ApplyError<A::Error>>
where
    M: FnMut(&I, &O) -> Result<bool, A::Error>,
    V: FnMut(&I, &O) -> Result<bool, A::Error>,
    A: Apply<I, O>,
{
    let plan = try_plan_with(desired, current, same_entity, same_value).map_err(fail)?;
    apply(&plan, desired, current, actions)
}

fn fail<E>(e: E) -> ApplyError<E> {
    tracing::debug!("callback failed, aborting plan");
    ApplyError::Callback(e)
}
