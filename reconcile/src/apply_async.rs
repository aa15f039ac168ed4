//! General-sequence asynchronous executor.
//!
//! Same ordering and wiring as the synchronous executor, but every callback
//! returns a future and is awaited to completion before the next one starts.
//! Callbacks never run concurrently, so ordering stays deterministic when
//! they touch shared external state (one transaction log, one remote API).
//!
//! A single [`CancellationToken`] is handed to every callback invocation,
//! and the executor checks it before each callback. Once it fires, no
//! further callbacks are scheduled and the run surfaces
//! [`ApplyError::Cancelled`]; effects already applied are not undone.
//! Partial application is expected and acceptable - this is explicitly not
//! transactional.

use async_trait::async_trait;
use reconcile_core::{Op, Plan};
use tokio_util::sync::CancellationToken;

use crate::error::ApplyError;
use crate::report::Report;

/// Async callbacks applying planned operations to a caller-backed sequence.
///
/// Implementations that perform their own cancellable I/O should honor the
/// token they are handed (e.g. `tokio::select!` against
/// `cancel.cancelled()`), so that cancellation is observed inside a
/// callback and not just between callbacks.
#[async_trait]
pub trait ApplyAsync<I: Sync, O: Sync>: Send {
    /// Error type surfaced by the callbacks.
    type Error: Send;

    /// Add a desired item that has no current counterpart.
    async fn add(&mut self, desired: &I, cancel: &CancellationToken)
        -> Result<(), Self::Error>;

    /// Update a matched current item from its desired counterpart.
    async fn update(
        &mut self,
        current: &O,
        desired: &I,
        cancel: &CancellationToken,
    ) -> Result<(), Self::Error>;

    /// Remove a current item that has no desired counterpart.
    async fn remove(&mut self, current: &O, cancel: &CancellationToken)
        -> Result<(), Self::Error>;
}

/// Apply a plan by awaiting the callbacks sequentially in
/// add → update → remove order.
///
/// Fail-fast on the first callback error; stops without scheduling further
/// callbacks once `cancel` fires. In both cases effects already applied
/// stand.
pub async fn apply_async<I, O, A>(
    plan: &Plan,
    desired: &[I],
    current: &[O],
    actions: &mut A,
    cancel: &CancellationToken,
) -> Result<Report, ApplyError<A::Error>>
where
    I: Sync,
    O: Sync,
    A: ApplyAsync<I, O>,
{
    let summary = plan.summary();
    tracing::debug!(
        additions = summary.additions,
        updates = summary.updates,
        removals = summary.removals,
        "applying plan"
    );

    for op in plan.ops() {
        if cancel.is_cancelled() {
            tracing::debug!("cancellation observed, stopping plan");
            return Err(ApplyError::Cancelled);
        }
        match op {
            Op::Add { desired: di } => actions.add(&desired[di], cancel).await,
            Op::Update {
                current: ci,
                desired: di,
            } => actions.update(&current[ci], &desired[di], cancel).await,
            Op::Remove { current: ci } => actions.remove(&current[ci], cancel).await,
        }
        .map_err(fail)?;
    }

    Ok(summary.into())
}

/// Plan and apply in one call, updating every identity match.
///
/// Planning is pure comparison and never suspends; only the callbacks are
/// awaited.
pub async fn reconcile_async<I, O, M, A>(
    desired: &[I],
    current: &[O],
    same_entity: M,
    actions: &mut A,
    cancel: &CancellationToken,
) -> Result<Report, ApplyError<A::Error>>
where
    I: Sync,
    O: Sync,
    M: FnMut(&I, &O) -> bool,
    A: ApplyAsync<I, O>,
{
    let plan = reconcile_core::plan(desired, current, same_entity);
    apply_async(&plan, desired, current, actions, cancel).await
}

/// Plan and apply in one call, updating only matched pairs the value
/// comparer says differ.
pub async fn reconcile_async_with<I, O, M, V, A>(
    desired: &[I],
    current: &[O],
    same_entity: M,
    same_value: V,
    actions: &mut A,
    cancel: &CancellationToken,
) -> Result<Report, ApplyError<A::Error>>
where
    I: Sync,
    O: Sync,
    M: FnMut(&I, &O) -> bool,
    V: FnMut(&I, &O) -> bool,
    A: ApplyAsync<I, O>,
{
    let plan = reconcile_core::plan_with(desired, current, same_entity, same_value);
    apply_async(&plan, desired, current, actions, cancel).await
}

fn fail<E>(e: E) -> ApplyError<E> {
    tracing::debug!("callback failed, aborting plan");
    ApplyError::Callback(e)
}
