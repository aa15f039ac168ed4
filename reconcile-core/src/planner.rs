//! The planning pass.
//!
//! For each desired item, in desired order, the planner scans the current
//! snapshot in its pre-run order for the first **unmatched** item the
//! identity predicate accepts:
//! - match found, value comparer says the pair differs (or no comparer):
//!   the pair is scheduled for update and the current item marked matched;
//! - match found, value comparer says the pair is equal: the current item is
//!   marked matched and counted as unchanged;
//! - no match: the desired item is scheduled for addition.
//!
//! Every current item never marked matched is scheduled for removal, in
//! pre-run order.
//!
//! Identity is not required to be unique. When several current items match
//! one desired item, the first in pre-run order wins and the rest fall into
//! the removal set. This mirrors long-standing behavior and is deliberate.
//!
//! Complexity is O(n·m): the identity predicate is arbitrary, so no index
//! can be built over it. Shape adapters with a pure key identity (maps) use
//! a hash index instead and skip this scan entirely.
//!
//! Entry points come in two families, kept distinct on purpose:
//! [`plan`]/[`try_plan`] treat every identity match as requiring an update,
//! while [`plan_with`]/[`try_plan_with`] consult a value comparer and skip
//! pairs it declares equal.

use std::convert::Infallible;

use crate::plan::Plan;

/// Compute a plan, treating every identity match as requiring an update.
pub fn plan<I, O, M>(desired: &[I], current: &[O], mut same_entity: M) -> Plan
where
    M: FnMut(&I, &O) -> bool,
{
    let result = try_plan_with::<I, O, Infallible, _, _>(
        desired,
        current,
        |d, c| Ok(same_entity(d, c)),
        |_, _| Ok(false),
    );
    match result {
        Ok(plan) => plan,
        Err(e) => match e {},
    }
}

/// Compute a plan, scheduling updates only for matched pairs the value
/// comparer says differ.
pub fn plan_with<I, O, M, V>(
    desired: &[I],
    current: &[O],
    mut same_entity: M,
    mut same_value: V,
) -> Plan
where
    M: FnMut(&I, &O) -> bool,
    V: FnMut(&I, &O) -> bool,
{
    let result = try_plan_with::<I, O, Infallible, _, _>(
        desired,
        current,
        |d, c| Ok(same_entity(d, c)),
        |d, c| Ok(same_value(d, c)),
    );
    match result {
        Ok(plan) => plan,
        Err(e) => match e {},
    }
}

/// Fallible form of [`plan`]: a predicate error aborts planning immediately
/// and no partial plan escapes.
pub fn try_plan<I, O, E, M>(desired: &[I], current: &[O], same_entity: M) -> Result<Plan, E>
where
    M: FnMut(&I, &O) -> Result<bool, E>,
{
    try_plan_with(desired, current, same_entity, |_, _| Ok(false))
}

/// Fallible form of [`plan_with`].
///
/// Errors from either predicate propagate exactly like callback errors
/// during execution: immediate stop, no aggregation.
pub fn try_plan_with<I, O, E, M, V>(
    desired: &[I],
    current: &[O],
    mut same_entity: M,
    mut same_value: V,
) -> Result<Plan, E>
where
    M: FnMut(&I, &O) -> Result<bool, E>,
    V: FnMut(&I, &O) -> Result<bool, E>,
{
    let mut matched = vec![false; current.len()];
    let mut plan = Plan::default();

    for (di, d) in desired.iter().enumerate() {
        let mut hit = None;
        for (ci, c) in current.iter().enumerate() {
            if matched[ci] {
                continue;
            }
            if same_entity(d, c)? {
                hit = Some(ci);
                break;
            }
        }
        match hit {
            Some(ci) => {
                matched[ci] = true;
                if same_value(d, &current[ci])? {
                    plan.record_unchanged();
                } else {
                    plan.record_update(ci, di);
                }
            }
            None => plan.record_addition(di),
        }
    }

    for (ci, was_matched) in matched.iter().enumerate() {
        if !was_matched {
            plan.record_removal(ci);
        }
    }

    Ok(plan)
}
