//! # reconcile-core
//!
//! Pure planning logic for collection reconciliation (no I/O, instant tests).
//!
//! Reconciliation converges a mutable *current* collection toward a read-only
//! *desired* collection by computing and applying add/update/remove
//! operations. This crate implements only the computing half: the planner is
//! a pure function from two snapshots plus caller-supplied predicates to a
//! [`Plan`].
//!
//! ## Design Philosophy
//!
//! All modules in this crate are **pure** - they take input and produce output
//! without side effects. This enables:
//! - Instant unit tests (no mocks, no async)
//! - Deterministic behavior (same input → same output)
//! - Easy reasoning about what a reconciliation run will do
//!
//! The actual mutation (container edits, callback I/O) is performed by the
//! `reconcile` crate, which interprets the plans produced here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod plan;
pub mod planner;

pub use plan::{Op, Plan, PlanSummary, Update};
pub use planner::{plan, plan_with, try_plan, try_plan_with};
