//! # reconcile
//!
//! Executors and shape adapters for collection reconciliation.
//!
//! Reconciliation converges a mutable *current* collection toward a
//! read-only *desired* collection. `reconcile-core` computes a pure
//! [`Plan`]; this crate interprets it:
//!
//! ```text
//! caller → shape adapter → planner (pure) → executor → mutated collection
//! ```
//!
//! Three front ends cover the common container shapes:
//! - [`vec`]: list-shaped, additions append and removals delete in place;
//! - [`map`]: map-shaped over `HashMap`, keyed insert/overwrite/delete;
//! - [`apply`] / [`apply_async`]: general sequences, where the caller
//!   supplies every callback because the engine has no mutation contract
//!   for an arbitrary backing store.
//!
//! Every executor applies additions, then updates, then removals, so
//! destructive edits happen last. Execution is fail-fast and never
//! transactional: effects applied before an error or cancellation stand.
//!
//! # Example
//!
//! ```
//! use reconcile::reconcile_vec;
//!
//! let mut current = vec![1, 3];
//! let report = reconcile_vec(&mut current, &[1, 2]);
//!
//! assert_eq!(current, vec![1, 2]);
//! assert_eq!(report.added, 1);
//! assert_eq!(report.removed, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod apply;
pub mod apply_async;
pub mod error;
pub mod map;
pub mod report;
pub mod vec;

pub use apply::{apply, reconcile, reconcile_with, try_reconcile_with, Apply};
pub use apply_async::{apply_async, reconcile_async, reconcile_async_with, ApplyAsync};
pub use error::ApplyError;
pub use map::{reconcile_map, reconcile_map_from, reconcile_map_from_with, reconcile_map_with};
pub use report::Report;
pub use vec::{reconcile_vec, reconcile_vec_by, reconcile_vec_from, reconcile_vec_with};

// Re-export the pure core so most callers need a single dependency.
pub use reconcile_core::{plan, plan_with, try_plan, try_plan_with, Op, Plan, PlanSummary, Update};
