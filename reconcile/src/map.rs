//! Map-shaped reconciliation over `HashMap<K, V>`.
//!
//! Identity for a map is key equality, which lets planning use the hash
//! index directly: one pass over `desired` and one over `current`, O(n + m)
//! instead of the general predicate scan. Additions insert, updates
//! overwrite the value at the key, removals delete the key. Removals are
//! applied last, as everywhere else.

use std::collections::HashMap;
use std::hash::Hash;

use crate::report::Report;

/// Reconcile `current` against `desired`, overwriting values that differ
/// under `==`.
pub fn reconcile_map<K, V>(current: &mut HashMap<K, V>, desired: &HashMap<K, V>) -> Report
where
    K: Eq + Hash + Clone,
    V: Clone + PartialEq,
{
    reconcile_map_with(current, desired, |d, c| d == c)
}

/// Reconcile with a caller value comparer deciding which matched values
/// need overwriting.
pub fn reconcile_map_with<K, V, S>(
    current: &mut HashMap<K, V>,
    desired: &HashMap<K, V>,
    same_value: S,
) -> Report
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: FnMut(&V, &V) -> bool,
{
    apply_map(current, desired, V::clone, same_value)
}

/// Reconcile a `HashMap<K, V>` against desired values of a different type,
/// overwriting the value at every matched key.
pub fn reconcile_map_from<K, D, V, C>(
    current: &mut HashMap<K, V>,
    desired: &HashMap<K, D>,
    convert: C,
) -> Report
where
    K: Eq + Hash + Clone,
    C: FnMut(&D) -> V,
{
    apply_map(current, desired, convert, |_, _| false)
}

/// Like [`reconcile_map_from`], but a caller comparer decides which matched
/// keys actually need their value rebuilt.
pub fn reconcile_map_from_with<K, D, V, C, S>(
    current: &mut HashMap<K, V>,
    desired: &HashMap<K, D>,
    convert: C,
    same_value: S,
) -> Report
where
    K: Eq + Hash + Clone,
    C: FnMut(&D) -> V,
    S: FnMut(&D, &V) -> bool,
{
    apply_map(current, desired, convert, same_value)
}

fn apply_map<K, D, V, C, S>(
    current: &mut HashMap<K, V>,
    desired: &HashMap<K, D>,
    mut convert: C,
    mut same_value: S,
) -> Report
where
    K: Eq + Hash + Clone,
    C: FnMut(&D) -> V,
    S: FnMut(&D, &V) -> bool,
{
    // Stale keys are snapshotted before any mutation; removals run last.
    let stale: Vec<K> = current
        .keys()
        .filter(|k| !desired.contains_key(*k))
        .cloned()
        .collect();

    let mut report = Report::default();
    for (k, d) in desired {
        match current.get_mut(k) {
            Some(v) => {
                if same_value(d, v) {
                    report.unchanged += 1;
                } else {
                    *v = convert(d);
                    report.updated += 1;
                }
            }
            None => {
                current.insert(k.clone(), convert(d));
                report.added += 1;
            }
        }
    }
    for k in stale {
        current.remove(&k);
        report.removed += 1;
    }

    tracing::debug!(
        added = report.added,
        updated = report.updated,
        removed = report.removed,
        "reconciled map"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map<const N: usize>(pairs: [(&'static str, i32); N]) -> HashMap<&'static str, i32> {
        pairs.into_iter().collect()
    }

    #[test]
    fn converges_keys_and_values() {
        let mut current = map([("a", 1), ("b", 2)]);
        let desired = map([("a", 2), ("c", 3)]);

        let report = reconcile_map(&mut current, &desired);

        assert_eq!(current, desired);
        assert_eq!(report.updated, 1);
        assert_eq!(report.added, 1);
        assert_eq!(report.removed, 1);
        assert_eq!(report.unchanged, 0);
    }

    #[test]
    fn equal_values_left_untouched() {
        let mut current = map([("a", 1), ("b", 2)]);
        let desired = map([("a", 1), ("b", 2)]);

        let report = reconcile_map(&mut current, &desired);

        assert!(report.is_noop());
        assert_eq!(report.unchanged, 2);
    }

    #[test]
    fn empty_current_gains_everything() {
        let mut current: HashMap<&str, i32> = HashMap::new();
        let desired = map([("x", 1), ("y", 2)]);

        let report = reconcile_map(&mut current, &desired);

        assert_eq!(current, desired);
        assert_eq!(report.added, 2);
    }

    #[test]
    fn empty_desired_drains_everything() {
        let mut current = map([("x", 1), ("y", 2)]);
        let desired: HashMap<&str, i32> = HashMap::new();

        let report = reconcile_map(&mut current, &desired);

        assert!(current.is_empty());
        assert_eq!(report.removed, 2);
    }

    #[test]
    fn custom_comparer_controls_overwrites() {
        // Compare modulo 10: 1 vs 11 counts as equal, 2 vs 23 does not.
        let mut current = map([("a", 1), ("b", 2)]);
        let desired = map([("a", 11), ("b", 23)]);

        let report = reconcile_map_with(&mut current, &desired, |d, c| d % 10 == c % 10);

        assert_eq!(current, map([("a", 1), ("b", 23)]));
        assert_eq!(report.unchanged, 1);
        assert_eq!(report.updated, 1);
    }

    #[test]
    fn from_converts_desired_values() {
        let mut current: HashMap<&str, String> = HashMap::new();
        current.insert("a", "old".to_string());

        let mut desired: HashMap<&str, i32> = HashMap::new();
        desired.insert("a", 1);
        desired.insert("b", 2);

        let report = reconcile_map_from(&mut current, &desired, |d| format!("v{d}"));

        assert_eq!(current.get("a"), Some(&"v1".to_string()));
        assert_eq!(current.get("b"), Some(&"v2".to_string()));
        assert_eq!(report.updated, 1);
        assert_eq!(report.added, 1);
    }

    #[test]
    fn from_with_comparer_skips_converged_values() {
        let mut current: HashMap<&str, String> = HashMap::new();
        current.insert("a", "v1".to_string());
        current.insert("b", "stale".to_string());

        let mut desired: HashMap<&str, i32> = HashMap::new();
        desired.insert("a", 1);
        desired.insert("b", 2);

        let report = reconcile_map_from_with(
            &mut current,
            &desired,
            |d| format!("v{d}"),
            |d, v| v == &format!("v{d}"),
        );

        assert_eq!(current.get("a"), Some(&"v1".to_string()));
        assert_eq!(current.get("b"), Some(&"v2".to_string()));
        assert_eq!(report.unchanged, 1);
        assert_eq!(report.updated, 1);
    }

    #[test]
    fn second_run_is_noop() {
        let mut current = map([("a", 1), ("z", 9)]);
        let desired = map([("a", 2), ("b", 3)]);

        let first = reconcile_map(&mut current, &desired);
        assert!(!first.is_noop());

        let second = reconcile_map(&mut current, &desired);
        assert!(second.is_noop());
        assert_eq!(current, desired);
    }
}
