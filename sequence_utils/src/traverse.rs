//! Traversal utilities: `each`, `map` and `filter`.
//!
//! Visitors receive `(value, index, sequence)`. The length is read once
//! before the first visit.

use crate::sequence::Sequence;
use crate::truthy::Truthy;

/// Visit every occupied slot in ascending index order.
///
/// Empty slots are skipped; the visitor is never invoked for them.
pub fn each<T, F>(seq: &Sequence<T>, mut visit: F)
where
    F: FnMut(&T, usize, &Sequence<T>),
{
    let len = seq.len();
    for index in 0..len {
        if let Some(value) = seq.get(index) {
            visit(value, index, seq);
        }
    }
}

/// Build a new sequence of the same length from the visitor's results.
///
/// Every index is visited, holes included (as `None`), so the output is
/// always dense. The input is left untouched.
pub fn map<T, U, F>(seq: &Sequence<T>, mut transform: F) -> Sequence<U>
where
    F: FnMut(Option<&T>, usize, &Sequence<T>) -> U,
{
    let len = seq.len();
    let mut out = Vec::with_capacity(len);
    for index in 0..len {
        out.push(transform(seq.get(index), index, seq));
    }
    Sequence::from(out)
}

/// Collect the occupied elements for which `predicate` is truthy.
///
/// Relative order is preserved and the result is densely indexed. Returns
/// an empty sequence when nothing passes.
pub fn filter<T, R, F>(seq: &Sequence<T>, mut predicate: F) -> Sequence<T>
where
    T: Clone,
    R: Truthy,
    F: FnMut(&T, usize, &Sequence<T>) -> R,
{
    let len = seq.len();
    let mut out = Vec::new();
    for index in 0..len {
        if let Some(value) = seq.get(index) {
            if predicate(value, index, seq).is_truthy() {
                out.push(value.clone());
            }
        }
    }
    Sequence::from(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq;

    #[test]
    fn test_each_visits_in_order_with_index() {
        let s = Sequence::from(vec![1, 2, 3]);
        let mut seen = Vec::new();
        each(&s, |v, i, whole| {
            assert_eq!(whole.len(), 3);
            seen.push((*v, i));
        });
        assert_eq!(seen, vec![(1, 0), (2, 1), (3, 2)]);
    }

    #[test]
    fn test_each_skips_holes() {
        let s: Sequence<&str> = seq!["1", "hello", "3", _, "5"];
        let mut indices = Vec::new();
        each(&s, |_, i, _| indices.push(i));
        assert_eq!(indices, vec![0, 1, 2, 4]);
    }

    #[test]
    fn test_map_visits_holes_and_keeps_length() {
        let s: Sequence<i32> = seq![1, _, 3];
        let out = map(&s, |v, i, _| v.map_or(-(i as i32), |x| x * 10));
        assert_eq!(out.len(), 3);
        assert!(!out.is_sparse());
        assert_eq!(out, Sequence::from(vec![10, -1, 30]));
    }

    #[test]
    fn test_map_changes_element_type() {
        let s = Sequence::from(vec![1, 2]);
        let out: Sequence<String> = map(&s, |v, _, _| format!("#{}", v.copied().unwrap_or(0)));
        assert_eq!(out.get(1).map(String::as_str), Some("#2"));
    }

    #[test]
    fn test_filter_is_dense_and_ordered() {
        let s: Sequence<i32> = seq![5, _, 2, 8, _, 3];
        let out = filter(&s, |v, _, _| *v > 2);
        assert_eq!(out, Sequence::from(vec![5, 8, 3]));
    }

    #[test]
    fn test_filter_none_pass_returns_empty() {
        let s = Sequence::from(vec![1, 2, 3]);
        let out = filter(&s, |_, _, _| false);
        assert!(out.is_empty());
    }

    #[test]
    fn test_filter_accepts_truthy_results() {
        let s = Sequence::from(vec![0, 1, 2, 0]);
        let out = filter(&s, |v, _, _| *v);
        assert_eq!(out, Sequence::from(vec![1, 2]));
    }
}
