//! Property tests driving the list against a `VecDeque` reference model.

use proptest::prelude::*;
use strlist::ListArray;
use strlist_test_utils::{arb_list, arb_ops, arb_value, contents, ModelList};

proptest! {
    #[test]
    fn matches_model_after_every_op(cap in 1usize..8, ops in arb_ops(64)) {
        let mut m = ModelList::new(cap);
        for op in &ops {
            m.apply(op);
            prop_assert_eq!(m.mismatch(), None, "after {:?}", op);
        }
    }

    #[test]
    fn size_counts_pushes(cap in 1usize..8, pushes in prop::collection::vec((any::<bool>(), arb_value()), 1..40)) {
        let mut list = ListArray::with_capacity(cap);
        let mut first = None;
        let mut last = None;
        for (front, v) in &pushes {
            if *front {
                list.push_front(v.as_str());
                first = Some(v.clone());
                if last.is_none() {
                    last = Some(v.clone());
                }
            } else {
                list.push_back(v.as_str());
                last = Some(v.clone());
                if first.is_none() {
                    first = Some(v.clone());
                }
            }
        }
        prop_assert_eq!(list.size(), pushes.len());
        prop_assert_eq!(Some(list.front().clone()), first);
        prop_assert_eq!(Some(list.back().clone()), last);
    }

    #[test]
    fn capacity_is_initial_times_power_of_two(cap in 1usize..8, n in 0usize..100) {
        let mut list = ListArray::with_capacity(cap);
        for i in 0..n {
            list.push_back(i.to_string());
        }
        let ratio = list.capacity() / cap;
        prop_assert_eq!(list.capacity() % cap, 0);
        prop_assert!(ratio.is_power_of_two());
        prop_assert!(list.capacity() >= n);
        prop_assert!(n == 0 || list.capacity() < 2 * n.max(cap));
    }

    #[test]
    fn clone_equals_and_stays_independent(list in arb_list(32), extra in arb_value()) {
        let snapshot = contents(&list);
        let mut copy = list.clone();
        prop_assert_eq!(&copy, &list);
        prop_assert_eq!(copy.capacity(), list.capacity());

        copy.push_back(extra.as_str());
        if copy.size() > 1 {
            copy[0].push('#');
        }
        prop_assert_eq!(contents(&list), snapshot);
    }

    #[test]
    fn assign_capacity_rule(target in arb_list(32), source in arb_list(32)) {
        let mut target = target;
        let before = target.capacity();
        target.assign(&source);

        prop_assert_eq!(&target, &source);
        if before >= source.size() {
            prop_assert_eq!(target.capacity(), before);
        } else {
            prop_assert_eq!(target.capacity(), source.capacity());
        }
    }
}
