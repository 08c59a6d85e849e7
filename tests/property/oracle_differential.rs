//! Differential testing: the array against `Vec` as an oracle.
//!
//! `Vec` is obviously correct for contents; the array must agree with it after
//! every step of any push/pop sequence, while also keeping its own capacity
//! invariants. If they disagree on contents, the oracle is right.

use super::common::{assert_well_formed, replay, Action};
use dynarray::{ArrayError, IntArray, INIT_CAP};
use proptest::prelude::*;

fn action_strategy() -> impl Strategy<Value = Action> {
    // bias toward pushes so arrays get large enough to grow several times
    prop_oneof![
        3 => any::<i32>().prop_map(Action::Push),
        2 => Just(Action::Pop),
    ]
}

fn actions_strategy() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(action_strategy(), 0..500)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: contents match the Vec oracle after the whole run.
    #[test]
    fn diff_contents_match_vec(actions in actions_strategy()) {
        let (array, oracle) = replay(&actions);
        prop_assert_eq!(array.as_slice(), oracle.as_slice());
        prop_assert_eq!(array.len(), oracle.len());
        assert_well_formed(&array);
    }

    /// Differential test: every intermediate state matches, including errors.
    #[test]
    fn diff_every_step_matches_vec(actions in actions_strategy()) {
        let mut array = IntArray::new();
        let mut oracle: Vec<i32> = Vec::new();

        for action in actions {
            match action {
                Action::Push(value) => {
                    array.push(value).unwrap();
                    oracle.push(value);
                }
                Action::Pop => match oracle.pop() {
                    Some(expected) => prop_assert_eq!(array.pop(), Ok(expected)),
                    None => prop_assert_eq!(array.pop(), Err(ArrayError::EmptyArray)),
                },
            }
            prop_assert_eq!(array.as_slice(), oracle.as_slice());
            prop_assert!(array.capacity() >= INIT_CAP);
            prop_assert!(array.len() <= array.capacity());
            prop_assert_eq!(array.validate(), Ok(()));
        }
    }

    /// Differential test: get agrees with slice indexing for every index.
    #[test]
    fn diff_get_matches_slice(actions in actions_strategy(), probe in -10isize..600) {
        let (array, oracle) = replay(&actions);
        let expected = usize::try_from(probe).ok().and_then(|i| oracle.get(i));
        prop_assert_eq!(array.at(probe).ok(), expected);
    }

    /// Capacity only ever changes by a factor of two per operation.
    #[test]
    fn resizes_are_geometric(actions in actions_strategy()) {
        let mut array = IntArray::new();
        for action in actions {
            let before = array.capacity();
            match action {
                Action::Push(value) => array.push(value).unwrap(),
                Action::Pop => { let _ = array.pop(); }
            }
            let after = array.capacity();
            prop_assert!(
                after == before || after == before * 2 || after * 2 == before,
                "capacity jumped {} -> {}", before, after
            );
        }
    }
}
