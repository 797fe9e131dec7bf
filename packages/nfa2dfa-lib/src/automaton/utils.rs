use std::collections::BTreeSet;

/// Computes the smallest set that contains `seed` and is closed under `step`.
///
/// Every element is expanded exactly once. Terminates as long as `step` only
/// ever yields elements from a finite universe.
pub fn worklist_fixpoint<T, I>(
    seed: impl IntoIterator<Item = T>,
    mut step: impl FnMut(&T) -> I,
) -> BTreeSet<T>
where
    T: Ord + Clone,
    I: IntoIterator<Item = T>,
{
    let mut result = BTreeSet::new();
    let mut stack = vec![];

    for element in seed {
        if result.insert(element.clone()) {
            stack.push(element);
        }
    }

    while let Some(element) = stack.pop() {
        for next in step(&element) {
            if result.insert(next.clone()) {
                stack.push(next);
            }
        }
    }

    result
}

#[test]
fn test_worklist_fixpoint() {
    // x -> 2x mod 10, starting from 1
    let reached = worklist_fixpoint([1u32], |x| [(x * 2) % 10]);
    assert_eq!(reached, BTreeSet::from([1, 2, 4, 6, 8]));
}

#[test]
fn test_worklist_fixpoint_empty_seed() {
    let reached = worklist_fixpoint(Vec::<u32>::new(), |x| [x + 1]);
    assert!(reached.is_empty());
}
