//! Assertion functions for reduction outputs.

use std::fmt::Debug;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
///
/// # Example
///
/// ```
/// use ironfold::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that no two neighbouring elements are equal.
///
/// # Panics
///
/// Panics at the first adjacent pair of equal elements.
pub fn assert_no_adjacent_duplicates<T: Debug + PartialEq>(collection: &[T]) {
    if let Some(i) = collection.windows(2).position(|w| w[0] == w[1]) {
        panic!(
            "Adjacent duplicates at indices {i} and {}: {:?}\n  Collection: {collection:?}",
            i + 1,
            collection[i]
        );
    }
}

/// Assert that `groups`, concatenated in order, reproduce `original` exactly
/// and that no group is empty.
///
/// # Panics
///
/// Panics if a group is empty or the concatenation differs from `original`.
///
/// # Example
///
/// ```
/// use ironfold::testing::assert_groups_cover;
///
/// assert_groups_cover(&[vec![1, 2], vec![3]], &[1, 2, 3]);
/// ```
pub fn assert_groups_cover<T: Debug + PartialEq + Clone>(groups: &[Vec<T>], original: &[T]) {
    if let Some(i) = groups.iter().position(Vec::is_empty) {
        panic!("Group {i} is empty\n  Groups: {groups:?}");
    }
    let flattened: Vec<T> = groups.iter().flatten().cloned().collect();
    assert_collections_equal(&flattened, original);
}

/// Assert that all elements satisfy `predicate`.
///
/// # Panics
///
/// Panics with the first failing element.
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    if let Some((i, item)) = collection.iter().enumerate().find(|(_, item)| !predicate(item)) {
        panic!("Element at index {i} does not satisfy predicate: {item:?}\n  Collection: {collection:?}");
    }
}
