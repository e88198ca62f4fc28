//! Lomuto quicksort with the last element of each range as pivot.
//!
//! The comparator is always called as `compare(pivot, element)`. An element
//! goes to the small side when that returns `Equal` or `Greater`, so the
//! pivot ends with everything `<=` it on the left and everything `>` it on
//! the right.
//!
//! Not stable. O(n^2) on already ordered input since the pivot is never
//! chosen adaptively. The smaller side is recursed into and the larger side
//! is looped over, which bounds stack depth to O(log n) without changing the
//! partitions that are produced.

use core::{cmp::Ordering, mem};

pub(crate) fn quicksort<T, F>(mut slice: &mut [T], compare: &mut F)
    where
        F: FnMut(&T, &T) -> Ordering,
{
    while slice.len() > 1 {
        let pivot = partition(slice, compare);
        let (left, right) = mem::take(&mut slice).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quicksort(left, compare);
            slice = right;
        } else {
            quicksort(right, compare);
            slice = left;
        }
    }
}

/// Returns the pivot's final index.
pub(crate) fn partition<T, F>(slice: &mut [T], compare: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
{
    let highest = slice.len() - 1;
    let mut small_end = 0;
    for i in 0..highest {
        if compare(&slice[highest], &slice[i]) != Ordering::Less {
            slice.swap(i, small_end);
            small_end += 1;
        }
    }
    slice.swap(small_end, highest);
    small_end
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn sort(values: &mut [i32]) {
        quicksort(values, &mut |a: &i32, b: &i32| a.cmp(b));
    }

    #[test]
    fn partition_places_pivot() {
        let mut values = [7, 2, 9, 4, 5];
        let p = partition(&mut values, &mut |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(p, 2);
        assert_eq!(values[p], 5);
        assert!(values[..p].iter().all(|&v| v <= 5));
        assert!(values[p + 1..].iter().all(|&v| v > 5));
    }

    #[test]
    fn equal_elements_go_left_of_pivot() {
        let mut values = [3, 3, 1, 3];
        let p = partition(&mut values, &mut |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(p, 3);
        assert_eq!(values, [3, 3, 1, 3]);
    }

    #[test]
    fn comparator_receives_pivot_first() {
        let mut values = [1, 8, 5];
        let mut calls = Vec::new();
        partition(&mut values, &mut |a: &i32, b: &i32| {
            calls.push((*a, *b));
            a.cmp(b)
        });
        assert_eq!(calls, [(5, 1), (5, 8)]);
    }

    #[test]
    fn trivial_ranges() {
        let mut empty: [i32; 0] = [];
        sort(&mut empty);
        let mut one = [4];
        sort(&mut one);
        assert_eq!(one, [4]);
        let mut two = [4, -1];
        sort(&mut two);
        assert_eq!(two, [-1, 4]);
    }

    #[test]
    fn matches_std_sort_on_random_input() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for len in [3, 10, 57, 256, 1000] {
            let mut values: Vec<i32> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
            let mut expected = values.clone();
            expected.sort();
            sort(&mut values);
            assert_eq!(values, expected);
        }
    }

    #[test]
    fn ordered_input_does_not_exhaust_stack() {
        let mut ascending: Vec<i32> = (0..10_000).collect();
        sort(&mut ascending);
        assert!(ascending.windows(2).all(|w| w[0] <= w[1]));
        let mut descending: Vec<i32> = (0..10_000).rev().collect();
        sort(&mut descending);
        assert_eq!(descending, ascending);
    }

    #[test]
    fn reversed_comparator_sorts_descending() {
        let mut values = [3, 1, 2, 5, 4];
        quicksort(&mut values, &mut |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(values, [5, 4, 3, 2, 1]);
    }
}
