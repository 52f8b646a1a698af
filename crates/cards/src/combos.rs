// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! k-subsets enumeration.
//!
//! Subsets are generated iteratively from an array of k indices in
//! lexicographic order, the first index varies slowest, and each subset keeps
//! the relative order of the input items.

/// Returns the binomial coefficient for n choose k, zero if k > n.
pub fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // Multiplying before dividing keeps every intermediate value exact.
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Advances `indices` to the next k-subset of `0..n`.
///
/// Returns false when `indices` already holds the last subset.
pub(crate) fn advance(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();

    // Find the rightmost index that can still move right.
    let Some(i) = (0..k).rev().find(|&i| indices[i] < n - k + i) else {
        return false;
    };

    indices[i] += 1;
    for j in (i + 1)..k {
        indices[j] = indices[j - 1] + 1;
    }

    true
}

/// An iterator over all k-subsets of a slice.
///
/// ```
/// # use riverhand_cards::combos::Combinations;
/// let subsets = Combinations::new(&[1, 2, 3], 2).collect::<Vec<_>>();
/// assert_eq!(subsets, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T: Clone> Combinations<'a, T> {
    /// Creates an iterator over the k-subsets of `items`.
    ///
    /// Panics if k > items.len().
    pub fn new(items: &'a [T], k: usize) -> Self {
        assert!(k <= items.len(), "k={k} must be <= n={}", items.len());

        Self {
            items,
            indices: (0..k).collect(),
            done: false,
        }
    }

    /// The total number of subsets this iterator generates.
    pub fn count_total(&self) -> usize {
        nck(self.items.len(), self.indices.len())
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let subset = self
            .indices
            .iter()
            .map(|&i| self.items[i].clone())
            .collect();

        self.done = !advance(&mut self.indices, self.items.len());
        Some(subset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(nck(2, 3), 0);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 7, 21, 35, 35, 21, 7, 1]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(7, k), v));

        assert_eq!(nck(0, 0), 1);
    }

    #[test]
    fn seven_choose_five() {
        let cards = ['a', 'b', 'c', 'd', 'e', 'f', 'g'];
        let subsets = Combinations::new(&cards, 5).collect::<Vec<_>>();
        assert_eq!(subsets.len(), 21);

        assert_eq!(subsets[0], vec!['a', 'b', 'c', 'd', 'e']);
        assert_eq!(subsets[1], vec!['a', 'b', 'c', 'd', 'f']);
        assert_eq!(subsets[20], vec!['c', 'd', 'e', 'f', 'g']);
    }

    #[test]
    fn subsets_are_unique_and_ordered() {
        let items = (0..10).collect::<Vec<u32>>();

        for k in 0..=items.len() {
            let combos = Combinations::new(&items, k);
            let total = combos.count_total();

            let mut seen = HashSet::default();
            let mut prev: Option<Vec<u32>> = None;

            for subset in combos {
                assert_eq!(subset.len(), k);

                // Items keep the input order.
                assert!(subset.windows(2).all(|w| w[0] < w[1]));

                // Lexicographic order.
                if let Some(prev) = prev.as_ref() {
                    assert!(prev < &subset);
                }

                prev = Some(subset.clone());
                seen.insert(subset);
            }

            assert_eq!(seen.len(), total);
            assert_eq!(total, nck(items.len(), k));
        }
    }

    #[test]
    fn empty_subset() {
        let items = [1, 2, 3];
        let subsets = Combinations::new(&items, 0).collect::<Vec<_>>();
        assert_eq!(subsets, vec![Vec::<i32>::new()]);

        let subsets = Combinations::new(&[] as &[i32], 0).collect::<Vec<_>>();
        assert_eq!(subsets.len(), 1);
    }

    #[test]
    fn full_subset() {
        let items = [3, 1, 2];
        let subsets = Combinations::new(&items, 3).collect::<Vec<_>>();
        assert_eq!(subsets, vec![vec![3, 1, 2]]);
    }

    #[test]
    #[should_panic]
    fn k_greater_than_n() {
        let _ = Combinations::new(&[1, 2], 3);
    }

    #[test]
    fn input_is_not_mutated() {
        let items = vec![5, 4, 3, 2, 1, 0, 9];
        let copy = items.clone();
        assert_eq!(Combinations::new(&items, 5).count(), 21);
        assert_eq!(items, copy);
    }
}
