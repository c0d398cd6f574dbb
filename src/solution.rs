// Problem: Two Sum
// Difficulty: Easy
// URL: https://leetcode.com/problems/two-sum/

// Time Complexity: O(n)
// Space Complexity: O(n)

use std::{collections::HashMap, fmt};

/// Two indices into the input whose values add up to the target.
///
/// `first` is always strictly less than `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    pub first: usize,
    pub second: usize,
}

impl Pair {
    pub fn to_vec(self) -> Vec<usize> {
        vec![self.first, self.second]
    }

    /// Both indices as `i32`, or `None` if either does not fit.
    pub fn to_i32_vec(self) -> Option<Vec<i32>> {
        let first = i32::try_from(self.first).ok()?;
        let second = i32::try_from(self.second).ok()?;
        Some(vec![first, second])
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.first, self.second)
    }
}

/// Find the first pair of indices whose values sum to `target`.
///
/// Scans left to right once, remembering the first index at which each value
/// was seen. The returned pair is the one whose second index is smallest.
/// Returns `None` when no such pair exists, including for inputs with fewer
/// than two elements.
pub fn find_pair(nums: &[i64], target: i64) -> Option<Pair> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &num) in nums.iter().enumerate() {
        // An unrepresentable complement cannot be stored in the map.
        if let Some(complement) = target.checked_sub(num) {
            if let Some(&first) = seen.get(&complement) {
                log::trace!("complement {complement} found at {first}, current index {i}");
                return Some(Pair { first, second: i });
            }
        }
        seen.entry(num).or_insert(i);
    }

    None
}

/// Quadratic reference search.
///
/// Visits candidates in the same order the linear scan discovers them, so
/// both functions agree on every input.
pub fn find_pair_brute(nums: &[i64], target: i64) -> Option<Pair> {
    for second in 1..nums.len() {
        for first in 0..second {
            if nums[first].checked_add(nums[second]) == Some(target) {
                return Some(Pair { first, second });
            }
        }
    }
    None
}

pub struct Solution;

impl Solution {
    /// Given an array of integers nums and an integer target,
    /// return indices of the two numbers such that they add up to target.
    pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {
        let widened: Vec<i64> = nums.into_iter().map(i64::from).collect();

        find_pair(&widened, i64::from(target))
            .and_then(Pair::to_i32_vec)
            .unwrap_or_default()
    }
}
