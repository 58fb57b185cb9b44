// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Sequence Generators
//!
//! Fused iterators over the recurring sequences of the collection, plus a
//! memoized Collatz chain-length table.
//!
//! ## Highlights
//!
//! - `Fibonacci` yields `0, 1, 1, 2, 3, 5, ...` in `u64` and ends cleanly at
//!   the last term that fits (the iterator is finite, not wrapping).
//! - `BigFibonacci` is the arbitrary-precision variant for thousand-digit
//!   terms.
//! - `SpiralDiagonals` yields the diagonal values of an odd-sided number
//!   spiral: the center `1`, then the four corners of each successive ring.
//! - `Permutations` walks arrangements in lexicographic order starting from
//!   the arrangement it was given.
//! - `CollatzLengths` caches chain lengths so overlapping suffixes are
//!   walked once.

use num_bigint::BigUint;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::iter::FusedIterator;

/// The Fibonacci sequence `0, 1, 1, 2, 3, 5, ...` over `u64`.
///
/// Iteration ends after the last term representable in a `u64`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::sequences::Fibonacci;
/// let prefix: Vec<u64> = Fibonacci::new().take(10).collect();
/// assert_eq!(prefix, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
/// ```
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    /// Creates the sequence positioned at its first term, `0`.
    #[inline]
    pub fn new() -> Self {
        Self {
            current: Some(0),
            next: Some(1),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current?;
        let successor = self.next.and_then(|n| n.checked_add(result));
        self.current = self.next;
        self.next = successor;
        Some(result)
    }
}

impl FusedIterator for Fibonacci {}

/// The Fibonacci sequence over `BigUint`; never terminates.
///
/// # Examples
///
/// ```rust
/// # use euler_core::sequences::BigFibonacci;
/// # use num_bigint::BigUint;
/// let f100 = BigFibonacci::new().nth(100).unwrap();
/// assert_eq!(f100.to_string(), "354224848179261915075");
/// ```
#[derive(Debug, Clone)]
pub struct BigFibonacci {
    current: BigUint,
    next: BigUint,
}

impl BigFibonacci {
    /// Creates the sequence positioned at its first term, `0`.
    #[inline]
    pub fn new() -> Self {
        Self {
            current: BigUint::ZERO,
            next: BigUint::from(1u32),
        }
    }
}

impl Default for BigFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for BigFibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current.clone();
        let next = &self.current + &self.next;
        self.current = std::mem::replace(&mut self.next, next);
        Some(result)
    }
}

impl FusedIterator for BigFibonacci {}

/// Diagonal values of an odd-sided number spiral.
///
/// Yields the center `1`, then the four corners of each ring: `3, 5, 7, 9`,
/// then `13, 17, 21, 25`, and so on. A spiral of side `s` (odd) has
/// `2s - 1` diagonal values.
///
/// # Examples
///
/// ```rust
/// # use euler_core::sequences::SpiralDiagonals;
/// let five_by_five: u64 = SpiralDiagonals::new().take(9).sum();
/// assert_eq!(five_by_five, 101);
/// ```
#[derive(Debug, Clone)]
pub struct SpiralDiagonals {
    value: u64,
    step: u64,
    corner: u8,
    started: bool,
}

impl SpiralDiagonals {
    /// Creates the sequence positioned at the spiral center.
    #[inline]
    pub fn new() -> Self {
        Self {
            value: 1,
            step: 2,
            corner: 0,
            started: false,
        }
    }
}

impl Default for SpiralDiagonals {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SpiralDiagonals {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.value);
        }
        self.value += self.step;
        self.corner += 1;
        if self.corner == 4 {
            self.corner = 0;
            self.step += 2;
        }
        Some(self.value)
    }
}

impl FusedIterator for SpiralDiagonals {}

/// A stack-allocated arrangement of up to ten small elements.
pub type Arrangement = SmallVec<[u8; 10]>;

/// Lexicographic permutations of a digit arrangement.
///
/// The first item yielded is the starting arrangement itself; iteration ends
/// after the descending arrangement. Starting from ascending order therefore
/// visits all `n!` arrangements.
///
/// # Examples
///
/// ```rust
/// # use euler_core::sequences::Permutations;
/// let perms: Vec<Vec<u8>> = Permutations::of_ascending(3)
///     .map(|p| p.to_vec())
///     .collect();
/// assert_eq!(
///     perms,
///     vec![
///         vec![0, 1, 2],
///         vec![0, 2, 1],
///         vec![1, 0, 2],
///         vec![1, 2, 0],
///         vec![2, 0, 1],
///         vec![2, 1, 0],
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    state: Arrangement,
    pending_first: bool,
    done: bool,
}

impl Permutations {
    /// Starts from the given arrangement.
    #[inline]
    pub fn starting_at(items: &[u8]) -> Self {
        Self {
            state: Arrangement::from_slice(items),
            pending_first: true,
            done: items.is_empty(),
        }
    }

    /// Starts from the ascending arrangement `0, 1, ..., n - 1`.
    #[inline]
    pub fn of_ascending(n: u8) -> Self {
        let items: Arrangement = (0..n).collect();
        Self::starting_at(&items)
    }

    /// Advances `state` to its lexicographic successor in place.
    ///
    /// Returns `false` when `state` is the final (descending) arrangement.
    fn advance(state: &mut Arrangement) -> bool {
        let n = state.len();
        // Longest non-increasing suffix; the element before it is the pivot.
        let Some(pivot) = (0..n.saturating_sub(1))
            .rev()
            .find(|&i| state[i] < state[i + 1])
        else {
            return false;
        };
        let successor = (pivot + 1..n)
            .rev()
            .find(|&j| state[j] > state[pivot])
            .expect("a successor exists whenever a pivot does");
        state.swap(pivot, successor);
        state[pivot + 1..].reverse();
        true
    }
}

impl Iterator for Permutations {
    type Item = Arrangement;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.pending_first {
            self.pending_first = false;
            return Some(self.state.clone());
        }
        if Self::advance(&mut self.state) {
            Some(self.state.clone())
        } else {
            self.done = true;
            None
        }
    }
}

impl FusedIterator for Permutations {}

/// Memoized Collatz chain lengths.
///
/// The length of `n` counts every term of the chain including `n` and the
/// terminal `1`, so `length(1) == 1` and `length(13) == 10`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::sequences::CollatzLengths;
/// let mut lengths = CollatzLengths::new();
/// assert_eq!(lengths.length(13), 10);
/// ```
#[derive(Debug, Clone)]
pub struct CollatzLengths {
    memo: FxHashMap<u64, u64>,
}

impl CollatzLengths {
    /// Creates a table seeded with the terminal chain `1 -> [1]`.
    pub fn new() -> Self {
        let mut memo = FxHashMap::default();
        memo.insert(1, 1);
        Self { memo }
    }

    /// Returns the chain length of `n`, memoizing every intermediate value.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0` (the chain is defined on positive integers).
    pub fn length(&mut self, n: u64) -> u64 {
        assert!(n != 0, "Collatz chains are defined on positive integers");
        let mut walked = Vec::new();
        let mut m = n;
        while !self.memo.contains_key(&m) {
            walked.push(m);
            m = if m % 2 == 0 { m / 2 } else { 3 * m + 1 };
        }
        let mut len = self.memo[&m];
        for &value in walked.iter().rev() {
            len += 1;
            self.memo.insert(value, len);
        }
        len
    }
}

impl Default for CollatzLengths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_prefix() {
        let prefix: Vec<u64> = Fibonacci::new().take(10).collect();
        assert_eq!(prefix, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn test_fibonacci_terminates_at_u64_capacity() {
        // F(93) overflows u64, so the iterator yields terms 0..=93 and stops.
        let all: Vec<u64> = Fibonacci::new().collect();
        assert_eq!(all.len(), 94);
        assert_eq!(*all.last().unwrap(), 12_200_160_415_121_876_738);
    }

    #[test]
    fn test_big_fibonacci_agrees_with_machine_width() {
        let big: Vec<BigUint> = BigFibonacci::new().take(90).collect();
        let small: Vec<u64> = Fibonacci::new().take(90).collect();
        for (b, s) in big.iter().zip(&small) {
            assert_eq!(b, &BigUint::from(*s));
        }
    }

    #[test]
    fn test_spiral_diagonals_first_ring() {
        let prefix: Vec<u64> = SpiralDiagonals::new().take(9).collect();
        assert_eq!(prefix, vec![1, 3, 5, 7, 9, 13, 17, 21, 25]);
    }

    #[test]
    fn test_permutations_count_and_order() {
        let perms: Vec<Arrangement> = Permutations::of_ascending(4).collect();
        assert_eq!(perms.len(), 24);
        assert!(perms.windows(2).all(|w| w[0] < w[1]), "not lexicographic");
    }

    #[test]
    fn test_permutations_resume_mid_sequence() {
        let perms: Vec<Arrangement> = Permutations::starting_at(&[2, 1, 0]).collect();
        assert_eq!(perms.len(), 1); // descending arrangement is last
    }

    #[test]
    fn test_permutations_of_empty_arrangement() {
        assert_eq!(Permutations::starting_at(&[]).count(), 0);
    }

    #[test]
    fn test_collatz_known_chains() {
        let mut lengths = CollatzLengths::new();
        assert_eq!(lengths.length(1), 1);
        // 13 -> 40 -> 20 -> 10 -> 5 -> 16 -> 8 -> 4 -> 2 -> 1
        assert_eq!(lengths.length(13), 10);
        assert_eq!(lengths.length(40), 9);
    }

    #[test]
    fn test_collatz_memo_is_populated_along_the_chain() {
        let mut lengths = CollatzLengths::new();
        lengths.length(13);
        // The suffix values were cached by the first walk.
        assert_eq!(lengths.length(20), 8);
        assert_eq!(lengths.length(16), 5);
    }
}
