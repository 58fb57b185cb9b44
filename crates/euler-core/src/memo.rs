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

//! # Memoized Predicates
//!
//! A set-like wrapper around a deterministic membership test. Searches that
//! probe the same values many times ("is this rotation prime?", "is this
//! difference pentagonal?") pay for the underlying test once per distinct
//! value and hit the memo table afterwards.

use rustc_hash::FxHashMap;

/// A memoized deterministic predicate over `u64`.
///
/// The wrapped test must be pure: `contains` caches the first result per
/// value and never re-evaluates.
///
/// # Examples
///
/// ```rust
/// # use euler_core::memo::MemoizedPredicate;
/// # use euler_core::primes::is_prime;
/// let mut primes = MemoizedPredicate::new(is_prime);
/// assert!(primes.contains(197));
/// assert!(primes.contains(197)); // served from the memo table
/// assert!(!primes.contains(198));
/// ```
pub struct MemoizedPredicate<F> {
    test: F,
    memo: FxHashMap<u64, bool>,
}

impl<F> MemoizedPredicate<F>
where
    F: Fn(u64) -> bool,
{
    /// Wraps a deterministic test with an empty memo table.
    #[inline]
    pub fn new(test: F) -> Self {
        Self {
            test,
            memo: FxHashMap::default(),
        }
    }

    /// Evaluates the predicate at `n`, consulting the memo table first.
    #[inline]
    pub fn contains(&mut self, n: u64) -> bool {
        if let Some(&cached) = self.memo.get(&n) {
            return cached;
        }
        let result = (self.test)(n);
        self.memo.insert(n, result);
        result
    }

    /// Returns the number of distinct values evaluated so far.
    #[inline]
    pub fn evaluated(&self) -> usize {
        self.memo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_contains_matches_the_underlying_test() {
        let mut even = MemoizedPredicate::new(|n| n % 2 == 0);
        for n in 0..50 {
            assert_eq!(even.contains(n), n % 2 == 0);
        }
    }

    #[test]
    fn test_each_value_is_evaluated_once() {
        let calls = Cell::new(0u32);
        let mut pred = MemoizedPredicate::new(|n| {
            calls.set(calls.get() + 1);
            n > 10
        });
        assert!(!pred.contains(5));
        assert!(!pred.contains(5));
        assert!(pred.contains(11));
        assert_eq!(calls.get(), 2);
        assert_eq!(pred.evaluated(), 2);
    }
}
