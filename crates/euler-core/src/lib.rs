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

//! # Euler Core
//!
//! Foundational number-theory and sequence primitives shared by the Euler
//! solution crates. This crate consolidates the small, heavily reused
//! building blocks (primality, factorization, divisor enumeration, digit
//! manipulation, figurate numbers, memoized sequence generators) so
//! individual solutions stay short and focused on their search logic.
//!
//! ## Modules
//!
//! - `arith`: GCD/LCM, integer square roots (floor and exact), modular
//!   exponentiation, multiplicative order, and factorials (both `u64` and
//!   arbitrary precision).
//! - `primes`: Trial-division primality, a bitset-backed Sieve of
//!   Eratosthenes, prime factorization, and divisor enumeration.
//! - `digits`: Base-10 digit buffers and predicates (palindromes, unique
//!   digits, pandigital checks, permutation signatures).
//! - `figurate`: Triangle, pentagonal, and hexagonal numbers with exact
//!   membership tests.
//! - `sequences`: Fused iterators for Fibonacci numbers (machine-width and
//!   big-integer), number-spiral diagonals, and lexicographic permutations,
//!   plus memoized Collatz chain lengths.
//! - `memo`: A set-like wrapper that memoizes an arbitrary deterministic
//!   predicate.
//!
//! ## Purpose
//!
//! Every routine here is a textbook primitive with a small, precisely stated
//! invariant (e.g., a sieve of size `n` contains exactly the primes below
//! `n`). Keeping them in one crate avoids fifty slightly different ad-hoc
//! copies across the solution modules.

pub mod arith;
pub mod digits;
pub mod figurate;
pub mod memo;
pub mod primes;
pub mod sequences;
