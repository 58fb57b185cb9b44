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

//! # Euler Problems
//!
//! The solution collection: problems 1 through 52 plus 54 and 59, each in
//! its own module behind the shared [`Problem`] trait. [`catalogue`] returns
//! the whole collection in id order for the harness and the CLI to iterate.
//!
//! Solutions are independent of one another; the only shared runtime inputs
//! are the bundled data files resolved through [`SolveContext`].

pub mod data;
pub mod problem;

pub mod p001;
pub mod p002;
pub mod p003;
pub mod p004;
pub mod p005;
pub mod p006;
pub mod p007;
pub mod p008;
pub mod p009;
pub mod p010;
pub mod p011;
pub mod p012;
pub mod p013;
pub mod p014;
pub mod p015;
pub mod p016;
pub mod p017;
pub mod p018;
pub mod p019;
pub mod p020;
pub mod p021;
pub mod p022;
pub mod p023;
pub mod p024;
pub mod p025;
pub mod p026;
pub mod p027;
pub mod p028;
pub mod p029;
pub mod p030;
pub mod p031;
pub mod p032;
pub mod p033;
pub mod p034;
pub mod p035;
pub mod p036;
pub mod p037;
pub mod p038;
pub mod p039;
pub mod p040;
pub mod p041;
pub mod p042;
pub mod p043;
pub mod p044;
pub mod p045;
pub mod p046;
pub mod p047;
pub mod p048;
pub mod p049;
pub mod p050;
pub mod p051;
pub mod p052;
pub mod p054;
pub mod p059;

pub use problem::{Answer, Problem, SolveContext, SolveError};

/// Returns every problem in the collection, ordered by id.
pub fn catalogue() -> Vec<Box<dyn Problem>> {
    vec![
        Box::new(p001::MultiplesOfThreeOrFive),
        Box::new(p002::EvenFibonacciNumbers),
        Box::new(p003::LargestPrimeFactor),
        Box::new(p004::LargestPalindromeProduct),
        Box::new(p005::SmallestMultiple),
        Box::new(p006::SumSquareDifference),
        Box::new(p007::TenThousandFirstPrime),
        Box::new(p008::LargestProductInASeries),
        Box::new(p009::SpecialPythagoreanTriplet),
        Box::new(p010::SummationOfPrimes),
        Box::new(p011::LargestProductInAGrid),
        Box::new(p012::HighlyDivisibleTriangleNumber),
        Box::new(p013::LargeSum),
        Box::new(p014::LongestCollatzSequence),
        Box::new(p015::LatticePaths),
        Box::new(p016::PowerDigitSum),
        Box::new(p017::NumberLetterCounts),
        Box::new(p018::MaximumPathSumI),
        Box::new(p019::CountingSundays),
        Box::new(p020::FactorialDigitSum),
        Box::new(p021::AmicableNumbers),
        Box::new(p022::NamesScores),
        Box::new(p023::NonAbundantSums),
        Box::new(p024::LexicographicPermutations),
        Box::new(p025::ThousandDigitFibonacci),
        Box::new(p026::ReciprocalCycles),
        Box::new(p027::QuadraticPrimes),
        Box::new(p028::NumberSpiralDiagonals),
        Box::new(p029::DistinctPowers),
        Box::new(p030::DigitFifthPowers),
        Box::new(p031::CoinSums),
        Box::new(p032::PandigitalProducts),
        Box::new(p033::DigitCancellingFractions),
        Box::new(p034::DigitFactorials),
        Box::new(p035::CircularPrimes),
        Box::new(p036::DoubleBasePalindromes),
        Box::new(p037::TruncatablePrimes),
        Box::new(p038::PandigitalMultiples),
        Box::new(p039::IntegerRightTriangles),
        Box::new(p040::ChampernownesConstant),
        Box::new(p041::PandigitalPrime),
        Box::new(p042::CodedTriangleNumbers),
        Box::new(p043::SubStringDivisibility),
        Box::new(p044::PentagonNumbers),
        Box::new(p045::TriangularPentagonalHexagonal),
        Box::new(p046::GoldbachsOtherConjecture),
        Box::new(p047::DistinctPrimesFactors),
        Box::new(p048::SelfPowers),
        Box::new(p049::PrimePermutations),
        Box::new(p050::ConsecutivePrimeSum),
        Box::new(p051::PrimeDigitReplacements),
        Box::new(p052::PermutedMultiples),
        Box::new(p054::PokerHands),
        Box::new(p059::XorDecryption),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_is_ordered_and_distinct() {
        let ids: Vec<u32> = catalogue().iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), 54);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&59));
    }

    #[test]
    fn test_titles_are_nonempty() {
        for problem in catalogue() {
            assert!(!problem.title().is_empty(), "problem {} lacks a title", problem.id());
        }
    }
}
