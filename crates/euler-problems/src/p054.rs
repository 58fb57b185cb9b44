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

//! # Problem 54: Poker hands
//!
//! The bundled file contains one thousand random poker duels, Player 1's
//! five cards followed by Player 2's. Count the hands Player 1 wins.
//!
//! Hands are compared by rank, then by the rank's defining high card, then
//! by the highest remaining card. The data guarantees that a single
//! tie-break level settles every duel; anything deeper is rejected as
//! malformed input.

use crate::problem::{Answer, Problem, SolveContext, SolveError};

/// Card values 2..=14; ace is high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Card {
    value: u8,
    suit: u8,
}

impl Card {
    fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let (value_char, suit_char) = (chars.next()?, chars.next()?);
        if chars.next().is_some() {
            return None;
        }
        let value = match value_char {
            '2'..='9' => value_char as u8 - b'0',
            'T' => 10,
            'J' => 11,
            'Q' => 12,
            'K' => 13,
            'A' => 14,
            _ => return None,
        };
        if !matches!(suit_char, 'C' | 'S' | 'D' | 'H') {
            return None;
        }
        Some(Self {
            value,
            suit: suit_char as u8,
        })
    }
}

/// Hand ranks from weakest to strongest; the derived order is the poker
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    HighCard,
    OnePair,
    TwoPairs,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

#[derive(Debug, Clone, Copy)]
struct Hand {
    /// Cards sorted by ascending value.
    cards: [Card; 5],
    rank: Rank,
    /// The value that defines the rank (quad, triple, pair, or top card).
    high_card: u8,
}

impl Hand {
    fn parse(tokens: &[&str], file: &str) -> Result<Self, SolveError> {
        if tokens.len() != 5 {
            return Err(SolveError::malformed(
                file,
                format!("expected five cards, got {}", tokens.len()),
            ));
        }
        let mut cards = [Card { value: 0, suit: 0 }; 5];
        for (slot, &token) in cards.iter_mut().zip(tokens) {
            *slot = Card::parse(token)
                .ok_or_else(|| SolveError::malformed(file, format!("bad card '{token}'")))?;
        }
        cards.sort_unstable();
        let (rank, high_card) = classify(&cards);
        Ok(Self {
            cards,
            rank,
            high_card,
        })
    }

    /// The rank-then-high-card score the duel is decided on first.
    fn score(&self) -> u32 {
        self.rank as u32 * 100 + u32::from(self.high_card)
    }

    /// The highest card value outside the rank-defining one.
    fn kicker(&self) -> u8 {
        self.cards
            .iter()
            .rev()
            .map(|c| c.value)
            .find(|&v| v != self.high_card)
            .unwrap_or(self.high_card)
    }
}

/// Determines the rank and its defining high card for sorted cards.
fn classify(cards: &[Card; 5]) -> (Rank, u8) {
    let values: Vec<u8> = cards.iter().map(|c| c.value).collect();
    let top = values[4];
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let is_straight = values.windows(2).all(|w| w[1] == w[0] + 1);

    if is_flush && is_straight {
        let rank = if top == 14 {
            Rank::RoyalFlush
        } else {
            Rank::StraightFlush
        };
        return (rank, top);
    }

    let count_of = |v: u8| values.iter().filter(|&&x| x == v).count();
    let distinct: Vec<u8> = {
        let mut d = values.clone();
        d.dedup();
        d
    };

    match distinct.len() {
        2 => {
            // Either four of a kind or a full house.
            if let Some(&quad) = distinct.iter().find(|&&v| count_of(v) == 4) {
                (Rank::FourOfAKind, quad)
            } else {
                let triple = *distinct
                    .iter()
                    .find(|&&v| count_of(v) == 3)
                    .expect("two distinct values without a quad imply a triple");
                (Rank::FullHouse, triple)
            }
        }
        _ if is_flush => (Rank::Flush, top),
        _ if is_straight => (Rank::Straight, top),
        3 => {
            if let Some(&triple) = distinct.iter().find(|&&v| count_of(v) == 3) {
                (Rank::ThreeOfAKind, triple)
            } else {
                // Two pairs: the defining card is the higher pair.
                let high_pair = *distinct
                    .iter()
                    .rev()
                    .find(|&&v| count_of(v) == 2)
                    .expect("three distinct values without a triple imply pairs");
                (Rank::TwoPairs, high_pair)
            }
        }
        4 => {
            let pair = *distinct
                .iter()
                .find(|&&v| count_of(v) == 2)
                .expect("four distinct values imply exactly one pair");
            (Rank::OnePair, pair)
        }
        _ => (Rank::HighCard, top),
    }
}

/// The winner of one duel, from Player 1's point of view.
fn player_one_wins(line: &str, file: &str) -> Result<bool, SolveError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 10 {
        return Err(SolveError::malformed(
            file,
            format!("expected ten cards per line, got {}", tokens.len()),
        ));
    }
    let hand1 = Hand::parse(&tokens[..5], file)?;
    let hand2 = Hand::parse(&tokens[5..], file)?;
    match hand1.score().cmp(&hand2.score()) {
        std::cmp::Ordering::Greater => Ok(true),
        std::cmp::Ordering::Less => Ok(false),
        std::cmp::Ordering::Equal => match hand1.kicker().cmp(&hand2.kicker()) {
            std::cmp::Ordering::Greater => Ok(true),
            std::cmp::Ordering::Less => Ok(false),
            std::cmp::Ordering::Equal => {
                Err(SolveError::malformed(file, format!("no clear winner: {line}")))
            }
        },
    }
}

/// Counts Player 1's wins over the bundled duels.
pub struct PokerHands;

impl Problem for PokerHands {
    fn id(&self) -> u32 {
        54
    }

    fn title(&self) -> &'static str {
        "Poker hands"
    }

    fn solve(&self, ctx: &SolveContext) -> Result<Answer, SolveError> {
        let path = ctx.data_file("p054_poker.txt");
        let file = path.display().to_string();
        let content = std::fs::read_to_string(&path)?;
        let mut wins = 0;
        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            if player_one_wins(line, &file)? {
                wins += 1;
            }
        }
        Ok(wins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wins(line: &str) -> bool {
        player_one_wins(line, "test").unwrap()
    }

    #[test]
    fn test_documented_duels() {
        // The five example hands from the statement.
        assert!(!wins("5H 5C 6S 7S KD 2C 3S 8S 8D TD")); // pair 5s vs pair 8s
        assert!(wins("5D 8C 9S JS AC 2C 5C 7D 8S QH")); // ace high vs queen
        assert!(!wins("2D 9C AS AH AC 3D 6D 7D TD QD")); // three aces vs flush
        assert!(wins("4D 6S 9H QH QC 3D 6D 7H QD QS")); // queens, nine kicker
        assert!(wins("2H 2D 4C 4D 4S 3C 3D 3S 9S 9D")); // fours full vs threes
    }

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::RoyalFlush > Rank::StraightFlush);
        assert!(Rank::FullHouse > Rank::Flush);
        assert!(Rank::OnePair > Rank::HighCard);
    }

    #[test]
    fn test_classification() {
        let hand = Hand::parse(&["TD", "JD", "QD", "KD", "AD"], "test").unwrap();
        assert_eq!(hand.rank, Rank::RoyalFlush);
        let hand = Hand::parse(&["2H", "2D", "4C", "4D", "4S"], "test").unwrap();
        assert_eq!(hand.rank, Rank::FullHouse);
        assert_eq!(hand.high_card, 4);
        let hand = Hand::parse(&["3D", "6D", "7D", "TD", "QD"], "test").unwrap();
        assert_eq!(hand.rank, Rank::Flush);
        assert_eq!(hand.high_card, 12);
    }

    #[test]
    fn test_malformed_cards_are_rejected() {
        assert!(Hand::parse(&["XX", "JD", "QD", "KD", "AD"], "test").is_err());
        assert!(Hand::parse(&["TD", "JD", "QD", "KD"], "test").is_err());
        assert!(player_one_wins("5H 5C 6S 7S KD 2C 3S", "test").is_err());
    }

    #[test]
    fn test_unbreakable_tie_is_malformed() {
        // Identical flushes in different suits cannot be separated.
        assert!(player_one_wins("2C 3C 4C 5C 7C 2D 3D 4D 5D 7D", "test").is_err());
    }

    #[test]
    fn test_answer_against_bundled_data() {
        let ctx = SolveContext::discover().expect("workspace data dir");
        assert_eq!(PokerHands.solve(&ctx).unwrap(), 483);
    }
}
