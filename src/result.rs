//! Round and game result types.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use crate::hand::Hand;

/// Scores for every hand at the end of a round.
///
/// All vectors are indexed by player, in turn order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Score of each hand on its own cards.
    pub hand_scores: Vec<i32>,
    /// Whether each hand showed four corners.
    pub four_corners: Vec<bool>,
    /// Final score of each hand, including four corners penalties.
    pub scores: Vec<i32>,
}

impl RoundResult {
    /// Scores `hands`, adding `penalty` to every hand except the one that
    /// showed four corners, once per such hand.
    #[must_use]
    pub fn score(hands: &[Hand], penalty: i32) -> Self {
        let hand_scores: Vec<i32> = hands.iter().map(Hand::score).collect();
        let four_corners: Vec<bool> = hands.iter().map(Hand::is_four_corners).collect();

        let mut scores = hand_scores.clone();
        for (corner_index, _) in four_corners.iter().enumerate().filter(|(_, c)| **c) {
            tracing::trace!(player = corner_index, penalty, "four corners");
            for (index, score) in scores.iter_mut().enumerate() {
                if index != corner_index {
                    *score = score.saturating_add(penalty);
                }
            }
        }

        Self {
            hand_scores,
            four_corners,
            scores,
        }
    }
}

/// Totals and winners across the finished rounds of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Total score per player.
    pub totals: Vec<i32>,
    /// Indices of every player sharing the lowest total.
    pub winners: Vec<usize>,
}

/// Sums per-round scores for `players` players and picks the winners.
///
/// Ties are kept: every player on the lowest total is a winner. Score rows
/// shorter than `players` count as zero for the missing players.
#[must_use]
pub fn standings<'a, I>(players: usize, rounds: I) -> GameResult
where
    I: IntoIterator<Item = &'a [i32]>,
{
    let mut totals = vec![0_i32; players];
    for scores in rounds {
        for (total, score) in totals.iter_mut().zip(scores) {
            *total = total.saturating_add(*score);
        }
    }

    let winners = totals.iter().min().map_or_else(Vec::new, |&best| {
        totals
            .iter()
            .enumerate()
            .filter(|&(_, &total)| total == best)
            .map(|(index, _)| index)
            .collect()
    });

    GameResult { totals, winners }
}
