//! Game engine spanning every round of a match.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{DECK_SIZE, Deck};
use crate::error::BeginRoundError;
use crate::hand::HAND_SIZE;
use crate::options::GolfOptions;
use crate::result::{GameResult, RoundResult, standings};
use crate::round::Round;

/// A player at the table.
///
/// Players carry no round state; their hands live in each [`Round`] at the
/// same index as the player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    /// Display name.
    pub name: String,
}

impl Player {
    /// Creates a player with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Player {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A golf game engine that runs a fixed number of rounds and keeps score.
///
/// Every round's deck is shuffled from a generator seeded once, so a game
/// is reproducible from its seed and the players' moves.
#[derive(Debug, Clone)]
pub struct Game {
    /// Players in turn order.
    players: Vec<Player>,
    /// Game options.
    options: GolfOptions,
    /// Rounds played so far, the last possibly in progress.
    rounds: Vec<Round>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given players, options and seed.
    ///
    /// # Example
    ///
    /// ```
    /// use golfrs::{Game, GolfOptions};
    ///
    /// let mut game = Game::new(["Ada", "Brian"], GolfOptions::default(), 42);
    /// let round = game.begin_round().unwrap();
    /// assert_eq!(round.player_count(), 2);
    /// ```
    #[must_use]
    pub fn new<I, P>(players: I, options: GolfOptions, seed: u64) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Player>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            options,
            rounds: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn ensure_can_begin(&self) -> Result<(), BeginRoundError> {
        if self.players.is_empty() {
            return Err(BeginRoundError::NoPlayers);
        }
        if self.rounds.last().is_some_and(|round| !round.is_finished()) {
            return Err(BeginRoundError::RoundInProgress);
        }
        if self.rounds.len() >= self.options.rounds {
            return Err(BeginRoundError::RoundLimitReached);
        }
        if self.players.len() > (DECK_SIZE - 1) / HAND_SIZE {
            return Err(BeginRoundError::NotEnoughCards);
        }
        Ok(())
    }

    /// Shuffles a fresh deck and deals the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has no players, the previous round has
    /// not finished, every round has been played, or there are too many
    /// players for one deck.
    pub fn begin_round(&mut self) -> Result<&mut Round, BeginRoundError> {
        self.ensure_can_begin()?;
        let deck = Deck::shuffled(&mut self.rng);
        self.push_round(deck)
    }

    /// Deals the next round from a known deck instead of shuffling.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Game::begin_round`], or
    /// [`BeginRoundError::NotEnoughCards`] if `deck` is too small.
    pub fn begin_round_with_deck(&mut self, deck: Deck) -> Result<&mut Round, BeginRoundError> {
        self.ensure_can_begin()?;
        self.push_round(deck)
    }

    fn push_round(&mut self, deck: Deck) -> Result<&mut Round, BeginRoundError> {
        let round = Round::deal(self.players.len(), deck, self.options)?;
        self.rounds.push(round);
        let number = self.rounds.len();
        tracing::info!(round = number, of = self.options.rounds, "round started");
        Ok(&mut self.rounds[number - 1])
    }

    /// Returns the players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GolfOptions {
        &self.options
    }

    /// Returns every round begun so far.
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Returns the 1-based number of the latest round, or 0 before the first.
    #[must_use]
    pub fn round_number(&self) -> usize {
        self.rounds.len()
    }

    /// Returns the latest round.
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// Returns the latest round for play.
    #[must_use]
    pub fn current_round_mut(&mut self) -> Option<&mut Round> {
        self.rounds.last_mut()
    }

    /// Returns the scores of every finished round, in order.
    #[must_use]
    pub fn round_results(&self) -> Vec<RoundResult> {
        self.finished_rounds().map(Round::result).collect()
    }

    /// Returns whether every round has been played to the end.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.rounds.len() >= self.options.rounds
            && self.rounds.iter().all(Round::is_finished)
    }

    /// Sums the scores of every finished round and picks the winners.
    ///
    /// A round still in progress does not count. Ties are reported as
    /// multiple winners.
    #[must_use]
    pub fn result(&self) -> GameResult {
        let rounds = self.round_results();
        let result = standings(
            self.players.len(),
            rounds.iter().map(|round| round.scores.as_slice()),
        );
        if self.is_over() {
            tracing::debug!(totals = ?result.totals, winners = ?result.winners, "game over");
        }
        result
    }

    fn finished_rounds(&self) -> impl Iterator<Item = &Round> {
        self.rounds.iter().filter(|round| round.is_finished())
    }
}
