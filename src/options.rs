//! Game configuration options.

/// Configuration options for a game of golf.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use golfrs::GolfOptions;
///
/// let options = GolfOptions::default()
///     .with_rounds(18)
///     .with_four_corners_penalty(20)
///     .with_discard_after_take(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GolfOptions {
    /// Number of rounds ("holes") in a game.
    pub rounds: usize,
    /// Points added to every other hand when a hand shows four corners.
    pub four_corners_penalty: i32,
    /// Whether a card taken from the discard pile may be discarded again
    /// instead of being swapped into the hand.
    pub discard_after_take: bool,
}

impl Default for GolfOptions {
    fn default() -> Self {
        Self {
            rounds: 9,
            four_corners_penalty: 30,
            discard_after_take: false,
        }
    }
}

impl GolfOptions {
    /// Sets the number of rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use golfrs::GolfOptions;
    ///
    /// let options = GolfOptions::default().with_rounds(18);
    /// assert_eq!(options.rounds, 18);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the four corners penalty.
    ///
    /// # Example
    ///
    /// ```
    /// use golfrs::GolfOptions;
    ///
    /// let options = GolfOptions::default().with_four_corners_penalty(0);
    /// assert_eq!(options.four_corners_penalty, 0);
    /// ```
    #[must_use]
    pub const fn with_four_corners_penalty(mut self, penalty: i32) -> Self {
        self.four_corners_penalty = penalty;
        self
    }

    /// Sets whether a card taken from the discard pile may be discarded.
    ///
    /// # Example
    ///
    /// ```
    /// use golfrs::GolfOptions;
    ///
    /// let options = GolfOptions::default().with_discard_after_take(true);
    /// assert!(options.discard_after_take);
    /// ```
    #[must_use]
    pub const fn with_discard_after_take(mut self, allowed: bool) -> Self {
        self.discard_after_take = allowed;
        self
    }
}
