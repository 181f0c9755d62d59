//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckjack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(2)
///     .with_decks(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of seats at the table.
    pub players: usize,
    /// Number of 52-card decks to shuffle into a new source.
    ///
    /// The engine deals from whatever source it is handed and never reads
    /// this field; pass it to the source constructor, as in
    /// `ShuffledShoe::new(options.decks, seed)` or `DeckApi::shuffle(options.decks)`.
    pub decks: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 3,
            decks: 6,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use deckjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use deckjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Returns the number of cards needed for the initial two-card deal.
    ///
    /// Returns `None` if the count does not fit in a `usize`.
    #[must_use]
    pub const fn initial_deal_size(&self) -> Option<usize> {
        self.players.checked_mul(2)
    }
}
