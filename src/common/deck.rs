/// A swipe decision on the card being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Like,
    Pass,
}

impl Swipe {
    pub fn verb(self) -> &'static str {
        match self {
            Self::Like => "liked",
            Self::Pass => "passed on",
        }
    }
}

/// Position in the browse deck. Both swipe directions move forward; the
/// deck can be restarted once exhausted. Nothing is recorded about the
/// decisions themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    cursor: usize,
    total: usize,
}

impl Deck {
    pub fn new(total: usize) -> Self {
        Self { cursor: 0, total }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn exhausted(&self) -> bool {
        self.cursor >= self.total
    }

    /// Advances past the current card. Returns false once the deck has run
    /// out.
    pub fn swipe(&mut self, _swipe: Swipe) -> bool {
        if self.exhausted() {
            return false;
        }

        self.cursor += 1;
        true
    }

    pub fn restart(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swiping_walks_through_every_card() {
        let mut deck = Deck::new(3);
        assert!(!deck.exhausted());

        assert!(deck.swipe(Swipe::Like));
        assert!(deck.swipe(Swipe::Pass));
        assert!(deck.swipe(Swipe::Like));
        assert!(deck.exhausted());
    }

    #[test]
    fn swiping_an_empty_deck_is_a_noop() {
        let mut deck = Deck::new(0);
        assert!(deck.exhausted());
        assert!(!deck.swipe(Swipe::Like));
        assert_eq!(deck.cursor(), 0);
    }

    #[test]
    fn restart_rewinds_to_the_first_card() {
        let mut deck = Deck::new(2);
        deck.swipe(Swipe::Pass);
        deck.swipe(Swipe::Pass);
        assert!(deck.exhausted());

        deck.restart();
        assert_eq!(deck.cursor(), 0);
        assert!(!deck.exhausted());
    }
}
