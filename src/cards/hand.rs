use super::card::Card;

/// Two hole cards in the order they were entered.
///
/// Holding the same card twice is representable. Nothing upstream of the
/// analysis service rejects it, so neither does this type.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand(Card, Card);

impl Hand {
    pub fn first(&self) -> Card {
        self.0
    }
    pub fn second(&self) -> Card {
        self.1
    }
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
    pub fn iter(&self) -> impl Iterator<Item = Card> {
        self.cards().into_iter()
    }
}

impl From<(Card, Card)> for Hand {
    fn from((a, b): (Card, Card)) -> Self {
        Self(a, b)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = String;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        match cards.as_slice() {
            [a, b] => Ok(Self(*a, *b)),
            _ => Err(format!("expected 2 cards, got {}", cards.len())),
        }
    }
}

/// "A of hearts, K of hearts"
impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}, {}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::cards::Suit;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::from((rank, suit))
    }

    #[test]
    fn keeps_entry_order() {
        let hand = Hand::from((card(Rank::Two, Suit::C), card(Rank::Ace, Suit::S)));
        assert!(hand.first().rank() == Rank::Two);
        assert!(hand.second().rank() == Rank::Ace);
        assert!(hand.to_string() == "2 of clubs, A of spades");
    }

    #[test]
    fn exactly_two() {
        let one = vec![card(Rank::Ace, Suit::H)];
        let three = vec![card(Rank::Ace, Suit::H); 3];
        assert!(Hand::try_from(one).is_err());
        assert!(Hand::try_from(three).is_err());
    }
}
