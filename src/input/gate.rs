use crate::cards::Card;
use crate::cards::Hand;

/// Why a card selection could not be turned into a [`Hand`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select both cards (rank and suit)")]
    IncompleteSelection,
    #[error("Unrecognized card field: {0}")]
    Unrecognized(String),
}

/// Manual hole card entry.
///
/// Fields arrive as raw strings from select inputs; an unselected field is
/// empty. Only completeness and spelling are checked, so the same card may be
/// entered twice.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardInputGate;

impl CardInputGate {
    pub fn try_submit(
        &self,
        c1_rank: &str,
        c1_suit: &str,
        c2_rank: &str,
        c2_suit: &str,
    ) -> Result<Hand, ValidationError> {
        if [c1_rank, c1_suit, c2_rank, c2_suit]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ValidationError::IncompleteSelection);
        }
        let a = Self::card(c1_rank, c1_suit)?;
        let b = Self::card(c2_rank, c2_suit)?;
        Ok(Hand::from((a, b)))
    }

    fn card(rank: &str, suit: &str) -> Result<Card, ValidationError> {
        Card::try_from((rank, suit)).map_err(ValidationError::Unrecognized)
    }
}
