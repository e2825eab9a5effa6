use super::view::percent;
use crate::api::HandResult;

/// The question asked on the player's behalf once a hand has been analyzed.
pub fn prompt(result: &HandResult) -> String {
    format!(
        "I have {} with a {} win rate. What's your analysis and strategy recommendation?",
        result.cards,
        percent(result.winrate)
    )
}

/// Bot turn recorded in place of a reply that never came.
pub fn apology(context: Option<&str>, error: &dyn std::error::Error) -> String {
    match context {
        Some(context) => format!("Sorry, I encountered an error {}: {}", context, error),
        None => format!("Sorry, I encountered an error: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TransportError;
    use crate::cards::Card;
    use crate::cards::Hand;

    fn result(winrate: f64) -> HandResult {
        HandResult {
            cards: Hand::from((
                Card::try_from(("A", "hearts")).unwrap(),
                Card::try_from(("K", "hearts")).unwrap(),
            )),
            winrate,
        }
    }

    #[test]
    fn prompt_names_cards_and_rate() {
        assert!(
            prompt(&result(0.732))
                == "I have A of hearts, K of hearts with a 73.2% win rate. \
                    What's your analysis and strategy recommendation?"
        );
    }

    #[test]
    fn apology_with_and_without_context() {
        let e = TransportError::Status(502);
        assert!(apology(None, &e) == "Sorry, I encountered an error: request failed with status 502");
        assert!(apology(Some("getting insights"), &e).starts_with("Sorry, I encountered an error getting insights: "));
    }
}
