use super::analysis::HandResult;
use super::error::ChatError;
use super::error::DecodeError;
use super::error::TransportError;
use super::transport::Transport;
use crate::dto::ChatRequest;
use crate::dto::ChatResponse;

/// Posts a message, optionally grounded in an analyzed hand, to the assistant.
#[derive(Debug)]
pub struct ChatClient<T> {
    transport: T,
    url: String,
}

impl<T> ChatClient<T>
where
    T: Transport,
{
    pub fn new(transport: T, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    /// The assistant's reply, verbatim.
    pub async fn send(&self, message: &str, hand: Option<&HandResult>) -> Result<String, ChatError> {
        let body = serde_json::to_string(&ChatRequest::from((message, hand)))
            .map_err(TransportError::encode)?;
        let text = self.transport.post(&self.url, body).await?;
        let response = serde_json::from_str::<ChatResponse>(&text).map_err(DecodeError::from)?;
        log::debug!("assistant replied with {} chars", response.response.len());
        Ok(response.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::cards::Hand;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Echo {
        bodies: RefCell<Vec<serde_json::Value>>,
    }

    #[async_trait::async_trait(?Send)]
    impl Transport for Echo {
        async fn post(&self, _: &str, body: String) -> Result<String, TransportError> {
            let json = serde_json::from_str::<serde_json::Value>(&body).unwrap();
            let reply = format!("you said {}", json["message"].as_str().unwrap());
            self.bodies.borrow_mut().push(json);
            Ok(serde_json::json!({ "response": reply }).to_string())
        }
    }

    struct Down;

    #[async_trait::async_trait(?Send)]
    impl Transport for Down {
        async fn post(&self, _: &str, _: String) -> Result<String, TransportError> {
            Err(TransportError::Network(String::from("connection refused")))
        }
    }

    #[test]
    fn reply_is_verbatim() {
        let client = ChatClient::new(Echo::default(), "/api/chat");
        let reply = futures::executor::block_on(client.send("hello", None)).unwrap();
        assert!(reply == "you said hello");
        assert!(client.transport.bodies.borrow()[0]["hand"].is_null());
    }

    #[test]
    fn hand_travels_with_message() {
        let client = ChatClient::new(Echo::default(), "/api/chat");
        let hand = HandResult {
            cards: Hand::from((
                Card::try_from(("7", "d")).unwrap(),
                Card::try_from(("2", "c")).unwrap(),
            )),
            winrate: 0.2,
        };
        futures::executor::block_on(client.send("fold?", Some(&hand))).unwrap();
        let bodies = client.transport.bodies.borrow();
        assert!(bodies[0]["hand"]["winrate"] == serde_json::json!(0.2));
        assert!(bodies[0]["hand"]["cards"][0]["suit"] == "diamonds");
    }

    #[test]
    fn network_failure() {
        let client = ChatClient::new(Down, "/api/chat");
        let result = futures::executor::block_on(client.send("hello", None));
        assert!(matches!(result, Err(ChatError::Transport(TransportError::Network(_)))));
    }
}
