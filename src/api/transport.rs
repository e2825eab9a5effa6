use super::error::TransportError;

/// JSON-over-HTTP POST, the only verb the coach needs.
///
/// Implementations return the body of any 2xx response and map every other
/// status, as well as connection failures, to [`TransportError`].
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn post(&self, url: &str, body: String) -> Result<String, TransportError>;
}

#[async_trait::async_trait(?Send)]
impl<T> Transport for std::rc::Rc<T>
where
    T: Transport + ?Sized,
{
    async fn post(&self, url: &str, body: String) -> Result<String, TransportError> {
        self.as_ref().post(url, body).await
    }
}
