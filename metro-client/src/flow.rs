//! Outcome streams for remote calls
//!
//! Every repository method wraps its remote call in [`server_flow`], which
//! turns "async call that may fail" into a finite, ordered stream of
//! [`Outcome`] values: `Init` first, then exactly one terminal `Success` or
//! `ServerError`, then the stream ends. Callers consume the stream once; a
//! new invocation produces a new stream.

use std::future::Future;
use std::pin::Pin;

use async_stream::stream;
use futures::Stream;
use shared::ServerError;

use crate::error::ClientError;

/// One emission of a remote-call outcome stream
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The call has started; show the loading state
    Init,
    /// Terminal: the call succeeded and the payload was converted
    Success(T),
    /// Terminal: the call failed; the failure is already classified
    ServerError(ServerError),
}

impl<T> Outcome<T> {
    /// Whether this emission ends the stream
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Init)
    }

    /// The success value, if this is a `Success` emission
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The classified failure, if this is a `ServerError` emission
    pub fn server_error(&self) -> Option<&ServerError> {
        match self {
            Self::ServerError(err) => Some(err),
            _ => None,
        }
    }
}

/// A finite stream of outcomes for one remote-call invocation
pub type OutcomeStream<T> = Pin<Box<dyn Stream<Item = Outcome<T>> + Send>>;

/// Wrap a remote call and a payload conversion into an outcome stream
///
/// `producer` issues the call and yields the raw payload; `convert` is a
/// pure mapping from that payload to the domain value. Any [`ClientError`]
/// the producer returns is classified into a [`ServerError`] terminal
/// emission; errors never propagate past this boundary.
pub fn server_flow<F, Fut, R, C, T>(producer: F, convert: C) -> OutcomeStream<T>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<R, ClientError>> + Send,
    C: FnOnce(R) -> T + Send + 'static,
    R: Send + 'static,
    T: Send + 'static,
{
    Box::pin(stream! {
        yield Outcome::Init;
        match producer().await {
            Ok(raw) => yield Outcome::Success(convert(raw)),
            Err(err) => {
                let classified = err.classify();
                tracing::debug!(kind = ?classified.kind, "remote call failed: {}", err);
                yield Outcome::ServerError(classified);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use shared::ServerErrorKind;

    use super::*;

    #[tokio::test]
    async fn success_sequence_is_init_then_success() {
        let flow = server_flow(|| async { Ok::<_, ClientError>(21) }, |n| n * 2);
        let emissions: Vec<_> = flow.collect().await;
        assert_eq!(emissions, vec![Outcome::Init, Outcome::Success(42)]);
    }

    #[tokio::test]
    async fn failure_sequence_is_init_then_server_error() {
        let flow = server_flow(
            || async { Err::<u32, _>(ClientError::Internal("boom".into())) },
            |n| n,
        );
        let emissions: Vec<_> = flow.collect().await;
        assert_eq!(emissions.len(), 2);
        assert_eq!(emissions[0], Outcome::Init);
        match &emissions[1] {
            Outcome::ServerError(err) => {
                assert_eq!(err.kind, ServerErrorKind::General);
                assert!(err.message.contains("boom"));
            }
            other => panic!("expected ServerError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn exactly_one_terminal_emission() {
        let flow = server_flow(|| async { Ok::<_, ClientError>("done") }, |s| s);
        let emissions: Vec<_> = flow.collect().await;
        let terminals = emissions.iter().filter(|o| o.is_terminal()).count();
        assert_eq!(terminals, 1);
        assert!(emissions.last().is_some_and(|o| o.is_terminal()));
    }

    #[tokio::test]
    async fn connectivity_failure_classifies_as_internet() {
        // Port 1 on loopback is not listening; reqwest reports a connect error.
        let flow = server_flow(
            || async {
                let resp = reqwest::Client::new()
                    .get("http://127.0.0.1:1/api/lines")
                    .send()
                    .await
                    .map_err(ClientError::from)?;
                Ok::<_, ClientError>(resp.status().as_u16())
            },
            |status| status,
        );
        let emissions: Vec<_> = flow.collect().await;
        assert_eq!(emissions[0], Outcome::Init);
        match &emissions[1] {
            Outcome::ServerError(err) => assert_eq!(err.kind, ServerErrorKind::Internet),
            other => panic!("expected ServerError, got {:?}", other),
        }
    }

    #[test]
    fn classification_table() {
        assert_eq!(
            ClientError::Unauthorized.classify().kind,
            ServerErrorKind::Token
        );
        assert_eq!(
            ClientError::TokenExpired.classify().kind,
            ServerErrorKind::Token
        );
        assert_eq!(
            ClientError::Api {
                code: "E1003".into(),
                message: "Token expired".into()
            }
            .classify()
            .kind,
            ServerErrorKind::Token
        );
        assert_eq!(
            ClientError::Api {
                code: "E4002".into(),
                message: "Order not found".into()
            }
            .classify()
            .kind,
            ServerErrorKind::General
        );
        assert_eq!(
            ClientError::MissingData("body".into()).classify().kind,
            ServerErrorKind::MissingParam
        );
        assert_eq!(
            ClientError::InvalidResponse("bad json".into()).classify().kind,
            ServerErrorKind::MissingParam
        );
        assert_eq!(
            ClientError::Internal("oops".into()).classify().kind,
            ServerErrorKind::General
        );
    }

    #[test]
    fn general_classification_keeps_the_message() {
        let err = ClientError::Internal("disk on fire".into());
        assert!(err.classify().message.contains("disk on fire"));
    }
}
