use simpledns_domain::{Answer, DomainError, QueryType};
use tokio::sync::oneshot;
use tracing::debug;

/// Receiving half of a request's reply conduit. Yields the single result
/// and then the conduit is closed.
pub type ReplyReceiver = oneshot::Receiver<Result<Answer, DomainError>>;

/// A lookup request plus the sending half of its private reply conduit.
///
/// The conduit carries exactly one value: the handler loop publishes one
/// `Result` per request, success or failure, never zero and never more
/// than one. A oneshot channel makes that contract structural: the sender
/// is consumed by the send.
pub struct Request {
    pub name: String,
    pub query_type: QueryType,
    reply: oneshot::Sender<Result<Answer, DomainError>>,
}

impl Request {
    /// Create a request and hand back the receiver the submitter awaits.
    pub fn new(name: impl Into<String>, query_type: QueryType) -> (Self, ReplyReceiver) {
        let (reply, rx) = oneshot::channel();
        (
            Self {
                name: name.into(),
                query_type,
                reply,
            },
            rx,
        )
    }

    /// Publish the single result to the requester and close the conduit.
    ///
    /// A requester that dropped its receiver is not an error for the
    /// handler loop; the result is discarded.
    pub fn respond(self, result: Result<Answer, DomainError>) {
        if self.reply.send(result).is_err() {
            debug!(name = %self.name, "requester went away before the reply");
        }
    }
}
