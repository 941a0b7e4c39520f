use crate::ports::DnsResolver;
use crate::request::Request;
use crate::use_cases::ResolveQueryUseCase;
use simpledns_domain::DomainError;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// The single consumer of the inbound request queue.
///
/// Constructs the resolver capability exactly once on entry, via the
/// injected factory. If construction fails the loop degrades: it still
/// drains every request (no producer is left waiting forever) but answers
/// each with [`DomainError::ResolverUnavailable`]. Requests are processed
/// strictly in FIFO order, one at a time; the loop ends when the queue is
/// closed and drained.
pub async fn run_handler<F>(mut requests: mpsc::Receiver<Request>, make_resolver: F)
where
    F: FnOnce() -> Result<Arc<dyn DnsResolver>, DomainError>,
{
    let resolver = match make_resolver() {
        Ok(resolver) => resolver,
        Err(err) => {
            warn!(error = %err, "no resolver capability, answering all requests as unavailable");
            while let Some(request) = requests.recv().await {
                request.respond(Err(DomainError::ResolverUnavailable));
            }
            return;
        }
    };

    let resolve_query = ResolveQueryUseCase::new(resolver);

    while let Some(request) = requests.recv().await {
        debug!(name = %request.name, query_type = %request.query_type, "handling lookup");
        let result = resolve_query
            .execute(&request.name, &request.query_type)
            .await;
        request.respond(result);
    }
}
