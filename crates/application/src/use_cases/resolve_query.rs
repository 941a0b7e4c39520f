use crate::ports::DnsResolver;
use simpledns_domain::{
    Answer, AnswerA, AnswerAaaa, AnswerCname, AnswerMx, AnswerNs, AnswerPtr, AnswerSoa, AnswerSrv,
    AnswerTxt, DomainError, QueryType,
};
use std::sync::Arc;
use tracing::debug;

/// Dispatches a typed lookup to the matching resolver operation and
/// normalizes the raw records into an [`Answer`].
///
/// Resolver failures pass through unchanged; this adds no retries,
/// timeouts or reinterpretation of its own.
pub struct ResolveQueryUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveQueryUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(
        &self,
        name: &str,
        query_type: &QueryType,
    ) -> Result<Answer, DomainError> {
        match query_type {
            QueryType::A => self.answer_a(name).await.map(Answer::A),
            QueryType::Aaaa => self.answer_aaaa(name).await.map(Answer::Aaaa),
            QueryType::Cname => self.answer_cname(name).await.map(Answer::Cname),
            QueryType::Mx => self.answer_mx(name).await.map(Answer::Mx),
            QueryType::Ns => self.answer_ns(name).await.map(Answer::Ns),
            QueryType::Ptr => self.answer_ptr(name).await.map(Answer::Ptr),
            QueryType::Soa => self.answer_soa(name).await.map(Answer::Soa),
            QueryType::Srv => self.answer_srv(name).await.map(Answer::Srv),
            QueryType::Txt => self.answer_txt(name).await.map(Answer::Txt),
            // Unrecognized and unspecified types take the A path. Kept for
            // compatibility with existing callers; a caller that wants an
            // unknown type to fail loudly must check before submitting.
            QueryType::Unspecified | QueryType::Raw(_) => {
                debug!(query_type = %query_type, name = %name, "falling back to A lookup");
                self.answer_a(name).await.map(Answer::A)
            }
        }
    }

    async fn answer_a(&self, name: &str) -> Result<Vec<AnswerA>, DomainError> {
        let records = self.resolver.query_a(name).await?;
        Ok(records.iter().map(AnswerA::from).collect())
    }

    async fn answer_aaaa(&self, name: &str) -> Result<Vec<AnswerAaaa>, DomainError> {
        let records = self.resolver.query_aaaa(name).await?;
        Ok(records.iter().map(AnswerAaaa::from).collect())
    }

    async fn answer_cname(&self, name: &str) -> Result<Option<AnswerCname>, DomainError> {
        let cname = self.resolver.query_cname(name).await?;
        Ok(cname.map(AnswerCname::from))
    }

    async fn answer_mx(&self, name: &str) -> Result<Vec<AnswerMx>, DomainError> {
        let records = self.resolver.query_mx(name).await?;
        Ok(records.iter().map(AnswerMx::from).collect())
    }

    async fn answer_ns(&self, name: &str) -> Result<AnswerNs, DomainError> {
        let record = self.resolver.query_ns(name).await?;
        Ok(AnswerNs::from(&record))
    }

    async fn answer_ptr(&self, name: &str) -> Result<AnswerPtr, DomainError> {
        let record = self.resolver.query_ptr(name).await?;
        Ok(AnswerPtr::from(&record))
    }

    async fn answer_soa(&self, name: &str) -> Result<Option<AnswerSoa>, DomainError> {
        let record = self.resolver.query_soa(name).await?;
        Ok(record.as_ref().map(AnswerSoa::from))
    }

    async fn answer_srv(&self, name: &str) -> Result<Vec<AnswerSrv>, DomainError> {
        let records = self.resolver.query_srv(name).await?;
        Ok(records.iter().map(AnswerSrv::from).collect())
    }

    async fn answer_txt(&self, name: &str) -> Result<Vec<AnswerTxt>, DomainError> {
        let records = self.resolver.query_txt(name).await?;
        Ok(records.iter().map(AnswerTxt::from).collect())
    }
}
