use async_trait::async_trait;
use simpledns_domain::{
    AaaaRecord, ARecord, DomainError, MxRecord, NsRecord, PtrRecord, SoaRecord, SrvRecord,
    TxtRecord,
};

/// The external resolver capability, one operation per record kind.
///
/// Implementations perform the actual network resolution and may fail or
/// time out internally; callers treat them as a black box. The singleton
/// operations differ in how "nothing there" is reported: `query_cname`
/// and `query_soa` answer `None` (a success), while `query_ns` and
/// `query_ptr` surface it as the resolver's own failure.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn query_a(&self, name: &str) -> Result<Vec<ARecord>, DomainError>;

    async fn query_aaaa(&self, name: &str) -> Result<Vec<AaaaRecord>, DomainError>;

    async fn query_cname(&self, name: &str) -> Result<Option<String>, DomainError>;

    async fn query_mx(&self, name: &str) -> Result<Vec<MxRecord>, DomainError>;

    async fn query_ns(&self, name: &str) -> Result<NsRecord, DomainError>;

    async fn query_ptr(&self, name: &str) -> Result<PtrRecord, DomainError>;

    async fn query_soa(&self, name: &str) -> Result<Option<SoaRecord>, DomainError>;

    async fn query_srv(&self, name: &str) -> Result<Vec<SrvRecord>, DomainError>;

    async fn query_txt(&self, name: &str) -> Result<Vec<TxtRecord>, DomainError>;
}
