use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// The resolver capability could not be constructed; every request
    /// handled while in this state fails uniformly with this error.
    #[error("no dns resolver")]
    ResolverUnavailable,

    /// Resolver construction failed with a concrete cause. Seen only by
    /// the handler loop, which logs it and answers requests with
    /// `ResolverUnavailable`.
    #[error("failed to initialize resolver: {0}")]
    ResolverInit(String),

    /// The underlying resolver operation failed (network, timeout,
    /// NXDOMAIN on a required record, malformed response). The message is
    /// the resolver's own, preserved verbatim.
    #[error("dns resolution failed: {0}")]
    ResolutionFailed(String),
}
