use simpledns_application::ports::DnsResolver;
use simpledns_domain::{Config, DomainError};
use simpledns_infrastructure::dns::HickoryDnsResolver;
use std::sync::Arc;
use tracing::info;

/// Build the resolver factory the handler loop consumes.
///
/// Construction is deferred into the returned closure so it happens
/// exactly once, inside the loop, and a failure there puts the loop into
/// degraded mode instead of aborting the process.
pub fn resolver_factory(
    config: &Config,
) -> impl FnOnce() -> Result<Arc<dyn DnsResolver>, DomainError> + Send + 'static {
    let upstream = config.dns.upstream.clone();
    move || {
        info!(upstream = %upstream, "constructing DNS resolver");
        let resolver = match upstream.as_str() {
            "cloudflare" => HickoryDnsResolver::with_cloudflare(),
            "google" => HickoryDnsResolver::with_google(),
            _ => HickoryDnsResolver::from_system_conf()?,
        };
        Ok(Arc::new(resolver) as Arc<dyn DnsResolver>)
    }
}
