use async_trait::async_trait;
use hickory_proto::rr::{RData, RecordType};
use hickory_resolver::config::{ResolverConfig, CLOUDFLARE, GOOGLE};
use hickory_resolver::net::runtime::TokioRuntimeProvider;
use hickory_resolver::Resolver;
use simpledns_application::ports::DnsResolver;
use simpledns_domain::{
    AaaaRecord, ARecord, DomainError, MxRecord, NsRecord, PtrRecord, SoaRecord, SrvRecord,
    TxtRecord,
};
use tracing::{debug, warn};

/// Hickory-backed implementation of the resolver port.
///
/// One generic lookup per operation; the matching rdata variants are
/// pulled out of the response and everything else in the record set is
/// ignored. Hickory reports NODATA as an error, so each operation maps
/// that case back to the empty shape its record kind calls for.
pub struct HickoryDnsResolver {
    resolver: Resolver<TokioRuntimeProvider>,
}

impl HickoryDnsResolver {
    /// Build from the system resolver configuration (resolv.conf). This is
    /// the constructor that can fail, e.g. inside a container with no
    /// usable resolver configuration.
    pub fn from_system_conf() -> Result<Self, DomainError> {
        let resolver = Resolver::builder_tokio()
            .map_err(|e| DomainError::ResolverInit(e.to_string()))?
            .build()
            .map_err(|e| DomainError::ResolverInit(e.to_string()))?;
        Ok(Self { resolver })
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        let resolver = Resolver::builder_with_config(config, TokioRuntimeProvider::default())
            .build()
            .expect("failed to build DNS resolver");
        Self { resolver }
    }

    /// Resolver against Cloudflare DNS
    pub fn with_cloudflare() -> Self {
        Self::with_config(ResolverConfig::udp_and_tcp(&CLOUDFLARE))
    }

    /// Resolver against Google DNS
    pub fn with_google() -> Self {
        Self::with_config(ResolverConfig::udp_and_tcp(&GOOGLE))
    }
}

/// Hickory surfaces NODATA ("no records found") as a lookup error rather
/// than an empty record set; match on the message to tell it apart from
/// real failures (network, timeout, SERVFAIL).
fn is_no_records(message: &str) -> bool {
    message.contains("no records found")
        || message.contains("NoRecordsFound")
        || message.contains("no records")
}

/// Join the character-string parts of a TXT rdata into one value.
fn txt_payload(parts: &[Box<[u8]>]) -> String {
    parts
        .iter()
        .map(|part| String::from_utf8_lossy(part))
        .collect()
}

#[async_trait]
impl DnsResolver for HickoryDnsResolver {
    async fn query_a(&self, name: &str) -> Result<Vec<ARecord>, DomainError> {
        let lookup = match self.resolver.lookup(name, RecordType::A).await {
            Ok(lookup) => lookup,
            Err(e) => {
                let message = e.to_string();
                if is_no_records(&message) {
                    debug!(name, "no A records (NODATA)");
                    return Ok(Vec::new());
                }
                warn!(name, error = %message, "A lookup failed");
                return Err(DomainError::ResolutionFailed(message));
            }
        };

        let mut records = Vec::new();
        for record in lookup.answers().iter() {
            if let RData::A(a) = &record.data {
                records.push(ARecord {
                    address: a.0,
                    description: format!("{} {} IN A {}", record.name, record.ttl, a.0),
                    ttl: Some(record.ttl as i32),
                });
            }
        }
        debug!(name, records = records.len(), "A lookup complete");
        Ok(records)
    }

    async fn query_aaaa(&self, name: &str) -> Result<Vec<AaaaRecord>, DomainError> {
        let lookup = match self.resolver.lookup(name, RecordType::AAAA).await {
            Ok(lookup) => lookup,
            Err(e) => {
                let message = e.to_string();
                if is_no_records(&message) {
                    debug!(name, "no AAAA records (NODATA)");
                    return Ok(Vec::new());
                }
                warn!(name, error = %message, "AAAA lookup failed");
                return Err(DomainError::ResolutionFailed(message));
            }
        };

        let mut records = Vec::new();
        for record in lookup.answers().iter() {
            if let RData::AAAA(aaaa) = &record.data {
                records.push(AaaaRecord {
                    address: aaaa.0,
                    description: format!("{} {} IN AAAA {}", record.name, record.ttl, aaaa.0),
                    ttl: Some(record.ttl as i32),
                });
            }
        }
        debug!(name, records = records.len(), "AAAA lookup complete");
        Ok(records)
    }

    async fn query_cname(&self, name: &str) -> Result<Option<String>, DomainError> {
        let lookup = match self.resolver.lookup(name, RecordType::CNAME).await {
            Ok(lookup) => lookup,
            Err(e) => {
                let message = e.to_string();
                // No canonical name is a successful, empty answer.
                if is_no_records(&message) {
                    debug!(name, "no CNAME record (NODATA)");
                    return Ok(None);
                }
                warn!(name, error = %message, "CNAME lookup failed");
                return Err(DomainError::ResolutionFailed(message));
            }
        };

        for record in lookup.answers().iter() {
            if let RData::CNAME(canonical) = &record.data {
                return Ok(Some(canonical.to_utf8()));
            }
        }
        Ok(None)
    }

    async fn query_mx(&self, name: &str) -> Result<Vec<MxRecord>, DomainError> {
        let lookup = match self.resolver.lookup(name, RecordType::MX).await {
            Ok(lookup) => lookup,
            Err(e) => {
                let message = e.to_string();
                if is_no_records(&message) {
                    debug!(name, "no MX records (NODATA)");
                    return Ok(Vec::new());
                }
                warn!(name, error = %message, "MX lookup failed");
                return Err(DomainError::ResolutionFailed(message));
            }
        };

        let mut records = Vec::new();
        for record in lookup.answers().iter() {
            if let RData::MX(mx) = &record.data {
                records.push(MxRecord {
                    description: format!(
                        "{} {} IN MX {} {}",
                        record.name,
                        record.ttl,
                        mx.preference,
                        mx.exchange
                    ),
                    host: mx.exchange.to_utf8(),
                    priority: mx.preference,
                });
            }
        }
        debug!(name, records = records.len(), "MX lookup complete");
        Ok(records)
    }

    async fn query_ns(&self, name: &str) -> Result<NsRecord, DomainError> {
        // NODATA included: a name with no nameservers is the resolver's
        // failure to surface, not an empty success.
        let lookup = match self.resolver.lookup(name, RecordType::NS).await {
            Ok(lookup) => lookup,
            Err(e) => {
                let message = e.to_string();
                warn!(name, error = %message, "NS lookup failed");
                return Err(DomainError::ResolutionFailed(message));
            }
        };

        let mut nameservers = Vec::new();
        for record in lookup.answers().iter() {
            if let RData::NS(ns) = &record.data {
                nameservers.push(ns.to_utf8());
            }
        }
        debug!(name, servers = nameservers.len(), "NS lookup complete");
        Ok(NsRecord {
            description: format!("{name} NS"),
            nameservers,
        })
    }

    async fn query_ptr(&self, name: &str) -> Result<PtrRecord, DomainError> {
        let lookup = match self.resolver.lookup(name, RecordType::PTR).await {
            Ok(lookup) => lookup,
            Err(e) => {
                let message = e.to_string();
                warn!(name, error = %message, "PTR lookup failed");
                return Err(DomainError::ResolutionFailed(message));
            }
        };

        let mut names = Vec::new();
        for record in lookup.answers().iter() {
            if let RData::PTR(ptr) = &record.data {
                names.push(ptr.to_utf8());
            }
        }
        debug!(name, names = names.len(), "PTR lookup complete");
        Ok(PtrRecord {
            description: format!("{name} PTR"),
            names,
        })
    }

    async fn query_soa(&self, name: &str) -> Result<Option<SoaRecord>, DomainError> {
        let lookup = match self.resolver.lookup(name, RecordType::SOA).await {
            Ok(lookup) => lookup,
            Err(e) => {
                let message = e.to_string();
                // A zone without an SOA answers absent, not failed.
                if is_no_records(&message) {
                    debug!(name, "no SOA record (NODATA)");
                    return Ok(None);
                }
                warn!(name, error = %message, "SOA lookup failed");
                return Err(DomainError::ResolutionFailed(message));
            }
        };

        for record in lookup.answers().iter() {
            if let RData::SOA(soa) = &record.data {
                return Ok(Some(SoaRecord {
                    description: format!(
                        "{} {} IN SOA {} {}",
                        record.name,
                        record.ttl,
                        soa.mname,
                        soa.rname
                    ),
                    expire: soa.expire as u32,
                    mname: Some(soa.mname.to_utf8()),
                    refresh: soa.refresh as u32,
                    retry: soa.retry as u32,
                    rname: Some(soa.rname.to_utf8()),
                    serial: soa.serial,
                    ttl: soa.minimum,
                }));
            }
        }
        Ok(None)
    }

    async fn query_srv(&self, name: &str) -> Result<Vec<SrvRecord>, DomainError> {
        let lookup = match self.resolver.lookup(name, RecordType::SRV).await {
            Ok(lookup) => lookup,
            Err(e) => {
                let message = e.to_string();
                if is_no_records(&message) {
                    debug!(name, "no SRV records (NODATA)");
                    return Ok(Vec::new());
                }
                warn!(name, error = %message, "SRV lookup failed");
                return Err(DomainError::ResolutionFailed(message));
            }
        };

        let mut records = Vec::new();
        for record in lookup.answers().iter() {
            if let RData::SRV(srv) = &record.data {
                records.push(SrvRecord {
                    description: format!(
                        "{} {} IN SRV {} {} {} {}",
                        record.name,
                        record.ttl,
                        srv.priority,
                        srv.weight,
                        srv.port,
                        srv.target
                    ),
                    host: srv.target.to_utf8(),
                    port: srv.port,
                    priority: srv.priority,
                    weight: srv.weight,
                });
            }
        }
        debug!(name, records = records.len(), "SRV lookup complete");
        Ok(records)
    }

    async fn query_txt(&self, name: &str) -> Result<Vec<TxtRecord>, DomainError> {
        let lookup = match self.resolver.lookup(name, RecordType::TXT).await {
            Ok(lookup) => lookup,
            Err(e) => {
                let message = e.to_string();
                if is_no_records(&message) {
                    debug!(name, "no TXT records (NODATA)");
                    return Ok(Vec::new());
                }
                warn!(name, error = %message, "TXT lookup failed");
                return Err(DomainError::ResolutionFailed(message));
            }
        };

        let mut records = Vec::new();
        for record in lookup.answers().iter() {
            if let RData::TXT(txt) = &record.data {
                let payload = txt_payload(&txt.txt_data);
                records.push(TxtRecord {
                    description: format!(
                        "{} {} IN TXT {}",
                        record.name,
                        record.ttl,
                        payload
                    ),
                    txt: payload,
                });
            }
        }
        debug!(name, records = records.len(), "TXT lookup complete");
        Ok(records)
    }
}
