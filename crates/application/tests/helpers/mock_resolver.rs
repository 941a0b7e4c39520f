#![allow(dead_code)]

use async_trait::async_trait;
use simpledns_application::ports::DnsResolver;
use simpledns_domain::{
    AaaaRecord, ARecord, DomainError, MxRecord, NsRecord, PtrRecord, SoaRecord, SrvRecord,
    TxtRecord,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

pub fn a_record(address: &str, ttl: Option<i32>) -> ARecord {
    ARecord {
        address: address.parse().unwrap(),
        description: format!("{address} A"),
        ttl,
    }
}

pub fn mx_record(host: &str, priority: u16) -> MxRecord {
    MxRecord {
        description: format!("{priority} {host}"),
        host: host.to_string(),
        priority,
    }
}

pub fn srv_record(host: &str, port: u16, priority: u16, weight: u16) -> SrvRecord {
    SrvRecord {
        description: format!("{priority} {weight} {port} {host}"),
        host: host.to_string(),
        port,
        priority,
        weight,
    }
}

pub fn txt_record(txt: &str) -> TxtRecord {
    TxtRecord {
        description: format!("TXT {txt}"),
        txt: txt.to_string(),
    }
}

/// In-memory resolver port: responses keyed by queried name, one table per
/// record kind, plus a per-name error table that wins over all of them.
pub struct MockDnsResolver {
    a: RwLock<HashMap<String, Vec<ARecord>>>,
    aaaa: RwLock<HashMap<String, Vec<AaaaRecord>>>,
    cname: RwLock<HashMap<String, Option<String>>>,
    mx: RwLock<HashMap<String, Vec<MxRecord>>>,
    ns: RwLock<HashMap<String, NsRecord>>,
    ptr: RwLock<HashMap<String, PtrRecord>>,
    soa: RwLock<HashMap<String, Option<SoaRecord>>>,
    srv: RwLock<HashMap<String, Vec<SrvRecord>>>,
    txt: RwLock<HashMap<String, Vec<TxtRecord>>>,
    errors: RwLock<HashMap<String, DomainError>>,
    a_queries: AtomicUsize,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self {
            a: RwLock::new(HashMap::new()),
            aaaa: RwLock::new(HashMap::new()),
            cname: RwLock::new(HashMap::new()),
            mx: RwLock::new(HashMap::new()),
            ns: RwLock::new(HashMap::new()),
            ptr: RwLock::new(HashMap::new()),
            soa: RwLock::new(HashMap::new()),
            srv: RwLock::new(HashMap::new()),
            txt: RwLock::new(HashMap::new()),
            errors: RwLock::new(HashMap::new()),
            a_queries: AtomicUsize::new(0),
        }
    }

    pub fn set_a(&self, name: &str, records: Vec<ARecord>) {
        self.a.write().unwrap().insert(name.to_string(), records);
    }

    pub fn set_aaaa(&self, name: &str, records: Vec<AaaaRecord>) {
        self.aaaa.write().unwrap().insert(name.to_string(), records);
    }

    pub fn set_cname(&self, name: &str, cname: Option<&str>) {
        self.cname
            .write()
            .unwrap()
            .insert(name.to_string(), cname.map(str::to_string));
    }

    pub fn set_mx(&self, name: &str, records: Vec<MxRecord>) {
        self.mx.write().unwrap().insert(name.to_string(), records);
    }

    pub fn set_ns(&self, name: &str, record: NsRecord) {
        self.ns.write().unwrap().insert(name.to_string(), record);
    }

    pub fn set_ptr(&self, name: &str, record: PtrRecord) {
        self.ptr.write().unwrap().insert(name.to_string(), record);
    }

    pub fn set_soa(&self, name: &str, record: Option<SoaRecord>) {
        self.soa.write().unwrap().insert(name.to_string(), record);
    }

    pub fn set_srv(&self, name: &str, records: Vec<SrvRecord>) {
        self.srv.write().unwrap().insert(name.to_string(), records);
    }

    pub fn set_txt(&self, name: &str, records: Vec<TxtRecord>) {
        self.txt.write().unwrap().insert(name.to_string(), records);
    }

    /// Make every operation on `name` fail with `error`.
    pub fn set_error(&self, name: &str, error: DomainError) {
        self.errors
            .write()
            .unwrap()
            .insert(name.to_string(), error);
    }

    /// How many times `query_a` has been invoked, across all names.
    pub fn a_query_count(&self) -> usize {
        self.a_queries.load(Ordering::SeqCst)
    }

    fn error_for(&self, name: &str) -> Option<DomainError> {
        self.errors.read().unwrap().get(name).cloned()
    }
}

impl Default for MockDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn query_a(&self, name: &str) -> Result<Vec<ARecord>, DomainError> {
        self.a_queries.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.error_for(name) {
            return Err(err);
        }
        Ok(self.a.read().unwrap().get(name).cloned().unwrap_or_default())
    }

    async fn query_aaaa(&self, name: &str) -> Result<Vec<AaaaRecord>, DomainError> {
        if let Some(err) = self.error_for(name) {
            return Err(err);
        }
        Ok(self
            .aaaa
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default())
    }

    async fn query_cname(&self, name: &str) -> Result<Option<String>, DomainError> {
        if let Some(err) = self.error_for(name) {
            return Err(err);
        }
        Ok(self
            .cname
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or(None))
    }

    async fn query_mx(&self, name: &str) -> Result<Vec<MxRecord>, DomainError> {
        if let Some(err) = self.error_for(name) {
            return Err(err);
        }
        Ok(self.mx.read().unwrap().get(name).cloned().unwrap_or_default())
    }

    async fn query_ns(&self, name: &str) -> Result<NsRecord, DomainError> {
        if let Some(err) = self.error_for(name) {
            return Err(err);
        }
        self.ns
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::ResolutionFailed(format!("no records found for {name}")))
    }

    async fn query_ptr(&self, name: &str) -> Result<PtrRecord, DomainError> {
        if let Some(err) = self.error_for(name) {
            return Err(err);
        }
        self.ptr
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::ResolutionFailed(format!("no records found for {name}")))
    }

    async fn query_soa(&self, name: &str) -> Result<Option<SoaRecord>, DomainError> {
        if let Some(err) = self.error_for(name) {
            return Err(err);
        }
        Ok(self
            .soa
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or(None))
    }

    async fn query_srv(&self, name: &str) -> Result<Vec<SrvRecord>, DomainError> {
        if let Some(err) = self.error_for(name) {
            return Err(err);
        }
        Ok(self
            .srv
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default())
    }

    async fn query_txt(&self, name: &str) -> Result<Vec<TxtRecord>, DomainError> {
        if let Some(err) = self.error_for(name) {
            return Err(err);
        }
        Ok(self
            .txt
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default())
    }
}
