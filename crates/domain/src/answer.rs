use serde::{Deserialize, Serialize};

use crate::record::{
    ARecord, AaaaRecord, MxRecord, NsRecord, PtrRecord, SoaRecord, SrvRecord, TxtRecord,
};

/// Normalized result of a single resolution, one variant per query type.
///
/// Serializes self-describing: a `type` discriminant plus that variant's
/// payload under `records`, so a consumer can decode it losslessly without
/// knowing the query type out of band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "records", rename_all = "lowercase")]
pub enum Answer {
    A(Vec<AnswerA>),
    Aaaa(Vec<AnswerAaaa>),
    /// `None` means the name has no canonical name. That is a successful
    /// answer, not a failure.
    Cname(Option<AnswerCname>),
    Mx(Vec<AnswerMx>),
    Ns(AnswerNs),
    Ptr(AnswerPtr),
    /// `None` means the zone has no SOA record; still a success.
    Soa(Option<AnswerSoa>),
    Srv(Vec<AnswerSrv>),
    Txt(Vec<AnswerTxt>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerA {
    pub address: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,
}

impl From<&ARecord> for AnswerA {
    fn from(raw: &ARecord) -> Self {
        Self {
            address: raw.address.to_string(),
            description: raw.description.clone(),
            ttl: raw.ttl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerAaaa {
    pub address: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,
}

impl From<&AaaaRecord> for AnswerAaaa {
    fn from(raw: &AaaaRecord) -> Self {
        Self {
            address: raw.address.to_string(),
            description: raw.description.clone(),
            ttl: raw.ttl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCname {
    pub cname: String,
}

impl From<String> for AnswerCname {
    fn from(raw: String) -> Self {
        Self { cname: raw }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerMx {
    pub description: String,
    pub host: String,
    pub priority: u16,
}

impl From<&MxRecord> for AnswerMx {
    fn from(raw: &MxRecord) -> Self {
        Self {
            description: raw.description.clone(),
            host: raw.host.clone(),
            priority: raw.priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerNs {
    pub description: String,
    pub servers: Vec<String>,
}

impl From<&NsRecord> for AnswerNs {
    fn from(raw: &NsRecord) -> Self {
        Self {
            description: raw.description.clone(),
            servers: raw.nameservers.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPtr {
    pub description: String,
    pub names: Vec<String>,
}

impl From<&PtrRecord> for AnswerPtr {
    fn from(raw: &PtrRecord) -> Self {
        Self {
            description: raw.description.clone(),
            names: raw.names.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSoa {
    pub description: String,
    pub expire: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mname: Option<String>,
    pub refresh: u32,
    pub retry: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rname: Option<String>,
    pub serial: u32,
    pub ttl: u32,
}

impl From<&SoaRecord> for AnswerSoa {
    fn from(raw: &SoaRecord) -> Self {
        Self {
            description: raw.description.clone(),
            expire: raw.expire,
            mname: raw.mname.clone(),
            refresh: raw.refresh,
            retry: raw.retry,
            rname: raw.rname.clone(),
            serial: raw.serial,
            ttl: raw.ttl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSrv {
    pub description: String,
    pub host: String,
    pub port: u16,
    pub priority: u16,
    pub weight: u16,
}

impl From<&SrvRecord> for AnswerSrv {
    fn from(raw: &SrvRecord) -> Self {
        Self {
            description: raw.description.clone(),
            host: raw.host.clone(),
            port: raw.port,
            priority: raw.priority,
            weight: raw.weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerTxt {
    pub description: String,
    pub txt: String,
}

impl From<&TxtRecord> for AnswerTxt {
    fn from(raw: &TxtRecord) -> Self {
        Self {
            description: raw.description.clone(),
            txt: raw.txt.clone(),
        }
    }
}
