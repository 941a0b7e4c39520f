//! simpledns domain layer
pub mod answer;
pub mod config;
pub mod errors;
pub mod query_type;
pub mod record;

pub use answer::{
    Answer, AnswerA, AnswerAaaa, AnswerCname, AnswerMx, AnswerNs, AnswerPtr, AnswerSoa, AnswerSrv,
    AnswerTxt,
};
pub use config::{CliOverrides, Config, ConfigError, DnsConfig, LoggingConfig};
pub use errors::DomainError;
pub use query_type::QueryType;
pub use record::{
    ARecord, AaaaRecord, MxRecord, NsRecord, PtrRecord, SoaRecord, SrvRecord, TxtRecord,
};
