//! End-to-end lookups through the full request/reply pipeline against a
//! real upstream resolver.
//!
//! Run with: `cargo test -p simpledns-e2e -- --ignored`

use simpledns_application::ports::DnsResolver;
use simpledns_application::{run_handler, Request};
use simpledns_domain::{Answer, DomainError, QueryType};
use simpledns_infrastructure::dns::HickoryDnsResolver;
use std::sync::Arc;
use tokio::sync::mpsc;

fn cloudflare_factory() -> Result<Arc<dyn DnsResolver>, DomainError> {
    Ok(Arc::new(HickoryDnsResolver::with_cloudflare()))
}

#[tokio::test]
#[ignore]
async fn test_a_lookup_yields_addresses() {
    let (tx, rx) = mpsc::channel(16);
    let handler = tokio::spawn(run_handler(rx, cloudflare_factory));

    let (request, reply) = Request::new("example.com", QueryType::A);
    tx.send(request).await.unwrap();
    drop(tx);

    let answer = reply.await.unwrap().unwrap();
    match answer {
        Answer::A(records) => {
            assert!(!records.is_empty());
            assert!(records[0].ttl.is_some());
        }
        other => panic!("expected A answer, got {other:?}"),
    }

    handler.await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_apex_cname_is_an_absent_success() {
    let (tx, rx) = mpsc::channel(16);
    let handler = tokio::spawn(run_handler(rx, cloudflare_factory));

    // Zone apexes cannot carry a CNAME; the answer is absent, not an error.
    let (request, reply) = Request::new("example.com", QueryType::Cname);
    tx.send(request).await.unwrap();
    drop(tx);

    let answer = reply.await.unwrap().unwrap();
    assert_eq!(answer, Answer::Cname(None));

    handler.await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_soa_lookup_carries_zone_fields() {
    let (tx, rx) = mpsc::channel(16);
    let handler = tokio::spawn(run_handler(rx, cloudflare_factory));

    let (request, reply) = Request::new("example.com", QueryType::Soa);
    tx.send(request).await.unwrap();
    drop(tx);

    let answer = reply.await.unwrap().unwrap();
    match answer {
        Answer::Soa(Some(soa)) => {
            assert!(soa.serial > 0);
            assert!(soa.mname.is_some());
        }
        other => panic!("expected present SOA answer, got {other:?}"),
    }

    handler.await.unwrap();
}
