//! End-to-end relay flows over real UDP sockets:
//! query in → decode → filter → (block | forward) → response out.

mod common;

use common::{
    ancount, build_query, rcode, MockUpstream, TestClient, TestRelay, UpstreamBehavior, TIMEOUT,
};
use std::time::{Duration, Instant};

const QTYPE_A: u16 = 1;
const QTYPE_AAAA: u16 = 28;

#[tokio::test]
async fn test_blocked_domain_gets_nxdomain() {
    let upstream = MockUpstream::start(UpstreamBehavior::Answer).await.unwrap();
    let relay = TestRelay::start("blocked.test\n", upstream.addr()).await.unwrap();
    let client = TestClient::new(relay.addr).await.unwrap();

    let query = build_query(0x1234, "blocked.test", QTYPE_A);
    let response = client.query(&query, TIMEOUT).await.expect("expected a response");

    // QR set, RCODE 3, TXID preserved, question echoed, zero answers.
    assert_eq!(response[2] & 0x80, 0x80);
    assert_eq!(rcode(&response), 3);
    assert_eq!(&response[0..2], &query[0..2]);
    assert_eq!(&response[12..], &query[12..]);
    assert_eq!(ancount(&response), 0);
}

#[tokio::test]
async fn test_blocking_is_case_insensitive() {
    let upstream = MockUpstream::start(UpstreamBehavior::Answer).await.unwrap();
    let relay = TestRelay::start("blocked.test\n", upstream.addr()).await.unwrap();
    let client = TestClient::new(relay.addr).await.unwrap();

    let query = build_query(0x0001, "BLOCKED.Test", QTYPE_A);
    let response = client.query(&query, TIMEOUT).await.expect("expected a response");

    assert_eq!(rcode(&response), 3);
}

#[tokio::test]
async fn test_subdomain_of_blocked_domain_gets_nxdomain() {
    let upstream = MockUpstream::start(UpstreamBehavior::Answer).await.unwrap();
    let relay = TestRelay::start("blocked.test\n", upstream.addr()).await.unwrap();
    let client = TestClient::new(relay.addr).await.unwrap();

    let query = build_query(0x0002, "ads.blocked.test", QTYPE_A);
    let response = client.query(&query, TIMEOUT).await.expect("expected a response");

    assert_eq!(rcode(&response), 3);
}

#[tokio::test]
async fn test_unsupported_type_gets_notimp_regardless_of_filter() {
    let upstream = MockUpstream::start(UpstreamBehavior::Answer).await.unwrap();
    let relay = TestRelay::start("blocked.test\n", upstream.addr()).await.unwrap();
    let client = TestClient::new(relay.addr).await.unwrap();

    // AAAA for an unfiltered name still gets NOTIMP.
    let query = build_query(0x2222, "allowed.test", QTYPE_AAAA);
    let response = client.query(&query, TIMEOUT).await.expect("expected a response");

    assert_eq!(rcode(&response), 4);
    assert_eq!(&response[0..2], &query[0..2]);
    assert_eq!(ancount(&response), 0);
}

#[tokio::test]
async fn test_allowed_domain_is_forwarded_with_txid_rewritten() {
    let upstream = MockUpstream::start(UpstreamBehavior::Answer).await.unwrap();
    let relay = TestRelay::start("blocked.test\n", upstream.addr()).await.unwrap();
    let client = TestClient::new(relay.addr).await.unwrap();

    let query = build_query(0x7B7B, "allowed.test", QTYPE_A);
    let response = client.query(&query, TIMEOUT).await.expect("expected a response");

    // The mock upstream scrambles the TXID; the relay must hand back ours.
    assert_eq!(&response[0..2], &query[0..2]);
    assert_eq!(rcode(&response), 0);
    assert_eq!(ancount(&response), 1);
}

#[tokio::test]
async fn test_silent_upstream_yields_servfail_within_bound() {
    let upstream = MockUpstream::start(UpstreamBehavior::Silent).await.unwrap();
    let relay = TestRelay::start("blocked.test\n", upstream.addr()).await.unwrap();
    let client = TestClient::new(relay.addr).await.unwrap();

    let query = build_query(0x3333, "allowed.test", QTYPE_A);
    let started = Instant::now();
    let response = client
        .query(&query, TIMEOUT * 4)
        .await
        .expect("expected a SERVFAIL response");

    assert_eq!(rcode(&response), 2);
    assert_eq!(&response[0..2], &query[0..2]);
    // One upstream candidate, so control returns after roughly one timeout.
    assert!(started.elapsed() < TIMEOUT * 3);
}

#[tokio::test]
async fn test_malformed_query_is_silently_dropped() {
    let upstream = MockUpstream::start(UpstreamBehavior::Answer).await.unwrap();
    let relay = TestRelay::start("blocked.test\n", upstream.addr()).await.unwrap();
    let client = TestClient::new(relay.addr).await.unwrap();

    // Too short to hold a question.
    assert!(client.query(&[0u8; 10], TIMEOUT).await.is_none());

    // Compression pointer in the name.
    let mut query = build_query(0x4444, "allowed.test", QTYPE_A);
    query[12] = 0xC0;
    assert!(client.query(&query, TIMEOUT).await.is_none());

    // The relay is still alive afterwards.
    let query = build_query(0x5555, "blocked.test", QTYPE_A);
    let response = client.query(&query, TIMEOUT).await.expect("relay should still respond");
    assert_eq!(rcode(&response), 3);
}

#[tokio::test]
async fn test_concurrent_clients_each_get_their_own_answer() {
    let upstream = MockUpstream::start(UpstreamBehavior::Answer).await.unwrap();
    let relay = TestRelay::start("blocked.test\n", upstream.addr()).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..8u16 {
        let addr = relay.addr;
        handles.push(tokio::spawn(async move {
            let client = TestClient::new(addr).await.unwrap();
            let name = if i % 2 == 0 { "blocked.test" } else { "allowed.test" };
            let query = build_query(0x6000 + i, name, QTYPE_A);
            let response = client
                .query(&query, Duration::from_secs(2))
                .await
                .expect("expected a response");
            assert_eq!(&response[0..2], &query[0..2]);
            assert_eq!(rcode(&response), if i % 2 == 0 { 3 } else { 0 });
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
}
