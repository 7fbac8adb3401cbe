//! Registry rendering and request-guard bookkeeping.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use axum::http::Method;
use telemetry_gateway::obs::{metrics::TelemetryMetrics, middleware::RequestGuard};

#[test]
fn idle_registry_renders_zeroes() {
    let m = TelemetryMetrics::new();
    let out = m.render(&[]);

    assert!(out.contains("# TYPE telemetry_records_total counter\ntelemetry_records_total 0\n"));
    assert!(out.contains("# TYPE active_requests gauge\nactive_requests 0\n"));
    assert!(out.contains("# TYPE http_request_duration_seconds histogram\n"));
    assert!(out.contains("telemetry_draining 0"));
}

#[test]
fn histogram_buckets_are_cumulative_and_in_seconds() {
    let m = TelemetryMetrics::new();
    let labels = [("method", "GET"), ("endpoint", "/"), ("status", "200")];
    m.request_duration.observe(&labels, Duration::from_millis(3));
    m.request_duration.observe(&labels, Duration::from_millis(300));
    m.request_duration.observe(&labels, Duration::from_secs(30));

    let out = m.render(&[]);
    let series = r#"endpoint="/",method="GET",status="200""#;
    assert!(out.contains(&format!("http_request_duration_seconds_bucket{{{series},le=\"0.005\"}} 1")));
    assert!(out.contains(&format!("http_request_duration_seconds_bucket{{{series},le=\"0.25\"}} 1")));
    assert!(out.contains(&format!("http_request_duration_seconds_bucket{{{series},le=\"0.5\"}} 2")));
    assert!(out.contains(&format!("http_request_duration_seconds_bucket{{{series},le=\"10\"}} 2")));
    assert!(out.contains(&format!("http_request_duration_seconds_bucket{{{series},le=\"+Inf\"}} 3")));
    assert!(out.contains(&format!("http_request_duration_seconds_sum{{{series}}} 30.303")));
    assert!(out.contains(&format!("http_request_duration_seconds_count{{{series}}} 3")));
}

#[test]
fn label_order_does_not_split_series() {
    let m = TelemetryMetrics::new();
    m.ingest_rejections.inc(&[("reason", "payload")]);
    m.ingest_rejections.add(&[("reason", "payload")], 2);
    assert_eq!(m.ingest_rejections.get(&[("reason", "payload")]), 3);

    let labels_a = [("status", "200"), ("method", "GET"), ("endpoint", "/x")];
    let labels_b = [("endpoint", "/x"), ("method", "GET"), ("status", "200")];
    m.request_duration.observe(&labels_a, Duration::from_millis(1));
    m.request_duration.observe(&labels_b, Duration::from_millis(1));
    assert_eq!(m.request_duration.count(&labels_b), 2);
}

#[test]
fn label_values_are_escaped() {
    let m = TelemetryMetrics::new();
    m.ingest_rejections.inc(&[("reason", "a\"b\\c\nd")]);
    let out = m.render(&[]);
    assert!(out.contains(r#"telemetry_ingest_rejections_total{reason="a\"b\\c\nd"} 1"#));
}

#[test]
fn extra_gauges_are_appended() {
    let m = TelemetryMetrics::new();
    let out = m.render(&[("telemetry_store_records", "records held", 7)]);
    assert!(out.contains("# TYPE telemetry_store_records gauge\ntelemetry_store_records 7\n"));
}

fn post_labels(status: &str) -> [(&'static str, String); 3] {
    [
        ("method", "POST".to_string()),
        ("endpoint", "/telemetry".to_string()),
        ("status", status.to_string()),
    ]
}

fn count(m: &TelemetryMetrics, status: &str) -> u64 {
    let labels = post_labels(status);
    let refs: Vec<(&str, &str)> = labels.iter().map(|(k, v)| (*k, v.as_str())).collect();
    m.request_duration.count(&refs)
}

#[test]
fn guard_tracks_in_flight_and_observes_once() {
    let m = Arc::new(TelemetryMetrics::new());

    let guard = RequestGuard::enter(Arc::clone(&m), Method::POST, "/telemetry".into());
    assert_eq!(m.active_requests.get(), 1);
    guard.complete(201);

    assert_eq!(m.active_requests.get(), 0);
    assert_eq!(count(&m, "201"), 1);
}

#[test]
fn dropped_guard_counts_as_cancelled() {
    let m = Arc::new(TelemetryMetrics::new());

    drop(RequestGuard::enter(Arc::clone(&m), Method::POST, "/telemetry".into()));

    assert_eq!(m.active_requests.get(), 0);
    assert_eq!(count(&m, "499"), 1);
}

#[test]
fn guard_dropped_during_unwind_records_500() {
    let m = Arc::new(TelemetryMetrics::new());
    let m2 = Arc::clone(&m);

    let joined = std::thread::spawn(move || {
        let _guard = RequestGuard::enter(m2, Method::POST, "/telemetry".into());
        panic!("handler blew up");
    })
    .join();

    assert!(joined.is_err());
    assert_eq!(m.active_requests.get(), 0);
    assert_eq!(count(&m, "500"), 1);
}
