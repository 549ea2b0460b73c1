//! What the gateway reports about itself.
//!
//! Four signals cover the whole surface: how long each request took
//! (split by module, action and final status), how often the rate
//! limiter fired, how many finality subscriptions are open, and how
//! many updates went out over them. The keys live here as constants so
//! emission sites and dashboards cannot drift apart; call
//! [`describe_metrics`] once at startup to attach units and help text.

/// Metrics key for the per-request latency histogram.
///
/// Labelled with `module`, `action` and the final HTTP `status`.
pub const METRICS_ID_RPC_DURATION: &str = "nhb.gateway.rpc.duration";
/// Metrics key for counting rate-limited requests.
pub const METRICS_ID_RPC_THROTTLED: &str = "nhb.gateway.rpc.throttled";
/// Metrics key for currently open finality subscriptions.
pub const METRICS_ID_FINALITY_SUBSCRIPTIONS: &str = "nhb.gateway.finality.subscriptions";
/// Metrics key for finality updates pushed to clients.
pub const METRICS_ID_FINALITY_UPDATES: &str = "nhb.gateway.finality.updates";

/// Registers units and help text for every gateway metric.
///
/// Emission works without this; recorders that surface metadata (the
/// Prometheus exporter, for one) just render bare keys until it runs.
pub fn describe_metrics() {
    metrics::describe_histogram!(
        METRICS_ID_RPC_DURATION,
        metrics::Unit::Milliseconds,
        "Latency of handled JSON-RPC requests, by module, action and status"
    );

    metrics::describe_counter!(
        METRICS_ID_RPC_THROTTLED,
        metrics::Unit::Count,
        "Number of requests rejected by the per-source rate limiter"
    );

    metrics::describe_gauge!(
        METRICS_ID_FINALITY_SUBSCRIPTIONS,
        metrics::Unit::Count,
        "Number of open finality subscriptions"
    );

    metrics::describe_counter!(
        METRICS_ID_FINALITY_UPDATES,
        metrics::Unit::Count,
        "Number of finality updates written to subscribers"
    );
}
