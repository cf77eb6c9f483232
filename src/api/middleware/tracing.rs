//! Per-request logging for the short URL endpoints.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Wraps every request in an `INFO` span and logs its outcome.
///
/// The span carries method, URI and HTTP version. The closing event records
/// the status code and latency in milliseconds, so a redirect shows up as
/// `status=307` and an in-band rejection as `status=200`; the reason for a
/// rejection is logged separately at `DEBUG` by the validator.
///
/// ```text
/// INFO request{method=POST uri=/api/shorturl version=HTTP/1.1}: finished processing request latency=4 ms status=200
/// INFO request{method=GET uri=/api/shorturl/1 version=HTTP/1.1}: finished processing request latency=1 ms status=307
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
