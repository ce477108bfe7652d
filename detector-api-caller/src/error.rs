/// Message used when the service rejects a request without a usable `detail`
/// field in the body.
pub const GENERIC_REJECTION_MESSAGE: &str = "Detection failed";

#[derive(Debug, thiserror::Error)]
pub enum DetectorApiError {
    /// The service replied with a non-2xx status. The string is the `detail`
    /// the service returned, verbatim, or [`GENERIC_REJECTION_MESSAGE`] when
    /// the body carried none.
    #[error("{0}")]
    ServiceRejected(String),

    /// The request produced no response at all (connection refused, DNS
    /// failure, timeout and similar). Kept distinct from `ServiceRejected` so
    /// callers can tell "the service said no" from "the service is gone".
    #[error("Could not reach detection service")]
    Transport(#[source] reqwest::Error),

    /// A 2xx response whose body did not match the documented shape.
    #[error("Malformed response from detection service: {0}")]
    MalformedResponse(#[source] reqwest::Error),
}
