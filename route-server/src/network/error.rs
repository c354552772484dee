//! Network construction errors.

/// Errors raised while building a network.
///
/// Any of these leaves the network unfit to serve requests; links are only
/// recorded once every check has passed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// Link endpoint is not in the registry
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// Link starts and ends at the same location
    #[error("link from {0} to itself")]
    SelfLink(String),

    /// Cost, time or load cannot be used
    #[error("invalid tariff: {0}")]
    InvalidTariff(String),
}
