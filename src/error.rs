use thiserror::Error;

/// Result type used throughout the dispatcher.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the dispatcher.
///
/// None of them ever escape [`Dispatcher::dispatch`](crate::Dispatcher::dispatch): deeplink
/// errors degrade to "no attribution data" and are only observable through
/// [`DeeplinkParameters::try_parse`](crate::DeeplinkParameters::try_parse).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The deeplink could not be parsed as a URL.
    #[error("deeplink is not a valid URL")]
    InvalidDeeplink(#[source] url::ParseError),
    /// The deeplink is an opaque URL (e.g. `mailto:`) without query or fragment structure.
    #[error("deeplink is not hierarchical")]
    OpaqueDeeplink,
    /// [`Dispatcher::set_sink`](crate::Dispatcher::set_sink) was called more than once.
    #[error("analytics sink has already been configured")]
    SinkAlreadyConfigured,
}

impl From<url::ParseError> for Error {
    fn from(value: url::ParseError) -> Self {
        Self::InvalidDeeplink(value)
    }
}
