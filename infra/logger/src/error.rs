use thiserror::Error;

/// A specialized [`LoggerError`] enum of this crate.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Builder settings that can never produce a working subscriber.
    #[error("invalid logger configuration: {0}")]
    InvalidConfiguration(String),

    /// The global subscriber was already installed.
    #[error("failed to install subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// Rolling file appender could not be constructed.
    #[error("failed to build file appender: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// Log directory could not be created.
    #[error("failed to create log directory: {0}")]
    Io(#[from] std::io::Error),
}
