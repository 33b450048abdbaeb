use std::borrow::Cow;

/// Errors raised while installing the global subscriber.
#[foundry_derive::foundry_error]
pub enum LoggerError {
    /// The rolling file appender could not be built.
    #[error("Rolling file appender error{}: {source}", format_context(.context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// A global subscriber is already installed in this process.
    #[error("Tracing subscriber error{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// The log directory could not be created.
    #[error("Log directory error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The settings are unusable.
    #[error("Invalid logger settings{}: {message}", format_context(.context))]
    InvalidSettings { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
