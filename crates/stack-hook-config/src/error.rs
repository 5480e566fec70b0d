use thiserror::Error;

/// Errors that can occur while interpreting configured values.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// A variable was set to a value that could not be parsed.
  #[error("invalid value '{value}' for {key}: {message}")]
  InvalidValue {
    key: String,
    value: String,
    message: String,
  },
}
