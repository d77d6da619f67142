/// Errors raised at the fallible edges of the engine.
///
/// Scoring itself is total: these cover config loading, string parsing of
/// enum names, fingerprint serialization, and tracing setup.
#[derive(Debug, thiserror::Error)]
pub enum TrustError {
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("invalid config value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("unknown category: {name}")]
    UnknownCategory { name: String },

    #[error("unknown source kind: {name}")]
    UnknownSourceKind { name: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("toml parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("tracing initialisation failed: {reason}")]
    TracingInit { reason: String },
}
