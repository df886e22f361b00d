use thiserror::Error;

/// Errors raised by the analytics engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Cannot compute {operation} over an empty dataset")]
    EmptyDataset { operation: &'static str },

    #[error("'{choice}' is not a valid choice for statistic {statistic}")]
    UnknownParameterChoice { statistic: &'static str, choice: String },

    #[error("Statistic {0} has no selectable parameter")]
    UnknownStatistic(&'static str),

    #[error("Neighbourhood '{neighbourhood}' maps to unknown borough key '{key}'")]
    UnknownBorough { neighbourhood: String, key: String },

    #[error("Invalid price filter: {0}")]
    InvalidPriceFilter(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to install tracing subscriber: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
