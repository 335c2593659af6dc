use crate::engines::generation::Genome;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuadgaError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Degenerate genome {genome}: a == 0 has no vertex")]
    DegenerateGenome { genome: Genome },

    #[error("Run cancelled after {completed_generations} generations")]
    Cancelled { completed_generations: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, QuadgaError>;
