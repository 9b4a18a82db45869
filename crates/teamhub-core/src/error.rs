use thiserror::Error;

#[derive(Debug, Error)]
pub enum TeamHubError {
    #[error("team not found: {0}")]
    RecordNotFound(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field '{key}' expects {expected}")]
    FieldShapeMismatch { key: String, expected: &'static str },

    #[error("'{value}' is not an option for '{key}'")]
    UnknownOption { key: String, value: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("home directory not found: set HOME or pass --root")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TeamHubError>;
