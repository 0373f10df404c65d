use thiserror::Error;

/// Errors raised while preparing the explorer: configuration, catalog files, logging.
///
/// Classification, flow building and response synthesis never fail; they
/// have no variant here.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] envy::Error),

    #[error("catalog file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    #[error("platform '{platform}' lists unknown tool '{tool}'")]
    UnknownTool { platform: String, tool: String },

    #[error("tool '{tool}' is owned by unknown server '{server}'")]
    UnknownServer { tool: String, server: String },

    #[error("tool '{0}' has no owning server")]
    OrphanTool(String),

    #[error("unknown platform '{0}'")]
    UnknownPlatform(String),

    #[error("fallback tool '{0}' is not defined")]
    MissingFallback(String),

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
