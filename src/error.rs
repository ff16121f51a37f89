use thiserror::Error;

/// An identifier coming from the UI layer that names no known tool or mode.
///
/// The surface logs these and carries on with its current selection; they
/// never abort anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolParseError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Unknown eraser mode: {0}")]
    UnknownEraserMode(String),
}

/// Errors that can occur while loading a [`crate::SurfaceConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
