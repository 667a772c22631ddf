use thiserror::Error;

/// Errors surfaced while assembling or saving a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("{satellites} satellite names paired with {elements} element records")]
    ShapeMismatch { satellites: usize, elements: usize },
    #[error("formation '{0}' has not been declared")]
    UnknownFormation(String),
    #[error("failed to write script: {0}")]
    Io(#[from] std::io::Error),
}
