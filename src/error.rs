use thiserror::Error;

/// Errors that can occur while scaling a recipe
#[derive(Error, Debug)]
pub enum ScaleError {
    /// A serving count or bound was zero or out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No serving count could be found in the document
    #[error("No serving count found in document")]
    MissingServings,

    /// No ingredient list could be found in the document
    #[error("No ingredient list found in document")]
    MissingIngredients,

    /// No extractor could successfully read the document
    #[error("No extractor could read a recipe from this document")]
    NoExtractorMatched,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Failed to read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
