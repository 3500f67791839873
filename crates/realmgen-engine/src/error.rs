//! Error types for the demo engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps the failure
//! modes of engine startup: unparseable environment variables and an
//! unreadable biome configuration file.

/// Top-level error for the demo engine binary.
///
/// Each variant names the input that failed, providing a single error
/// type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An environment variable held a value that could not be parsed.
    #[error("environment variable {variable} is invalid: {message}")]
    Environment {
        /// Name of the offending variable.
        variable: &'static str,
        /// Description of the parse failure.
        message: String,
    },

    /// The biome configuration file named by `REALMGEN_BIOME` could not be read.
    #[error("biome configuration {path} is unreadable: {message}")]
    BiomeConfig {
        /// Path supplied through the environment.
        path: String,
        /// Description of the I/O failure.
        message: String,
    },
}
