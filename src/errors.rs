/*!
 * Error types for the blockpress application.
 *
 * The escaping pipeline itself cannot fail. These cover the I/O edge:
 * loading an optional configuration file and writing the result out.
 */

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Writing the result to its destination failed
    #[error("Output error: {0}")]
    Output(String),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
