//! Error handling types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tagcheck
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Rule source failed to compile
    #[error("Compilation failed for {}: {message}", path.display())]
    Compile {
        /// Rule file that failed
        path: PathBuf,
        /// Engine diagnostic
        message: String,
    },

    /// Fixture document could not be loaded or has the wrong shape
    #[error("Invalid fixture {}: {message}", path.display())]
    Fixture {
        /// Fixture file that failed
        path: PathBuf,
        /// What was wrong with it
        message: String,
    },

    /// External variable could not be declared or assigned
    #[error("External variable '{name}': {message}")]
    Variable {
        /// Variable identifier
        name: String,
        /// Engine diagnostic
        message: String,
    },

    /// Matching engine failed while scanning
    #[error("Scan error: {message}")]
    Scan {
        /// Engine diagnostic
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Rule and fixture error creation methods
impl Error {
    /// Create a compilation error for a rule file
    pub fn compile<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::Compile {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a fixture error for a fixture file
    pub fn fixture<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::Fixture {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an external variable error
    pub fn variable<N: Into<String>, S: Into<String>>(name: N, message: S) -> Self {
        Self::Variable {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a scan error
    pub fn scan<S: Into<String>>(message: S) -> Self {
        Self::Scan {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
