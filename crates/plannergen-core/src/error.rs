//! Error types for the planner library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::params::Section;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Device name not present in the device table
    #[error("Unknown device type '{device}'")]
    UnknownDevice { device: String },
    /// Known device without layout constants for a template
    #[error("Device '{device}' is not supported by template '{template}'")]
    UnsupportedDevice { device: String, template: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A lower-level failure annotated with the pipeline stage it happened in
    #[error("{stage}: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: Box<PlannerError>,
    },
    /// A section generator failed
    #[error("section {section}: {source}")]
    Section {
        section: Section,
        #[source]
        source: Box<PlannerError>,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an unknown device error.
    pub fn unknown_device(device: impl Into<String>) -> Self {
        Self::UnknownDevice {
            device: device.into(),
        }
    }

    /// Creates an error for a device a template has no constants for.
    pub fn unsupported_device(device: impl Into<String>, template: impl Into<String>) -> Self {
        Self::UnsupportedDevice {
            device: device.into(),
            template: template.into(),
        }
    }

    /// Whether this is a device configuration error, at any wrapping depth.
    pub fn is_device_error(&self) -> bool {
        matches!(
            self.root_cause(),
            Self::UnknownDevice { .. } | Self::UnsupportedDevice { .. }
        )
    }

    /// Wraps this error with a pipeline stage label.
    pub fn at_stage(self, stage: &'static str) -> Self {
        Self::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// Wraps this error with the section whose generator produced it.
    pub fn in_section(self, section: Section) -> Self {
        Self::Section {
            section,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping stage and section wrappers.
    pub fn root_cause(&self) -> &PlannerError {
        match self {
            Self::Stage { source, .. } | Self::Section { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to PlannerError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add lazy context to any error type, converting to PlannerError.
    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| PlannerError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }

    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| PlannerError::Configuration {
            message: format!("{}: {}", f(), e),
        })
    }
}

/// Specialized extension trait for attaching a pipeline stage to planner
/// Results.
pub trait StageResultExt<T> {
    /// Wrap the error, if any, with the given stage label.
    fn stage(self, stage: &'static str) -> Result<T>;
}

impl<T> StageResultExt<T> for Result<T> {
    fn stage(self, stage: &'static str) -> Result<T> {
        self.map_err(|e| e.at_stage(stage))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
