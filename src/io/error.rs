//! Error types for library building and mosaic composition

use std::fmt;
use std::path::PathBuf;

/// Main error type for all library and mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Input image could not be opened or decoded
    ImageDecode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// A library record could not be parsed into a signature entry
    LibraryParse {
        /// Library file being loaded
        path: PathBuf,
        /// One-based line number of the offending record
        line: usize,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Nearest-match search attempted against a library with no entries
    EmptyLibrary,

    /// A library-listed reference image vanished or is unreadable at match time
    ReferenceImageMissing {
        /// Path recorded in the library entry
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// A library record could not be encoded
    Serialization {
        /// Library file being written
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Pixel data could not be viewed in the expected layout
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageDecode { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::LibraryParse { path, line, source } => {
                write!(
                    f,
                    "Malformed library record at '{}' line {line}: {source}",
                    path.display()
                )
            }
            Self::EmptyLibrary => {
                write!(f, "Library contains no entries to match against")
            }
            Self::ReferenceImageMissing { path, source } => {
                write!(
                    f,
                    "Reference image '{}' listed in library cannot be opened: {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to encode library record for '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageDecode { source, .. }
            | Self::ReferenceImageMissing { source, .. }
            | Self::ImageExport { source, .. } => Some(source),
            Self::LibraryParse { source, .. } | Self::Serialization { source, .. } => {
                Some(source)
            }
            Self::FileSystem { source, .. } => Some(source),
            Self::EmptyLibrary | Self::Computation { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> MosaicError {
    MosaicError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a file system error for the given path and operation
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> MosaicError {
    let path = path.into();
    move |source| MosaicError::FileSystem {
        path,
        operation,
        source,
    }
}
