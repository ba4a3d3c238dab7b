//! Error types for engine and I/O operations
//!
//! Every error is fatal to the run. The engine performs no retry or recovery;
//! reporting and exiting is the caller's responsibility.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all evolution operations
#[derive(Debug)]
pub enum EvolutionError {
    /// Run parameter validation failed
    Configuration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Two pixel arrays that must agree in shape do not
    DimensionMismatch {
        /// Expected dimensions (height, width, channels)
        expected: (usize, usize, usize),
        /// Actual dimensions (height, width, channels)
        actual: (usize, usize, usize),
    },

    /// Crossover attempted between genomes of different lengths
    GenomeLengthMismatch {
        /// Length of the first parent genome
        left: usize,
        /// Length of the second parent genome
        right: usize,
    },

    /// Gene or lookup index exceeds the tile library
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of tiles in the library
        tile_count: usize,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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
}

impl fmt::Display for EvolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Dimension mismatch: expected {}x{}x{}, got {}x{}x{}",
                    expected.0, expected.1, expected.2, actual.0, actual.1, actual.2
                )
            }
            Self::GenomeLengthMismatch { left, right } => {
                write!(
                    f,
                    "Cannot cross genomes of different lengths ({left} vs {right})"
                )
            }
            Self::InvalidTileIndex { index, tile_count } => {
                write!(
                    f,
                    "Tile index {index} is out of bounds (library holds {tile_count})"
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
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
        }
    }
}

impl std::error::Error for EvolutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for evolution results
pub type Result<T> = std::result::Result<T, EvolutionError>;

/// Create an invalid parameter error
pub fn configuration_error(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EvolutionError {
    EvolutionError::Configuration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = configuration_error("population_size", &0, &"must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'population_size' = '0': must be positive"
        );
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = EvolutionError::DimensionMismatch {
            expected: (512, 512, 3),
            actual: (256, 512, 3),
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: expected 512x512x3, got 256x512x3"
        );
    }

    #[test]
    fn test_io_errors_expose_sources() {
        let err = EvolutionError::FileSystem {
            path: PathBuf::from("/tmp/out"),
            operation: "create directory",
            source: std::io::Error::other("disk full"),
        };
        assert!(std::error::Error::source(&err).is_some());

        let err = EvolutionError::GenomeLengthMismatch { left: 4, right: 9 };
        assert!(std::error::Error::source(&err).is_none());
    }
}
