//! Loader-specific types: errors, configuration and discovered files.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

use mcc_types::{format_code, MccCode};

/// Environment variable overriding the data directory.
pub const DATA_PATH_ENV: &str = "MCC_DATA_PATH";

/// Errors produced while loading datasets or resolving codes.
#[derive(Error, Debug)]
pub enum MccError {
    /// Input is not an integer literal.
    #[error("Malformed MCC '{value}': {source}")]
    MalformedCode {
        /// The input as given by the caller.
        value: String,
        /// Underlying integer parse error.
        source: ParseIntError,
    },

    /// Input is an integer outside 0..=9999.
    #[error("Invalid MCC: {value} (must be between 0 and 9999)")]
    InvalidCode {
        /// The input as given by the caller.
        value: String,
    },

    /// Valid code with no entry in any description list.
    #[error("MCC not found: {code}")]
    NotFound {
        /// The code as given by the caller.
        code: String,
    },

    /// The range table does not cover the code.
    #[error("Range table integrity fault: {0}")]
    DataIntegrity(RangeFault),

    /// I/O error reading a dataset file.
    #[error("IO error reading dataset: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid integer in a dataset column.
    #[error("Invalid integer value: {value}")]
    InvalidInteger {
        /// The invalid value.
        value: String,
    },

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Dataset files missing from the data directory.
    #[error("Required dataset not found: {file_type} in {directory}")]
    RequiredFileMissing {
        /// Comma-separated list of missing file names.
        file_type: String,
        /// The directory that was searched.
        directory: String,
    },

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },
}

impl MccError {
    /// Returns true for failures caused by the caller's input.
    ///
    /// Everything else is a defect in the bundled data or a configuration
    /// problem and should be reported as such.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedCode { .. } | Self::InvalidCode { .. } | Self::NotFound { .. }
        )
    }
}

/// Result type for MCC operations.
pub type MccResult<T> = Result<T, MccError>;

/// Why the range table could not place a valid code.
///
/// Either variant means the range table is not an ascending, contiguous
/// partition of 0..=9999.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeFault {
    /// The scan passed the code without a containing range.
    Gap {
        /// Code being resolved.
        code: MccCode,
        /// End of the last range before the code, if any.
        previous_end: Option<MccCode>,
        /// Start of the first range after the code.
        next_start: MccCode,
    },
    /// The table ended before reaching the code.
    Uncovered {
        /// Code being resolved.
        code: MccCode,
    },
}

impl std::fmt::Display for RangeFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gap {
                code,
                previous_end: Some(end),
                next_start,
            } => write!(
                f,
                "no range contains {} (gap between {} and {}, likely a bug)",
                format_code(*code),
                format_code(*end),
                format_code(*next_start)
            ),
            Self::Gap {
                code,
                previous_end: None,
                next_start,
            } => write!(
                f,
                "no range contains {} (first range starts at {}, likely a bug)",
                format_code(*code),
                format_code(*next_start)
            ),
            Self::Uncovered { code } => write!(
                f,
                "no range contains {} (table ends before it, likely a bug)",
                format_code(*code)
            ),
        }
    }
}

/// Configuration for dataset loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Directory holding the four dataset files.
    pub data_dir: PathBuf,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: bundled_data_dir(),
        }
    }
}

impl LoaderConfig {
    /// Creates a config reading datasets from `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Reads `MCC_DATA_PATH`, falling back to the bundled data.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(DATA_PATH_ENV).ok())
    }

    /// Builds a config from the value of `MCC_DATA_PATH`.
    ///
    /// Unset or blank values select the bundled data.
    pub fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(path) if !path.trim().is_empty() => Self::with_data_dir(path),
            _ => Self::default(),
        }
    }
}

/// Directory of the datasets shipped with this crate.
///
/// The path is fixed at compile time, so binaries moved off the build
/// host must point `MCC_DATA_PATH` at a copy of the data.
pub fn bundled_data_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

/// Discovered dataset files in a data directory.
#[derive(Debug, Clone, Default)]
pub struct DatasetFiles {
    /// Path to the range table.
    pub ranges_file: Option<PathBuf>,
    /// Path to the ISO 18245 list.
    pub iso_file: Option<PathBuf>,
    /// Path to the USDA list.
    pub usda_file: Option<PathBuf>,
    /// Path to the processor list.
    pub processor_file: Option<PathBuf>,
}

impl DatasetFiles {
    /// Creates a new empty DatasetFiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if all four datasets are present.
    pub fn has_required_files(&self) -> bool {
        self.missing_files().is_empty()
    }

    /// Returns the file names of missing datasets.
    pub fn missing_files(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.ranges_file.is_none() {
            missing.push(crate::Dataset::Ranges.file_name());
        }
        if self.iso_file.is_none() {
            missing.push(crate::Dataset::Iso.file_name());
        }
        if self.usda_file.is_none() {
            missing.push(crate::Dataset::Usda.file_name());
        }
        if self.processor_file.is_none() {
            missing.push(crate::Dataset::Processor.file_name());
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_config_default_points_at_bundled_data() {
        let config = LoaderConfig::default();
        assert!(config.data_dir.ends_with("data"));
        assert_eq!(config.data_dir, bundled_data_dir());
    }

    #[test]
    fn test_with_data_dir() {
        let config = LoaderConfig::with_data_dir("/srv/mcc");
        assert_eq!(config.data_dir, PathBuf::from("/srv/mcc"));
    }

    #[test]
    fn test_user_errors() {
        let invalid = MccError::InvalidCode {
            value: "10000".to_string(),
        };
        let not_found = MccError::NotFound {
            code: "1234".to_string(),
        };
        let fault = MccError::DataIntegrity(RangeFault::Uncovered { code: 9999 });

        assert!(invalid.is_user_error());
        assert!(not_found.is_user_error());
        assert!(!fault.is_user_error());
    }

    #[test]
    fn test_range_fault_messages() {
        let gap = RangeFault::Gap {
            code: 1200,
            previous_end: Some(999),
            next_start: 1500,
        };
        assert_eq!(
            gap.to_string(),
            "no range contains 1200 (gap between 0999 and 1500, likely a bug)"
        );

        let leading = RangeFault::Gap {
            code: 5,
            previous_end: None,
            next_start: 100,
        };
        assert_eq!(
            leading.to_string(),
            "no range contains 0005 (first range starts at 0100, likely a bug)"
        );

        let tail = RangeFault::Uncovered { code: 42 };
        assert!(tail.to_string().starts_with("no range contains 0042"));
    }

    #[test]
    fn test_from_env_value_uses_given_path() {
        let config = LoaderConfig::from_env_value(Some("/srv/mcc".to_string()));
        assert_eq!(config.data_dir, PathBuf::from("/srv/mcc"));
    }

    #[test]
    fn test_from_env_value_falls_back_when_blank_or_unset() {
        assert_eq!(
            LoaderConfig::from_env_value(Some("  ".to_string())),
            LoaderConfig::default()
        );
        assert_eq!(
            LoaderConfig::from_env_value(Some(String::new())),
            LoaderConfig::default()
        );
        assert_eq!(LoaderConfig::from_env_value(None), LoaderConfig::default());
    }

    #[test]
    fn test_dataset_files_missing() {
        let files = DatasetFiles {
            ranges_file: Some(PathBuf::from("iso18245_ranges.csv")),
            iso_file: Some(PathBuf::from("iso18245_official_list.csv")),
            ..Default::default()
        };

        assert!(!files.has_required_files());
        let missing = files.missing_files();
        assert_eq!(missing, vec!["usda_list.csv", "stripe_list.csv"]);
    }
}
