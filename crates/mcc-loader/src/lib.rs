//! # mcc-loader
//!
//! Loader and lookup engine for Merchant Category Codes.
//!
//! Resolves a four-digit MCC against the ISO 18245 range table and three
//! description lists (ISO 18245, USDA and Stripe). Datasets are read from
//! CSV files on first use and kept in memory.
//!
//! ## Usage
//!
//! ```rust
//! use mcc_loader::{lookup, resolve_range, validate, MccError};
//!
//! let info = lookup("5411").unwrap();
//! assert!(!info.iso_description.is_empty());
//!
//! let range = resolve_range("1234").unwrap();
//! assert!(range.reserved);
//!
//! assert!(matches!(validate("10000"), Err(MccError::InvalidCode { .. })));
//! ```
//!
//! The free functions use a process-wide [`MccRegistry`] whose data
//! directory comes from `MCC_DATA_PATH`, defaulting to the datasets
//! bundled with this crate. Construct a registry directly to inject a
//! different configuration.

#![warn(missing_docs)]

mod dataset;
mod description;
mod loader;
pub mod parser;
mod processor;
mod range;
mod registry;
mod types;
mod validate;

pub use dataset::Dataset;
pub use description::DescriptionRow;
pub use loader::{discover_datasets, load_dataset};
pub use parser::{DatasetParser, DatasetRecord};
pub use processor::ProcessorRow;
pub use range::RangeRow;
pub use registry::{lookup, resolve_range, DatasetStats, MccRegistry};
pub use types::{
    bundled_data_dir, DatasetFiles, LoaderConfig, MccError, MccResult, RangeFault,
    DATA_PATH_ENV,
};
pub use validate::validate;

// Re-export mcc-types for convenience
pub use mcc_types;
pub use mcc_types::{CodeInfo, DataSource, MccCode, MccRange};
