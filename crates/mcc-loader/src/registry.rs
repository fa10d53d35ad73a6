//! MCC registry: lazily loaded datasets and the lookup engine.
//!
//! Each dataset is read at most once per registry, on first use. The
//! process-wide registry behind [`MccRegistry::global`] therefore reads
//! each file at most once per process.
//!
//! ```ignore
//! use mcc_loader::{LoaderConfig, MccRegistry};
//!
//! let registry = MccRegistry::new(LoaderConfig::from_env());
//! let info = registry.lookup("5411")?;
//! println!("{} ({})", info.iso_description, info.range.description);
//! ```

use once_cell::sync::{Lazy, OnceCell};
use tracing::{error, trace};

use mcc_types::{CodeInfo, MccCode, MccRange};

use crate::dataset::Dataset;
use crate::description::DescriptionRow;
use crate::loader::{discover_datasets, load_dataset};
use crate::parser::DatasetRecord;
use crate::processor::ProcessorRow;
use crate::range::RangeRow;
use crate::types::{LoaderConfig, MccError, MccResult, RangeFault};
use crate::validate::validate;

static GLOBAL: Lazy<MccRegistry> = Lazy::new(|| MccRegistry::new(LoaderConfig::from_env()));

/// Row counts of the loaded datasets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetStats {
    /// Rows in the range table.
    pub ranges: usize,
    /// Rows in the ISO list.
    pub iso: usize,
    /// Rows in the USDA list.
    pub usda: usize,
    /// Rows in the processor list.
    pub processor: usize,
}

impl DatasetStats {
    /// Total rows across all datasets.
    pub fn total(&self) -> usize {
        self.ranges + self.iso + self.usda + self.processor
    }
}

/// Repository of the four reference tables.
///
/// Tables are loaded on first access and kept for the registry's lifetime.
/// The registry is `Send + Sync`; concurrent first accesses still read each
/// file once.
pub struct MccRegistry {
    /// `None` for registries built from in-memory tables.
    config: Option<LoaderConfig>,
    ranges: OnceCell<Vec<RangeRow>>,
    iso: OnceCell<Vec<DescriptionRow>>,
    usda: OnceCell<Vec<DescriptionRow>>,
    processor: OnceCell<Vec<ProcessorRow>>,
}

impl Default for MccRegistry {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

impl std::fmt::Debug for MccRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MccRegistry")
            .field("data_dir", &self.config.as_ref().map(|c| &c.data_dir))
            .field("ranges", &self.ranges.get().map(Vec::len))
            .field("iso", &self.iso.get().map(Vec::len))
            .field("usda", &self.usda.get().map(Vec::len))
            .field("processor", &self.processor.get().map(Vec::len))
            .finish()
    }
}

impl MccRegistry {
    /// Creates a registry reading from `config.data_dir`.
    ///
    /// Nothing is read until the first query.
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config: Some(config),
            ranges: OnceCell::new(),
            iso: OnceCell::new(),
            usda: OnceCell::new(),
            processor: OnceCell::new(),
        }
    }

    /// Creates a registry after checking that all datasets are present.
    pub fn open(config: LoaderConfig) -> MccResult<Self> {
        discover_datasets(&config.data_dir)?;
        Ok(Self::new(config))
    }

    /// Creates a registry from already parsed tables.
    ///
    /// The registry has no data directory and never reads from disk.
    pub fn from_tables(
        ranges: Vec<RangeRow>,
        iso: Vec<DescriptionRow>,
        usda: Vec<DescriptionRow>,
        processor: Vec<ProcessorRow>,
    ) -> Self {
        Self {
            config: None,
            ranges: OnceCell::with_value(ranges),
            iso: OnceCell::with_value(iso),
            usda: OnceCell::with_value(usda),
            processor: OnceCell::with_value(processor),
        }
    }

    /// Process-wide registry configured from the environment.
    pub fn global() -> &'static MccRegistry {
        &GLOBAL
    }

    /// Returns the loader configuration, if the registry reads from disk.
    pub fn config(&self) -> Option<&LoaderConfig> {
        self.config.as_ref()
    }

    /// Loads every dataset now instead of on first query.
    pub fn preload(&self) -> MccResult<DatasetStats> {
        Ok(DatasetStats {
            ranges: self.range_table()?.len(),
            iso: self.iso_table()?.len(),
            usda: self.usda_table()?.len(),
            processor: self.processor_table()?.len(),
        })
    }

    /// All ranges in table order.
    pub fn ranges(&self) -> MccResult<impl Iterator<Item = &MccRange> + '_> {
        Ok(self.range_table()?.iter().map(|row| &row.range))
    }

    /// Validates an MCC string and returns its numeric value.
    pub fn validate(&self, code: &str) -> MccResult<MccCode> {
        validate(code)
    }

    /// Finds the range containing `code`.
    ///
    /// # Errors
    /// - Validation errors, unchanged.
    /// - `DataIntegrity` if the range table does not place the code.
    pub fn resolve_range(&self, code: &str) -> MccResult<MccRange> {
        let value = validate(code)?;
        let mut previous_end = None;

        for row in self.range_table()? {
            if row.contains(value) {
                return Ok(row.range.clone());
            }

            // Ranges ascend without gaps, so passing the code means a hole.
            if row.end > value {
                return Err(integrity_fault(RangeFault::Gap {
                    code: value,
                    previous_end,
                    next_start: row.start,
                }));
            }

            previous_end = Some(row.end);
        }

        Err(integrity_fault(RangeFault::Uncovered { code: value }))
    }

    /// Looks up a code across the range table and all description lists.
    ///
    /// The ISO list is skipped for codes in reserved ranges.
    ///
    /// # Errors
    /// - Errors from [`resolve_range`](Self::resolve_range), unchanged.
    /// - `NotFound` if no list has an entry for the code.
    pub fn lookup(&self, code: &str) -> MccResult<CodeInfo> {
        let range = self.resolve_range(code)?;
        let mut info = CodeInfo::for_range(range);
        let mut found = false;

        if !info.range.reserved {
            if let Some(row) = find_row(self.iso_table()?, code) {
                info.iso_description = row.description.clone();
                found = true;
            }
        }

        if let Some(row) = find_row(self.usda_table()?, code) {
            info.usda_description = row.description.clone();
            found = true;
        }

        if let Some(row) = find_row(self.processor_table()?, code) {
            info.processor_description = row.description.clone();
            info.processor_code = row.processor_code.clone();
            found = true;
        }

        if !found {
            return Err(MccError::NotFound {
                code: code.to_string(),
            });
        }

        Ok(info)
    }

    fn range_table(&self) -> MccResult<&[RangeRow]> {
        self.ranges
            .get_or_try_init(|| self.load(Dataset::Ranges))
            .map(Vec::as_slice)
    }

    fn iso_table(&self) -> MccResult<&[DescriptionRow]> {
        self.iso
            .get_or_try_init(|| self.load(Dataset::Iso))
            .map(Vec::as_slice)
    }

    fn usda_table(&self) -> MccResult<&[DescriptionRow]> {
        self.usda
            .get_or_try_init(|| self.load(Dataset::Usda))
            .map(Vec::as_slice)
    }

    fn processor_table(&self) -> MccResult<&[ProcessorRow]> {
        self.processor
            .get_or_try_init(|| self.load(Dataset::Processor))
            .map(Vec::as_slice)
    }

    fn load<T: DatasetRecord>(&self, dataset: Dataset) -> MccResult<Vec<T>> {
        match &self.config {
            Some(config) => load_dataset(dataset, dataset.path_in(&config.data_dir)),
            // Tables of an in-memory registry are always initialized.
            None => Err(MccError::FileNotFound {
                path: dataset.file_name().to_string(),
            }),
        }
    }
}

/// Linear scan for the first row whose key equals `code` exactly.
fn find_row<'a, T: DatasetRecord>(rows: &'a [T], code: &str) -> Option<&'a T> {
    let row = rows.iter().find(|row| row.key() == code);
    if row.is_some() {
        trace!(code, "dataset hit");
    }
    row
}

fn integrity_fault(fault: RangeFault) -> MccError {
    error!(%fault, "MCC range table is not a contiguous partition");
    MccError::DataIntegrity(fault)
}

/// Finds the range containing `code` using the global registry.
pub fn resolve_range(code: &str) -> MccResult<MccRange> {
    MccRegistry::global().resolve_range(code)
}

/// Looks up `code` using the global registry.
pub fn lookup(code: &str) -> MccResult<CodeInfo> {
    MccRegistry::global().lookup(code)
}
