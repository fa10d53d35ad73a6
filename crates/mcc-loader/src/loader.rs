//! Dataset discovery and loading utilities.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::dataset::Dataset;
use crate::parser::{DatasetParser, DatasetRecord};
use crate::types::{DatasetFiles, MccError, MccResult};

/// Discovers the four dataset files in a data directory.
///
/// Fails with `RequiredFileMissing` naming every absent file.
pub fn discover_datasets<P: AsRef<Path>>(path: P) -> MccResult<DatasetFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(MccError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let mut files = DatasetFiles::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let filename = entry.file_name();
        let filename_str = filename.to_string_lossy();

        match Dataset::from_file_name(&filename_str) {
            Some(Dataset::Ranges) => files.ranges_file = Some(entry.path()),
            Some(Dataset::Iso) => files.iso_file = Some(entry.path()),
            Some(Dataset::Usda) => files.usda_file = Some(entry.path()),
            Some(Dataset::Processor) => files.processor_file = Some(entry.path()),
            None => {}
        }
    }

    if !files.has_required_files() {
        return Err(MccError::RequiredFileMissing {
            file_type: files.missing_files().join(", "),
            directory: path.display().to_string(),
        });
    }

    Ok(files)
}

/// Reads every row of a dataset file, header excluded.
pub fn load_dataset<T: DatasetRecord, P: AsRef<Path>>(
    dataset: Dataset,
    path: P,
) -> MccResult<Vec<T>> {
    let path = path.as_ref();
    let rows = DatasetParser::<_, T>::from_path(path)?.parse_all()?;

    debug!(
        dataset = %dataset,
        path = %path.display(),
        rows = rows.len(),
        "loaded MCC dataset"
    );

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::DescriptionRow;
    use crate::range::RangeRow;
    use crate::types::bundled_data_dir;

    #[test]
    fn test_discover_bundled_datasets() {
        let files = discover_datasets(bundled_data_dir()).unwrap();
        assert!(files.has_required_files());
        assert!(files
            .processor_file
            .unwrap()
            .ends_with(Dataset::Processor.file_name()));
    }

    #[test]
    fn test_discover_missing_directory() {
        let result = discover_datasets("/nonexistent/mcc-data");
        assert!(matches!(result, Err(MccError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_discover_reports_all_missing_files() {
        // The crate's src directory holds no datasets.
        let src = bundled_data_dir().parent().unwrap().join("src");
        match discover_datasets(&src) {
            Err(MccError::RequiredFileMissing { file_type, .. }) => {
                for dataset in Dataset::ALL {
                    assert!(file_type.contains(dataset.file_name()));
                }
            }
            other => panic!("expected RequiredFileMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_load_bundled_ranges() {
        let path = Dataset::Ranges.path_in(&bundled_data_dir());
        let rows: Vec<RangeRow> = load_dataset(Dataset::Ranges, path).unwrap();
        assert!(!rows.is_empty());
        assert_eq!(rows[0].start, 0);
        assert_eq!(rows.last().unwrap().end, 9999);
    }

    #[test]
    fn test_load_missing_file() {
        let result: MccResult<Vec<DescriptionRow>> =
            load_dataset(Dataset::Usda, "/nonexistent/usda_list.csv");
        assert!(matches!(result, Err(MccError::FileNotFound { .. })));
    }
}
