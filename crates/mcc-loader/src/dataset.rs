//! The four bundled reference datasets.

use std::path::{Path, PathBuf};

/// One of the fixed reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// ISO 18245 range table: `start,end,description`.
    Ranges,
    /// ISO 18245 official list: `mcc,description`.
    Iso,
    /// USDA list: `mcc,description`.
    Usda,
    /// Stripe processor list: `mcc,description,stripe_code`.
    Processor,
}

impl Dataset {
    /// All datasets, ranges first.
    pub const ALL: [Dataset; 4] = [Self::Ranges, Self::Iso, Self::Usda, Self::Processor];

    /// File name of the dataset inside a data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Ranges => "iso18245_ranges.csv",
            Self::Iso => "iso18245_official_list.csv",
            Self::Usda => "usda_list.csv",
            Self::Processor => "stripe_list.csv",
        }
    }

    /// Full path of the dataset inside `data_dir`.
    pub fn path_in(self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }

    /// Matches a file name against the known datasets.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.file_name() == name)
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ranges => "ranges",
            Self::Iso => "iso",
            Self::Usda => "usda",
            Self::Processor => "processor",
        };
        f.write_str(name)
    }
}
