//! Reference list identifiers.

/// One of the three reference lists that can describe an MCC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataSource {
    /// ISO 18245 official list.
    Iso,
    /// United States Department of Agriculture list.
    Usda,
    /// Payments processor (Stripe) list.
    Processor,
}

impl DataSource {
    /// All sources, in the order lookups probe them.
    pub const ALL: [DataSource; 3] = [Self::Iso, Self::Usda, Self::Processor];

    /// Short lowercase name of the source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Iso => "iso",
            Self::Usda => "usda",
            Self::Processor => "processor",
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
