use thiserror::Error;

/// Failures surfaced by tree building and report extraction.
///
/// Illegal attribute/form-class combinations are *not* errors: they are a
/// validated business outcome reported through [`crate::Legality`] and the
/// session's diagnostics, and recording always continues past them.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A compiled-in legality table carries the same key triple twice.
    /// This is a table-authoring defect, detectable only while the rule
    /// trees are being built, and is fatal to that build call.
    #[error("duplicate rule entry (0x{key1:04x}, 0x{key2:04x}, 0x{key3:04x}) in the {table} table")]
    MalformedRuleTable {
        table: &'static str,
        key1: u16,
        key2: u16,
        key3: u16,
    },

    /// The report snapshot disagreed with the pre-counted tree size.
    /// Indicates concurrent mutation or an implementation bug; the report
    /// for that invocation is abandoned.
    #[error("snapshot of the {table} tree extracted {extracted} entries, expected {counted}")]
    Snapshot {
        table: &'static str,
        counted: usize,
        extracted: usize,
    },

    /// The snapshot buffer for a report could not be reserved.
    #[error("unable to reserve a snapshot buffer for {entries} entries")]
    Allocation { entries: usize },
}

pub type Result<T> = std::result::Result<T, CheckError>;
