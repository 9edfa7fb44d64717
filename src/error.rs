//! HPACK decoding error taxonomy.

/// An error that can occur while decoding a header block.
///
/// Every variant is fatal to the whole connection, not merely the current
/// block: once the dynamic table may have diverged from the peer's view of
/// it, no further instruction on the connection can be trusted. The error is
/// reported exactly once through the listener and the assembler rejects all
/// further work; tearing the connection down is the caller's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompressionError {
    /// Index `0` used where a table reference is required.
    IllegalZeroIndex,
    /// Index past the end of the static and dynamic tables.
    IndexOutOfRange,
    /// Table size update above the bound negotiated in SETTINGS.
    OversizedTableUpdate,
    /// Table size update after the first non-update instruction of a block.
    MisplacedTableSizeUpdate,
    /// Literal string cut short, as detected by the upstream octet decoder.
    TruncatedLiteral,
}

impl CompressionError {
    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::IllegalZeroIndex => "index 0 is not a valid table reference",
            Self::IndexOutOfRange => "index past the end of the tables",
            Self::OversizedTableUpdate => "table size update exceeds the negotiated bound",
            Self::MisplacedTableSizeUpdate => "table size update not at the beginning of a block",
            Self::TruncatedLiteral => "literal string is truncated",
        }
    }
}

impl std::error::Error for CompressionError {}
impl std::fmt::Display for CompressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
