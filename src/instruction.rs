use bytes::Bytes;

/// How a literal header field interacts with the dynamic table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Inserted into the dynamic table after delivery (RFC 7541 §6.2.1).
    IncrementalIndexing,
    /// Delivered only, never inserted (§6.2.2).
    WithoutIndexing,
    /// Delivered only, and intermediaries must re-encode it literally
    /// (§6.2.3).
    NeverIndexed,
}

/// Name of a literal header field: a reference to an indexed name, or raw
/// bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Name {
    /// 1-based wire index into the static or dynamic table.
    Index(usize),
    /// Literal name bytes, already Huffman-decoded upstream.
    Literal(Bytes),
}

/// One primitively decoded HPACK instruction.
///
/// Produced by the upstream octet-level decoder after prefix integer and
/// Huffman decoding. Indices are wire indices, 1-based with `0` preserved so
/// the assembler can reject it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Fully indexed header field (RFC 7541 §6.1).
    Indexed { index: usize },
    /// Literal header field (§6.2).
    Literal {
        kind: EntryKind,
        name: Name,
        value: Bytes,
    },
    /// Dynamic table size update (§6.3).
    SizeUpdate { max_size: usize },
}
