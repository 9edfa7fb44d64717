//! HPACK Whole-Entry Decoding Engine
//!
//! Turns a stream of already-primitively-decoded [HPACK] instructions into
//! fully resolved header fields, maintaining the per-connection dynamic
//! table along the way. Octet-level parsing (prefix integers, Huffman) and
//! HTTP/2 framing happen upstream; this crate begins where the wire format
//! ends.
//!
//! One [`EntryAssembler`] exists per decoding direction of a connection. It
//! consumes one [`Instruction`] at a time, resolves table references,
//! mutates the [`DynamicTable`] when required, and reports every outcome
//! through a [`Listener`]. The first malformed instruction is fatal: the
//! assembler latches into an error state and the connection must be torn
//! down.
//!
//! [HPACK]: https://httpwg.org/specs/rfc7541.html
#![warn(missing_debug_implementations)]

mod log;

mod error;
mod field;
mod instruction;
mod listener;
mod assembler;

pub mod table;

pub use assembler::EntryAssembler;
pub use error::CompressionError;
pub use field::HeaderField;
pub use instruction::{EntryKind, Instruction, Name};
pub use listener::{Listener, NoOpListener};
pub use table::DynamicTable;
