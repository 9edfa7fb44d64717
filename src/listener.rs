//! Whole-entry callbacks.

use bytes::Bytes;

use crate::instruction::EntryKind;

/// Receiver of whole-entry decoding events.
///
/// The assembler makes exactly one callback per successfully processed
/// instruction, plus [`on_decode_error`] exactly once when decoding fails.
/// Every method defaults to a no-op so listeners implement only what they
/// observe.
///
/// [`on_decode_error`]: Listener::on_decode_error
pub trait Listener {
    /// A header field fully resolved from a table index.
    fn on_indexed_header(&mut self, index: usize) {
        let _ = index;
    }

    /// A literal-value header field whose name is a table reference.
    ///
    /// Delivered for all three [`EntryKind`]s; the kind only decides whether
    /// the field also enters the dynamic table.
    fn on_name_index_and_literal_value(
        &mut self,
        kind: EntryKind,
        name_index: usize,
        value: &Bytes,
    ) {
        let _ = (kind, name_index, value);
    }

    /// A header field with both name and value literal.
    fn on_literal_name_and_value(&mut self, kind: EntryKind, name: &Bytes, value: &Bytes) {
        let _ = (kind, name, value);
    }

    /// The peer changed the dynamic table maximum.
    fn on_dynamic_table_size_update(&mut self, max_size: usize) {
        let _ = max_size;
    }

    /// Decoding failed; the connection must be torn down.
    fn on_decode_error(&mut self, message: &str) {
        let _ = message;
    }
}

impl<L: Listener + ?Sized> Listener for &mut L {
    #[inline]
    fn on_indexed_header(&mut self, index: usize) {
        (**self).on_indexed_header(index);
    }

    #[inline]
    fn on_name_index_and_literal_value(
        &mut self,
        kind: EntryKind,
        name_index: usize,
        value: &Bytes,
    ) {
        (**self).on_name_index_and_literal_value(kind, name_index, value);
    }

    #[inline]
    fn on_literal_name_and_value(&mut self, kind: EntryKind, name: &Bytes, value: &Bytes) {
        (**self).on_literal_name_and_value(kind, name, value);
    }

    #[inline]
    fn on_dynamic_table_size_update(&mut self, max_size: usize) {
        (**self).on_dynamic_table_size_update(max_size);
    }

    #[inline]
    fn on_decode_error(&mut self, message: &str) {
        (**self).on_decode_error(message);
    }
}

/// A listener that ignores every event.
///
/// Zero sized, so any number of assemblers can carry one for free. Used by
/// [`EntryAssembler::detached`][crate::EntryAssembler::detached] when the
/// caller has no use for callbacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoOpListener;

impl Listener for NoOpListener {}
