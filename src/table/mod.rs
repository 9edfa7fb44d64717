//! Static and dynamic header tables.

use std::collections::VecDeque;

use bytes::Bytes;

use crate::error::CompressionError;
use crate::field::HeaderField;
use crate::log::{debug, warning};

pub mod static_table;

/// One live dynamic table entry.
#[derive(Clone, Debug)]
pub struct DynamicTableEntry {
    field: HeaderField,
    insert_index: u64,
}

impl DynamicTableEntry {
    /// Returns reference to the stored field.
    #[inline]
    pub const fn field(&self) -> &HeaderField {
        &self.field
    }

    /// Sequence number assigned when the entry was inserted.
    ///
    /// Dropped oversize insertions do not consume a number.
    #[inline]
    pub const fn insert_index(&self) -> u64 {
        self.insert_index
    }
}

/// The [`Dynamic Table`][dynamic_table] of RFC 7541.
///
/// [dynamic_table]: https://httpwg.org/specs/rfc7541.html#dynamic.table
///
/// An ordered, size-bounded collection of recently delivered header fields,
/// most recent first. Entries are evicted from the oldest end whenever an
/// insertion or a size update would push the table past its maximum, so
/// `size <= max_size` holds at all times.
///
/// Duplicate entries are legal and must not be treated as an error.
///
/// One table exists per decoding direction of a connection; it is not safe
/// for concurrent mutation and callers serialize access per instance.
#[derive(Debug)]
pub struct DynamicTable {
    entries: VecDeque<DynamicTableEntry>,
    size: usize,
    max_size: usize,
    settings_max: usize,
    insert_count: u64,
}

impl DynamicTable {
    /// Creates a table bounded by the size negotiated in the connection's
    /// SETTINGS exchange.
    ///
    /// The bound doubles as the initial maximum until the peer sends a size
    /// update.
    #[inline]
    pub const fn new(settings_max: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            size: 0,
            max_size: settings_max,
            settings_max,
            insert_count: 0,
        }
    }

    /// Like [`new`][DynamicTable::new], with entry storage preallocated.
    #[inline]
    pub fn with_capacity(settings_max: usize, capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            size: 0,
            max_size: settings_max,
            settings_max,
            insert_count: 0,
        }
    }

    /// Sum of entry sizes currently held.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Current maximum the table may grow to.
    #[inline]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a 1-based dynamic index, `1` being the most recent entry.
    ///
    /// # Errors
    ///
    /// Returns [`CompressionError::IndexOutOfRange`] for `0` and anything
    /// past the live entry count.
    pub fn get_entry(&self, dynamic_index: usize) -> Result<&DynamicTableEntry, CompressionError> {
        dynamic_index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .ok_or(CompressionError::IndexOutOfRange)
    }

    /// Field for a 1-based dynamic index.
    #[inline]
    pub fn get(&self, dynamic_index: usize) -> Result<&HeaderField, CompressionError> {
        self.get_entry(dynamic_index).map(DynamicTableEntry::field)
    }

    /// Name for a 1-based dynamic index.
    #[inline]
    pub fn get_name(&self, dynamic_index: usize) -> Result<Bytes, CompressionError> {
        self.get(dynamic_index).map(|field| field.name().clone())
    }

    /// Inserts a field at the front, evicting from the oldest end until it
    /// fits.
    ///
    /// It is not an error to insert an entry larger than the maximum size;
    /// such an insertion empties the table and the entry itself is dropped,
    /// without consuming an insertion sequence number (RFC 7541 §4.4).
    pub fn insert(&mut self, field: HeaderField) {
        let entry_size = field.size();
        while self.size + entry_size > self.max_size && !self.entries.is_empty() {
            self.evict();
        }
        if entry_size > self.max_size {
            warning!(
                "hpack: entry of {entry_size} octets dropped, table maximum is {}",
                self.max_size,
            );
            return;
        }
        self.entries.push_front(DynamicTableEntry {
            field,
            insert_index: self.insert_count,
        });
        self.insert_count += 1;
        self.size += entry_size;

        debug_assert!(self.size <= self.max_size);
    }

    /// Applies a size update from the peer, evicting until the table fits
    /// the new maximum.
    ///
    /// # Errors
    ///
    /// Returns [`CompressionError::OversizedTableUpdate`] if `new_max`
    /// exceeds the negotiated bound.
    pub fn set_max_size(&mut self, new_max: usize) -> Result<(), CompressionError> {
        if new_max > self.settings_max {
            return Err(CompressionError::OversizedTableUpdate);
        }
        debug!("hpack: dynamic table maximum {} -> {new_max}", self.max_size);
        self.max_size = new_max;
        while self.size > self.max_size {
            self.evict();
        }
        Ok(())
    }

    fn evict(&mut self) {
        if let Some(entry) = self.entries.pop_back() {
            self.size -= entry.field.size();
            debug!("hpack: evicted entry #{}", entry.insert_index);
        }
    }
}
