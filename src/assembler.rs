use bytes::Bytes;

use crate::error::CompressionError;
use crate::field::HeaderField;
use crate::instruction::{EntryKind, Instruction, Name};
use crate::listener::{Listener, NoOpListener};
use crate::log::error;
use crate::table::{DynamicTable, static_table};

use CompressionError as E;

/// Ready for the next instruction, or failed for good.
#[derive(Clone, Copy, Debug)]
enum State {
    AwaitingInstruction,
    Error(CompressionError),
}

/// Turns primitively decoded HPACK instructions into whole header entries.
///
/// One assembler exists per decoding direction of a connection and lives as
/// long as the connection. It owns the [`DynamicTable`], drives the
/// [`Listener`], and latches into a terminal error state on the first
/// malformed instruction.
///
/// The listener is any [`Listener`] value; lend one with `&mut` to keep
/// ownership, or construct the assembler [`detached`][EntryAssembler::detached]
/// to run without callbacks.
///
/// Processing is synchronous and single threaded; callers serialize access
/// per instance. Dropping the assembler is cancellation.
pub struct EntryAssembler<L = NoOpListener> {
    table: DynamicTable,
    listener: L,
    state: State,
    size_update_window: bool,
}

impl EntryAssembler<NoOpListener> {
    /// An assembler without callbacks; only table side effects remain
    /// observable.
    #[inline]
    pub const fn detached(settings_max: usize) -> Self {
        Self::new(settings_max, NoOpListener)
    }
}

impl<L: Listener> EntryAssembler<L> {
    /// Creates an assembler whose dynamic table is bounded by the size
    /// negotiated in the connection's SETTINGS exchange.
    pub const fn new(settings_max: usize, listener: L) -> Self {
        Self {
            table: DynamicTable::new(settings_max),
            listener,
            state: State::AwaitingInstruction,
            size_update_window: true,
        }
    }

    /// Current dynamic table state.
    #[inline]
    pub const fn table(&self) -> &DynamicTable {
        &self.table
    }

    /// The terminal error, if decoding has failed.
    pub const fn error(&self) -> Option<CompressionError> {
        match self.state {
            State::AwaitingInstruction => None,
            State::Error(kind) => Some(kind),
        }
    }

    /// Marks the beginning of a fresh header block, making leading size
    /// updates legal again.
    pub fn start_block(&mut self) {
        if matches!(self.state, State::AwaitingInstruction) {
            self.size_update_window = true;
        }
    }

    /// Processes one decoded instruction.
    ///
    /// On the first failure the listener's
    /// [`on_decode_error`][Listener::on_decode_error] fires once and the
    /// assembler becomes terminal: every further call is a cheap no-op that
    /// repeats the stored error without invoking the listener again.
    pub fn instruct(&mut self, instruction: Instruction) -> Result<(), CompressionError> {
        if let State::Error(kind) = self.state {
            return Err(kind);
        }
        self.process(instruction).map_err(|kind| self.fail(kind))
    }

    /// Surfaces a truncated literal string detected by the upstream octet
    /// decoder through the same fail-fast channel.
    pub fn report_truncated_literal(&mut self) -> CompressionError {
        match self.state {
            State::Error(kind) => kind,
            State::AwaitingInstruction => self.fail(E::TruncatedLiteral),
        }
    }

    fn process(&mut self, instruction: Instruction) -> Result<(), CompressionError> {
        match instruction {
            Instruction::Indexed { index } => {
                if index == 0 {
                    return Err(E::IllegalZeroIndex);
                }
                // validation only, an indexed reference never mutates the table
                self.resolve(index)?;
                self.size_update_window = false;
                self.listener.on_indexed_header(index);
            }
            Instruction::Literal { kind, name, value } => {
                self.size_update_window = false;
                let name = match name {
                    Name::Index(index) => {
                        let name = self.resolve_name(index)?;
                        self.listener
                            .on_name_index_and_literal_value(kind, index, &value);
                        name
                    }
                    Name::Literal(name) => {
                        self.listener.on_literal_name_and_value(kind, &name, &value);
                        name
                    }
                };
                if matches!(kind, EntryKind::IncrementalIndexing) {
                    self.table.insert(HeaderField::new(name, value));
                }
            }
            Instruction::SizeUpdate { max_size } => {
                // legal only at the beginning of a block, or immediately
                // following another size update
                if !self.size_update_window {
                    return Err(E::MisplacedTableSizeUpdate);
                }
                self.table.set_max_size(max_size)?;
                self.listener.on_dynamic_table_size_update(max_size);
            }
        }
        Ok(())
    }

    /// Validates a wire index and resolves it to a full field.
    fn resolve(&self, index: usize) -> Result<HeaderField, CompressionError> {
        if index <= static_table::LEN {
            static_table::lookup(index)
        } else {
            self.table.get(index - static_table::LEN).cloned()
        }
    }

    /// Resolves a name reference; `0` and out-of-range indices fail with
    /// [`CompressionError::IndexOutOfRange`].
    fn resolve_name(&self, index: usize) -> Result<Bytes, CompressionError> {
        if index <= static_table::LEN {
            static_table::lookup_name(index)
        } else {
            self.table.get_name(index - static_table::LEN)
        }
    }

    fn fail(&mut self, kind: CompressionError) -> CompressionError {
        error!("hpack: decoding failed: {kind}");
        self.state = State::Error(kind);
        self.listener.on_decode_error(kind.message());
        kind
    }
}

impl<L> std::fmt::Debug for EntryAssembler<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryAssembler")
            .field("table", &self.table)
            .field("state", &self.state)
            .field("size_update_window", &self.size_update_window)
            .finish_non_exhaustive()
    }
}
