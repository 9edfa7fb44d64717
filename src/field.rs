use bytes::Bytes;

/// Per-entry overhead in octets, fixed by RFC 7541 §4.1.
pub(crate) const ENTRY_OVERHEAD: usize = 32;

/// A fully resolved header field.
///
/// Name and value are opaque byte sequences; character validation belongs to
/// the layer consuming whole entries.
#[derive(Clone, PartialEq, Eq)]
pub struct HeaderField {
    name: Bytes,
    value: Bytes,
}

impl HeaderField {
    #[inline]
    pub const fn new(name: Bytes, value: Bytes) -> Self {
        Self { name, value }
    }

    /// Builds a field over static byte slices without copying.
    #[inline]
    pub const fn from_static(name: &'static [u8], value: &'static [u8]) -> Self {
        Self {
            name: Bytes::from_static(name),
            value: Bytes::from_static(value),
        }
    }

    /// Returns reference to the field name.
    #[inline]
    pub const fn name(&self) -> &Bytes {
        &self.name
    }

    /// Returns reference to the field value.
    #[inline]
    pub const fn value(&self) -> &Bytes {
        &self.value
    }

    /// Table size of this field, including the fixed 32 octet overhead.
    #[inline]
    pub fn size(&self) -> usize {
        ENTRY_OVERHEAD + self.name.len() + self.value.len()
    }

    /// Consume [`HeaderField`] into its name and value.
    #[inline]
    pub fn into_parts(self) -> (Bytes, Bytes) {
        (self.name, self.value)
    }
}

impl std::fmt::Debug for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderField")
            .field("name", &String::from_utf8_lossy(&self.name))
            .field("value", &String::from_utf8_lossy(&self.value))
            .finish()
    }
}
