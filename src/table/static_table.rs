//! HPACK static table (RFC 7541 Appendix A).
//!
//! 61 predefined header fields, indexed 1 through 61 on the wire and stored
//! 0-based here. The data is process-wide constant, so reads are safe from
//! any number of decoder instances without synchronization.

use bytes::Bytes;

use crate::error::CompressionError;
use crate::field::HeaderField;

/// Number of entries in the static table.
pub const LEN: usize = 61;

static STATIC_TABLE: [(&[u8], &[u8]); LEN] = [
    (b":authority", b""),                  //  1
    (b":method", b"GET"),                  //  2
    (b":method", b"POST"),                 //  3
    (b":path", b"/"),                      //  4
    (b":path", b"/index.html"),            //  5
    (b":scheme", b"http"),                 //  6
    (b":scheme", b"https"),                //  7
    (b":status", b"200"),                  //  8
    (b":status", b"204"),                  //  9
    (b":status", b"206"),                  // 10
    (b":status", b"304"),                  // 11
    (b":status", b"400"),                  // 12
    (b":status", b"404"),                  // 13
    (b":status", b"500"),                  // 14
    (b"accept-charset", b""),              // 15
    (b"accept-encoding", b"gzip, deflate"),// 16
    (b"accept-language", b""),             // 17
    (b"accept-ranges", b""),               // 18
    (b"accept", b""),                      // 19
    (b"access-control-allow-origin", b""), // 20
    (b"age", b""),                         // 21
    (b"allow", b""),                       // 22
    (b"authorization", b""),               // 23
    (b"cache-control", b""),               // 24
    (b"content-disposition", b""),         // 25
    (b"content-encoding", b""),            // 26
    (b"content-language", b""),            // 27
    (b"content-length", b""),              // 28
    (b"content-location", b""),            // 29
    (b"content-range", b""),               // 30
    (b"content-type", b""),                // 31
    (b"cookie", b""),                      // 32
    (b"date", b""),                        // 33
    (b"etag", b""),                        // 34
    (b"expect", b""),                      // 35
    (b"expires", b""),                     // 36
    (b"from", b""),                        // 37
    (b"host", b""),                        // 38
    (b"if-match", b""),                    // 39
    (b"if-modified-since", b""),           // 40
    (b"if-none-match", b""),               // 41
    (b"if-range", b""),                    // 42
    (b"if-unmodified-since", b""),         // 43
    (b"last-modified", b""),               // 44
    (b"link", b""),                        // 45
    (b"location", b""),                    // 46
    (b"max-forwards", b""),                // 47
    (b"proxy-authenticate", b""),          // 48
    (b"proxy-authorization", b""),         // 49
    (b"range", b""),                       // 50
    (b"referer", b""),                     // 51
    (b"refresh", b""),                     // 52
    (b"retry-after", b""),                 // 53
    (b"server", b""),                      // 54
    (b"set-cookie", b""),                  // 55
    (b"strict-transport-security", b""),   // 56
    (b"transfer-encoding", b""),           // 57
    (b"user-agent", b""),                  // 58
    (b"vary", b""),                        // 59
    (b"via", b""),                         // 60
    (b"www-authenticate", b""),            // 61
];

/// Looks up the full field for a 1-based static index.
///
/// # Errors
///
/// Returns [`CompressionError::IndexOutOfRange`] for `0` and anything above
/// [`LEN`]. Never allocates; the returned field borrows the static data.
pub fn lookup(index: usize) -> Result<HeaderField, CompressionError> {
    match index.checked_sub(1).and_then(|i| STATIC_TABLE.get(i)) {
        Some(&(name, value)) => Ok(HeaderField::new(
            Bytes::from_static(name),
            Bytes::from_static(value),
        )),
        None => Err(CompressionError::IndexOutOfRange),
    }
}

/// Looks up only the name for a 1-based static index.
///
/// # Errors
///
/// Same bounds as [`lookup`].
pub fn lookup_name(index: usize) -> Result<Bytes, CompressionError> {
    match index.checked_sub(1).and_then(|i| STATIC_TABLE.get(i)) {
        Some(&(name, _)) => Ok(Bytes::from_static(name)),
        None => Err(CompressionError::IndexOutOfRange),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_every_index_resolves() {
        for index in 1..=LEN {
            assert!(lookup(index).is_ok(), "index {index} failed");
            assert!(lookup_name(index).is_ok(), "index {index} failed");
        }
    }

    #[test]
    fn test_bounds_rejected() {
        assert_eq!(lookup(0), Err(CompressionError::IndexOutOfRange));
        assert_eq!(lookup(62), Err(CompressionError::IndexOutOfRange));
        assert_eq!(lookup_name(0), Err(CompressionError::IndexOutOfRange));
        assert_eq!(lookup_name(62), Err(CompressionError::IndexOutOfRange));
    }

    #[test]
    fn test_known_entries() {
        let field = lookup(2).unwrap();
        assert_eq!(field.name(), &b":method"[..]);
        assert_eq!(field.value(), &b"GET"[..]);

        let field = lookup(8).unwrap();
        assert_eq!(field.name(), &b":status"[..]);
        assert_eq!(field.value(), &b"200"[..]);

        let field = lookup(61).unwrap();
        assert_eq!(field.name(), &b"www-authenticate"[..]);
        assert!(field.value().is_empty());

        assert_eq!(lookup_name(1).unwrap(), &b":authority"[..]);
    }
}
