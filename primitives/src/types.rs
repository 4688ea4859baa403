//! Core type aliases and constants for the drug packet ledger.
//!
//! These are shared by the contract engine, the host API, and tests.

/// 32-byte digest used for write-set commitments.
pub type Hash = [u8; 32];

/// A zero-valued hash (32 zero bytes). Returned for empty write sets.
pub const ZERO_HASH: Hash = [0u8; 32];

/// Maximum state key length in bytes.
pub const MAX_KEY_LEN: usize = 256;

/// Maximum state value length in bytes.
pub const MAX_VALUE_LEN: usize = 65_536; // 64 KiB

/// Inclusive lower bound of the default record scan window.
///
/// The window is lexical, not numeric: `"1000"` sorts before `"999"` and is
/// included, while `"9990"` sorts after it and is not.
pub const DEFAULT_SCAN_START: &str = "0";

/// Exclusive upper bound of the default record scan window.
pub const DEFAULT_SCAN_END: &str = "999";

/// Convert a `Hash` to a hex string for display purposes.
pub fn hash_to_hex(hash: &Hash) -> String {
    let mut s = String::with_capacity(66);
    s.push_str("0x");
    for byte in hash {
        use std::fmt::Write;
        let _ = write!(s, "{:02x}", byte);
    }
    s
}

/// Returns true if `key` falls in the half-open lexical window `[start, end)`.
pub fn in_scan_window(key: &str, start: &str, end: &str) -> bool {
    key >= start && key < end
}
