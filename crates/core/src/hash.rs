//! Class-name hashing.
//!
//! FNV-1a over UTF-16 code units with explicit 32-bit wraparound, so the
//! same key yields the same class name on every platform and matches
//! hashes computed by a browser runtime.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Prefix that keeps class names from starting with a digit.
pub const CLASS_NAME_PREFIX: char = 'c';

/// Computes the 32-bit FNV-1a hash of a string's UTF-16 code units.
pub fn fnv1a32(input: &str) -> u32 {
    input.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Derives the class name for a cache key.
///
/// # Examples
///
/// ```
/// use coulis_core::to_class_name;
///
/// assert_eq!(to_class_name(""), "c811c9dc5");
/// assert_eq!(to_class_name("color:red;"), to_class_name("color:red;"));
/// assert_ne!(to_class_name("color:red;"), to_class_name("color:blue;"));
/// ```
pub fn to_class_name(key: &str) -> String {
    format!("{CLASS_NAME_PREFIX}{:x}", fnv1a32(key))
}
