//! Volume token resolution.
//!
//! Most volume markers are plain digits, but triptych volumes are marked with
//! positional characters (上/中/下) and some titles spell the number out with a
//! single kanji numeral followed by a counter.

use std::collections::HashMap;
use std::sync::LazyLock;

use exn::ResultExt;

use crate::error::{ErrorKind, Result};

/// Fixed mapping of non-digit volume markers to their volume number.
static NUMERALS: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    HashMap::from([
        // First, middle and last volumes of a three-part work.
        ("上", 1),
        ("中", 2),
        ("下", 3),
        ("一", 1),
        ("二", 2),
        ("三", 3),
        ("四", 4),
        ("五", 5),
        ("六", 6),
        ("七", 7),
        ("八", 8),
        ("九", 9),
        ("十", 10),
    ])
});

/// Resolves a captured volume token to its volume number.
///
/// Tokens found in the numeral table are mapped through it; anything else is
/// parsed as a base-10 integer.
///
/// # Examples
///
/// ```
/// use shelf_extract::resolve_volume;
/// assert_eq!(resolve_volume("下").unwrap(), 3);
/// assert_eq!(resolve_volume("七").unwrap(), 7);
/// assert_eq!(resolve_volume("042").unwrap(), 42);
/// assert!(resolve_volume("99999999999").is_err());
/// ```
pub fn resolve_volume(token: &str) -> Result<u32> {
    if let Some(number) = NUMERALS.get(token) {
        return Ok(*number);
    }
    token.parse::<u32>().or_raise(|| ErrorKind::ParseError {
        field: "volume",
        value: token.to_string(),
    })
}
