//! Title normalization and volume extraction.
//!
//! Splits free-text book titles into a series name and a volume number:
//!
//! - [`normalize`] canonicalizes width, brackets, punctuation and whitespace,
//! - [`normalize_for_id`] derives the strict grouping identifier of a name,
//! - [`extract_volume`] runs the ordered volume rules over a title.
//!
//! ```
//! use shelf_extract::{extract_volume, normalize_for_id};
//!
//! let first = extract_volume("シリーズ名 : 27 サブタイトル");
//! let second = extract_volume("シリーズ名（２８）サブタイトル２");
//! assert_eq!((first.volume, second.volume), (Some(27), Some(28)));
//! assert_eq!(normalize_for_id(&first.title), normalize_for_id(&second.title));
//! ```

mod consts;
pub mod error;
mod extract;
pub mod models;
mod normalize;
mod numerals;

pub use crate::extract::extract_volume;
pub use crate::normalize::{normalize, normalize_for_id};
pub use crate::numerals::resolve_volume;
