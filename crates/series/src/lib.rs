//! Multi-volume series detection.
//!
//! Given an unordered collection of [`BookRecord`]s, this crate finds the
//! books that belong to the same series by parsing volume markers out of
//! their titles (see [`shelf_extract`]) and bucketing them by normalized
//! series name.
//!
//! # Architecture
//! - [`group_series`] is the pure computation: books in, [`SeriesGrouping`]
//!   out. A grouping holds every series with at least two volumes, plus an
//!   index from member book IDs to series IDs.
//! - [`SeriesGrouper`] memoizes that computation. The cached grouping is only
//!   dropped by an explicit [`invalidate`](SeriesGrouper::invalidate), so the
//!   caller must invalidate whenever its collection changes.
//!
//! Nothing here fails: incomplete books are skipped, unknown IDs yield `None`
//! and progress for a missing series is zero.

mod group;
mod grouper;
mod grouping;
pub mod models;
mod options;

pub use crate::group::group_series;
pub use crate::grouper::SeriesGrouper;
pub use crate::grouping::SeriesGrouping;
pub use crate::models::{BookRecord, SeriesInfo, SeriesProgress, Volume};
pub use crate::options::{DEFAULT_READ_STATUS, GroupingOptions, MIN_SERIES_VOLUMES};
