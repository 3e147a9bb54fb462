//! Bucketing books into series.

use std::collections::HashMap;

use shelf_extract::{extract_volume, normalize_for_id};
use tracing::instrument;

use crate::grouping::SeriesGrouping;
use crate::models::{BookRecord, SeriesInfo, Volume};
use crate::options::GroupingOptions;

/// A bucket of books sharing a series identifier, before the volume
/// threshold is applied.
struct SeriesEntry {
    id: String,
    name: String,
    authors: String,
    volumes: Vec<Volume>,
}

/// Groups a collection of books into multi-volume series.
///
/// A book is a series candidate when it has both a title and authors and its
/// title carries a volume marker. Candidates are bucketed by the strictly
/// normalized series name only: authors are ignored so that inconsistent
/// author strings across volumes don't split a series. The bucket's name and
/// authors come from the first candidate seen. Buckets below the volume
/// threshold are dropped.
///
/// This is the uncached computation; see [`SeriesGrouper`](crate::SeriesGrouper)
/// for the memoized entrypoint.
///
/// # Examples
///
/// ```
/// use shelf_series::{group_series, BookRecord, GroupingOptions};
///
/// let books = [
///     BookRecord::new("a").with_title("ドラゴン物語(2)").with_authors("著者"),
///     BookRecord::new("b").with_title("ドラゴン物語(1)").with_authors("著者"),
///     BookRecord::new("c").with_title("独立した本").with_authors("著者"),
/// ];
/// let grouping = group_series(&books, &GroupingOptions::default());
/// assert_eq!(grouping.len(), 1);
/// assert_eq!(grouping.series()[0].representative.id, "b");
/// assert_eq!(grouping.series_id_for_book("c"), None);
/// ```
#[instrument(level = "debug", skip_all, fields(book_count = books.len(), series_count))]
pub fn group_series(books: &[BookRecord], options: &GroupingOptions) -> SeriesGrouping {
    let mut entries: Vec<SeriesEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for book in books {
        let (Some(title), Some(authors)) = (book.title(), book.authors()) else {
            tracing::trace!(book_id = %book.id, "missing title or authors, not a series candidate");
            continue;
        };
        let extracted = extract_volume(title);
        let Some(number) = extracted.volume else {
            tracing::trace!(book_id = %book.id, "no volume marker, not a series candidate");
            continue;
        };
        let id = normalize_for_id(&extracted.title);
        if id.is_empty() {
            tracing::trace!(book_id = %book.id, name = %extracted.title, "series name normalizes to nothing");
            continue;
        }
        let position = *positions.entry(id.clone()).or_insert_with(|| {
            entries.push(SeriesEntry {
                id,
                name: extracted.title,
                authors: authors.to_string(),
                volumes: Vec::new(),
            });
            entries.len() - 1
        });
        entries[position].volumes.push(Volume::new(book.clone(), number));
    }

    let min_volumes = options.min_volumes();
    let series: Vec<SeriesInfo> = entries
        .into_iter()
        .filter(|entry| entry.volumes.len() >= min_volumes)
        .filter_map(|entry| SeriesInfo::new(entry.id, entry.name, entry.authors, entry.volumes))
        .collect();
    tracing::Span::current().record("series_count", series.len());
    SeriesGrouping::new(series)
}
