//! Memoized series detection.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::instrument;

use crate::group::group_series;
use crate::grouping::SeriesGrouping;
use crate::models::{BookRecord, SeriesInfo, SeriesProgress};
use crate::options::GroupingOptions;

/// Detects series and caches the result until told otherwise.
///
/// The cache is a single [`Arc<SeriesGrouping>`] behind a [`RwLock`], so the
/// series list and the book index are always swapped together and every
/// method can operate on `&self`. A `None` cache means "invalid".
///
/// The cache does **not** notice when the collection changes: once a
/// non-empty grouping has been computed, [`detect`](Self::detect) keeps
/// returning it, whatever books are passed in, until
/// [`invalidate`](Self::invalidate) is called. An empty grouping is never
/// served from the cache.
///
/// # Examples
///
/// ```
/// use shelf_series::{BookRecord, SeriesGrouper};
/// use std::sync::Arc;
///
/// let books = vec![
///     BookRecord::new("1").with_title("ドラゴン物語(1)").with_authors("著者"),
///     BookRecord::new("2").with_title("ドラゴン物語(2)").with_authors("著者").with_read_status("read"),
/// ];
/// let grouper = SeriesGrouper::new();
/// let grouping = grouper.detect(&books);
/// assert!(Arc::ptr_eq(&grouping, &grouper.detect(&books)));
///
/// let series = grouper.series_for_book("2").unwrap();
/// assert_eq!(grouper.progress(Some(&series)).read, 1);
///
/// grouper.invalidate();
/// assert!(grouper.series("ドラゴン物語").is_none());
/// ```
#[derive(Debug, Default)]
pub struct SeriesGrouper {
    options: GroupingOptions,
    cache: RwLock<Option<Arc<SeriesGrouping>>>,
}

impl SeriesGrouper {
    /// A grouper with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// A grouper with the given options and an empty cache.
    pub fn with_options(options: GroupingOptions) -> Self {
        Self {
            options,
            cache: RwLock::new(None),
        }
    }

    /// The options this grouper was built with.
    pub fn options(&self) -> &GroupingOptions {
        &self.options
    }

    /// Returns the cached grouping if it is valid and non-empty, otherwise
    /// groups `books` and caches the result.
    #[instrument(level = "debug", skip_all, fields(book_count = books.len()))]
    pub fn detect(&self, books: &[BookRecord]) -> Arc<SeriesGrouping> {
        // Hold the write lock for the whole computation so concurrent callers
        // don't group the same collection twice.
        let mut cache = self.write();
        if let Some(cached) = cache.as_ref()
            && !cached.is_empty()
        {
            tracing::debug!(series_count = cached.len(), "serving cached series grouping");
            return Arc::clone(cached);
        }
        let grouping = Arc::new(group_series(books, &self.options));
        tracing::info!(series_count = grouping.len(), "detected series");
        *cache = Some(Arc::clone(&grouping));
        grouping
    }

    /// Drops the cached grouping; the next [`detect`](Self::detect) call
    /// recomputes from scratch.
    pub fn invalidate(&self) {
        if self.write().take().is_some() {
            tracing::debug!("series cache invalidated");
        }
    }

    /// Returns true if a grouping is currently cached.
    pub fn is_valid(&self) -> bool {
        self.read().is_some()
    }

    /// The cached grouping, without triggering detection.
    pub fn cached(&self) -> Option<Arc<SeriesGrouping>> {
        self.read().clone()
    }

    /// Looks up a series by its identifier in the cached grouping.
    pub fn series(&self, series_id: &str) -> Option<SeriesInfo> {
        self.read().as_ref()?.get(series_id).cloned()
    }

    /// Looks up the series containing a book in the cached grouping.
    pub fn series_for_book(&self, book_id: &str) -> Option<SeriesInfo> {
        self.read().as_ref()?.series_for_book(book_id).cloned()
    }

    /// Reading progress through `series`, using the configured read status.
    /// An absent series yields zeroed progress.
    pub fn progress(&self, series: Option<&SeriesInfo>) -> SeriesProgress {
        SeriesProgress::of(series, &self.options.read_status)
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Arc<SeriesGrouping>>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Arc<SeriesGrouping>>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str) -> BookRecord {
        BookRecord::new(id).with_title(title).with_authors("竜 太郎")
    }

    fn dragon_tale() -> Vec<BookRecord> {
        vec![
            book("1", "ドラゴン物語(1)"),
            book("2", "ドラゴン物語(2)").with_read_status("READ"),
            book("3", "ドラゴン物語(3) 完結編"),
            book("4", "独立した本"),
        ]
    }

    #[test]
    fn test_detect_is_memoized() {
        let grouper = SeriesGrouper::new();
        assert!(!grouper.is_valid());
        let books = dragon_tale();
        let first = grouper.detect(&books);
        let second = grouper.detect(&books);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(grouper.is_valid());
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let grouper = SeriesGrouper::new();
        let books = dragon_tale();
        let first = grouper.detect(&books);
        grouper.invalidate();
        assert!(!grouper.is_valid());
        assert!(grouper.cached().is_none());
        let second = grouper.detect(&books);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn test_stale_until_invalidated() {
        let grouper = SeriesGrouper::new();
        let before = grouper.detect(&dragon_tale());
        let other = vec![book("a", "別の物語 1"), book("b", "別の物語 2")];
        let stale = grouper.detect(&other);
        assert!(Arc::ptr_eq(&before, &stale));
        assert!(grouper.series("別の物語").is_none());

        grouper.invalidate();
        let fresh = grouper.detect(&other);
        assert_eq!(fresh.len(), 1);
        assert!(grouper.series("別の物語").is_some());
        assert!(grouper.series("ドラゴン物語").is_none());
    }

    #[test]
    fn test_empty_grouping_is_not_served_from_cache() {
        let grouper = SeriesGrouper::new();
        let empty = grouper.detect(&[book("4", "独立した本")]);
        assert!(empty.is_empty());
        let grouping = grouper.detect(&dragon_tale());
        assert_eq!(grouping.len(), 1);
    }

    #[test]
    fn test_lookups_read_the_cache_only() {
        let grouper = SeriesGrouper::new();
        // Nothing detected yet: lookups don't trigger detection.
        assert!(grouper.series("ドラゴン物語").is_none());
        assert!(grouper.series_for_book("1").is_none());
        assert!(!grouper.is_valid());

        grouper.detect(&dragon_tale());
        let series = grouper.series("ドラゴン物語").unwrap();
        assert_eq!(series.total_volumes, 3);
        assert_eq!(grouper.series_for_book("3"), Some(series));
        assert!(grouper.series_for_book("4").is_none());
        assert!(grouper.series("no such series").is_none());
    }

    #[test]
    fn test_progress() {
        let grouper = SeriesGrouper::new();
        grouper.detect(&dragon_tale());
        let series = grouper.series_for_book("1");
        assert_eq!(grouper.progress(series.as_ref()), SeriesProgress { read: 1, unread: 2, total: 3 });
        assert_eq!(grouper.progress(None), SeriesProgress::default());
    }

    #[test]
    fn test_progress_uses_configured_status() {
        let grouper = SeriesGrouper::with_options(GroupingOptions {
            read_status: "Finished".to_string(),
            ..GroupingOptions::default()
        });
        let books = vec![
            book("1", "物語 1").with_read_status("finished"),
            book("2", "物語 2").with_read_status("read"),
        ];
        grouper.detect(&books);
        let series = grouper.series_for_book("2");
        assert_eq!(grouper.progress(series.as_ref()), SeriesProgress { read: 1, unread: 1, total: 2 });
    }

    #[test]
    fn test_independent_groupers() {
        let one = SeriesGrouper::new();
        let two = SeriesGrouper::new();
        one.detect(&dragon_tale());
        assert!(one.is_valid());
        assert!(!two.is_valid());
    }

    #[test]
    fn test_shared_across_threads() {
        let grouper = Arc::new(SeriesGrouper::new());
        let books = Arc::new(dragon_tale());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let grouper = Arc::clone(&grouper);
                let books = Arc::clone(&books);
                std::thread::spawn(move || grouper.detect(&books))
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    }
}
