use std::collections::HashMap;

use crate::models::SeriesInfo;

/// The result of series detection: every detected series plus an index from
/// member book IDs to their series.
///
/// Books that are not part of a series are absent from the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesGrouping {
    series: Vec<SeriesInfo>,
    /// Series ID -> position in `series`
    positions: HashMap<String, usize>,
    /// Book ID -> series ID
    books: HashMap<String, String>,
}
impl SeriesGrouping {
    /// Builds the lookup tables for an already-grouped list of series.
    pub fn new(series: Vec<SeriesInfo>) -> Self {
        let mut positions = HashMap::with_capacity(series.len());
        let mut books = HashMap::new();
        for (position, info) in series.iter().enumerate() {
            positions.insert(info.id.clone(), position);
            for volume in &info.volumes {
                books.insert(volume.book.id.clone(), info.id.clone());
            }
        }
        Self {
            series,
            positions,
            books,
        }
    }

    /// All detected series, in the order their first volume was seen.
    pub fn series(&self) -> &[SeriesInfo] {
        &self.series
    }

    /// Iterates over the detected series.
    pub fn iter(&self) -> impl Iterator<Item = &SeriesInfo> {
        self.series.iter()
    }

    /// Number of detected series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns true if no series was detected.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Looks up a series by its identifier.
    pub fn get(&self, series_id: &str) -> Option<&SeriesInfo> {
        self.positions.get(series_id).and_then(|position| self.series.get(*position))
    }

    /// Looks up the series a book belongs to.
    pub fn series_for_book(&self, book_id: &str) -> Option<&SeriesInfo> {
        self.series_id_for_book(book_id).and_then(|series_id| self.get(series_id))
    }

    /// Looks up the identifier of the series a book belongs to.
    pub fn series_id_for_book(&self, book_id: &str) -> Option<&str> {
        self.books.get(book_id).map(String::as_str)
    }

    /// The book ID -> series ID index.
    pub fn index(&self) -> &HashMap<String, String> {
        &self.books
    }
}
impl<'a> IntoIterator for &'a SeriesGrouping {
    type Item = &'a SeriesInfo;
    type IntoIter = std::slice::Iter<'a, SeriesInfo>;
    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}
