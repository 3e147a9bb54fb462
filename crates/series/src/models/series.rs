use super::{BookRecord, SeriesProgress};

/// A book's place within a series.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volume {
    /// The member book
    pub book: BookRecord,
    /// Volume number (1-indexed in practice), if one was found
    pub number: Option<u32>,
}
impl Volume {
    /// Pairs a book with its volume number.
    pub fn new(book: BookRecord, number: impl Into<Option<u32>>) -> Self {
        Self {
            book,
            number: number.into(),
        }
    }
}

/// A detected multi-volume series.
///
/// `volumes` is ordered by volume number, with un-numbered volumes last and
/// ties kept in collection order. `total_volumes` always equals
/// `volumes.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesInfo {
    /// Grouping identifier (strictly normalized series name)
    pub id: String,
    /// Display name, taken from the first volume seen
    pub name: String,
    /// Authors of the first volume seen
    pub authors: String,
    /// Member volumes, in reading order
    pub volumes: Vec<Volume>,
    /// First volume in sorted order, used as the display anchor
    pub representative: BookRecord,
    /// Always `volumes.len()`
    pub total_volumes: usize,
}
impl SeriesInfo {
    /// Builds a series from its collected volumes, sorting them and picking
    /// the representative. Returns `None` when there are no volumes.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        authors: impl Into<String>,
        mut volumes: Vec<Volume>,
    ) -> Option<Self> {
        // Stable sort: equal numbers keep collection order.
        volumes.sort_by_key(|volume| (volume.number.is_none(), volume.number));
        let representative = volumes.first()?.book.clone();
        Some(Self {
            id: id.into(),
            name: name.into(),
            authors: authors.into(),
            total_volumes: volumes.len(),
            volumes,
            representative,
        })
    }

    /// Returns true if `book_id` is one of this series' volumes.
    pub fn contains(&self, book_id: &str) -> bool {
        self.volumes.iter().any(|volume| volume.book.id == book_id)
    }

    /// Reading progress, see [`SeriesProgress::of`].
    pub fn progress(&self, read_status: &str) -> SeriesProgress {
        SeriesProgress::of(Some(self), read_status)
    }

    /// The first volume, in series order, that hasn't been read yet.
    pub fn next_unread(&self, read_status: &str) -> Option<&Volume> {
        self.volumes.iter().find(|volume| !volume.book.is_read(read_status))
    }
}
