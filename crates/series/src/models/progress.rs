use super::SeriesInfo;

/// Reading progress through a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesProgress {
    /// Volumes marked as read
    pub read: usize,
    /// Volumes not (yet) read
    pub unread: usize,
    /// Number of volumes in the series
    pub total: usize,
}
impl SeriesProgress {
    /// Computes progress for a series, counting volumes whose read status
    /// matches `read_status` (case-insensitively) as read.
    ///
    /// An absent series yields zeroed progress rather than an error.
    pub fn of(series: Option<&SeriesInfo>, read_status: &str) -> Self {
        let Some(series) = series else {
            return Self::default();
        };
        let total = series.volumes.len();
        let read = series.volumes.iter().filter(|volume| volume.book.is_read(read_status)).count();
        Self {
            read,
            unread: total - read,
            total,
        }
    }

    /// Fraction of the series that has been read, between `0.0` and `1.0`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.read as f64 / self.total as f64
    }

    /// Returns true if every volume has been read.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.read == self.total
    }
}
