/// The smallest number of volumes that makes a series.
pub const MIN_SERIES_VOLUMES: usize = 2;
/// Read-status label counted as "read" unless configured otherwise.
pub const DEFAULT_READ_STATUS: &str = "read";

/// Tunables for series grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct GroupingOptions {
    /// Buckets with fewer volumes than this are not series. Never effectively
    /// lower than [`MIN_SERIES_VOLUMES`].
    pub min_volumes: usize,
    /// Read-status label counted as read, compared case-insensitively.
    pub read_status: String,
}
impl GroupingOptions {
    /// The effective volume threshold.
    pub fn min_volumes(&self) -> usize {
        self.min_volumes.max(MIN_SERIES_VOLUMES)
    }
}
impl Default for GroupingOptions {
    fn default() -> Self {
        Self {
            min_volumes: MIN_SERIES_VOLUMES,
            read_status: DEFAULT_READ_STATUS.to_string(),
        }
    }
}
