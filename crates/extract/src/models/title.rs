use super::Pattern;

/// A title split into its series name and volume number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractedTitle {
    /// Series name with the volume marker removed, or the whole normalized
    /// title when no marker was found.
    pub title: String,
    /// Volume number, if the title carried one.
    pub volume: Option<u32>,
    /// The rule that produced the split.
    pub pattern: Option<Pattern>,
}
impl ExtractedTitle {
    /// A title without any recognisable volume marker.
    pub fn unmatched(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            volume: None,
            pattern: None,
        }
    }

    /// Returns true if the title can take part in series grouping.
    pub fn is_candidate(&self) -> bool {
        self.volume.is_some()
    }
}
