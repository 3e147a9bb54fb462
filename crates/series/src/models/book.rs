/// A book as supplied by the caller's collection.
///
/// The grouper only ever reads these; titles and authors are optional because
/// collections routinely contain incomplete records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookRecord {
    /// Unique identifier within the collection
    pub id: String,
    /// Free-text title
    pub title: Option<String>,
    /// Authors, as a single display string
    pub authors: Option<String>,
    /// Reading status label (e.g. `"read"`)
    pub read_status: Option<String>,
}
impl BookRecord {
    /// A record with only an identifier set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the authors string.
    pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = Some(authors.into());
        self
    }

    /// Sets the reading status label.
    pub fn with_read_status(mut self, status: impl Into<String>) -> Self {
        self.read_status = Some(status.into());
        self
    }

    /// Returns the title, if present and not blank.
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Returns the authors, if present and not blank.
    pub fn authors(&self) -> Option<&str> {
        non_blank(self.authors.as_deref())
    }

    /// Returns true if the read status matches `label`, ignoring case and
    /// surrounding whitespace on both sides.
    pub fn is_read(&self, label: &str) -> bool {
        let label = label.trim().to_lowercase();
        self.read_status.as_deref().is_some_and(|status| status.trim().to_lowercase() == label)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
