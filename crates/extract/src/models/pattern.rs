use std::fmt::{Display, Formatter, Result as FmtResult};

/// Volume marker shapes, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pattern {
    /// `番外編3 タイトル`
    ExtraVolume,
    /// `1-3 タイトル`, `1~3 タイトル`
    VolumeRange,
    /// `タイトル 第3巻`
    VolumeSuffix,
    /// `タイトル 第3話`
    ChapterSuffix,
    /// `Title Vol. 3`
    VolAbbreviation,
    /// `タイトル 分冊版 3`
    SplitEdition,
    /// `タイトル : 3 サブタイトル`
    ColonNumber,
    /// `タイトル(3)(レーベル)`
    ParenLabel,
    /// `タイトル(3) サブタイトル`
    ParenSubtitle,
    /// `タイトル(3)サブタイトル`
    ParenGlued,
    /// `タイトル(3)`
    ParenNumber,
    /// `タイトル3 サブタイトル (レーベル)`
    NumberSubtitleLabel,
    /// `タイトル 3`, `タイトル3 (サブタイトル)`
    TrailingNumber,
    /// `タイトル(新装版)3`
    AfterParen,
    /// `タイトル(上)`, `タイトル 中`, `タイトル下巻`
    Positional,
    /// `タイトル 三巻`
    KanjiVolume,
}
impl Pattern {
    /// Returns a short, stable name for the pattern.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExtraVolume => "extra-volume",
            Self::VolumeRange => "volume-range",
            Self::VolumeSuffix => "volume-suffix",
            Self::ChapterSuffix => "chapter-suffix",
            Self::VolAbbreviation => "vol-abbreviation",
            Self::SplitEdition => "split-edition",
            Self::ColonNumber => "colon-number",
            Self::ParenLabel => "paren-label",
            Self::ParenSubtitle => "paren-subtitle",
            Self::ParenGlued => "paren-glued",
            Self::ParenNumber => "paren-number",
            Self::NumberSubtitleLabel => "number-subtitle-label",
            Self::TrailingNumber => "trailing-number",
            Self::AfterParen => "after-paren",
            Self::Positional => "positional",
            Self::KanjiVolume => "kanji-volume",
        }
    }

    /// Leading patterns keep the remaining text as-is (trimmed); trailing
    /// patterns additionally strip dangling separators from the series name.
    pub fn is_leading(&self) -> bool {
        matches!(self, Self::ExtraVolume | Self::VolumeRange)
    }
}
impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
