//! Volume number extraction.
//!
//! A title is matched against an ordered list of rules and the first rule
//! that matches decides the split. The order is significant: anchored and
//! labelled shapes must be tried before the permissive trailing-number shape,
//! which would otherwise swallow subtitles and labels into the series name.

use std::sync::LazyLock;

use regex::Regex;
use tracing::instrument;

use crate::consts;
use crate::models::{ExtractedTitle, Pattern};
use crate::normalize::normalize;
use crate::numerals::resolve_volume;

/// A single volume rule: every regex captures a `name` and a `volume` group.
struct Rule {
    pattern: Pattern,
    regex: &'static LazyLock<Regex>,
}

static RULES: [Rule; 18] = [
    // Leading markers: the volume is at the start of the string.
    Rule { pattern: Pattern::ExtraVolume, regex: &consts::EXTRA_VOLUME_REGEX },
    Rule { pattern: Pattern::VolumeRange, regex: &consts::VOLUME_RANGE_REGEX },
    // Trailing and embedded markers.
    Rule { pattern: Pattern::VolumeSuffix, regex: &consts::VOLUME_SUFFIX_REGEX },
    Rule { pattern: Pattern::ChapterSuffix, regex: &consts::CHAPTER_SUFFIX_REGEX },
    Rule { pattern: Pattern::VolAbbreviation, regex: &consts::VOL_ABBREVIATION_REGEX },
    Rule { pattern: Pattern::SplitEdition, regex: &consts::SPLIT_EDITION_REGEX },
    Rule { pattern: Pattern::ColonNumber, regex: &consts::COLON_NUMBER_REGEX },
    Rule { pattern: Pattern::ParenLabel, regex: &consts::PAREN_LABEL_REGEX },
    Rule { pattern: Pattern::ParenSubtitle, regex: &consts::PAREN_SUBTITLE_REGEX },
    Rule { pattern: Pattern::ParenGlued, regex: &consts::PAREN_GLUED_REGEX },
    Rule { pattern: Pattern::ParenNumber, regex: &consts::PAREN_NUMBER_REGEX },
    Rule { pattern: Pattern::NumberSubtitleLabel, regex: &consts::NUMBER_SUBTITLE_LABEL_REGEX },
    Rule { pattern: Pattern::TrailingNumber, regex: &consts::TRAILING_NUMBER_REGEX },
    Rule { pattern: Pattern::AfterParen, regex: &consts::AFTER_PAREN_REGEX },
    Rule { pattern: Pattern::Positional, regex: &consts::POSITIONAL_PAREN_REGEX },
    Rule { pattern: Pattern::Positional, regex: &consts::POSITIONAL_SPACED_REGEX },
    Rule { pattern: Pattern::Positional, regex: &consts::POSITIONAL_COUNTER_REGEX },
    Rule { pattern: Pattern::KanjiVolume, regex: &consts::KANJI_VOLUME_REGEX },
];

impl Rule {
    /// Returns `None` if the regex doesn't match, the volume token doesn't
    /// resolve, or nothing of the series name is left after cleanup.
    fn apply(&self, title: &str) -> Option<ExtractedTitle> {
        let captures = self.regex.captures(title)?;
        let token = captures.name("volume")?.as_str();
        let volume = match resolve_volume(token) {
            Ok(volume) => volume,
            Err(error) => {
                tracing::debug!(pattern = %self.pattern, ?error, "volume token rejected");
                return None;
            },
        };
        let name = captures.name("name")?.as_str().trim();
        let name = if self.pattern.is_leading() { name } else { strip_separators(name) };
        if name.is_empty() {
            return None;
        }
        Some(ExtractedTitle {
            title: name.to_string(),
            volume: Some(volume),
            pattern: Some(self.pattern),
        })
    }
}

/// Removes a dangling separator left behind once the volume marker is cut off.
fn strip_separators(name: &str) -> &str {
    name.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ':' | ';' | '-' | '~')).trim()
}

/// Splits a title into its series name and volume number.
///
/// The title is [normalized](crate::normalize) first. When no rule matches,
/// the normalized title is returned without a volume number; such a book is
/// not a series candidate.
///
/// # Examples
///
/// ```
/// use shelf_extract::extract_volume;
///
/// let extracted = extract_volume("大長編タイトル８ 副題 （レーベル）");
/// assert_eq!(extracted.title, "大長編タイトル");
/// assert_eq!(extracted.volume, Some(8));
///
/// let extracted = extract_volume("独立した本");
/// assert_eq!(extracted.title, "独立した本");
/// assert_eq!(extracted.volume, None);
/// ```
#[instrument(level = "trace")]
pub fn extract_volume(title: &str) -> ExtractedTitle {
    let normalized = normalize(title);
    if normalized.is_empty() {
        return ExtractedTitle::default();
    }
    match RULES.iter().find_map(|rule| rule.apply(&normalized)) {
        Some(extracted) => extracted,
        None => ExtractedTitle::unmatched(normalized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("番外編2 ドラゴン物語", "ドラゴン物語", 2, Pattern::ExtraVolume)]
    #[case("外伝１　ドラゴン物語", "ドラゴン物語", 1, Pattern::ExtraVolume)]
    #[case("特別編 3 ドラゴン物語", "ドラゴン物語", 3, Pattern::ExtraVolume)]
    #[case("1-3 ドラゴン物語", "ドラゴン物語", 1, Pattern::VolumeRange)]
    #[case("４〜６ ドラゴン物語", "ドラゴン物語", 4, Pattern::VolumeRange)]
    #[case("ドラゴン物語 第3巻", "ドラゴン物語", 3, Pattern::VolumeSuffix)]
    #[case("ドラゴン物語１２巻", "ドラゴン物語", 12, Pattern::VolumeSuffix)]
    #[case("ドラゴン物語 第2集", "ドラゴン物語", 2, Pattern::VolumeSuffix)]
    #[case("ドラゴン物語 4冊", "ドラゴン物語", 4, Pattern::VolumeSuffix)]
    #[case("ドラゴン物語 第5話", "ドラゴン物語", 5, Pattern::ChapterSuffix)]
    #[case("Dragon Tale Vol. 4", "Dragon Tale", 4, Pattern::VolAbbreviation)]
    #[case("Dragon Tale VOL.4 The End", "Dragon Tale", 4, Pattern::VolAbbreviation)]
    #[case("Dragon Tale - volume 9", "Dragon Tale", 9, Pattern::VolAbbreviation)]
    #[case("ドラゴン物語 分冊版 3", "ドラゴン物語", 3, Pattern::SplitEdition)]
    #[case("ドラゴン物語（分冊版）３", "ドラゴン物語", 3, Pattern::SplitEdition)]
    #[case("シリーズ名 : 27 サブタイトル", "シリ-ズ名", 27, Pattern::ColonNumber)]
    #[case("ドラゴン物語(4)(ドラゴン文庫)", "ドラゴン物語", 4, Pattern::ParenLabel)]
    #[case("ドラゴン物語(3) 完結編", "ドラゴン物語", 3, Pattern::ParenSubtitle)]
    #[case("シリーズ名(28)サブタイトル2", "シリ-ズ名", 28, Pattern::ParenGlued)]
    #[case("ドラゴン物語（１）", "ドラゴン物語", 1, Pattern::ParenNumber)]
    #[case("大長編タイトル8 副題 (レーベル)", "大長編タイトル", 8, Pattern::NumberSubtitleLabel)]
    #[case("ドラゴン物語 7", "ドラゴン物語", 7, Pattern::TrailingNumber)]
    #[case("ドラゴン物語7 (新たな旅)", "ドラゴン物語", 7, Pattern::TrailingNumber)]
    #[case("ドラゴン物語(新装版)2 旅立ち", "ドラゴン物語(新装版)", 2, Pattern::AfterParen)]
    #[case("ドラゴン物語(上)", "ドラゴン物語", 1, Pattern::Positional)]
    #[case("ドラゴン物語 中", "ドラゴン物語", 2, Pattern::Positional)]
    #[case("ドラゴン物語 下巻", "ドラゴン物語", 3, Pattern::Positional)]
    #[case("ドラゴン物語下巻", "ドラゴン物語", 3, Pattern::Positional)]
    #[case("ドラゴン物語 三巻", "ドラゴン物語", 3, Pattern::KanjiVolume)]
    #[case("ドラゴン物語第十巻", "ドラゴン物語", 10, Pattern::KanjiVolume)]
    fn test_extracts_volume(
        #[case] input: &str,
        #[case] name: &str,
        #[case] volume: u32,
        #[case] pattern: Pattern,
    ) {
        let extracted = extract_volume(input);
        assert_eq!(extracted.title, name, "series name for '{input}'");
        assert_eq!(extracted.volume, Some(volume), "volume for '{input}'");
        assert_eq!(extracted.pattern, Some(pattern), "pattern for '{input}'");
        assert!(extracted.is_candidate());
    }

    #[rstest]
    #[case("ドラゴン物語 - 3", "ドラゴン物語")]
    #[case("ドラゴン物語 ~ 3", "ドラゴン物語")]
    #[case("ドラゴン物語; 3", "ドラゴン物語")]
    fn test_strips_dangling_separators(#[case] input: &str, #[case] name: &str) {
        let extracted = extract_volume(input);
        assert_eq!(extracted.title, name);
        assert_eq!(extracted.volume, Some(3));
    }

    #[rstest]
    #[case("独立した本")]
    #[case("屋根の上")]
    #[case("3")]
    #[case("(3)")]
    #[case("- 3")]
    fn test_no_volume_marker(#[case] input: &str) {
        let extracted = extract_volume(input);
        assert_eq!(extracted.title, normalize(input));
        assert_eq!(extracted.volume, None);
        assert_eq!(extracted.pattern, None);
        assert!(!extracted.is_candidate());
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(extract_volume(""), ExtractedTitle::default());
        assert_eq!(extract_volume("\u{3000}  "), ExtractedTitle::default());
    }

    #[test]
    fn test_overflowing_volume_is_not_a_match() {
        let extracted = extract_volume("ドラゴン物語 99999999999");
        assert_eq!(extracted.volume, None);
        assert_eq!(extracted.title, "ドラゴン物語 99999999999");
    }

    #[test]
    fn test_labelled_forms_win_over_trailing_number() {
        // The trailing-number rule alone would not match, but if the labelled
        // rule were tried later the subtitle would leak into the series name.
        let labelled = extract_volume("大長編タイトル8 副題 (レーベル)");
        assert_eq!(labelled.pattern, Some(Pattern::NumberSubtitleLabel));
        let parenthesised = extract_volume("タイトル(2)(文庫)");
        assert_eq!(parenthesised.title, "タイトル");
        assert_eq!(parenthesised.pattern, Some(Pattern::ParenLabel));
    }

    #[test]
    fn test_leading_marker_checked_before_trailing() {
        // Ends with a number too, but the range prefix takes priority.
        let extracted = extract_volume("1-2 ドラゴン物語 3");
        assert_eq!(extracted.volume, Some(1));
        assert_eq!(extracted.title, "ドラゴン物語 3");
        assert_eq!(extracted.pattern, Some(Pattern::VolumeRange));
    }

    #[test]
    fn test_full_width_input_matches() {
        let half = extract_volume("ドラゴン物語(2)");
        let full = extract_volume("ドラゴン物語（２）");
        assert_eq!(half, full);
    }
}
