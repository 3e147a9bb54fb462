use regex::Regex;
use std::sync::LazyLock;

const NUMBER: &str = "(?P<volume>[0-9]+)";
const NAME: &str = "(?P<name>.+?)";
const POSITIONAL: &str = "(?P<volume>[上中下])";
const KANJI: &str = "(?P<volume>[一二三四五六七八九十])";

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Leading markers. Both capture the remaining text as `name`.
regex!(EXTRA_VOLUME_REGEX, format!(r"^(?:番外編|特別編|外伝)\s*{NUMBER}\s*(?P<name>.+)$").as_str());
regex!(VOLUME_RANGE_REGEX, format!(r"^{NUMBER}\s*[-~]\s*[0-9]+\s+(?P<name>.+)$").as_str());

// Trailing/embedded markers, in priority order (see `extract::RULES`).
regex!(VOLUME_SUFFIX_REGEX, format!(r"^{NAME}\s*第?\s*{NUMBER}\s*[巻集冊]$").as_str());
regex!(CHAPTER_SUFFIX_REGEX, format!(r"^{NAME}\s*第?\s*{NUMBER}\s*[話章]$").as_str());
regex!(VOL_ABBREVIATION_REGEX, format!(r"(?i)^{NAME}\s*vol(?:ume)?\.?\s*{NUMBER}(?:\s.*)?$").as_str());
regex!(SPLIT_EDITION_REGEX, format!(r"^{NAME}\s*[(\[]?分冊版[)\]]?\s*第?\s*{NUMBER}\s*[巻話]?$").as_str());
regex!(COLON_NUMBER_REGEX, format!(r"^{NAME}\s*:\s*{NUMBER}(?:\s+.*)?$").as_str());
regex!(PAREN_LABEL_REGEX, format!(r"^{NAME}\s*\({NUMBER}\)\s*\([^()]*\)$").as_str());
regex!(PAREN_SUBTITLE_REGEX, format!(r"^{NAME}\s*\({NUMBER}\)\s+.+$").as_str());
regex!(PAREN_GLUED_REGEX, format!(r"^{NAME}\s*\({NUMBER}\)\S.*$").as_str());
regex!(PAREN_NUMBER_REGEX, format!(r"^{NAME}\s*\({NUMBER}\)$").as_str());
regex!(NUMBER_SUBTITLE_LABEL_REGEX, format!(r"^{NAME}{NUMBER}\s+[^()]+?\s*\([^()]*\)$").as_str());
regex!(TRAILING_NUMBER_REGEX, format!(r"^{NAME}\s*{NUMBER}(?:\s*\([^()]*\))?$").as_str());
regex!(AFTER_PAREN_REGEX, format!(r"^(?P<name>.+?\)){NUMBER}(?:\s+.*)?$").as_str());
regex!(POSITIONAL_PAREN_REGEX, format!(r"^{NAME}\s*\({POSITIONAL}\)$").as_str());
regex!(POSITIONAL_SPACED_REGEX, format!(r"^{NAME}\s+{POSITIONAL}巻?$").as_str());
regex!(POSITIONAL_COUNTER_REGEX, format!(r"^{NAME}{POSITIONAL}巻$").as_str());
regex!(KANJI_VOLUME_REGEX, format!(r"^{NAME}\s*第?\s*{KANJI}\s*巻$").as_str());
