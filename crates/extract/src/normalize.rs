//! Title canonicalization.
//!
//! Book titles arrive in a mix of full-width and half-width forms. Both the
//! volume rules and series identifiers operate on the canonical form produced
//! here, so that `ドラゴン物語（１）` and `ドラゴン物語(1)` are treated alike.

/// Offset between a full-width ASCII variant and its half-width counterpart.
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Characters removed when building a series identifier.
const ID_STRIP: &[char] = &[
    ' ', '-', ':', ';', '·', '・', '、', '。', ',', '.', '!', '?', '\'', '"', '(', ')', '[', ']', '<', '>',
];

/// Canonicalizes a title for display and pattern matching.
///
/// Steps, in order:
/// 1. full-width Latin letters and digits become half-width,
/// 2. full-width bracket pairs become `(` `)` and `[` `]`,
/// 3. the ideographic space becomes an ASCII space,
/// 4. full-width colon and semicolon become `:` and `;`,
/// 5. dash and long-vowel-mark variants become `-`,
/// 6. tilde variants become `~`,
/// 7. remaining full-width punctuation (`！？＆＊＋，．`) becomes ASCII,
/// 8. whitespace runs collapse to a single space, and the result is trimmed.
///
/// Every substitution produces ASCII, so the function is idempotent.
///
/// # Examples
///
/// ```
/// use shelf_extract::normalize;
/// assert_eq!(normalize("ドラゴン物語（１２）"), "ドラゴン物語(12)");
/// assert_eq!(normalize("  Ｖｏｌ．３\u{3000}\u{3000}完 "), "Vol.3 完");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let substituted: String = text.chars().map(substitute).collect();
    substituted.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Canonicalizes a series name into a grouping identifier.
///
/// Stricter than [`normalize`]: the result is lower-cased and stripped of
/// spaces and common punctuation, so names that differ only by case or
/// punctuation collide.
///
/// # Examples
///
/// ```
/// use shelf_extract::normalize_for_id;
/// assert_eq!(normalize_for_id("Title (1)"), normalize_for_id("title1"));
/// assert_eq!(normalize_for_id("「魔法・少女」"), "魔法少女");
/// ```
pub fn normalize_for_id(text: &str) -> String {
    normalize(text).to_lowercase().chars().filter(|c| !ID_STRIP.contains(c)).collect()
}

fn substitute(c: char) -> char {
    match c {
        // Full-width digits, upper-case and lower-case Latin letters.
        '０'..='９' | 'Ａ'..='Ｚ' | 'ａ'..='ｚ' => char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c),
        '（' | '〔' => '(',
        '）' | '〕' => ')',
        '「' | '『' => '[',
        '」' | '』' => ']',
        '\u{3000}' => ' ',
        '：' => ':',
        '；' => ';',
        '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{FF0D}' | '\u{30FC}' | '\u{FF70}' => '-',
        '\u{301C}' | '\u{FF5E}' => '~',
        '！' | '？' | '＆' | '＊' | '＋' | '，' | '．' => char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c),
        _ => c,
    }
}
