mod pattern;
mod title;

pub use self::pattern::Pattern;
pub use self::title::ExtractedTitle;
