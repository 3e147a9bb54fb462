mod book;
mod progress;
mod series;

pub use self::book::BookRecord;
pub use self::progress::SeriesProgress;
pub use self::series::{SeriesInfo, Volume};
