pub mod board;
pub mod models;
pub mod projection;
pub mod sorting;
pub mod time_format;

pub use board::{RankingBoard, RankingRow};
pub use models::{RankedEntry, RawRecord, SortKey};
pub use projection::{ProjectionPolicy, project_all, project_record};
pub use sorting::sorted_by;
pub use time_format::format_centiseconds;
