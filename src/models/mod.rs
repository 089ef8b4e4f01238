mod color_choice;
mod level;
mod level_counts;
mod log_level;
mod report;
mod summary_format;

pub use color_choice::ColorChoice;
pub use level::Level;
pub use level_counts::LevelCounts;
pub use log_level::LogLevel;
pub use report::{Report, LUCKY_NUMBER_COUNT};
pub use summary_format::SummaryFormat;
