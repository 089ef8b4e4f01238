mod console;
mod report;
mod summary;
mod writer;

pub use console::{resolve_styling, Console, Styling, TerminalInfo};
pub use report::{render_report, render_report_lines, write_report, TIMESTAMP_FORMAT};
pub use summary::{display_summary, render_summary};
pub use writer::Writer;
