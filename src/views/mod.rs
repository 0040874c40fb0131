mod format;
mod summary;
mod table;

pub use format::{format_date, format_price};
pub use summary::Summary;
pub use table::{write_csv, write_summary, write_table};
