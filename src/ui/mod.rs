//! Terminal output - theme, icons, and table rendering for the report

pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{header, info, section, summary_row};
pub use table::{TableBuilder, stats_table};
pub use theme::{Theme, theme};
