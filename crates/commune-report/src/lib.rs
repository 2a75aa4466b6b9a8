pub mod format;
pub mod tables;

pub use format::{
    MISSING_PLACEHOLDER, fmt_area, fmt_euros, fmt_int, fmt_number, fmt_percent, fmt_pop,
    sparkline,
};
pub use tables::{listing_table, profile_table, ranking_table, totals_table};
