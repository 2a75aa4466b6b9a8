pub mod aggregate;
pub mod lookup;
pub mod ranking;
pub mod ratios;
pub mod series;

pub use aggregate::{DatasetTotals, dataset_totals, sum_field};
pub use lookup::{DEFAULT_SEARCH_LIMIT, find_by_code, record_matches, search};
pub use ranking::{
    DEFAULT_TOP_LIMIT, Ranked, SortDirection, growth_for_display, growth_score, sort_by_code,
    sort_by_field, top_by_growth,
};
pub use ratios::{GenderSplit, density, gender_split, share, unemployment_rate, vacancy_rate};
pub use series::{smooth_series, spark_series};
