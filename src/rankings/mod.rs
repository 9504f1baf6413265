pub mod detail;
pub mod engine;
pub mod filter;
pub mod integrity;
pub mod loader;
pub mod pages;
pub mod types;

pub use self::detail::{DetailView, MetricBreakdown, RankLookup};
pub use self::engine::{run_query, QueryPage, SortKey, DEFAULT_ITEMS_PER_PAGE};
pub use self::filter::{CardCategory, FilterCriteria};
pub use self::loader::DatasetState;
pub use self::pages::{page_labels, PageLabel};
pub use self::types::{Card, Combination, Dataset, DatasetMetadata, Metric, MetricScores};
