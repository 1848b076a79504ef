//! # IndexScope Analyzer
//!
//! Filters, classifies and ranks the dataset for the dashboard.
//!
//! Each stage is a pure function of its input and is re-run in full for every query:
//!
//! 1. **Filter** (`FilterPredicate`): stable subset by search text, category and thresholds.
//! 2. **Classify** (`QuadrantBuckets`): four-way split around the baseline averages.
//! 3. **Rank** (`Ranker`): sort by a metric and keep the top rows.
//!
//! `Dashboard` ties the stages together for one `DashboardQuery` and produces the view
//! types in `view`, which are what the HTTP layer serializes.

pub mod error;
pub mod filter;
pub mod pipeline;
pub mod quadrant;
pub mod ranking;
pub mod view;

pub use error::AnalyzerError;
pub use filter::FilterPredicate;
pub use pipeline::{Dashboard, DashboardQuery, DashboardSnapshot};
pub use quadrant::{QuadrantBuckets, QuadrantCounts, classify};
pub use ranking::Ranker;
pub use view::{
    AveragesView, ChartPoint, IndexDetail, IndexView, QuadrantsView, StatisticsView, TableRow,
};
