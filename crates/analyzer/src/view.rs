//! Presentation-only projections.
//!
//! Core records never carry chart aliases or rounded figures; these types are built
//! explicitly from them for whatever draws the scatter plot, table or detail panel.

use crate::quadrant::QuadrantBuckets;
use analytics::{AggregateStatistics, AnalyticsEngine, Averages, round_display};
use core_types::{Category, IndexRecord, Quadrant};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One index as the list and compare endpoints return it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexView {
    pub index: String,
    pub category: Category,
    pub returns: f64,
    pub risk: f64,
    /// Risk-adjusted return rounded to two decimals.
    #[serde(with = "rust_decimal::serde::float")]
    pub sharpe: Decimal,
}

impl IndexView {
    pub fn new(record: &IndexRecord, engine: &AnalyticsEngine) -> Self {
        Self {
            index: record.name.clone(),
            category: record.category,
            returns: record.returns,
            risk: record.risk,
            sharpe: round_display(engine.risk_adjusted_return(record)),
        }
    }

    pub fn list(records: &[IndexRecord], engine: &AnalyticsEngine) -> Vec<Self> {
        records.iter().map(|r| Self::new(r, engine)).collect()
    }
}

/// A scatter point: `x` is risk, `y` is returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub index: String,
    pub category: Category,
    #[serde(with = "rust_decimal::serde::float")]
    pub sharpe: Decimal,
    pub quadrant: Quadrant,
}

/// A row of the ranking table. `rank` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub rank: usize,
    pub index: String,
    pub returns: f64,
    pub risk: f64,
    #[serde(with = "rust_decimal::serde::float")]
    pub sharpe: Decimal,
}

impl TableRow {
    pub fn rows(records: &[IndexRecord], engine: &AnalyticsEngine) -> Vec<Self> {
        records
            .iter()
            .enumerate()
            .map(|(position, record)| Self {
                rank: position + 1,
                index: record.name.clone(),
                returns: record.returns,
                risk: record.risk,
                sharpe: round_display(engine.risk_adjusted_return(record)),
            })
            .collect()
    }
}

/// The detail panel for one index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDetail {
    pub index: String,
    pub category: Category,
    pub returns: f64,
    pub risk: f64,
    #[serde(with = "rust_decimal::serde::float")]
    pub sharpe: Decimal,
    pub quadrant: Option<Quadrant>,
    /// Position by returns over the whole dataset, 1-based; equal returns share a rank.
    pub rank: usize,
    pub total_indices: usize,
}

/// Aggregate statistics rounded for display. `None` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsView {
    #[serde(with = "rust_decimal::serde::float_option")]
    pub avg_return: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub avg_risk: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub max_return: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub min_return: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub max_risk: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub min_risk: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub best_sharpe: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub worst_sharpe: Option<Decimal>,
    pub total_indices: usize,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub correlation: Option<Decimal>,
}

impl From<&AggregateStatistics> for StatisticsView {
    fn from(stats: &AggregateStatistics) -> Self {
        Self {
            avg_return: stats.avg_return.map(round_display),
            avg_risk: stats.avg_risk.map(round_display),
            max_return: stats.max_return.map(round_display),
            min_return: stats.min_return.map(round_display),
            max_risk: stats.max_risk.map(round_display),
            min_risk: stats.min_risk.map(round_display),
            best_sharpe: stats.best_risk_adjusted_return.map(round_display),
            worst_sharpe: stats.worst_risk_adjusted_return.map(round_display),
            total_indices: stats.total_count,
            correlation: stats.correlation.map(round_display),
        }
    }
}

/// Where the quadrant lines are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AveragesView {
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_return: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_risk: Decimal,
}

impl From<Averages> for AveragesView {
    fn from(averages: Averages) -> Self {
        Self {
            avg_return: round_display(averages.avg_return),
            avg_risk: round_display(averages.avg_risk),
        }
    }
}

/// The four named quadrant lists plus the averages that split them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantsView {
    pub high_return_low_risk: Vec<IndexView>,
    pub high_return_high_risk: Vec<IndexView>,
    pub low_return_low_risk: Vec<IndexView>,
    pub low_return_high_risk: Vec<IndexView>,
    /// `None` when there was nothing to average.
    pub averages: Option<AveragesView>,
}

impl QuadrantsView {
    pub fn new(buckets: &QuadrantBuckets, averages: Option<Averages>, engine: &AnalyticsEngine) -> Self {
        Self {
            high_return_low_risk: IndexView::list(&buckets.high_return_low_risk, engine),
            high_return_high_risk: IndexView::list(&buckets.high_return_high_risk, engine),
            low_return_low_risk: IndexView::list(&buckets.low_return_low_risk, engine),
            low_return_high_risk: IndexView::list(&buckets.low_return_high_risk, engine),
            averages: averages.map(AveragesView::from),
        }
    }

    pub fn bucket(&self, quadrant: Quadrant) -> &[IndexView] {
        match quadrant {
            Quadrant::HighReturnLowRisk => &self.high_return_low_risk,
            Quadrant::HighReturnHighRisk => &self.high_return_high_risk,
            Quadrant::LowReturnLowRisk => &self.low_return_low_risk,
            Quadrant::LowReturnHighRisk => &self.low_return_high_risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::MetricsConfig;
    use rust_decimal_macros::dec;

    #[test]
    fn index_view_json_shape() {
        let engine = AnalyticsEngine::new(MetricsConfig::default());
        let view = IndexView::new(&IndexRecord::new("NIFTY50", Category::Broad, 12.5, 14.2), &engine);
        assert_eq!(view.sharpe, dec!(0.46));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["index"], "NIFTY50");
        assert_eq!(json["category"], "broad");
        assert_eq!(json["sharpe"], 0.46);
        assert!(json.get("name").is_none());
    }

    #[test]
    fn empty_statistics_serialize_as_null() {
        let view = StatisticsView::from(&AggregateStatistics::default());
        let json = serde_json::to_value(&view).unwrap();
        assert!(json["avgReturn"].is_null());
        assert_eq!(json["totalIndices"], 0);

        let back: StatisticsView = serde_json::from_value(json).unwrap();
        assert_eq!(back, view);
    }

    #[test]
    fn table_rows_are_one_based() {
        let engine = AnalyticsEngine::default();
        let rows = TableRow::rows(
            &[
                IndexRecord::new("A", Category::Broad, 1.0, 1.0),
                IndexRecord::new("B", Category::Broad, 2.0, 0.0),
            ],
            &engine,
        );
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].sharpe, Decimal::ZERO);
    }
}
