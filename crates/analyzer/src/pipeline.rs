use crate::error::AnalyzerError;
use crate::filter::FilterPredicate;
use crate::quadrant::{QuadrantBuckets, QuadrantCounts, classify};
use crate::ranking::Ranker;
use crate::view::{
    AveragesView, ChartPoint, IndexDetail, IndexView, QuadrantsView, StatisticsView, TableRow,
};
use analytics::{AggregateStatistics, AnalyticsEngine, Averages, MetricsConfig, round_display};
use configuration::{QuadrantBaseline, RankingSettings, Settings};
use core_types::{Category, CoreError, IndexRecord, SortKey};
use dataset::Dataset;
use serde::{Deserialize, Serialize};

/// The entire mutable state of a dashboard session: the filter controls and the
/// active ranking tab.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardQuery {
    #[serde(flatten)]
    pub filter: FilterPredicate,
    #[serde(default)]
    pub sort: SortKey,
}

/// Everything the dashboard draws for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Scatter points of the active set, in dataset order.
    pub points: Vec<ChartPoint>,
    pub statistics: StatisticsView,
    /// The quadrant lines; `None` when the baseline set is empty.
    pub averages: Option<AveragesView>,
    pub quadrants: QuadrantCounts,
    pub sort: SortKey,
    pub table: Vec<TableRow>,
}

/// The filter → classify → rank pipeline over one immutable dataset.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    engine: AnalyticsEngine,
    ranker: Ranker,
    baseline: QuadrantBaseline,
    ranking: RankingSettings,
}

impl Dashboard {
    pub fn new(dataset: Dataset, settings: &Settings) -> Self {
        let engine = AnalyticsEngine::new(MetricsConfig {
            risk_free_rate: settings.analytics.risk_free_rate,
        });
        Self::from_parts(
            dataset,
            engine,
            settings.analytics.quadrant_baseline,
            settings.ranking.clone(),
        )
    }

    pub fn from_parts(
        dataset: Dataset,
        engine: AnalyticsEngine,
        baseline: QuadrantBaseline,
        ranking: RankingSettings,
    ) -> Self {
        Self {
            dataset,
            engine,
            ranker: Ranker::new(engine),
            baseline,
            ranking,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn engine(&self) -> &AnalyticsEngine {
        &self.engine
    }

    pub fn baseline(&self) -> QuadrantBaseline {
        self.baseline
    }

    pub fn indices(&self) -> Vec<IndexView> {
        IndexView::list(self.dataset.records(), &self.engine)
    }

    /// Validates `predicate` and applies it to the whole dataset.
    pub fn filter(&self, predicate: &FilterPredicate) -> Result<Vec<IndexRecord>, AnalyzerError> {
        predicate.validate()?;
        Ok(predicate.apply(self.dataset.records()))
    }

    /// Statistics of the records matching `predicate`. The best ratio always covers
    /// the whole dataset.
    pub fn statistics(&self, predicate: &FilterPredicate) -> Result<AggregateStatistics, AnalyzerError> {
        let active = self.filter(predicate)?;
        Ok(self.engine.statistics(&active, self.dataset.records()))
    }

    /// Quadrant buckets of the records matching `predicate`, split at the configured
    /// baseline's averages.
    pub fn quadrants(&self, predicate: &FilterPredicate) -> Result<QuadrantsView, AnalyzerError> {
        let active = self.filter(predicate)?;
        let averages = self.baseline_averages(&active);
        let buckets = averages
            .map(|averages| QuadrantBuckets::partition(&active, averages))
            .unwrap_or_default();
        Ok(QuadrantsView::new(&buckets, averages, &self.engine))
    }

    /// The best `limit` indices of the whole dataset by `key`.
    ///
    /// `limit` defaults to `ranking.default_limit` and is capped at `ranking.max_limit`.
    pub fn top(&self, key: SortKey, limit: Option<usize>) -> Vec<IndexRecord> {
        let limit = limit
            .unwrap_or(self.ranking.default_limit)
            .min(self.ranking.max_limit);
        self.ranker.top(self.dataset.records(), key, limit)
    }

    pub fn detail(&self, name: &str) -> Result<IndexDetail, AnalyzerError> {
        let record = self
            .dataset
            .get(name)
            .ok_or_else(|| AnalyzerError::NotFound(name.to_string()))?;

        let rank = 1 + self
            .dataset
            .records()
            .iter()
            .filter(|other| other.returns > record.returns)
            .count();
        let quadrant = self
            .engine
            .averages(self.dataset.records())
            .ok()
            .map(|averages| classify(record, averages));

        Ok(IndexDetail {
            index: record.name.clone(),
            category: record.category,
            returns: record.returns,
            risk: record.risk,
            sharpe: round_display(self.engine.risk_adjusted_return(record)),
            quadrant,
            rank,
            total_indices: self.dataset.len(),
        })
    }

    /// The named indices in dataset order. Unknown names are skipped.
    pub fn compare<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<IndexRecord>, AnalyzerError> {
        if names.is_empty() {
            return Err(CoreError::invalid("indices", "no indices provided").into());
        }
        Ok(self.dataset.select(names))
    }

    pub fn categories(&self) -> Vec<Category> {
        self.dataset.categories()
    }

    /// Runs the full pipeline for one session state.
    pub fn snapshot(&self, query: &DashboardQuery) -> Result<DashboardSnapshot, AnalyzerError> {
        let active = self.filter(&query.filter)?;
        let statistics = self.engine.statistics(&active, self.dataset.records());
        let averages = self.baseline_averages(&active);

        let (points, quadrants) = match averages {
            Some(averages) => {
                let points = active
                    .iter()
                    .map(|record| ChartPoint {
                        x: record.risk,
                        y: record.returns,
                        index: record.name.clone(),
                        category: record.category,
                        sharpe: round_display(self.engine.risk_adjusted_return(record)),
                        quadrant: classify(record, averages),
                    })
                    .collect();
                (points, QuadrantBuckets::partition(&active, averages).counts())
            }
            None => (Vec::new(), QuadrantCounts::default()),
        };

        let ranked = self.ranker.top(&active, query.sort, self.ranking.table_size);
        tracing::debug!(
            active = active.len(),
            sort = %query.sort,
            "Computed dashboard snapshot."
        );

        Ok(DashboardSnapshot {
            points,
            statistics: StatisticsView::from(&statistics),
            averages: averages.map(AveragesView::from),
            quadrants,
            sort: query.sort,
            table: TableRow::rows(&ranked, &self.engine),
        })
    }

    fn baseline_averages(&self, active: &[IndexRecord]) -> Option<Averages> {
        let baseline_set = match self.baseline {
            QuadrantBaseline::Filtered => active,
            QuadrantBaseline::Dataset => self.dataset.records(),
        };
        // Nothing to classify.
        if active.is_empty() {
            return None;
        }
        self.engine.averages(baseline_set).ok()
    }
}
