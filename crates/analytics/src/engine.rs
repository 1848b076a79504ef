use crate::error::AnalyticsError;
use crate::report::{AggregateStatistics, Averages};
use core_types::IndexRecord;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The risk-free rate, in percent, used when none is configured.
pub const DEFAULT_RISK_FREE_RATE: f64 = 6.0;

/// Immutable inputs to the metric calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Annual risk-free rate in percent, subtracted from returns.
    pub risk_free_rate: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
        }
    }
}

/// A stateless calculator for deriving risk/return metrics from index records.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsEngine {
    config: MetricsConfig,
}

impl AnalyticsEngine {
    pub fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> MetricsConfig {
        self.config
    }

    /// `(returns - risk_free_rate) / risk`, or exactly `0.0` when `risk == 0`.
    ///
    /// The value is returned at full precision; use [`round_display`] for output.
    pub fn risk_adjusted_return(&self, record: &IndexRecord) -> f64 {
        if record.risk == 0.0 {
            return 0.0;
        }
        (record.returns - self.config.risk_free_rate) / record.risk
    }

    /// Mean return and mean risk of `records`.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::EmptyInput` for an empty slice; a mean of nothing is
    /// undefined and callers decide how to present that.
    pub fn averages(&self, records: &[IndexRecord]) -> Result<Averages, AnalyticsError> {
        if records.is_empty() {
            return Err(AnalyticsError::EmptyInput(
                "averages require at least one record".to_string(),
            ));
        }

        let n = records.len() as f64;
        let (sum_return, sum_risk) = records
            .iter()
            .fold((0.0, 0.0), |(ret, risk), r| (ret + r.returns, risk + r.risk));

        Ok(Averages {
            avg_return: sum_return / n,
            avg_risk: sum_risk / n,
        })
    }

    /// Highest risk-adjusted return in `dataset`. None only when it is empty.
    pub fn best_risk_adjusted_return(&self, dataset: &[IndexRecord]) -> Option<f64> {
        dataset
            .iter()
            .map(|r| self.risk_adjusted_return(r))
            .max_by(f64::total_cmp)
    }

    /// The main entry point: aggregate statistics for `active`, with the headline
    /// best risk-adjusted return taken from the whole `dataset`.
    ///
    /// Never fails. An empty `active` set yields a zero count and `None` for every
    /// per-set figure.
    pub fn statistics(&self, active: &[IndexRecord], dataset: &[IndexRecord]) -> AggregateStatistics {
        let mut report = AggregateStatistics {
            total_count: active.len(),
            best_risk_adjusted_return: self.best_risk_adjusted_return(dataset),
            ..AggregateStatistics::default()
        };

        let averages = match self.averages(active) {
            Ok(averages) => averages,
            Err(_) => return report,
        };
        report.avg_return = Some(averages.avg_return);
        report.avg_risk = Some(averages.avg_risk);

        self.calculate_extremes(active, &mut report);
        report.correlation = correlation(active, averages);

        report
    }

    /// Fills min/max of returns, risk and risk-adjusted return over a non-empty set.
    fn calculate_extremes(&self, active: &[IndexRecord], report: &mut AggregateStatistics) {
        report.max_return = active.iter().map(|r| r.returns).max_by(f64::total_cmp);
        report.min_return = active.iter().map(|r| r.returns).min_by(f64::total_cmp);
        report.max_risk = active.iter().map(|r| r.risk).max_by(f64::total_cmp);
        report.min_risk = active.iter().map(|r| r.risk).min_by(f64::total_cmp);
        report.worst_risk_adjusted_return = active
            .iter()
            .map(|r| self.risk_adjusted_return(r))
            .min_by(f64::total_cmp);
    }
}

/// Pearson correlation between returns and risk.
fn correlation(records: &[IndexRecord], averages: Averages) -> Option<f64> {
    if records.len() < 2 {
        return None;
    }

    let (mut covariance, mut var_return, mut var_risk) = (0.0, 0.0, 0.0);
    for r in records {
        let dr = r.returns - averages.avg_return;
        let dk = r.risk - averages.avg_risk;
        covariance += dr * dk;
        var_return += dr * dr;
        var_risk += dk * dk;
    }

    let denominator = (var_return * var_risk).sqrt();
    if denominator <= f64::EPSILON {
        return None;
    }
    Some(covariance / denominator)
}

/// Rounds a metric to two decimal places, half away from zero, for display.
pub fn round_display(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core_types::Category;
    use dataset::Dataset;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn engine() -> AnalyticsEngine {
        AnalyticsEngine::new(MetricsConfig::default())
    }

    #[test]
    fn risk_adjusted_return_example() {
        let nifty = IndexRecord::new("NIFTY50", Category::Broad, 12.5, 14.2);
        let rar = engine().risk_adjusted_return(&nifty);
        assert_relative_eq!(rar, 6.5 / 14.2, epsilon = 1e-12);
        assert_relative_eq!(rar, 0.4577, epsilon = 1e-4);
        assert_eq!(round_display(rar), dec!(0.46));
    }

    #[rstest]
    #[case(12.5)]
    #[case(-3.0)]
    #[case(6.0)]
    fn zero_risk_means_zero_ratio(#[case] returns: f64) {
        let record = IndexRecord::new("FLAT", Category::Strategy, returns, 0.0);
        assert_eq!(engine().risk_adjusted_return(&record), 0.0);
    }

    #[test]
    fn risk_free_rate_is_configurable() {
        let record = IndexRecord::new("X", Category::Broad, 10.0, 5.0);
        let zero_rate = AnalyticsEngine::new(MetricsConfig { risk_free_rate: 0.0 });
        assert_relative_eq!(zero_rate.risk_adjusted_return(&record), 2.0);
        assert_relative_eq!(engine().risk_adjusted_return(&record), 0.8);
    }

    #[test]
    fn averages_of_empty_set_is_an_error() {
        assert!(matches!(engine().averages(&[]), Err(AnalyticsError::EmptyInput(_))));
    }

    #[test]
    fn statistics_over_embedded_dataset() {
        let dataset = Dataset::embedded();
        let stats = engine().statistics(dataset.records(), dataset.records());

        assert_eq!(stats.total_count, 126);
        assert_relative_eq!(stats.avg_return.unwrap(), 15.080158730158734, epsilon = 1e-9);
        assert_relative_eq!(stats.avg_risk.unwrap(), 16.031746031746035, epsilon = 1e-9);
        assert_eq!(round_display(stats.avg_return.unwrap()), dec!(15.08));
        assert_eq!(round_display(stats.best_risk_adjusted_return.unwrap()), dec!(1.22));
        assert_eq!(round_display(stats.worst_risk_adjusted_return.unwrap()), dec!(-0.31));
        assert_eq!(stats.max_return, Some(29.3));
        assert_eq!(stats.min_return, Some(-1.3));
        assert_eq!(stats.max_risk, Some(29.6));
        assert_eq!(stats.min_risk, Some(3.3));
        assert_relative_eq!(stats.correlation.unwrap(), 0.4041116670833488, epsilon = 1e-9);
    }

    #[test]
    fn best_ratio_ignores_the_active_subset() {
        let dataset = Dataset::embedded();
        let subset: Vec<_> = dataset
            .records()
            .iter()
            .filter(|r| r.category == Category::Sector)
            .cloned()
            .collect();

        let stats = engine().statistics(&subset, dataset.records());
        assert_eq!(stats.total_count, subset.len());
        assert_eq!(round_display(stats.best_risk_adjusted_return.unwrap()), dec!(1.22));
    }

    #[test]
    fn empty_active_set_yields_sentinels() {
        let dataset = Dataset::embedded();
        let stats = engine().statistics(&[], dataset.records());
        assert_eq!(stats.total_count, 0);
        assert!(stats.avg_return.is_none());
        assert!(stats.averages().is_none());
        assert!(stats.max_risk.is_none());
        assert!(stats.correlation.is_none());
        assert!(stats.best_risk_adjusted_return.is_some());
    }

    #[test]
    fn correlation_needs_variance() {
        let flat = vec![
            IndexRecord::new("A", Category::Broad, 10.0, 5.0),
            IndexRecord::new("B", Category::Broad, 12.0, 5.0),
        ];
        let stats = engine().statistics(&flat, &flat);
        assert!(stats.correlation.is_none());

        let single = &flat[..1];
        assert!(engine().statistics(single, single).correlation.is_none());
    }

    #[rstest]
    #[case(0.125, dec!(0.13))]
    #[case(-0.125, dec!(-0.13))]
    #[case(1.2198952879, dec!(1.22))]
    #[case(0.0, dec!(0))]
    fn display_rounding(#[case] value: f64, #[case] expected: Decimal) {
        assert_eq!(round_display(value), expected);
    }
}
