use analytics::Averages;
use core_types::{IndexRecord, Quadrant};
use serde::{Deserialize, Serialize};

/// Places a record relative to the averages.
///
/// A value equal to an average counts as "high" on that axis, so a record sitting
/// exactly on both lines is high-return / high-risk.
pub fn classify(record: &IndexRecord, averages: Averages) -> Quadrant {
    let high_return = record.returns >= averages.avg_return;
    let high_risk = record.risk >= averages.avg_risk;

    match (high_return, high_risk) {
        (true, false) => Quadrant::HighReturnLowRisk,
        (true, true) => Quadrant::HighReturnHighRisk,
        (false, false) => Quadrant::LowReturnLowRisk,
        (false, true) => Quadrant::LowReturnHighRisk,
    }
}

/// A disjoint, exhaustive partition of a record set into the four quadrants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuadrantBuckets {
    pub high_return_low_risk: Vec<IndexRecord>,
    pub high_return_high_risk: Vec<IndexRecord>,
    pub low_return_low_risk: Vec<IndexRecord>,
    pub low_return_high_risk: Vec<IndexRecord>,
}

impl QuadrantBuckets {
    /// Each bucket keeps the input order.
    pub fn partition(records: &[IndexRecord], averages: Averages) -> Self {
        let mut buckets = Self::default();
        for record in records {
            buckets
                .bucket_mut(classify(record, averages))
                .push(record.clone());
        }
        buckets
    }

    pub fn bucket(&self, quadrant: Quadrant) -> &[IndexRecord] {
        match quadrant {
            Quadrant::HighReturnLowRisk => &self.high_return_low_risk,
            Quadrant::HighReturnHighRisk => &self.high_return_high_risk,
            Quadrant::LowReturnLowRisk => &self.low_return_low_risk,
            Quadrant::LowReturnHighRisk => &self.low_return_high_risk,
        }
    }

    fn bucket_mut(&mut self, quadrant: Quadrant) -> &mut Vec<IndexRecord> {
        match quadrant {
            Quadrant::HighReturnLowRisk => &mut self.high_return_low_risk,
            Quadrant::HighReturnHighRisk => &mut self.high_return_high_risk,
            Quadrant::LowReturnLowRisk => &mut self.low_return_low_risk,
            Quadrant::LowReturnHighRisk => &mut self.low_return_high_risk,
        }
    }

    pub fn counts(&self) -> QuadrantCounts {
        QuadrantCounts {
            high_return_low_risk: self.high_return_low_risk.len(),
            high_return_high_risk: self.high_return_high_risk.len(),
            low_return_low_risk: self.low_return_low_risk.len(),
            low_return_high_risk: self.low_return_high_risk.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QuadrantCounts {
    pub high_return_low_risk: usize,
    pub high_return_high_risk: usize,
    pub low_return_low_risk: usize,
    pub low_return_high_risk: usize,
}

impl QuadrantCounts {
    pub fn get(&self, quadrant: Quadrant) -> usize {
        match quadrant {
            Quadrant::HighReturnLowRisk => self.high_return_low_risk,
            Quadrant::HighReturnHighRisk => self.high_return_high_risk,
            Quadrant::LowReturnLowRisk => self.low_return_low_risk,
            Quadrant::LowReturnHighRisk => self.low_return_high_risk,
        }
    }

    pub fn total(&self) -> usize {
        self.high_return_low_risk
            + self.high_return_high_risk
            + self.low_return_low_risk
            + self.low_return_high_risk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::{AnalyticsEngine, MetricsConfig};
    use core_types::Category;
    use dataset::Dataset;
    use rstest::rstest;

    const AVERAGES: Averages = Averages {
        avg_return: 15.0,
        avg_risk: 16.0,
    };

    #[rstest]
    #[case(15.0, 16.0, Quadrant::HighReturnHighRisk)]
    #[case(15.0, 15.9, Quadrant::HighReturnLowRisk)]
    #[case(14.9, 16.0, Quadrant::LowReturnHighRisk)]
    #[case(14.9, 15.9, Quadrant::LowReturnLowRisk)]
    #[case(29.3, 19.1, Quadrant::HighReturnHighRisk)]
    #[case(6.4, 3.3, Quadrant::LowReturnLowRisk)]
    fn boundaries_go_to_the_high_side(
        #[case] returns: f64,
        #[case] risk: f64,
        #[case] expected: Quadrant,
    ) {
        let record = IndexRecord::new("X", Category::Broad, returns, risk);
        assert_eq!(classify(&record, AVERAGES), expected);
    }

    #[test]
    fn record_on_both_averages_is_high_high() {
        let records = vec![
            IndexRecord::new("LOW", Category::Broad, 10.0, 10.0),
            IndexRecord::new("MID", Category::Broad, 15.0, 15.0),
            IndexRecord::new("HIGH", Category::Broad, 20.0, 20.0),
        ];
        let engine = AnalyticsEngine::new(MetricsConfig::default());
        let averages = engine.averages(&records).unwrap();
        let buckets = QuadrantBuckets::partition(&records, averages);

        assert_eq!(buckets.high_return_high_risk.len(), 2);
        assert_eq!(buckets.high_return_high_risk[0].name, "MID");
        assert_eq!(buckets.low_return_low_risk[0].name, "LOW");
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        let dataset = Dataset::embedded();
        let engine = AnalyticsEngine::new(MetricsConfig::default());
        let averages = engine.averages(dataset.records()).unwrap();
        let buckets = QuadrantBuckets::partition(dataset.records(), averages);
        let counts = buckets.counts();

        assert_eq!(counts.total(), dataset.len());
        assert_eq!(
            counts,
            QuadrantCounts {
                high_return_low_risk: 18,
                high_return_high_risk: 46,
                low_return_low_risk: 44,
                low_return_high_risk: 18,
            }
        );

        let mut seen: Vec<&str> = Quadrant::ALL
            .iter()
            .flat_map(|q| buckets.bucket(*q).iter().map(|r| r.name.as_str()))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), dataset.len());
    }

    #[test]
    fn subsets_partition_too() {
        let dataset = Dataset::embedded();
        let engine = AnalyticsEngine::new(MetricsConfig::default());
        for category in Category::ALL {
            let subset: Vec<_> = dataset
                .records()
                .iter()
                .filter(|r| r.category == category)
                .cloned()
                .collect();
            let averages = engine.averages(&subset).unwrap();
            let counts = QuadrantBuckets::partition(&subset, averages).counts();
            assert_eq!(counts.total(), subset.len());
        }
    }
}
