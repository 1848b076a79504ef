use analytics::AnalyticsEngine;
use core_types::{IndexRecord, SortKey};

/// Orders record sets by one metric for the ranking tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    engine: AnalyticsEngine,
}

impl Ranker {
    pub fn new(engine: AnalyticsEngine) -> Self {
        Self { engine }
    }

    /// The full-precision value `key` ranks by.
    pub fn metric(&self, record: &IndexRecord, key: SortKey) -> f64 {
        match key {
            SortKey::Returns => record.returns,
            SortKey::RiskAdjustedReturn => self.engine.risk_adjusted_return(record),
            SortKey::Risk => record.risk,
        }
    }

    /// A sorted copy: descending for returns and risk-adjusted return, ascending for risk.
    ///
    /// The sort is stable, so exact ties keep their input order.
    pub fn sort(&self, records: &[IndexRecord], key: SortKey) -> Vec<IndexRecord> {
        let mut keyed: Vec<(f64, &IndexRecord)> = records
            .iter()
            .map(|record| (self.metric(record, key), record))
            .collect();

        if key.is_descending() {
            keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
        } else {
            keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        }

        keyed.into_iter().map(|(_, record)| record.clone()).collect()
    }

    /// The first `limit` records of [`Ranker::sort`].
    pub fn top(&self, records: &[IndexRecord], key: SortKey, limit: usize) -> Vec<IndexRecord> {
        let mut sorted = self.sort(records, key);
        sorted.truncate(limit);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::MetricsConfig;
    use core_types::Category;
    use dataset::Dataset;
    use rstest::rstest;

    fn ranker() -> Ranker {
        Ranker::new(AnalyticsEngine::new(MetricsConfig::default()))
    }

    fn names(records: &[IndexRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn higher_returns_rank_first() {
        let records = vec![
            IndexRecord::new("NIFTY50", Category::Broad, 12.5, 14.2),
            IndexRecord::new("NIFTYIT", Category::Sector, 18.3, 22.1),
        ];
        let top = ranker().top(&records, SortKey::Returns, 10);
        assert_eq!(names(&top), vec!["NIFTYIT", "NIFTY50"]);
    }

    #[test]
    fn embedded_tables() {
        let dataset = Dataset::embedded();
        let r = ranker();

        assert_eq!(
            names(&r.top(dataset.records(), SortKey::Returns, 10)),
            vec![
                "NSMEE", "NIDEF", "NMETAL", "NMICRO", "NM150M50", "NREALTY", "NCHEM", "NMSITT",
                "NAL50", "NMIDLIQ15"
            ]
        );
        assert_eq!(
            names(&r.top(dataset.records(), SortKey::RiskAdjustedReturn, 3)),
            vec!["NSMEE", "NCHEM", "NM150M50"]
        );
        assert_eq!(
            names(&r.top(dataset.records(), SortKey::Risk, 4)),
            vec!["NBCYCLE", "N5ARB", "NREiT", "NINNOV"]
        );
    }

    #[rstest]
    #[case(SortKey::Returns)]
    #[case(SortKey::RiskAdjustedReturn)]
    #[case(SortKey::Risk)]
    fn length_and_direction(#[case] key: SortKey) {
        let dataset = Dataset::embedded();
        let r = ranker();
        for n in [0usize, 1, 5, 10, 40] {
            let input = &dataset.records()[..n];
            let top = r.top(input, key, 10);
            assert_eq!(top.len(), n.min(10));
            for pair in top.windows(2) {
                let (a, b) = (r.metric(&pair[0], key), r.metric(&pair[1], key));
                if key.is_descending() {
                    assert!(a >= b);
                } else {
                    assert!(a <= b);
                }
            }
        }
    }

    #[test]
    fn ties_keep_input_order() {
        let records = vec![
            IndexRecord::new("FIRST", Category::Broad, 10.0, 5.0),
            IndexRecord::new("SECOND", Category::Broad, 10.0, 5.0),
            IndexRecord::new("THIRD", Category::Broad, 11.0, 5.0),
        ];
        let sorted = ranker().sort(&records, SortKey::Returns);
        assert_eq!(names(&sorted), vec!["THIRD", "FIRST", "SECOND"]);
        let by_risk = ranker().sort(&records, SortKey::Risk);
        assert_eq!(names(&by_risk), vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn full_precision_breaks_display_ties() {
        // Both display as 0.46 but differ at full precision.
        let records = vec![
            IndexRecord::new("LOWER", Category::Broad, 12.50, 14.2),
            IndexRecord::new("HIGHER", Category::Broad, 12.52, 14.2),
        ];
        let sorted = ranker().sort(&records, SortKey::RiskAdjustedReturn);
        assert_eq!(names(&sorted), vec!["HIGHER", "LOWER"]);
    }
}
