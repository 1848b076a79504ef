use core_types::{CategoryFilter, CoreError, IndexRecord};
use serde::{Deserialize, Serialize};

/// The user's current filter controls.
///
/// Every field is optional on the wire; omitting one means "do not filter on it".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPredicate {
    /// Case-insensitive substring of the index name. Empty matches everything.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: CategoryFilter,
    /// Inclusive upper bound on risk. `None` is unbounded.
    #[serde(default)]
    pub max_risk: Option<f64>,
    /// Inclusive lower bound on returns. `None` is unbounded.
    #[serde(default)]
    pub min_return: Option<f64>,
}

impl FilterPredicate {
    /// The predicate that keeps every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_max_risk(mut self, max_risk: f64) -> Self {
        self.max_risk = Some(max_risk);
        self
    }

    pub fn with_min_return(mut self, min_return: f64) -> Self {
        self.min_return = Some(min_return);
        self
    }

    /// Rejects thresholds that cannot describe a real filter. Infinities are
    /// unbounded limits and pass.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(max_risk) = self.max_risk {
            if max_risk.is_nan() || max_risk < 0.0 {
                return Err(CoreError::invalid(
                    "maxRisk",
                    format!("expected a number >= 0, got {max_risk}"),
                ));
            }
        }
        if let Some(min_return) = self.min_return {
            if min_return.is_nan() {
                return Err(CoreError::invalid("minReturn", "expected a number"));
            }
        }
        Ok(())
    }

    pub fn matches(&self, record: &IndexRecord) -> bool {
        Matcher::new(self).matches(record)
    }

    /// The records satisfying every condition, in their original order.
    pub fn apply(&self, records: &[IndexRecord]) -> Vec<IndexRecord> {
        let matcher = Matcher::new(self);
        records
            .iter()
            .filter(|record| matcher.matches(record))
            .cloned()
            .collect()
    }
}

/// A predicate with its search text lowered once.
struct Matcher<'a> {
    needle: String,
    predicate: &'a FilterPredicate,
}

impl<'a> Matcher<'a> {
    fn new(predicate: &'a FilterPredicate) -> Self {
        Self {
            needle: predicate.search.to_lowercase(),
            predicate,
        }
    }

    fn matches(&self, record: &IndexRecord) -> bool {
        let p = self.predicate;
        let matches_search = self.needle.is_empty() || record.name.to_lowercase().contains(&self.needle);
        let matches_category = p.category.matches(record.category);
        let matches_risk = p.max_risk.is_none_or(|max| record.risk <= max);
        let matches_return = p.min_return.is_none_or(|min| record.returns >= min);

        matches_search && matches_category && matches_risk && matches_return
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Category;
    use dataset::Dataset;

    fn sample() -> Vec<IndexRecord> {
        vec![
            IndexRecord::new("NIFTY50", Category::Broad, 12.5, 14.2),
            IndexRecord::new("NIFTYIT", Category::Sector, 18.3, 22.1),
            IndexRecord::new("NBANK", Category::Sector, 14.1, 17.8),
            IndexRecord::new("NPSUBANK", Category::Sector, 14.7, 29.6),
        ]
    }

    fn names(records: &[IndexRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn identity_predicate_returns_everything_in_order() {
        let dataset = Dataset::embedded();
        let all = FilterPredicate::all().apply(dataset.records());
        assert_eq!(all, dataset.records());

        let unbounded = FilterPredicate::all().with_max_risk(f64::INFINITY);
        assert_eq!(unbounded.apply(dataset.records()), dataset.records());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let hits = FilterPredicate::all().with_search("Bank").apply(&sample());
        assert_eq!(names(&hits), vec!["NBANK", "NPSUBANK"]);

        let dataset = Dataset::embedded();
        let banks = FilterPredicate::all().with_search("bank").apply(dataset.records());
        assert_eq!(names(&banks), vec!["NBANK", "NPVTBANK", "NPSUBANK"]);
    }

    #[test]
    fn max_risk_is_inclusive() {
        let hits = FilterPredicate::all().with_max_risk(22.1).apply(&sample());
        assert_eq!(names(&hits), vec!["NIFTY50", "NIFTYIT", "NBANK"]);
    }

    #[test]
    fn min_return_is_inclusive() {
        let hits = FilterPredicate::all().with_min_return(14.7).apply(&sample());
        assert_eq!(names(&hits), vec!["NIFTYIT", "NPSUBANK"]);
    }

    #[test]
    fn all_conditions_must_hold() {
        let predicate = FilterPredicate::all()
            .with_category(CategoryFilter::Only(Category::Sector))
            .with_max_risk(20.0)
            .with_search("n");
        assert_eq!(names(&predicate.apply(&sample())), vec!["NBANK"]);

        let dataset = Dataset::embedded();
        let sectors = FilterPredicate::all()
            .with_category(CategoryFilter::Only(Category::Sector))
            .with_max_risk(20.0)
            .apply(dataset.records());
        assert_eq!(sectors.len(), 22);
    }

    #[test]
    fn filtering_is_idempotent() {
        let dataset = Dataset::embedded();
        let predicate = FilterPredicate::all().with_search("n5").with_max_risk(18.0);
        let once = predicate.apply(dataset.records());
        let twice = predicate.apply(&once);
        assert!(!once.is_empty());
        assert_eq!(once, twice);
    }

    #[test]
    fn no_match_is_an_empty_vec() {
        let none = FilterPredicate::all().with_search("zzz").apply(&sample());
        assert!(none.is_empty());
        assert!(FilterPredicate::all().apply(&[]).is_empty());
    }

    #[test]
    fn validation_rejects_bad_thresholds() {
        assert!(FilterPredicate::all().with_max_risk(-1.0).validate().is_err());
        assert!(FilterPredicate::all().with_max_risk(f64::NAN).validate().is_err());
        assert!(FilterPredicate::all().with_min_return(f64::NAN).validate().is_err());
        assert!(FilterPredicate::all().with_max_risk(0.0).validate().is_ok());
        assert!(FilterPredicate::all().with_min_return(-50.0).validate().is_ok());
    }

    #[test]
    fn infinite_thresholds_are_accepted_and_unbounded() {
        let unbounded = FilterPredicate::all()
            .with_max_risk(f64::INFINITY)
            .with_min_return(f64::NEG_INFINITY);
        assert!(unbounded.validate().is_ok());
        assert_eq!(unbounded.apply(&sample()), sample());

        assert!(FilterPredicate::all().with_max_risk(f64::NEG_INFINITY).validate().is_err());
        assert!(FilterPredicate::all().with_min_return(f64::INFINITY).validate().is_ok());
    }

    #[test]
    fn deserializes_request_body() {
        let predicate: FilterPredicate =
            serde_json::from_str(r#"{"search": "nifty", "category": "sector", "maxRisk": 30}"#)
                .unwrap();
        assert_eq!(predicate.search, "nifty");
        assert_eq!(predicate.category, CategoryFilter::Only(Category::Sector));
        assert_eq!(predicate.max_risk, Some(30.0));
        assert_eq!(predicate.min_return, None);

        let empty: FilterPredicate = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, FilterPredicate::all());

        assert!(serde_json::from_str::<FilterPredicate>(r#"{"category": "bonds"}"#).is_err());
    }
}
