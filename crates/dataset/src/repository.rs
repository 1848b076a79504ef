use crate::embedded::EMBEDDED_INDICES;
use crate::error::DatasetError;
use core_types::{Category, IndexRecord};
use std::collections::HashMap;
use std::sync::Arc;

/// The immutable index universe for a session.
///
/// Records keep the order they were loaded in. Every derived view (filters,
/// rankings, quadrants) is computed from this order, so results are reproducible.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[IndexRecord]>,
    by_name: Arc<HashMap<String, usize>>,
}

impl Dataset {
    /// Builds a dataset, enforcing unique names and the per-record invariants.
    pub fn from_records(records: Vec<IndexRecord>) -> Result<Self, DatasetError> {
        let mut by_name = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            record.validate()?;
            if by_name.insert(record.name.clone(), position).is_some() {
                return Err(DatasetError::DuplicateName(record.name.clone()));
            }
        }

        Ok(Self {
            records: records.into(),
            by_name: Arc::new(by_name),
        })
    }

    /// The 126 indices compiled into the binary.
    pub fn embedded() -> Self {
        let records = EMBEDDED_INDICES
            .iter()
            .map(|&(name, category, returns, risk)| IndexRecord::new(name, category, returns, risk))
            .collect::<Vec<_>>();
        let by_name = records
            .iter()
            .enumerate()
            .map(|(position, record)| (record.name.clone(), position))
            .collect();

        Self {
            records: records.into(),
            by_name: Arc::new(by_name),
        }
    }

    pub fn records(&self) -> &[IndexRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact, case-sensitive lookup by index name.
    pub fn get(&self, name: &str) -> Option<&IndexRecord> {
        self.by_name.get(name).map(|&position| &self.records[position])
    }

    /// Records whose name appears in `names`, in dataset order. Unknown names are ignored.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Vec<IndexRecord> {
        let mut positions: Vec<usize> = names
            .iter()
            .filter_map(|name| self.by_name.get(name.as_ref()).copied())
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions
            .into_iter()
            .map(|position| self.records[position].clone())
            .collect()
    }

    /// Distinct categories present, in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::with_capacity(Category::ALL.len());
        for record in self.records.iter() {
            if !seen.contains(&record.category) {
                seen.push(record.category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, risk: f64) -> IndexRecord {
        IndexRecord::new(name, Category::Broad, 10.0, risk)
    }

    #[test]
    fn embedded_dataset_is_valid() {
        let embedded = Dataset::embedded();
        assert_eq!(embedded.len(), 126);
        let rebuilt = Dataset::from_records(embedded.records().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), 126);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Dataset::from_records(vec![record("A", 1.0), record("A", 2.0)]).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateName(name) if name == "A"));
    }

    #[test]
    fn negative_risk_is_rejected() {
        let err = Dataset::from_records(vec![record("A", -1.0)]).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRecord(_)));
    }

    #[test]
    fn empty_dataset_is_allowed() {
        let empty = Dataset::from_records(Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert!(empty.categories().is_empty());
    }

    #[test]
    fn lookup_and_select() {
        let dataset = Dataset::embedded();
        assert_eq!(dataset.get("NGOLD").map(|r| r.returns), Some(14.4));
        assert!(dataset.get("ngold").is_none());

        let picked = dataset.select(&["NWVS", "N50", "MISSING", "N50"]);
        let names: Vec<_> = picked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["N50", "NWVS"]);
    }

    #[test]
    fn categories_in_first_appearance_order() {
        assert_eq!(
            Dataset::embedded().categories(),
            vec![
                Category::Broad,
                Category::Thematic,
                Category::Strategy,
                Category::Sector
            ]
        );
    }
}
