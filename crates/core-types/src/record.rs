use crate::enums::Category;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// One market index on the risk/return plane.
///
/// Only raw inputs live here. Derived figures such as the risk-adjusted return
/// are always recomputed by the analytics engine and never stored alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Unique display identifier. Serialized as `index` to match the API.
    #[serde(rename = "index", alias = "name")]
    pub name: String,
    pub category: Category,
    /// Annualised return in percent. May be negative.
    pub returns: f64,
    /// Volatility in percent. Never negative.
    pub risk: f64,
}

impl IndexRecord {
    pub fn new(name: impl Into<String>, category: Category, returns: f64, risk: f64) -> Self {
        Self {
            name: name.into(),
            category,
            returns,
            risk,
        }
    }

    /// Checks the per-record invariants: a non-empty name, finite figures and `risk >= 0`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::invalid("index", "name must not be empty"));
        }
        if !self.returns.is_finite() {
            return Err(CoreError::invalid(
                "returns",
                format!("{} has a non-finite return", self.name),
            ));
        }
        if !self.risk.is_finite() || self.risk < 0.0 {
            return Err(CoreError::invalid(
                "risk",
                format!("{} has risk {}, expected a finite value >= 0", self.name, self.risk),
            ));
        }
        Ok(())
    }
}
