use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed family an index belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Broad,
    Sector,
    Thematic,
    Strategy,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Broad,
        Category::Sector,
        Category::Thematic,
        Category::Strategy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Broad => "broad",
            Category::Sector => "sector",
            Category::Thematic => "thematic",
            Category::Strategy => "strategy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "broad" => Ok(Category::Broad),
            "sector" => Ok(Category::Sector),
            "thematic" => Ok(Category::Thematic),
            "strategy" => Ok(Category::Strategy),
            other => Err(CoreError::invalid(
                "category",
                format!("unknown category '{other}'"),
            )),
        }
    }
}

/// The category half of a filter predicate: either every category or exactly one.
///
/// On the wire this is a plain string, `"all"` or a category name. Parsing is the
/// validation step, so an unknown name is rejected before any filtering happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Only(category) => category.as_str().to_string(),
        }
    }
}

/// The metric a ranking table is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SortKey {
    /// Highest returns first.
    #[default]
    Returns,
    /// Highest risk-adjusted return first.
    #[serde(alias = "sharpe", alias = "risk_adjusted_return")]
    #[cfg_attr(feature = "clap", value(alias = "sharpe"))]
    RiskAdjustedReturn,
    /// Lowest risk first.
    #[serde(alias = "low_risk", alias = "low-risk")]
    #[cfg_attr(feature = "clap", value(alias = "low-risk"))]
    Risk,
}

impl SortKey {
    /// `true` when larger values rank first.
    pub fn is_descending(&self) -> bool {
        !matches!(self, SortKey::Risk)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Returns => "returns",
            SortKey::RiskAdjustedReturn => "riskAdjustedReturn",
            SortKey::Risk => "risk",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "returns" => Ok(SortKey::Returns),
            "riskAdjustedReturn" | "risk_adjusted_return" | "sharpe" => {
                Ok(SortKey::RiskAdjustedReturn)
            }
            "risk" | "low_risk" | "low-risk" => Ok(SortKey::Risk),
            other => Err(CoreError::invalid(
                "metric",
                format!("unknown metric '{other}'"),
            )),
        }
    }
}

/// One of the four regions of the risk/return plane, split at the averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    HighReturnLowRisk,
    HighReturnHighRisk,
    LowReturnLowRisk,
    LowReturnHighRisk,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::HighReturnLowRisk,
        Quadrant::HighReturnHighRisk,
        Quadrant::LowReturnLowRisk,
        Quadrant::LowReturnHighRisk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::HighReturnLowRisk => "High Return / Low Risk",
            Quadrant::HighReturnHighRisk => "High Return / High Risk",
            Quadrant::LowReturnLowRisk => "Low Return / Low Risk",
            Quadrant::LowReturnHighRisk => "Low Return / High Risk",
        }
    }
}
