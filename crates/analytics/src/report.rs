/// Arithmetic means of a non-empty record set. Quadrant lines are drawn at these values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub avg_return: f64,
    pub avg_risk: f64,
}

/// Aggregate figures for one query, at full precision.
///
/// Everything except `best_risk_adjusted_return` describes the active set. The
/// "best" figure always covers the whole dataset so the headline number does not
/// move while the user filters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateStatistics {
    pub total_count: usize,

    // I. Central tendency (None when the active set is empty)
    pub avg_return: Option<f64>,
    pub avg_risk: Option<f64>,

    // II. Extremes of the active set
    pub max_return: Option<f64>,
    pub min_return: Option<f64>,
    pub max_risk: Option<f64>,
    pub min_risk: Option<f64>,
    pub worst_risk_adjusted_return: Option<f64>,

    // III. Dataset-wide
    pub best_risk_adjusted_return: Option<f64>,

    /// Pearson correlation of returns against risk. None with fewer than two
    /// records or when either axis has zero variance.
    pub correlation: Option<f64>,
}

impl AggregateStatistics {
    pub fn averages(&self) -> Option<Averages> {
        Some(Averages {
            avg_return: self.avg_return?,
            avg_risk: self.avg_risk?,
        })
    }
}
