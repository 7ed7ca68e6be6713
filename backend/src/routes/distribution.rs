use serde::{Deserialize, Serialize};

// =========================================================
// Duration distribution types
// =========================================================

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub name: String,
    pub value: usize,
    /// Share of the total, rounded to two decimals.
    pub percent: f64,
    /// `"{name}: {percent}%"`
    pub label: String,
}

/// Pie-ready view of the duration buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionData {
    pub series_name: String,
    pub slices: Vec<DistributionSlice>,
    pub total: usize,
}

impl DistributionData {
    /// Sum of all slice values.
    pub fn value_sum(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Route path for the duration distribution chart
pub const GET_DISTRIBUTION_CHART: &str = "/charts/distribution";
