//! # Models
//!
//! Wire and storage types. Field names are camelCase on the wire to match
//! the frontend contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One answer: a single enumerated choice or a multi-select list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Scalar(String),
    List(Vec<String>),
}

/// One persisted survey submission.
///
/// Created once at submit time, never updated or deleted. The answers map
/// is flattened so the stored/returned JSON is the flat document the
/// frontend expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRecord {
    pub survey_id: String,
    pub user_id: String,
    pub completed_at: String,
    #[serde(flatten)]
    pub answers: BTreeMap<String, Answer>,
}

/// One (value, count) bucket of a single-field aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    pub value: String,
    pub count: u64,
}

/// Frequency counts for one field, sorted by count descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResult {
    pub field: String,
    pub counts: Vec<CountResult>,
}

/// One (value1, value2, count) bucket of a two-field co-occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelationPoint {
    pub value1: String,
    pub value2: String,
    pub count: u64,
}

/// Joint counts for a field pair, sorted by count descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub field1: String,
    pub field2: String,
    pub correlations: Vec<CorrelationPoint>,
}

/// Counts and percentages for one field within the stats breakdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldStats {
    pub counts: BTreeMap<String, u64>,
    pub percentages: BTreeMap<String, f64>,
}

/// Per-field stats for one reporting category, keyed by field name.
pub type CategoryStats = BTreeMap<String, FieldStats>;

/// The four fixed reporting categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Categories {
    pub demographics: CategoryStats,
    pub politics: CategoryStats,
    pub academics: CategoryStats,
    pub lifestyle: CategoryStats,
}

/// Full dashboard breakdown, recomputed on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyStats {
    pub total_responses: u64,
    pub categories: Categories,
}
