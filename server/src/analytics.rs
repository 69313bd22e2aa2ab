//! # Analytics
//!
//! Single-pass counting over the full record set, recomputed on every
//! request. Nothing here knows how the records were fetched; callers hand
//! in an in-memory slice.
//!
//! Absence is exclusion, never an error: a record without a value for the
//! requested field simply contributes nothing. Unknown field names yield
//! empty results for the same reason, so the HTTP boundary guards field
//! names before dispatching here.

use std::collections::BTreeMap;

use crate::{
    models::{
        AggregateResult, Answer, Categories, CategoryStats, CorrelationPoint, CorrelationResult,
        CountResult, FieldStats, SurveyRecord, SurveyStats,
    },
    schema,
};

/// Counts how often each value of `field` occurs across `records`.
///
/// List answers fan out, one count per element, so a single record can
/// land in several buckets. Empty scalars are skipped. The result is
/// sorted by count descending, ties by value ascending.
pub fn aggregate(records: &[SurveyRecord], field: &str) -> AggregateResult {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();

    for record in records {
        match record.answers.get(field) {
            Some(Answer::List(items)) => {
                for item in items {
                    *counts.entry(item.as_str()).or_default() += 1;
                }
            }
            Some(Answer::Scalar(value)) if !value.is_empty() => {
                *counts.entry(value.as_str()).or_default() += 1;
            }
            _ => {}
        }
    }

    let mut counts: Vec<CountResult> = counts
        .into_iter()
        .map(|(value, count)| CountResult {
            value: value.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));

    AggregateResult {
        field: field.to_string(),
        counts,
    }
}

/// Counts joint occurrences of `(field1, field2)` value pairs.
///
/// Only records where both fields are non-empty scalars contribute; a
/// record missing either side is excluded entirely. List answers are not
/// expanded for pairing. Sorted by count descending, ties by
/// `(value1, value2)` ascending.
pub fn correlate(records: &[SurveyRecord], field1: &str, field2: &str) -> CorrelationResult {
    let mut pairs: BTreeMap<(&str, &str), u64> = BTreeMap::new();

    for record in records {
        let (Some(Answer::Scalar(value1)), Some(Answer::Scalar(value2))) =
            (record.answers.get(field1), record.answers.get(field2))
        else {
            continue;
        };

        if value1.is_empty() || value2.is_empty() {
            continue;
        }

        *pairs.entry((value1.as_str(), value2.as_str())).or_default() += 1;
    }

    let mut correlations: Vec<CorrelationPoint> = pairs
        .into_iter()
        .map(|((value1, value2), count)| CorrelationPoint {
            value1: value1.to_string(),
            value2: value2.to_string(),
            count,
        })
        .collect();
    correlations.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.value1.cmp(&b.value1))
            .then_with(|| a.value2.cmp(&b.value2))
    });

    CorrelationResult {
        field1: field1.to_string(),
        field2: field2.to_string(),
        correlations,
    }
}

/// Full dashboard breakdown: per-category, per-field counts with
/// percentages over the total response count.
///
/// With zero records every map is empty and no percentage is computed,
/// so the zero case never divides.
pub fn survey_stats(records: &[SurveyRecord]) -> SurveyStats {
    SurveyStats {
        total_responses: records.len() as u64,
        categories: Categories {
            demographics: category_stats(records, &schema::DEMOGRAPHIC_FIELDS),
            politics: category_stats(records, &schema::POLITICS_FIELDS),
            academics: category_stats(records, &schema::ACADEMIC_FIELDS),
            lifestyle: category_stats(records, &schema::LIFESTYLE_FIELDS),
        },
    }
}

fn category_stats(records: &[SurveyRecord], fields: &[&str]) -> CategoryStats {
    let total = records.len();

    fields
        .iter()
        .map(|&field| {
            let counts: BTreeMap<String, u64> = aggregate(records, field)
                .counts
                .into_iter()
                .map(|bucket| (bucket.value, bucket.count))
                .collect();

            let percentages = counts
                .iter()
                .map(|(value, &count)| {
                    let percentage = if total == 0 {
                        0.0
                    } else {
                        (count as f64 / total as f64) * 100.0
                    };
                    (value.clone(), percentage)
                })
                .collect();

            (field.to_string(), FieldStats { counts, percentages })
        })
        .collect()
}
