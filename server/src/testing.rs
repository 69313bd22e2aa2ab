//! Test support: canned submissions and records.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::models::{Answer, SurveyRecord};

/// A complete, valid raw submission.
pub fn sample_submission() -> Map<String, Value> {
    let Value::Object(map) = json!({
        "gender": "Male",
        "transgender": "Do not identify as transgender",
        "orientation": "Heterosexual",
        "ethnicity": "Asian",
        "age": "18",
        "recruitedAthlete": "No",
        "familyIncome": "$80,000 - $125,000",
        "birthOrder": "Oldest",
        "secondarySchool": "Public (non-charter)",
        "legacy": "None, or do not know of any",
        "firstGen": "No",
        "financialAid": "Yes",
        "gapYear": "No",
        "placeOfOrigin": "West",
        "communityType": "Suburban",
        "topChoice": "Yes",
        "earlyAction": "Yes",
        "privateCounselor": "No",
        "religion": "Atheist",
        "religiosity": "Not at all religious",
        "politics": "Progressive",
        "politicalParty": "Democrat",
        "studyHours": "20 to 29",
        "mathLevel": "BC Calculus",
        "highSchoolExtracurriculars": ["Athletics", "Debate"],
        "stanfordExtracurriculars": ["Club Sports"],
        "studentGovPresident": "No",
        "academicInterest": "Engineering",
        "postGraduatePlans": "Graduate school",
        "virgin": "Yes",
        "firstSexualActivity": "Never",
        "sexualPartners": "0",
        "computer": "Mac",
    }) else {
        unreachable!()
    };

    map
}

/// A record holding only the given answers, for driving the analytics
/// engine directly.
pub fn record_with(user_id: &str, answers: &[(&str, Answer)]) -> SurveyRecord {
    SurveyRecord {
        survey_id: format!("survey-{user_id}"),
        user_id: user_id.to_string(),
        completed_at: "2026-01-01T00:00:00Z".to_string(),
        answers: answers
            .iter()
            .map(|(field, answer)| (field.to_string(), answer.clone()))
            .collect(),
    }
}

/// Shorthand for a scalar-only record.
pub fn scalar_record(user_id: &str, answers: &[(&str, &str)]) -> SurveyRecord {
    SurveyRecord {
        survey_id: format!("survey-{user_id}"),
        user_id: user_id.to_string(),
        completed_at: "2026-01-01T00:00:00Z".to_string(),
        answers: answers
            .iter()
            .map(|(field, value)| (field.to_string(), Answer::Scalar(value.to_string())))
            .collect(),
    }
}

/// A record with no answers at all.
pub fn empty_record(user_id: &str) -> SurveyRecord {
    SurveyRecord {
        survey_id: format!("survey-{user_id}"),
        user_id: user_id.to_string(),
        completed_at: "2026-01-01T00:00:00Z".to_string(),
        answers: BTreeMap::new(),
    }
}
