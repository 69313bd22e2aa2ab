//! # Survey Schema
//!
//! The fixed attribute set of one survey submission.
//!
//! Every field is an enumerated single-choice string except the two
//! extracurricular fields, which are multi-select lists of strings. The
//! valid option lists live in the frontend; the server only cares about
//! field names, field kinds, and the four reporting categories.

/// Demographics & admissions section.
pub const DEMOGRAPHIC_FIELDS: [&str; 18] = [
    "gender",
    "transgender",
    "orientation",
    "ethnicity",
    "age",
    "recruitedAthlete",
    "familyIncome",
    "birthOrder",
    "secondarySchool",
    "legacy",
    "firstGen",
    "financialAid",
    "gapYear",
    "placeOfOrigin",
    "communityType",
    "topChoice",
    "earlyAction",
    "privateCounselor",
];

/// Politics & beliefs section.
pub const POLITICS_FIELDS: [&str; 4] = ["religion", "religiosity", "politics", "politicalParty"];

/// Academics & extracurriculars section.
pub const ACADEMIC_FIELDS: [&str; 7] = [
    "studyHours",
    "mathLevel",
    "highSchoolExtracurriculars",
    "stanfordExtracurriculars",
    "studentGovPresident",
    "academicInterest",
    "postGraduatePlans",
];

/// Lifestyle section.
pub const LIFESTYLE_FIELDS: [&str; 4] =
    ["virgin", "firstSexualActivity", "sexualPartners", "computer"];

/// The multi-select fields. Everything else is a scalar.
pub const LIST_FIELDS: [&str; 2] = ["highSchoolExtracurriculars", "stanfordExtracurriculars"];

/// All survey fields in section order.
pub fn all_fields() -> impl Iterator<Item = &'static str> {
    DEMOGRAPHIC_FIELDS
        .into_iter()
        .chain(POLITICS_FIELDS)
        .chain(ACADEMIC_FIELDS)
        .chain(LIFESTYLE_FIELDS)
}

pub fn is_list_field(field: &str) -> bool {
    LIST_FIELDS.contains(&field)
}

pub fn is_known_field(field: &str) -> bool {
    all_fields().any(|f| f == field)
}
