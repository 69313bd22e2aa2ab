//! Manual smoke test against a running server.
//!
//! ```sh
//! RUST_PORT=1111 cargo run -p cardinal &
//! cargo run -p tester
//! ```

use anyhow::Result;
use serde_json::{json, Value};

const BASE_URL: &str = "http://127.0.0.1:1111";
const USER_ID: &str = "tester-user";

#[tokio::main]
async fn main() -> Result<()> {
    let client = reqwest::Client::new();

    let submission = json!({
        "gender": "Female",
        "transgender": "Do not identify as transgender",
        "orientation": "Heterosexual",
        "ethnicity": "White",
        "age": "19",
        "recruitedAthlete": "No",
        "familyIncome": "$125,000 - $250,000",
        "birthOrder": "Youngest",
        "secondarySchool": "Private (non-religious)",
        "legacy": "One parent",
        "firstGen": "No",
        "financialAid": "No",
        "gapYear": "No",
        "placeOfOrigin": "Northeast",
        "communityType": "Urban",
        "topChoice": "Yes",
        "earlyAction": "No",
        "privateCounselor": "Yes",
        "religion": "Jewish",
        "religiosity": "Somewhat religious",
        "politics": "Moderate",
        "politicalParty": "Independent",
        "studyHours": "30 to 39",
        "mathLevel": "Multivariable Calculus",
        "highSchoolExtracurriculars": ["Student Government", "Debate"],
        "stanfordExtracurriculars": [],
        "studentGovPresident": "Yes",
        "academicInterest": "Economics",
        "postGraduatePlans": "Employment",
        "virgin": "No",
        "firstSexualActivity": "High school",
        "sexualPartners": "1",
        "computer": "Mac",
    });

    let created: Value = client
        .post(format!("{BASE_URL}/survey"))
        .header("x-user-id", USER_ID)
        .json(&submission)
        .send()
        .await?
        .json()
        .await?;
    println!("Submitted: {created}");

    let mine: Value = client
        .get(format!("{BASE_URL}/survey"))
        .header("x-user-id", USER_ID)
        .send()
        .await?
        .json()
        .await?;
    println!("My survey: {mine}");

    let stats: Value = client
        .get(format!("{BASE_URL}/survey/stats"))
        .send()
        .await?
        .json()
        .await?;
    println!("Total responses: {}", stats["totalResponses"]);

    let aggregate: Value = client
        .post(format!("{BASE_URL}/analytics"))
        .json(&json!({ "operation": "aggregateSurveyData", "field": "religion" }))
        .send()
        .await?
        .json()
        .await?;
    println!("Religion breakdown: {aggregate}");

    Ok(())
}
