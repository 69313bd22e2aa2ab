//! # Redis
//!
//! The managed record store behind [`crate::store::RecordStore`].
//!
//! ## Layout
//!
//! - Hash `surveys`: survey id -> full record JSON. The scan source for
//!   analytics.
//! - Hash `user_surveys`: user id -> that user's most recent record JSON,
//!   overwritten on every accepted submission. O(1) "my survey" lookups
//!   without a sorted index.
//!
//! Both writes go out in one atomic pipeline so a record can never be
//! visible in one hash but not the other.

use std::time::Duration;

use async_trait::async_trait;
use redis::{
    aio::{ConnectionManager, ConnectionManagerConfig},
    AsyncCommands, Client,
};

use crate::{error::AppError, models::SurveyRecord, store::RecordStore};

pub const SURVEYS_KEY: &str = "surveys";
pub const USER_SURVEYS_KEY: &str = "user_surveys";

pub async fn init_redis(redis_url: &str) -> ConnectionManager {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url).unwrap();

    client
        .get_connection_manager_with_config(config)
        .await
        .unwrap()
}

pub struct RedisStore {
    connection: ConnectionManager,
}

impl RedisStore {
    pub fn new(connection: ConnectionManager) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl RecordStore for RedisStore {
    async fn put(&self, record: &SurveyRecord) -> Result<(), AppError> {
        let payload = serde_json::to_string(record)?;
        let mut connection = self.connection.clone();

        redis::pipe()
            .atomic()
            .hset(SURVEYS_KEY, &record.survey_id, &payload)
            .hset(USER_SURVEYS_KEY, &record.user_id, &payload)
            .query_async::<()>(&mut connection)
            .await?;

        Ok(())
    }

    async fn get_by_user(&self, user_id: &str) -> Result<Option<SurveyRecord>, AppError> {
        let mut connection = self.connection.clone();

        let payload: Option<String> = connection.hget(USER_SURVEYS_KEY, user_id).await?;

        payload
            .map(|payload| serde_json::from_str(&payload))
            .transpose()
            .map_err(AppError::from)
    }

    async fn scan_all(&self, limit: usize) -> Result<Vec<SurveyRecord>, AppError> {
        let mut connection = self.connection.clone();

        let payloads: Vec<String> = connection.hvals(SURVEYS_KEY).await?;

        payloads
            .iter()
            .take(limit)
            .map(|payload| serde_json::from_str(payload).map_err(AppError::from))
            .collect()
    }
}
