//! # Record Store
//!
//! The storage seam. Handlers only see this trait, so the validation and
//! analytics logic tests against [`MemoryStore`] without any live
//! infrastructure; the redis-backed implementation lives in
//! [`crate::database`].

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{error::AppError, models::SurveyRecord};

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persists one new record. Records are never updated in place; each
    /// submission is a fresh write and the per-user slot is last-write-wins.
    async fn put(&self, record: &SurveyRecord) -> Result<(), AppError>;

    /// The most recent record for a user, if any.
    async fn get_by_user(&self, user_id: &str) -> Result<Option<SurveyRecord>, AppError>;

    /// Every stored record, truncated to `limit`.
    async fn scan_all(&self, limit: usize) -> Result<Vec<SurveyRecord>, AppError>;
}

/// In-memory store for tests and local runs.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<SurveyRecord>>,
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn put(&self, record: &SurveyRecord) -> Result<(), AppError> {
        self.records.lock().unwrap().push(record.clone());

        Ok(())
    }

    async fn get_by_user(&self, user_id: &str) -> Result<Option<SurveyRecord>, AppError> {
        let records = self.records.lock().unwrap();

        Ok(records
            .iter()
            .rev()
            .find(|record| record.user_id == user_id)
            .cloned())
    }

    async fn scan_all(&self, limit: usize) -> Result<Vec<SurveyRecord>, AppError> {
        let records = self.records.lock().unwrap();

        Ok(records.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::scalar_record;

    #[tokio::test]
    async fn test_get_by_user_returns_latest() {
        let store = MemoryStore::default();

        let mut first = scalar_record("u1", &[("gender", "Male")]);
        first.survey_id = "s1".to_string();
        let mut second = scalar_record("u1", &[("gender", "Female")]);
        second.survey_id = "s2".to_string();

        store.put(&first).await.unwrap();
        store.put(&second).await.unwrap();

        let found = store.get_by_user("u1").await.unwrap().unwrap();
        assert_eq!(found.survey_id, "s2");
    }

    #[tokio::test]
    async fn test_get_by_user_missing() {
        let store = MemoryStore::default();
        assert!(store.get_by_user("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_scan_all_respects_limit() {
        let store = MemoryStore::default();

        for i in 0..5 {
            store
                .put(&scalar_record(&i.to_string(), &[("gender", "Male")]))
                .await
                .unwrap();
        }

        assert_eq!(store.scan_all(3).await.unwrap().len(), 3);
        assert_eq!(store.scan_all(100).await.unwrap().len(), 5);
    }
}
